#![doc = include_str!("../README.md")]
#![warn(missing_docs)]

pub mod config;
pub mod context;
pub mod error;
pub mod rewrite;
pub mod routing;
pub mod templating;

pub use config::{CdnConfig, HttpsPolicy};
pub use context::{HostContext, StaticRoots};
pub use error::ResolveError;
pub use rewrite::{CdnResolver, DefaultResolver, UrlResolver, is_static_endpoint};
pub use routing::{Params, RouteMap};
pub use templating::{Cdn, TemplateEnv};
