//! URL resolution strategies selected at application startup.
//!
//! The host picks one [`UrlResolver`] implementation when constructing its
//! template environment: [`DefaultResolver`] produces the framework's usual
//! root-relative URLs, while [`CdnResolver`] rewrites static-asset URLs to
//! point at a configured CDN host and delegates everything else.

mod cdn;
mod default;

pub use cdn::{CdnResolver, is_static_endpoint};
pub use default::DefaultResolver;

use crate::context::HostContext;
use crate::error::ResolveError;
use crate::routing::Params;

/// Strategy interface for building URLs from endpoint names.
///
/// Implementations must be pure given their inputs: identical calls under an
/// unchanged filesystem yield identical URLs, and no shared state is mutated.
pub trait UrlResolver: Send + Sync {
    /// Build a URL for `endpoint` with the given parameters and host context.
    fn resolve(
        &self,
        endpoint: &str,
        params: &Params,
        ctx: &HostContext<'_>,
    ) -> Result<String, ResolveError>;
}
