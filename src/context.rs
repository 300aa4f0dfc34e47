//! Explicit per-call snapshot of the host application.
//!
//! Nothing here is looked up from ambient globals: the host passes a
//! [`HostContext`] into every resolve call, so the resolvers stay pure
//! functions of their inputs.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use crate::routing::RouteMap;

/// Static asset directories for the application and its sub-applications.
///
/// Endpoints qualified with a sub-application name (`admin.static`) resolve
/// against that sub-application's directory when one is registered, falling
/// back to the application root otherwise.
#[derive(Debug, Clone)]
pub struct StaticRoots {
    root: PathBuf,
    blueprints: BTreeMap<String, PathBuf>,
}

impl StaticRoots {
    /// Create the root static directory mapping.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            blueprints: BTreeMap::new(),
        }
    }

    /// Register a static directory for a named sub-application.
    pub fn with_blueprint(mut self, name: impl Into<String>, dir: impl Into<PathBuf>) -> Self {
        self.blueprints.insert(name.into(), dir.into());
        self
    }

    /// Static directory backing the given endpoint.
    pub fn for_endpoint(&self, endpoint: &str) -> &Path {
        match endpoint.strip_suffix(".static") {
            Some(blueprint) => self
                .blueprints
                .get(blueprint)
                .map(PathBuf::as_path)
                .unwrap_or(&self.root),
            None => &self.root,
        }
    }
}

/// Read-only snapshot handed to every resolve call.
///
/// Configuration lives in the resolver itself; everything owned by the host
/// application travels here.
#[derive(Debug, Clone, Copy)]
pub struct HostContext<'a> {
    /// Host application debug flag; suppresses CDN rewriting globally.
    pub debug: bool,
    /// Whether the inbound request arrived over an encrypted connection.
    pub secure: bool,
    /// Routing table used to build endpoint paths.
    pub routes: &'a RouteMap,
    /// Static asset directories for timestamp lookups.
    pub statics: &'a StaticRoots,
}
