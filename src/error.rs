//! Errors surfaced while building URLs.

use std::path::PathBuf;

/// Errors that can occur while resolving an endpoint into a URL.
///
/// All errors surface synchronously to whatever triggered the URL build;
/// there are no retries and no fallback to the default builder on error.
#[derive(Debug)]
pub enum ResolveError {
    /// No route is registered for the requested endpoint.
    UnknownEndpoint {
        /// Endpoint name that failed to resolve.
        endpoint: String,
    },
    /// A route placeholder or required parameter was not supplied.
    MissingParameter {
        /// Endpoint whose URL was being built.
        endpoint: String,
        /// Name of the missing parameter.
        name: String,
    },
    /// Failed to read metadata for an asset file while timestamping.
    Stat {
        /// Asset path that caused the error.
        path: PathBuf,
        /// Source I/O error.
        source: std::io::Error,
    },
}

impl std::fmt::Display for ResolveError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnknownEndpoint { endpoint } => {
                write!(f, "no route registered for endpoint `{endpoint}`")
            }
            Self::MissingParameter { endpoint, name } => {
                write!(f, "endpoint `{endpoint}` requires parameter `{name}`")
            }
            Self::Stat { path, source } => {
                write!(f, "failed to stat {}: {}", path.display(), source)
            }
        }
    }
}

impl std::error::Error for ResolveError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Stat { source, .. } => Some(source),
            _ => None,
        }
    }
}
