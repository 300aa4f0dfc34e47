use std::fs;
use std::path::Path;
use std::time::UNIX_EPOCH;

use tracing::debug;

use crate::config::{CdnConfig, HttpsPolicy};
use crate::context::HostContext;
use crate::error::ResolveError;
use crate::rewrite::{DefaultResolver, UrlResolver};
use crate::routing::Params;

/// Determine whether an endpoint serves static assets.
///
/// Covers the application's own static endpoint as well as dot-qualified
/// sub-application variants such as `admin.static`.
pub fn is_static_endpoint(endpoint: &str) -> bool {
    endpoint == "static" || endpoint.ends_with(".static")
}

/// Resolver that rewrites static-asset URLs to point at a CDN host.
///
/// Ordinary endpoints, and all endpoints while the host runs in debug mode,
/// delegate to [`DefaultResolver`] unchanged.
#[derive(Debug, Clone)]
pub struct CdnResolver {
    domain: String,
    https: HttpsPolicy,
    timestamp: bool,
}

impl CdnResolver {
    /// Create a resolver for the given CDN domain and policies.
    ///
    /// The domain is used verbatim; it is never validated.
    pub fn new(domain: impl Into<String>, https: HttpsPolicy, timestamp: bool) -> Self {
        Self {
            domain: domain.into(),
            https,
            timestamp,
        }
    }

    /// Build a resolver from configuration, or `None` when no CDN domain is
    /// configured and rewriting must stay disabled.
    pub fn from_config(config: &CdnConfig) -> Option<Self> {
        config
            .domain
            .as_ref()
            .map(|domain| Self::new(domain.clone(), config.https, config.timestamp))
    }
}

impl UrlResolver for CdnResolver {
    fn resolve(
        &self,
        endpoint: &str,
        params: &Params,
        ctx: &HostContext<'_>,
    ) -> Result<String, ResolveError> {
        if ctx.debug {
            debug!(endpoint, "debug mode active; using default URL builder");
            return DefaultResolver.resolve(endpoint, params, ctx);
        }
        if !is_static_endpoint(endpoint) {
            return DefaultResolver.resolve(endpoint, params, ctx);
        }

        let scheme = self.https.scheme(ctx.secure);

        let mut params = params.clone();
        let mut stamp = None;
        if self.timestamp {
            let filename =
                params
                    .get("filename")
                    .ok_or_else(|| ResolveError::MissingParameter {
                        endpoint: endpoint.to_string(),
                        name: "filename".to_string(),
                    })?;
            let asset = ctx.statics.for_endpoint(endpoint).join(filename);
            let seconds = mtime_seconds(&asset)?;
            params.insert("t".to_string(), seconds.to_string());
            stamp = Some(seconds);
        }

        let path = ctx.routes.build(endpoint, &params)?;
        debug!(endpoint, scheme, domain = %self.domain, "rewriting static asset URL");
        Ok(match stamp {
            Some(seconds) => format!("{scheme}://{}/{seconds}{path}", self.domain),
            None => format!("{scheme}://{}{path}", self.domain),
        })
    }
}

/// Last-modified time of an asset as integer epoch seconds.
///
/// Stat failures are hard errors for the call; pre-epoch timestamps clamp to
/// zero since the stat itself succeeded.
fn mtime_seconds(path: &Path) -> Result<u64, ResolveError> {
    let modified = fs::metadata(path)
        .and_then(|meta| meta.modified())
        .map_err(|source| ResolveError::Stat {
            path: path.to_path_buf(),
            source,
        })?;
    Ok(modified
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| elapsed.as_secs())
        .unwrap_or(0))
}
