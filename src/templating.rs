//! Template-environment integration selecting the URL-building strategy.

use std::sync::Arc;

use tracing::debug;

use crate::config::CdnConfig;
use crate::context::HostContext;
use crate::error::ResolveError;
use crate::rewrite::{CdnResolver, DefaultResolver, UrlResolver};
use crate::routing::Params;

/// Template rendering environment owning the URL-building strategy.
///
/// Hosts construct one per application, expose [`TemplateEnv::url_for`] to
/// their template layer, and pass the environment to [`Cdn::init`] at
/// startup. Every template-level URL reference then routes through the
/// selected strategy transparently.
#[derive(Clone)]
pub struct TemplateEnv {
    url_builder: Arc<dyn UrlResolver>,
}

impl TemplateEnv {
    /// Create an environment using the default root-relative URL builder.
    pub fn new() -> Self {
        Self {
            url_builder: Arc::new(DefaultResolver),
        }
    }

    /// Replace the URL-building strategy visible to templates.
    pub fn set_url_builder(&mut self, resolver: Arc<dyn UrlResolver>) {
        self.url_builder = resolver;
    }

    /// Build a URL for a named endpoint, exactly as templates see it.
    pub fn url_for(
        &self,
        endpoint: &str,
        params: &Params,
        ctx: &HostContext<'_>,
    ) -> Result<String, ResolveError> {
        self.url_builder.resolve(endpoint, params, ctx)
    }
}

impl Default for TemplateEnv {
    fn default() -> Self {
        Self::new()
    }
}

/// Extension wiring CDN rewriting into a host application at startup.
pub struct Cdn {
    config: CdnConfig,
}

impl Cdn {
    /// Create the extension with the given configuration.
    pub fn new(config: CdnConfig) -> Self {
        Self { config }
    }

    /// Install the CDN URL builder into the template environment.
    ///
    /// The default builder is replaced if and only if a CDN domain is
    /// configured; otherwise the environment is left untouched and no
    /// rewriting ever occurs. Called once at application startup.
    pub fn init(&self, env: &mut TemplateEnv) {
        match CdnResolver::from_config(&self.config) {
            Some(resolver) => {
                debug!(domain = ?self.config.domain, "installing CDN URL builder");
                env.set_url_builder(Arc::new(resolver));
            }
            None => {
                debug!("no CDN domain configured; keeping default URL builder");
            }
        }
    }

    /// Configuration this extension was created with.
    pub fn config(&self) -> &CdnConfig {
        &self.config
    }
}
