use crate::context::HostContext;
use crate::error::ResolveError;
use crate::rewrite::UrlResolver;
use crate::routing::Params;

/// Pass-through resolver producing root-relative URLs from the routing table.
///
/// This is the builder every template environment starts with, and the one
/// [`CdnResolver`](crate::CdnResolver) delegates to whenever rewriting is
/// inapplicable.
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultResolver;

impl UrlResolver for DefaultResolver {
    fn resolve(
        &self,
        endpoint: &str,
        params: &Params,
        ctx: &HostContext<'_>,
    ) -> Result<String, ResolveError> {
        ctx.routes.build(endpoint, params)
    }
}
