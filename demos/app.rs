//! Minimal host application showing the CDN extension wired end to end.

use anyhow::{Context, Result};
use asset_cdn::{
    Cdn, CdnConfig, HostContext, HttpsPolicy, Params, RouteMap, StaticRoots, TemplateEnv,
};

fn main() -> Result<()> {
    let config = CdnConfig {
        domain: Some("mycdnname.cloudfront.net".into()),
        https: HttpsPolicy::ForceOn,
        timestamp: false,
    };

    let mut env = TemplateEnv::new();
    Cdn::new(config).init(&mut env);

    let routes = RouteMap::new()
        .route("index", "/")
        .route("static", "/static/<filename>");
    let statics = StaticRoots::new("static");
    let ctx = HostContext {
        debug: false,
        secure: false,
        routes: &routes,
        statics: &statics,
    };

    let mut params = Params::new();
    params.insert("filename".into(), "logo.png".into());
    let asset_url = env
        .url_for("static", &params, &ctx)
        .context("failed to build asset URL")?;
    let index_url = env
        .url_for("index", &Params::new(), &ctx)
        .context("failed to build index URL")?;

    println!("{asset_url}");
    println!("{index_url}");
    Ok(())
}
