//! End-to-end tests exercising the extension the way a host application
//! wires it: configuration in, template environment out, URLs checked
//! against the default builder's behaviour.

use std::fs;
use std::time::UNIX_EPOCH;

use asset_cdn::{
    Cdn, CdnConfig, HostContext, HttpsPolicy, Params, RouteMap, StaticRoots, TemplateEnv,
};
use tempfile::tempdir;

const DOMAIN: &str = "mycdnname.cloudfront.net";

fn routes() -> RouteMap {
    RouteMap::new()
        .route("index", "/")
        .route("static", "/static/<filename>")
        .route("admin.static", "/admin/static/<filename>")
}

fn static_params(filename: &str) -> Params {
    let mut params = Params::new();
    params.insert("filename".into(), filename.to_string());
    params
}

fn env_with(config: CdnConfig) -> TemplateEnv {
    let mut env = TemplateEnv::new();
    Cdn::new(config).init(&mut env);
    env
}

fn config(https: HttpsPolicy, timestamp: bool) -> CdnConfig {
    CdnConfig {
        domain: Some(DOMAIN.into()),
        https,
        timestamp,
    }
}

/// Epoch seconds the resolver should read for the given asset.
fn mtime(path: &std::path::Path) -> u64 {
    fs::metadata(path)
        .and_then(|meta| meta.modified())
        .expect("failed to stat fixture asset")
        .duration_since(UNIX_EPOCH)
        .expect("fixture mtime before epoch")
        .as_secs()
}

#[test]
fn non_static_endpoints_use_the_default_builder() {
    let routes = routes();
    let statics = StaticRoots::new("static");
    let ctx = HostContext {
        debug: false,
        secure: false,
        routes: &routes,
        statics: &statics,
    };

    let env = env_with(config(HttpsPolicy::ForceOn, true));
    assert_eq!(env.url_for("index", &Params::new(), &ctx).unwrap(), "/");
}

#[test]
fn static_endpoints_are_rewritten_to_the_cdn() {
    let routes = routes();
    let statics = StaticRoots::new("static");
    let ctx = HostContext {
        debug: false,
        secure: false,
        routes: &routes,
        statics: &statics,
    };

    let env = env_with(config(HttpsPolicy::Inherit, false));
    assert_eq!(
        env.url_for("static", &static_params("bah.js"), &ctx).unwrap(),
        "http://mycdnname.cloudfront.net/static/bah.js"
    );
}

#[test]
fn debug_mode_disables_rewriting_for_any_configuration() {
    let routes = routes();
    let statics = StaticRoots::new("static");
    let ctx = HostContext {
        debug: true,
        secure: true,
        routes: &routes,
        statics: &statics,
    };

    let env = env_with(config(HttpsPolicy::ForceOn, true));
    assert_eq!(
        env.url_for("static", &static_params("bah.js"), &ctx).unwrap(),
        "/static/bah.js"
    );
}

#[test]
fn missing_domain_disables_rewriting_for_every_endpoint() {
    let routes = routes();
    let statics = StaticRoots::new("static");
    let ctx = HostContext {
        debug: false,
        secure: true,
        routes: &routes,
        statics: &statics,
    };

    let env = env_with(CdnConfig {
        domain: None,
        https: HttpsPolicy::ForceOn,
        timestamp: true,
    });
    assert_eq!(
        env.url_for("static", &static_params("bah.js"), &ctx).unwrap(),
        "/static/bah.js"
    );
    assert_eq!(env.url_for("index", &Params::new(), &ctx).unwrap(), "/");
}

#[test]
fn https_policy_truth_table() {
    let routes = routes();
    let statics = StaticRoots::new("static");

    let cases = [
        (HttpsPolicy::ForceOn, false, "https"),
        (HttpsPolicy::ForceOn, true, "https"),
        (HttpsPolicy::ForceOff, false, "http"),
        (HttpsPolicy::ForceOff, true, "http"),
        (HttpsPolicy::Inherit, false, "http"),
        (HttpsPolicy::Inherit, true, "https"),
    ];

    for (policy, secure, scheme) in cases {
        let ctx = HostContext {
            debug: false,
            secure,
            routes: &routes,
            statics: &statics,
        };
        let env = env_with(config(policy, false));
        assert_eq!(
            env.url_for("static", &static_params("bah.js"), &ctx).unwrap(),
            format!("{scheme}://{DOMAIN}/static/bah.js"),
            "policy {policy:?}, secure {secure}"
        );
    }
}

#[test]
fn timestamp_adds_path_segment_and_query_parameter() {
    let temp = tempdir().expect("failed to create temp dir");
    fs::write(temp.path().join("bah.js"), "// asset").expect("failed to write fixture");
    let expected = mtime(&temp.path().join("bah.js"));

    let routes = routes();
    let statics = StaticRoots::new(temp.path());
    let ctx = HostContext {
        debug: false,
        secure: false,
        routes: &routes,
        statics: &statics,
    };

    let env = env_with(config(HttpsPolicy::Inherit, true));
    assert_eq!(
        env.url_for("static", &static_params("bah.js"), &ctx).unwrap(),
        format!("http://{DOMAIN}/{expected}/static/bah.js?t={expected}")
    );
}

#[test]
fn timestamp_stats_the_blueprint_static_directory() {
    let temp = tempdir().expect("failed to create temp dir");
    let admin_dir = temp.path().join("admin");
    fs::create_dir(&admin_dir).expect("failed to create admin dir");
    fs::write(admin_dir.join("bah.js"), "// admin asset").expect("failed to write fixture");
    let expected = mtime(&admin_dir.join("bah.js"));

    let routes = routes();
    let statics = StaticRoots::new(temp.path()).with_blueprint("admin", &admin_dir);
    let ctx = HostContext {
        debug: false,
        secure: false,
        routes: &routes,
        statics: &statics,
    };

    let env = env_with(config(HttpsPolicy::Inherit, true));
    assert_eq!(
        env.url_for("admin.static", &static_params("bah.js"), &ctx)
            .unwrap(),
        format!("http://{DOMAIN}/{expected}/admin/static/bah.js?t={expected}")
    );
}

#[test]
fn missing_asset_fails_the_render_when_timestamping() {
    let temp = tempdir().expect("failed to create temp dir");

    let routes = routes();
    let statics = StaticRoots::new(temp.path());
    let ctx = HostContext {
        debug: false,
        secure: false,
        routes: &routes,
        statics: &statics,
    };

    let env = env_with(config(HttpsPolicy::Inherit, true));
    let err = env
        .url_for("static", &static_params("missing.js"), &ctx)
        .unwrap_err();
    assert!(matches!(err, asset_cdn::ResolveError::Stat { .. }));
}

#[test]
fn identical_inputs_yield_identical_urls() {
    let temp = tempdir().expect("failed to create temp dir");
    fs::write(temp.path().join("bah.js"), "// asset").expect("failed to write fixture");

    let routes = routes();
    let statics = StaticRoots::new(temp.path());
    let ctx = HostContext {
        debug: false,
        secure: true,
        routes: &routes,
        statics: &statics,
    };

    let env = env_with(config(HttpsPolicy::Inherit, true));
    let first = env.url_for("static", &static_params("bah.js"), &ctx).unwrap();
    let second = env.url_for("static", &static_params("bah.js"), &ctx).unwrap();
    assert_eq!(first, second);
}
