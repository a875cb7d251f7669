use std::sync::{Arc, Mutex};

use usage_context::resolver::sanitize_host;
use usage_context::{AppRule, OrgRule, ProjectContextResolver, RuleSource};
use usage_core::models::{PackageMetadata, PageEnvironment};
use usage_core::traits::IEnvironmentSource;

fn resolve(env: PageEnvironment) -> usage_core::ProjectContext {
    ProjectContextResolver::fixed(env).resolve()
}

#[test]
fn server_side_returns_inert_placeholders() {
    let ctx = resolve(PageEnvironment::server_side());
    assert_eq!(ctx.page_url, "server-side");
    assert_eq!(ctx.page_route, "/");
    assert_eq!(ctx.domain, "server-side");
    assert_eq!(ctx.repository_name, "server-side-render");
    assert_eq!(ctx.project_version, "unknown");
    assert_eq!(ctx.project_description, None);
}

#[test]
fn injected_package_metadata_wins() {
    let env = PageEnvironment::at("https://shop.example.com/cart").with_package(PackageMetadata {
        name: Some("storefront".into()),
        version: Some("4.2.0".into()),
        description: Some("Customer storefront".into()),
    });
    let ctx = resolve(env);
    assert_eq!(ctx.repository_name, "storefront");
    assert_eq!(ctx.project_version, "4.2.0");
    assert_eq!(ctx.project_description.as_deref(), Some("Customer storefront"));
    assert_eq!(ctx.page_route, "/cart");
    assert_eq!(ctx.domain, "shop.example.com");
}

#[test]
fn version_string_used_when_package_has_none() {
    let env = PageEnvironment::at("https://shop.example.com/").with_version("9.9.9");
    assert_eq!(resolve(env).project_version, "9.9.9");
}

#[test]
fn local_hosts_are_local_development() {
    for href in [
        "http://localhost:3000/",
        "http://127.0.0.1:8080/orders",
        "http://[::1]:5173/",
        "http://my-machine.local/",
    ] {
        assert_eq!(
            resolve(PageEnvironment::at(href)).repository_name,
            "local-development",
            "{href}"
        );
    }
}

#[test]
fn internal_hosts_compose_org_and_app_type() {
    assert_eq!(
        resolve(PageEnvironment::at("https://admin.acme.internal/users")).repository_name,
        "acme-admin"
    );
    assert_eq!(
        resolve(PageEnvironment::at("https://app.acme.internal/dashboard")).repository_name,
        "acme-dashboard"
    );
    assert_eq!(
        resolve(PageEnvironment::at("https://acme.corp/docs/getting-started")).repository_name,
        "acme-docs"
    );
    assert_eq!(
        resolve(PageEnvironment::at("https://portal.acme.corp/")).repository_name,
        "acme-web"
    );
}

#[test]
fn staging_hosts_get_a_suffix() {
    let ctx = resolve(PageEnvironment::at("https://admin.staging.acme.internal/"));
    assert_eq!(ctx.repository_name, "acme-admin-staging");
}

#[test]
fn favicon_identifies_the_organization() {
    let env = PageEnvironment::at("https://www.globex.com/docs/api")
        .with_favicon("https://cdn.globex.com/assets/globex/favicon.ico");
    assert_eq!(resolve(env).repository_name, "globex-docs");

    let env = PageEnvironment::at("https://initech.io/").with_favicon("/initech-favicon.png");
    assert_eq!(resolve(env).repository_name, "initech-web");
}

#[test]
fn unknown_hosts_fall_back_to_external_app() {
    let ctx = resolve(PageEnvironment::at("https://Some.Partner-Site.com:8443/embed"));
    assert_eq!(ctx.repository_name, "external-app-some-partner-site-com");
}

#[test]
fn external_staging_hosts_get_a_suffix() {
    let ctx = resolve(PageEnvironment::at("https://staging.shop.example.com/cart"));
    assert_eq!(ctx.repository_name, "external-app-shop-example-com-staging");

    let ctx = resolve(PageEnvironment::at("https://shop-uat.example.com/"));
    assert_eq!(ctx.repository_name, "external-app-shop-example-com-staging");

    let ctx = resolve(PageEnvironment::at("https://shop.example.com/"));
    assert_eq!(ctx.repository_name, "external-app-shop-example-com");
}

#[test]
fn custom_rules_take_precedence() {
    let resolver = ProjectContextResolver::fixed(PageEnvironment::at(
        "https://reports.globex.com/q3",
    ))
    .with_org_rule(OrgRule::fixed(RuleSource::Hostname, r"globex\.com$", "globex").unwrap())
    .with_app_rule(AppRule::new(r"^reports\.", "reporting").unwrap());

    assert_eq!(resolver.resolve().repository_name, "globex-reporting");
}

#[test]
fn invalid_rule_patterns_are_rejected_not_panicking() {
    assert!(OrgRule::capture(RuleSource::Hostname, r"([unclosed").is_none());
    assert!(AppRule::new(r"(", "x").is_none());
}

#[test]
fn sanitize_host_collapses_separators() {
    assert_eq!(sanitize_host("A..B--c.com"), "a-b-c-com");
    assert_eq!(sanitize_host("..."), "unknown");
}

/// Environment whose location changes between calls.
struct Navigating(Mutex<PageEnvironment>);

impl IEnvironmentSource for Navigating {
    fn snapshot(&self) -> PageEnvironment {
        self.0.lock().unwrap().clone()
    }
}

#[test]
fn context_is_recomputed_on_every_call() {
    let source = Arc::new(Navigating(Mutex::new(PageEnvironment::at(
        "https://app.acme.internal/orders",
    ))));
    let resolver = ProjectContextResolver::new(source.clone());
    assert_eq!(resolver.resolve().page_route, "/orders");

    *source.0.lock().unwrap() = PageEnvironment::at("https://app.acme.internal/settings");
    assert_eq!(resolver.resolve().page_route, "/settings");
}
