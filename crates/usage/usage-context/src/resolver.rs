use std::sync::{Arc, LazyLock};

use regex::Regex;
use usage_core::constants::{
    EXTERNAL_APP_PREFIX, LOCAL_REPOSITORY, SERVER_SIDE_DOMAIN, SERVER_SIDE_REPOSITORY,
    SERVER_SIDE_ROUTE, SERVER_SIDE_URL, UNKNOWN_VERSION,
};
use usage_core::models::{PageEnvironment, PageLocation, ProjectContext};
use usage_core::traits::IEnvironmentSource;

use crate::rules::{
    default_app_rules, default_org_rules, AppRule, OrgRule, RuleSource, DEFAULT_APP_TYPE,
};

static STAGING_HOST: LazyLock<Option<Regex>> = LazyLock::new(|| {
    Regex::new(r"(?:^|[.-])(?:staging|stage|stg|preview|uat)(?:[.-]|$)").ok()
});

static STAGING_LABEL: LazyLock<Option<Regex>> = LazyLock::new(|| {
    Regex::new(r"(^|[.-])(?:staging|stage|stg|preview|uat)(?:[.-]|$)").ok()
});

static NON_ALNUM: LazyLock<Option<Regex>> = LazyLock::new(|| Regex::new(r"[^a-z0-9]+").ok());

const LOCAL_HOSTS: &[&str] = &["localhost", "127.0.0.1", "0.0.0.0", "::1"];

/// Resolves the current page's identity from an environment source.
///
/// Recomputed on every call; nothing is cached.
pub struct ProjectContextResolver {
    source: Arc<dyn IEnvironmentSource>,
    org_rules: Vec<OrgRule>,
    app_rules: Vec<AppRule>,
}

impl ProjectContextResolver {
    pub fn new(source: Arc<dyn IEnvironmentSource>) -> Self {
        Self {
            source,
            org_rules: default_org_rules(),
            app_rules: default_app_rules(),
        }
    }

    /// Resolver over a fixed environment.
    pub fn fixed(environment: PageEnvironment) -> Self {
        Self::new(Arc::new(environment))
    }

    /// Add an organization rule, checked before the defaults.
    pub fn with_org_rule(mut self, rule: OrgRule) -> Self {
        self.org_rules.insert(0, rule);
        self
    }

    /// Add an app-type rule, checked before the defaults.
    pub fn with_app_rule(mut self, rule: AppRule) -> Self {
        self.app_rules.insert(0, rule);
        self
    }

    pub fn resolve(&self) -> ProjectContext {
        let env = self.source.snapshot();
        let package = env.build.package.as_ref();

        let project_version = package
            .and_then(|p| p.version.clone())
            .or_else(|| env.build.version.clone())
            .filter(|v| !v.is_empty())
            .unwrap_or_else(|| UNKNOWN_VERSION.to_string());
        let project_description = package.and_then(|p| p.description.clone());
        let package_name = package
            .and_then(|p| p.name.clone())
            .filter(|n| !n.is_empty());

        let Some(location) = env.location.as_ref() else {
            return ProjectContext {
                page_url: SERVER_SIDE_URL.to_string(),
                page_route: SERVER_SIDE_ROUTE.to_string(),
                domain: SERVER_SIDE_DOMAIN.to_string(),
                repository_name: package_name
                    .unwrap_or_else(|| SERVER_SIDE_REPOSITORY.to_string()),
                project_version,
                project_description,
            };
        };

        let repository_name = package_name
            .unwrap_or_else(|| self.infer_repository(location, env.favicon_href.as_deref()));

        ProjectContext {
            page_url: location.href.clone(),
            page_route: location.pathname.clone(),
            domain: location.hostname.clone(),
            repository_name,
            project_version,
            project_description,
        }
    }

    /// Heuristic repository name when no package metadata was injected.
    fn infer_repository(&self, location: &PageLocation, favicon: Option<&str>) -> String {
        let host = location.hostname.as_str();
        if is_local_host(host) {
            return LOCAL_REPOSITORY.to_string();
        }

        let Some(org) = self.infer_org(host, favicon) else {
            // The staging label moves to the suffix so staging and production
            // of the same external app share a stem.
            if is_staging_host(host) {
                return format!(
                    "{EXTERNAL_APP_PREFIX}{}-staging",
                    sanitize_host(&strip_staging_label(host))
                );
            }
            return format!("{EXTERNAL_APP_PREFIX}{}", sanitize_host(host));
        };

        let host_and_path = format!("{host}{}", location.pathname);
        let app_type = self
            .app_rules
            .iter()
            .find_map(|rule| rule.apply(&host_and_path))
            .unwrap_or(DEFAULT_APP_TYPE);

        if is_staging_host(host) {
            format!("{org}-{app_type}-staging")
        } else {
            format!("{org}-{app_type}")
        }
    }

    fn infer_org(&self, host: &str, favicon: Option<&str>) -> Option<String> {
        self.org_rules.iter().find_map(|rule| match rule.source {
            RuleSource::Hostname => rule.apply(host),
            RuleSource::Favicon => favicon.and_then(|f| rule.apply(&f.to_ascii_lowercase())),
        })
    }
}

fn is_local_host(host: &str) -> bool {
    LOCAL_HOSTS.contains(&host) || host.ends_with(".local") || host.ends_with(".localhost")
}

fn is_staging_host(host: &str) -> bool {
    STAGING_HOST.as_ref().is_some_and(|re| re.is_match(host))
}

fn strip_staging_label(host: &str) -> String {
    match STAGING_LABEL.as_ref() {
        Some(re) => re.replace(host, "${1}").into_owned(),
        None => host.to_string(),
    }
}

/// Lowercase, runs of non-alphanumerics collapsed to `-`, trimmed.
pub fn sanitize_host(host: &str) -> String {
    let lower = host.to_ascii_lowercase();
    let collapsed = match NON_ALNUM.as_ref() {
        Some(re) => re.replace_all(&lower, "-").into_owned(),
        None => lower,
    };
    let trimmed = collapsed.trim_matches('-');
    if trimmed.is_empty() {
        "unknown".to_string()
    } else {
        trimmed.to_string()
    }
}
