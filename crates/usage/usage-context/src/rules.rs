//! Heuristic rules for organization and app-type inference.
//!
//! Patterns that fail to compile are skipped with a warning; the remaining
//! rules keep working.

use regex::Regex;

/// Which environment signal an [`OrgRule`] is matched against.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RuleSource {
    Hostname,
    Favicon,
}

/// Infers the organization from the hostname or the favicon URL.
#[derive(Debug, Clone)]
pub struct OrgRule {
    pub source: RuleSource,
    pattern: Regex,
    /// Fixed organization; `None` uses the first capture group.
    org: Option<String>,
}

impl OrgRule {
    /// Rule yielding capture group 1 of `pattern`.
    pub fn capture(source: RuleSource, pattern: &str) -> Option<Self> {
        compile(pattern).map(|pattern| Self {
            source,
            pattern,
            org: None,
        })
    }

    /// Rule yielding a fixed organization whenever `pattern` matches.
    pub fn fixed(source: RuleSource, pattern: &str, org: &str) -> Option<Self> {
        compile(pattern).map(|pattern| Self {
            source,
            pattern,
            org: Some(org.to_string()),
        })
    }

    pub fn apply(&self, input: &str) -> Option<String> {
        let caps = self.pattern.captures(input)?;
        match &self.org {
            Some(org) => Some(org.clone()),
            None => caps
                .get(1)
                .map(|m| m.as_str().to_ascii_lowercase())
                .filter(|s| !s.is_empty()),
        }
    }
}

/// Infers the app type from `hostname + pathname`.
#[derive(Debug, Clone)]
pub struct AppRule {
    pattern: Regex,
    app_type: String,
}

impl AppRule {
    pub fn new(pattern: &str, app_type: &str) -> Option<Self> {
        compile(pattern).map(|pattern| Self {
            pattern,
            app_type: app_type.to_string(),
        })
    }

    pub fn apply(&self, host_and_path: &str) -> Option<&str> {
        self.pattern
            .is_match(host_and_path)
            .then_some(self.app_type.as_str())
    }
}

/// App type used when no [`AppRule`] matches.
pub const DEFAULT_APP_TYPE: &str = "web";

fn compile(pattern: &str) -> Option<Regex> {
    match Regex::new(pattern) {
        Ok(re) => Some(re),
        Err(e) => {
            tracing::warn!(pattern = %pattern, error = %e, "skipping context rule");
            None
        }
    }
}

pub fn default_org_rules() -> Vec<OrgRule> {
    [
        OrgRule::capture(
            RuleSource::Hostname,
            r"^(?:[a-z0-9-]+\.)*([a-z0-9-]+)\.(?:internal|corp|intranet)$",
        ),
        OrgRule::capture(
            RuleSource::Favicon,
            r"/(?:static|assets|brand)/([a-z0-9-]+)/favicon",
        ),
        OrgRule::capture(RuleSource::Favicon, r"([a-z0-9-]+)-favicon\.(?:ico|png|svg)"),
    ]
    .into_iter()
    .flatten()
    .collect()
}

pub fn default_app_rules() -> Vec<AppRule> {
    [
        AppRule::new(r"storybook|/iframe\.html$", "storybook"),
        AppRule::new(r"^admin\.|/admin(?:/|$)", "admin"),
        AppRule::new(r"^docs\.|/docs(?:/|$)", "docs"),
        AppRule::new(r"^(?:app|dashboard|console)\.|/dashboard(?:/|$)", "dashboard"),
    ]
    .into_iter()
    .flatten()
    .collect()
}
