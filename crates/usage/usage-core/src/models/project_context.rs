//! Page identity and the environment signals it is derived from.

use serde::{Deserialize, Serialize};

/// Stable identity of the page a component is rendered on.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectContext {
    pub page_url: String,
    pub page_route: String,
    pub domain: String,
    pub repository_name: String,
    pub project_version: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub project_description: Option<String>,
}

/// Package metadata injected at build time.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PackageMetadata {
    pub name: Option<String>,
    pub version: Option<String>,
    pub description: Option<String>,
}

/// Everything the build may inject. Both parts are optional.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BuildMetadata {
    pub package: Option<PackageMetadata>,
    pub version: Option<String>,
}

/// Current location of the page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageLocation {
    pub href: String,
    pub hostname: String,
    pub pathname: String,
}

impl PageLocation {
    /// Parse an absolute URL. Returns `None` for anything unparseable or
    /// host-less (`about:blank`, `data:` URLs).
    pub fn parse(href: &str) -> Option<Self> {
        let url = url::Url::parse(href).ok()?;
        let hostname = url.host_str()?.trim_matches(|c| c == '[' || c == ']');
        Some(Self {
            href: url.to_string(),
            hostname: hostname.to_ascii_lowercase(),
            pathname: url.path().to_string(),
        })
    }
}

/// Snapshot of the environment signals available to the resolver.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageEnvironment {
    /// `None` when there is no page (server-side rendering, headless runs).
    pub location: Option<PageLocation>,
    /// `href` of the page's favicon link, if any.
    pub favicon_href: Option<String>,
    pub build: BuildMetadata,
}

impl PageEnvironment {
    /// An environment with no page at all.
    pub fn server_side() -> Self {
        Self::default()
    }

    /// An environment for the page at `href`. Unparseable URLs behave like
    /// server-side execution.
    pub fn at(href: &str) -> Self {
        Self {
            location: PageLocation::parse(href),
            ..Self::default()
        }
    }

    pub fn with_favicon(mut self, href: impl Into<String>) -> Self {
        self.favicon_href = Some(href.into());
        self
    }

    pub fn with_package(mut self, package: PackageMetadata) -> Self {
        self.build.package = Some(package);
        self
    }

    pub fn with_version(mut self, version: impl Into<String>) -> Self {
        self.build.version = Some(version.into());
        self
    }
}
