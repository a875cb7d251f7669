/// Version of this telemetry package, stamped into every outbound event.
pub const PACKAGE_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Prefix of every dedup key written to the session store.
pub const USAGE_KEY_PREFIX: &str = "component_usage_";

/// Prefix of generated session identifiers.
pub const SESSION_ID_PREFIX: &str = "session";

/// Marker substituted for function-valued props.
pub const FUNCTION_MARKER: &str = "[Function]";

/// Marker substituted for UI-node-valued props.
pub const NODE_MARKER: &str = "[ReactNode]";

/// Marker substituted for cyclic references.
pub const CIRCULAR_MARKER: &str = "[Circular]";

// --- Inert placeholders when no page is available (server-side, headless) ---
pub const SERVER_SIDE_URL: &str = "server-side";
pub const SERVER_SIDE_ROUTE: &str = "/";
pub const SERVER_SIDE_DOMAIN: &str = "server-side";
pub const SERVER_SIDE_REPOSITORY: &str = "server-side-render";

/// Repository name used for local development hosts.
pub const LOCAL_REPOSITORY: &str = "local-development";

/// Version reported when neither package metadata nor a version string is injected.
pub const UNKNOWN_VERSION: &str = "unknown";

/// Prefix of the last-resort repository name derived from the host.
pub const EXTERNAL_APP_PREFIX: &str = "external-app-";
