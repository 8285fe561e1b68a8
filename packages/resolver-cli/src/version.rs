//! Version
//!
//! Version information for the rewrite tool.

/// Tool version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Binary name shown in the banner.
pub const TOOL_NAME: &str = "alias-rewrite";

/// Tool version string.
pub fn version_string() -> String {
    format!("{} v{}", TOOL_NAME, VERSION)
}

/// One-line banner printed when a build starts.
pub fn banner() -> String {
    format!("{} (path alias rewriter)", version_string())
}
