//! Compile-time build information.

pub const BUILD_COMMIT: &str = env!("REAVER_BUILD_COMMIT");
pub const BUILD_DATE: &str = env!("REAVER_BUILD_DATE");
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// One-line version string, e.g. `reaver 0.1.0 (abc1234, 2026-01-31)`.
pub fn version_line() -> String {
    format!("reaver {} ({}, {})", VERSION, BUILD_COMMIT, BUILD_DATE)
}
