//! Tracing/logging setup shared by the workspace binaries.

/// Initialize process-wide tracing with the given fallback filter directive.
///
/// This is safe to call multiple times; subsequent calls become no-ops.
pub fn init(default_directive: &str) {
    tracing::init(default_directive, LogFormat::from_env());
}

/// Tracing configuration (filters, output format).
pub mod tracing;

pub use self::tracing::LogFormat;
