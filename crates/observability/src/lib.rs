//! Tracing and logging setup shared by both binaries.

/// Initialize process-wide tracing with the given output format.
///
/// This is safe to call multiple times; subsequent calls become no-ops.
pub fn init_with(format: LogFormat) {
    tracing::init(format);
}

pub use self::tracing::LogFormat;

/// Tracing configuration (filters, layers).
pub mod tracing;
