//! Tracing/logging setup shared by the shell binaries and the browser build.

/// Initialize process-wide tracing at `info`.
///
/// This is safe to call multiple times; subsequent calls become no-ops.
pub fn init() {
    tracing::init("info");
}

/// Initialize with an explicit max level (`trace`..`error`).
///
/// Native builds still let `RUST_LOG` take precedence.
pub fn init_with_level(level: &str) {
    tracing::init(level);
}

/// Tracing configuration (filters, layers).
pub mod tracing;
