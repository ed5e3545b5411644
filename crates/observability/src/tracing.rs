//! Tracing/logging initialization.
//!
//! Native: JSON lines to stdout, filtered by `RUST_LOG`.
//! wasm32: the browser console via `tracing-wasm`.

/// Parse a level name, falling back to `INFO`.
pub fn parse_level(level: &str) -> ::tracing::Level {
    level.trim().parse().unwrap_or(::tracing::Level::INFO)
}

/// Initialize tracing/logging for the process.
///
/// Safe to call multiple times (subsequent calls are no-ops).
#[cfg(not(target_arch = "wasm32"))]
pub fn init(default_level: &str) {
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(parse_level(default_level).as_str().to_ascii_lowercase()));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .json()
        .with_timer(tracing_subscriber::fmt::time::SystemTime)
        .with_target(false)
        .try_init();
}

/// Initialize tracing for the browser console.
///
/// Safe to call multiple times (subsequent calls are no-ops).
#[cfg(target_arch = "wasm32")]
pub fn init(default_level: &str) {
    use std::sync::Once;

    static INIT: Once = Once::new();

    let level = parse_level(default_level);
    INIT.call_once(|| {
        let config = tracing_wasm::WASMLayerConfigBuilder::new()
            .set_max_level(level)
            .build();
        tracing_wasm::set_as_global_default_with_config(config);
    });
}
