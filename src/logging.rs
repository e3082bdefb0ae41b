//! Global logger setup.

use std::sync::Once;

static INIT: Once = Once::new();

/// Initializes `env_logger` once, honoring `RUST_LOG` and defaulting to
/// info-level output. Safe to call from every binary entry point.
pub fn init() {
    INIT.call_once(|| {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    });
}
