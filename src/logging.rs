//! Process-wide log setup.
//!
//! Installs `env_logger` with an `info` default; `RUST_LOG` overrides it.

use env_logger::Env;

/// Installs the logger. Calling this more than once is a no-op.
pub fn init() {
    let _ = env_logger::Builder::from_env(Env::default().default_filter_or("info"))
        .format_timestamp_millis()
        .try_init();
}
