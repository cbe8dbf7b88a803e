//! Logging utilities and structured logging support

pub use log::{debug, error, info, trace, warn, LevelFilter};

/// Initialize the logging system
///
/// `RUST_LOG` still overrides the given default level.
pub fn init(default_level: LevelFilter) {
    env_logger::Builder::new()
        .filter_level(default_level)
        .parse_default_env()
        .init();
}

/// Initialize logging for tests, ignoring repeat initialization
pub fn try_init_for_tests() {
    let _ = env_logger::Builder::new()
        .filter_level(LevelFilter::Trace)
        .is_test(true)
        .try_init();
}
