//! Logging utilities and structured logging support

pub use log::{debug, info, warn, error, trace};

/// Initialize the logging system from `RUST_LOG`
pub fn init() {
    env_logger::init();
}

/// Initialize logging with an explicit filter (e.g. `"info"` or `"script_api=debug"`)
///
/// Safe to call more than once; later calls are ignored.
pub fn init_with_level(filter: &str) {
    let result = env_logger::Builder::new()
        .parse_filters(filter)
        .format_timestamp(None)
        .try_init();

    if result.is_err() {
        log::debug!("Logger already initialized, ignoring filter '{}'", filter);
    }
}
