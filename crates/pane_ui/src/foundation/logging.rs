//! Logging utilities and structured logging support

pub use log::{debug, error, info, trace, warn};

/// Initialize the logging system
pub fn init() {
    env_logger::init();
}

/// Initialize the logging system with an explicit filter string
///
/// The filter uses the same syntax as the `RUST_LOG` environment variable
/// (for example `"info"` or `"pane_ui=debug"`). An environment filter, if
/// present, still takes precedence.
pub fn init_with_filter(filter: &str) {
    env_logger::Builder::from_default_env()
        .parse_filters(filter)
        .init();
}
