//! Logging utilities and structured logging support

pub use log::{debug, error, info, trace, warn};

use log::LevelFilter;

/// Initialize logging with a default level that `RUST_LOG` can still override
///
/// Unknown level names fall back to `info`. Calling this twice is harmless;
/// the second initialization is ignored.
pub fn init_with_level(level: &str) {
    let filter = parse_level(level).unwrap_or(LevelFilter::Info);
    let _ = env_logger::Builder::new()
        .filter_level(filter)
        .parse_default_env()
        .try_init();
}

/// Parse a configured level name such as `"debug"` or `"WARN"`
pub fn parse_level(level: &str) -> Option<LevelFilter> {
    level.trim().parse().ok()
}
