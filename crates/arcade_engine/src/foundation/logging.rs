//! Logging utilities and structured logging support

pub use log::{debug, info, warn, error, trace};

/// Initialize the logging system.
///
/// `RUST_LOG` takes precedence; `default_level` is used when it is unset.
/// Calling this more than once keeps the first logger.
pub fn init(default_level: &str) {
    let env = env_logger::Env::default().default_filter_or(default_level);
    if env_logger::Builder::from_env(env)
        .format_timestamp(None)
        .try_init()
        .is_err()
    {
        log::debug!("Logger already initialized");
    }
}
