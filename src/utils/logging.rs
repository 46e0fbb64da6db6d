use log::LevelFilter;
use crate::models::Config;

/// Set up `env_logger`: debug output with `--debug`, info otherwise.
/// `RUST_LOG` still takes precedence.
pub fn init_logging(config: &Config) {
    let level = if config.debug_mode {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };

    let _ = env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .format_timestamp(None)
        .format_target(false)
        .try_init();
}
