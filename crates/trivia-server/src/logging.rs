//! Logging setup

use tracing_subscriber::EnvFilter;

use trivia_core::Config;

/// Build the log filter: `RUST_LOG` wins, otherwise the configured level
/// applied to the trivia crates
pub fn env_filter(config: &Config) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        let level = config.log_level();
        EnvFilter::new(format!("trivia_core={},trivia_server={}", level, level))
    })
}

/// Install the global subscriber writing to stderr
pub fn init(config: &Config) {
    // Ignore error if already initialized
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter(config))
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}
