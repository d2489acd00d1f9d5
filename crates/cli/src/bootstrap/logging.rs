use name_resolver_domain::Config;
use tracing_subscriber::EnvFilter;

pub const LOG_LEVEL_ENV: &str = "LOG_LEVEL";

/// Maps a `LOG_LEVEL` value to a filter directive. Unknown values mean `info`.
pub fn level_from_env_value(value: &str) -> &'static str {
    match value.trim().to_ascii_lowercase().as_str() {
        "debug" => "debug",
        "info" => "info",
        "warn" => "warn",
        "error" => "error",
        _ => "info",
    }
}

/// `RUST_LOG`, then `LOG_LEVEL`, then the configured level.
fn build_filter(config: &Config) -> EnvFilter {
    if let Ok(filter) = EnvFilter::try_from_default_env() {
        return filter;
    }

    if let Ok(value) = std::env::var(LOG_LEVEL_ENV) {
        return EnvFilter::new(level_from_env_value(&value));
    }

    EnvFilter::try_new(&config.logging.level).unwrap_or_else(|_| EnvFilter::new("info"))
}

pub fn init_logging(config: &Config) {
    let filter = build_filter(config);

    let result = if config.logging.json {
        tracing_subscriber::fmt()
            .json()
            .with_env_filter(filter)
            .with_target(false)
            .try_init()
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .try_init()
    };

    if let Err(e) = result {
        eprintln!("Tracing subscriber already initialized: {}", e);
    }
}
