use name_resolver_domain::{CliOverrides, Config};
use tracing::info;

pub fn load_config(path: Option<&str>, overrides: CliOverrides) -> anyhow::Result<Config> {
    let config = Config::load(path, overrides)?;
    config.validate()?;
    Ok(config)
}

/// Logged after the subscriber is installed.
pub fn log_config_summary(config: &Config, path: Option<&str>) {
    let source = path
        .map(str::to_string)
        .or_else(Config::get_config_path)
        .unwrap_or_else(|| "defaults".to_string());

    info!(
        source = %source,
        listen = %config.server.listen_address(),
        name_filter = config.filter.name.as_deref().unwrap_or(""),
        labels = ?config.filter.labels,
        overrides = config.filter.overrides.len(),
        fallback = ?config.upstream.servers,
        "Configuration loaded"
    );
}
