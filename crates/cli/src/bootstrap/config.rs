use ferrous_splitdns_domain::{CliOverrides, Config};
use tracing::info;

pub fn load_config(
    config_path: Option<&str>,
    cli_overrides: CliOverrides,
) -> anyhow::Result<Config> {
    let config = Config::load(config_path, cli_overrides)?;
    config.validate()?;
    Ok(config)
}

/// Called once logging is up; events before that have no subscriber.
pub fn log_config(config: &Config, config_path: Option<&str>) {
    info!(
        config_file = config_path.unwrap_or("default"),
        root_dir = %config.output.root_dir,
        domestic_files = config.sources.domestic.len(),
        foreign_files = config.sources.foreign.len(),
        mirror_only = config.fetch.mirror_only,
        "Configuration loaded"
    );
}
