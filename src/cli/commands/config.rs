//! Print the effective configuration

use std::path::PathBuf;

use wellatlas::config::{AppConfig, MAPTILER_KEY_ENV};

/// Print the resolved config as TOML
///
/// The map key is masked; only whether one is set is shown.
pub fn show_config(config_path: Option<PathBuf>) -> anyhow::Result<()> {
    let mut config = AppConfig::load(config_path.as_deref())?;

    let source = config_path.or_else(AppConfig::discover).map_or_else(
        || "defaults".to_string(),
        |path| path.display().to_string(),
    );

    if !config.map.maptiler_key.is_empty() {
        config.map.maptiler_key = "********".to_string();
    }

    println!("# source: {source} (+ {MAPTILER_KEY_ENV} from environment)");
    print!("{}", toml::to_string_pretty(&config)?);
    Ok(())
}
