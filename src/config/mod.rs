mod types;

pub use types::*;

use anyhow::{Context, Result};
use std::path::Path;

const SECTIONS: &[&str] = &["output", "input"];

/// Load configuration from a TOML file
pub fn load_config(path: &Path) -> Result<Config> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {:?}", path))?;

    let table: toml::Table = toml::from_str(&content)
        .with_context(|| format!("Failed to parse config file: {:?}", path))?;

    validate_config(&table);

    let config: Config = toml::Value::Table(table)
        .try_into()
        .with_context(|| format!("Invalid config file: {:?}", path))?;

    tracing::debug!("Loaded config from {:?}", path);
    Ok(config)
}

/// Load config from default locations or return default config
pub fn load_config_or_default(custom_path: Option<&Path>) -> Result<Config> {
    if let Some(path) = custom_path {
        return load_config(path);
    }

    let default_paths = ["./elemental.toml", "~/.config/elemental/config.toml"];

    for path_str in default_paths {
        let path = shellexpand::tilde(path_str);
        let path = Path::new(path.as_ref());
        if path.exists() {
            return load_config(path);
        }
    }

    Ok(Config::default())
}

/// Warn about sections this version does not read. Typed errors are left to
/// deserialization.
pub fn validate_config(table: &toml::Table) -> Vec<String> {
    let unknown: Vec<String> = table
        .keys()
        .filter(|key| !SECTIONS.contains(&key.as_str()))
        .cloned()
        .collect();

    for key in &unknown {
        tracing::warn!("Ignoring unknown config section: {}", key);
    }

    unknown
}
