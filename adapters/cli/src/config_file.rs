//! Loading of the optional TOML tunables file.

use std::{fs, path::Path};

use anyhow::{Context, Result};
use orbital_defence_core::GameConfig;

/// Reads and validates the configuration at `path`, or the defaults when absent.
pub(crate) fn load_config(path: Option<&Path>) -> Result<GameConfig> {
    let config = match path {
        Some(path) => {
            let contents = fs::read_to_string(path)
                .with_context(|| format!("failed to read config at {}", path.display()))?;
            parse_config(&contents)
                .with_context(|| format!("failed to load config at {}", path.display()))?
        }
        None => GameConfig::default(),
    };
    config.validate().context("invalid game configuration")?;
    Ok(config)
}

fn parse_config(contents: &str) -> Result<GameConfig> {
    toml::from_str(contents).context("failed to parse config toml")
}
