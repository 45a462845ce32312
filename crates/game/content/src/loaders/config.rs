//! Game configuration loader.

use std::path::Path;

use anyhow::Context;
use game_core::GameConfig;

use crate::loaders::{LoadResult, read_file};

/// Loader for game configuration from TOML files.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load and validate config data from a TOML file.
    ///
    /// Missing keys fall back to [`GameConfig::default`].
    pub fn load(path: &Path) -> LoadResult<GameConfig> {
        let content = read_file(path)?;
        Self::parse(&content).with_context(|| format!("Invalid config {}", path.display()))
    }

    pub fn parse(content: &str) -> LoadResult<GameConfig> {
        let config: GameConfig =
            toml::from_str(content).map_err(|e| anyhow::anyhow!("Failed to parse config TOML: {}", e))?;
        config.validate()?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_file_uses_defaults() {
        let config = ConfigLoader::parse("offer_count = 4\n").unwrap();
        assert_eq!(config.offer_count, 4);
        assert_eq!(config.cooldown_reduction_cap, GameConfig::DEFAULT_COOLDOWN_REDUCTION_CAP);
    }

    #[test]
    fn invalid_values_are_rejected() {
        assert!(ConfigLoader::parse("cooldown_reduction_cap = 1.5\n").is_err());
        assert!(ConfigLoader::parse("offer_count = 0\n").is_err());
    }
}
