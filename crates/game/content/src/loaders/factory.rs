//! Content factory for building run content from data files.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use game_core::{CharacterProfile, GameConfig, UpgradeCatalog};

use crate::loaders::{
    CharacterLoader, ConfigLoader, LoadResult, UpgradeLoader, WeaponLoader, WeaponRegistry,
};

/// Everything a run needs from content, loaded once and shared.
#[derive(Debug, Clone)]
pub struct Content {
    pub config: GameConfig,
    pub weapons: WeaponRegistry,
    pub catalog: Arc<UpgradeCatalog>,
    pub characters: Vec<CharacterProfile>,
}

impl Content {
    /// Character by name, ignoring ASCII case.
    pub fn character(&self, name: &str) -> Option<&CharacterProfile> {
        self.characters
            .iter()
            .find(|character| character.name.eq_ignore_ascii_case(name))
    }
}

/// Content factory that loads all game content from a data directory.
///
/// # Directory Structure
///
/// ```text
/// data_dir/
/// ├── config.toml
/// ├── weapons.ron
/// ├── upgrades.ron
/// └── characters.ron
/// ```
pub struct ContentFactory {
    data_dir: PathBuf,
}

impl ContentFactory {
    /// Creates a new content factory pointing to a data directory.
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    /// Load game configuration from `config.toml`.
    pub fn load_config(&self) -> LoadResult<GameConfig> {
        ConfigLoader::load(&self.data_dir.join("config.toml"))
    }

    /// Load weapon base stats from `weapons.ron`.
    pub fn load_weapons(&self) -> LoadResult<WeaponRegistry> {
        WeaponLoader::load(&self.data_dir.join("weapons.ron"))
    }

    /// Load the upgrade catalog from `upgrades.ron`.
    pub fn load_upgrades(&self, weapons: &WeaponRegistry) -> LoadResult<UpgradeCatalog> {
        UpgradeLoader::load(&self.data_dir.join("upgrades.ron"), weapons)
    }

    /// Load the character roster from `characters.ron`.
    pub fn load_characters(&self, weapons: &WeaponRegistry) -> LoadResult<Vec<CharacterProfile>> {
        CharacterLoader::load(&self.data_dir.join("characters.ron"), weapons)
    }

    /// Load every content file. Weapons load first so names can resolve.
    pub fn load_all(&self) -> LoadResult<Content> {
        let config = self.load_config()?;
        let weapons = self.load_weapons()?;
        let catalog = self.load_upgrades(&weapons)?;
        let characters = self.load_characters(&weapons)?;
        Ok(Content {
            config,
            weapons,
            catalog: Arc::new(catalog),
            characters,
        })
    }

    /// Returns the data directory path.
    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }
}
