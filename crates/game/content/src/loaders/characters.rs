//! Character roster loader.

use std::collections::HashSet;
use std::path::Path;

use anyhow::Context;
use game_core::{CharacterProfile, StartingStats};
use serde::{Deserialize, Serialize};

use crate::loaders::{LoadResult, WeaponRegistry, read_file};

/// Character roster structure for RON files.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CharacterFile {
    pub characters: Vec<CharacterSpec>,
}

/// One character as written in content. Omitted stats use the defaults.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CharacterSpec {
    pub name: String,
    #[serde(default)]
    pub stats: StartingStats,
    #[serde(default)]
    pub starting_weapon: Option<String>,
}

/// Loader for playable characters from RON files.
pub struct CharacterLoader;

impl CharacterLoader {
    pub fn load(path: &Path, weapons: &WeaponRegistry) -> LoadResult<Vec<CharacterProfile>> {
        let content = read_file(path)?;
        Self::parse(&content, weapons)
            .with_context(|| format!("Invalid character roster {}", path.display()))
    }

    pub fn parse(content: &str, weapons: &WeaponRegistry) -> LoadResult<Vec<CharacterProfile>> {
        let file: CharacterFile = ron::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse character roster RON: {}", e))?;

        let mut seen = HashSet::new();
        let mut characters = Vec::with_capacity(file.characters.len());
        for entry in file.characters {
            anyhow::ensure!(
                seen.insert(entry.name.to_ascii_lowercase()),
                "duplicate character '{}'",
                entry.name
            );
            let starting_weapon = entry
                .starting_weapon
                .as_deref()
                .map(|weapon| weapons.require(weapon, &entry.name))
                .transpose()?;
            characters.push(CharacterProfile::new(entry.name, starting_weapon).with_stats(entry.stats));
        }
        Ok(characters)
    }
}
