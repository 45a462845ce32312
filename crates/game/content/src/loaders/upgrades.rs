//! Upgrade catalog loader.
//!
//! Upgrades name the weapons they unlock or modify; names are resolved
//! against the [`WeaponRegistry`] here so the runtime only sees tags.

use std::collections::HashSet;
use std::path::Path;

use anyhow::Context;
use game_core::weapon::weapon_key;
use game_core::{
    PassiveEffect, UpgradeCatalog, UpgradeDefinition, UpgradeKind, WeaponEffect, WeaponLevel,
    WeaponTag,
};
use serde::{Deserialize, Serialize};

use crate::loaders::{LoadResult, WeaponRegistry, ensure_finite, read_file};

/// Upgrade catalog structure for RON files.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpgradeFile {
    pub upgrades: Vec<UpgradeSpec>,
}

/// One upgrade as written in content.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpgradeSpec {
    pub name: String,
    #[serde(default = "default_weight")]
    pub weight: f32,
    #[serde(default)]
    pub descriptions: Vec<String>,
    pub kind: UpgradeKindSpec,
}

/// Upgrade kind with weapons referenced by name.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum UpgradeKindSpec {
    Passive {
        levels: Vec<PassiveEffect>,
        #[serde(default)]
        restricted_to: Vec<String>,
    },
    Weapon {
        weapon: String,
        /// Extra weapons the bonus levels apply to; `weapon` is always included.
        #[serde(default)]
        compatible: Vec<String>,
        /// One effect list per bonus level.
        levels: Vec<Vec<WeaponEffect>>,
    },
}

fn default_weight() -> f32 {
    1.0
}

/// Loader for the upgrade catalog from RON files.
pub struct UpgradeLoader;

impl UpgradeLoader {
    pub fn load(path: &Path, weapons: &WeaponRegistry) -> LoadResult<UpgradeCatalog> {
        let content = read_file(path)?;
        Self::parse(&content, weapons)
            .with_context(|| format!("Invalid upgrade catalog {}", path.display()))
    }

    pub fn parse(content: &str, weapons: &WeaponRegistry) -> LoadResult<UpgradeCatalog> {
        let file: UpgradeFile = ron::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse upgrade catalog RON: {}", e))?;

        let mut seen = HashSet::new();
        let mut catalog = UpgradeCatalog::new();
        for entry in file.upgrades {
            let key = weapon_key(&entry.name);
            anyhow::ensure!(!key.is_empty(), "upgrade with an empty name");
            anyhow::ensure!(seen.insert(key), "duplicate upgrade '{}'", entry.name);
            catalog
                .push(resolve(entry, weapons)?)
                .context("upgrade catalog holds more upgrades than ids")?;
        }
        Ok(catalog)
    }
}

fn resolve(entry: UpgradeSpec, weapons: &WeaponRegistry) -> LoadResult<UpgradeDefinition> {
    let name = entry.name;
    ensure_finite(entry.weight, "weight", &name)?;
    anyhow::ensure!(entry.weight >= 0.0, "weight of '{name}' is negative");

    let kind = match entry.kind {
        UpgradeKindSpec::Passive {
            levels,
            restricted_to,
        } => {
            anyhow::ensure!(!levels.is_empty(), "passive upgrade '{name}' has no levels");
            for effect in &levels {
                ensure_finite(effect.amount, "effect amount", &name)?;
            }
            UpgradeKind::Passive {
                levels,
                restricted_to: resolve_all(&restricted_to, weapons, &name)?,
            }
        }
        UpgradeKindSpec::Weapon {
            weapon,
            compatible,
            levels,
        } => {
            let weapon = weapons.require(&weapon, &name)?;
            let mut tags = vec![weapon];
            for tag in resolve_all(&compatible, weapons, &name)? {
                if !tags.contains(&tag) {
                    tags.push(tag);
                }
            }

            let mut bonus_levels = Vec::with_capacity(levels.len());
            for (index, effects) in levels.into_iter().enumerate() {
                anyhow::ensure!(
                    !effects.is_empty(),
                    "bonus level {} of '{name}' has no effects",
                    index + 1
                );
                for effect in &effects {
                    ensure_finite(effect.amount, "effect amount", &name)?;
                }
                bonus_levels.push(WeaponLevel::new(effects));
            }

            UpgradeKind::Weapon {
                weapon,
                compatible: tags,
                levels: bonus_levels,
            }
        }
    };

    Ok(UpgradeDefinition {
        id: game_core::UpgradeId(0),
        name,
        descriptions: entry.descriptions,
        weight: entry.weight,
        kind,
    })
}

fn resolve_all(names: &[String], weapons: &WeaponRegistry, owner: &str) -> LoadResult<Vec<WeaponTag>> {
    names.iter().map(|name| weapons.require(name, owner)).collect()
}
