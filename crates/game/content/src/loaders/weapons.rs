//! Weapon catalog loader.

use std::collections::HashMap;
use std::path::Path;

use anyhow::Context;
use game_core::weapon::weapon_key;
use game_core::{BaseWeaponData, WeaponTable, WeaponTag};
use serde::{Deserialize, Serialize};

use crate::loaders::{LoadResult, ensure_finite, read_file};

/// Weapon catalog structure for RON files.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeaponCatalog {
    pub weapons: Vec<BaseWeaponData>,
}

/// Weapon table plus the name index used to resolve references.
#[derive(Debug, Clone, Default)]
pub struct WeaponRegistry {
    table: WeaponTable,
    names: HashMap<String, WeaponTag>,
}

impl WeaponRegistry {
    pub fn table(&self) -> &WeaponTable {
        &self.table
    }

    /// Tag for a weapon name; spacing and ASCII case are ignored.
    pub fn resolve(&self, name: &str) -> Option<WeaponTag> {
        self.names.get(&weapon_key(name)).copied()
    }

    /// Like [`resolve`](Self::resolve) but reports who referenced the name.
    pub fn require(&self, name: &str, referenced_by: &str) -> LoadResult<WeaponTag> {
        self.resolve(name)
            .with_context(|| format!("'{referenced_by}' references unknown weapon '{name}'"))
    }

    pub fn name(&self, tag: WeaponTag) -> Option<&str> {
        self.table.get(tag).map(|data| data.name.as_str())
    }

    pub fn len(&self) -> usize {
        self.table.len()
    }

    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }

    fn insert(&mut self, data: BaseWeaponData) -> LoadResult<WeaponTag> {
        let key = weapon_key(&data.name);
        anyhow::ensure!(!key.is_empty(), "weapon with an empty name");
        anyhow::ensure!(
            !self.names.contains_key(&key),
            "duplicate weapon '{}'",
            data.name
        );
        let tag = self
            .table
            .push(data)
            .context("weapon catalog holds more weapons than tags")?;
        self.names.insert(key, tag);
        Ok(tag)
    }
}

/// Loader for weapon base stats from RON files.
pub struct WeaponLoader;

impl WeaponLoader {
    /// Load weapon catalog from a RON file, interning names in file order.
    pub fn load(path: &Path) -> LoadResult<WeaponRegistry> {
        let content = read_file(path)?;
        Self::parse(&content).with_context(|| format!("Invalid weapon catalog {}", path.display()))
    }

    pub fn parse(content: &str) -> LoadResult<WeaponRegistry> {
        let catalog: WeaponCatalog = ron::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse weapon catalog RON: {}", e))?;

        let mut registry = WeaponRegistry::default();
        for data in catalog.weapons {
            validate(&data)?;
            registry.insert(data)?;
        }
        Ok(registry)
    }
}

fn validate(data: &BaseWeaponData) -> LoadResult<()> {
    let name = data.name.as_str();
    for (what, value) in [
        ("damage", data.damage),
        ("speed", data.speed),
        ("area", data.area),
        ("cooldown", data.cooldown),
        ("duration", data.duration),
        ("proj_interval", data.proj_interval),
        ("hit_delay", data.hit_delay),
        ("knockback", data.knockback),
        ("crit_chance", data.crit_chance),
        ("crit_multi", data.crit_multi),
    ] {
        ensure_finite(value, what, name)?;
    }
    anyhow::ensure!(data.cooldown >= 0.0, "cooldown of '{name}' is negative");
    anyhow::ensure!(data.amount >= 0, "amount of '{name}' is negative");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_intern_in_order() {
        let registry = WeaponLoader::parse(
            r#"(weapons: [
                (name: "Magic Wand", damage: 10.0, cooldown: 1.2),
                (name: "Garlic", damage: 5.0, area: 1.5),
            ])"#,
        )
        .unwrap();

        assert_eq!(registry.resolve("Magic Wand"), Some(WeaponTag(0)));
        assert_eq!(registry.resolve("magicwand"), Some(WeaponTag(0)));
        assert_eq!(registry.resolve("Garlic"), Some(WeaponTag(1)));
        assert_eq!(registry.table().get(WeaponTag(1)).map(|w| w.area), Some(1.5));
        assert_eq!(registry.table().get(WeaponTag(1)).map(|w| w.amount), Some(1));
    }

    #[test]
    fn duplicate_after_normalizing_is_rejected() {
        let err = WeaponLoader::parse(r#"(weapons: [(name: "Magic Wand"), (name: "MagicWand")])"#)
            .unwrap_err();
        assert!(err.to_string().contains("duplicate weapon"));
    }

    #[test]
    fn non_finite_stats_are_rejected() {
        assert!(WeaponLoader::parse(r#"(weapons: [(name: "Bad", damage: inf)])"#).is_err());
    }
}
