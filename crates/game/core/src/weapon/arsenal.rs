//! The set of live weapon instances owned by one run.

use std::collections::BTreeMap;

use super::instance::WeaponInstance;
use super::tag::{WeaponHandle, WeaponTag};

/// Live weapons keyed by handle, iterated in handle order.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Arsenal {
    weapons: BTreeMap<WeaponHandle, WeaponInstance>,
}

impl Arsenal {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds an instance, replacing any previous one with the same handle.
    pub fn insert(&mut self, instance: WeaponInstance) -> Option<WeaponInstance> {
        self.weapons.insert(instance.handle, instance)
    }

    /// Removes an instance; returns it so the caller can hand it back to the pool.
    pub fn deactivate(&mut self, handle: WeaponHandle) -> Option<WeaponInstance> {
        self.weapons.remove(&handle)
    }

    pub fn clear(&mut self) -> Vec<WeaponInstance> {
        std::mem::take(&mut self.weapons).into_values().collect()
    }

    pub fn get(&self, handle: WeaponHandle) -> Option<&WeaponInstance> {
        self.weapons.get(&handle)
    }

    pub fn get_mut(&mut self, handle: WeaponHandle) -> Option<&mut WeaponInstance> {
        self.weapons.get_mut(&handle)
    }

    /// Handles of every live weapon.
    pub fn live(&self) -> impl Iterator<Item = WeaponHandle> + '_ {
        self.weapons.keys().copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = &WeaponInstance> {
        self.weapons.values()
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut WeaponInstance> {
        self.weapons.values_mut()
    }

    pub fn active_tags(&self) -> impl Iterator<Item = WeaponTag> + '_ {
        self.weapons.values().map(|weapon| weapon.tag)
    }

    pub fn has_tag(&self, tag: WeaponTag) -> bool {
        self.weapons.values().any(|weapon| weapon.tag == tag)
    }

    /// Handles of live weapons whose tag is in `tags`.
    pub fn compatible(&self, tags: &[WeaponTag]) -> Vec<WeaponHandle> {
        self.weapons
            .values()
            .filter(|weapon| tags.contains(&weapon.tag))
            .map(|weapon| weapon.handle)
            .collect()
    }

    pub fn len(&self) -> usize {
        self.weapons.len()
    }

    pub fn is_empty(&self) -> bool {
        self.weapons.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GameConfig;
    use crate::stats::StatBlock;
    use crate::weapon::BaseWeaponData;

    fn instance(handle: u32, tag: u16) -> WeaponInstance {
        WeaponInstance::new(
            WeaponHandle(handle),
            WeaponTag(tag),
            &BaseWeaponData::new("test"),
            &StatBlock::default(),
            &GameConfig::default(),
        )
    }

    #[test]
    fn compatible_filters_by_tag() {
        let mut arsenal = Arsenal::new();
        arsenal.insert(instance(2, 0));
        arsenal.insert(instance(1, 1));
        arsenal.insert(instance(3, 0));

        assert_eq!(
            arsenal.compatible(&[WeaponTag(0)]),
            vec![WeaponHandle(2), WeaponHandle(3)]
        );
        assert!(arsenal.compatible(&[WeaponTag(7)]).is_empty());
        assert!(arsenal.has_tag(WeaponTag(1)));
    }

    #[test]
    fn deactivate_and_clear() {
        let mut arsenal = Arsenal::new();
        arsenal.insert(instance(1, 0));
        arsenal.insert(instance(2, 1));

        assert!(arsenal.deactivate(WeaponHandle(1)).is_some());
        assert!(arsenal.deactivate(WeaponHandle(1)).is_none());
        assert_eq!(arsenal.clear().len(), 1);
        assert!(arsenal.is_empty());
    }
}
