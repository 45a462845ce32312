use std::collections::BTreeSet;

use crate::weapon::WeaponTag;

/// Persisted content unlock flags, owned by the save-data collaborator.
pub trait UnlockOracle: Send + Sync {
    fn is_weapon_unlocked(&self, tag: WeaponTag) -> bool;
}

/// Every weapon is unlocked. Used for fresh profiles and tests.
#[derive(Clone, Copy, Debug, Default)]
pub struct AllUnlocked;

impl UnlockOracle for AllUnlocked {
    fn is_weapon_unlocked(&self, _tag: WeaponTag) -> bool {
        true
    }
}

/// Explicit set of unlocked weapons.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct UnlockSet {
    unlocked: BTreeSet<WeaponTag>,
}

impl UnlockSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn unlock(&mut self, tag: WeaponTag) -> bool {
        self.unlocked.insert(tag)
    }

    pub fn lock(&mut self, tag: WeaponTag) -> bool {
        self.unlocked.remove(&tag)
    }
}

impl FromIterator<WeaponTag> for UnlockSet {
    fn from_iter<I: IntoIterator<Item = WeaponTag>>(iter: I) -> Self {
        Self {
            unlocked: iter.into_iter().collect(),
        }
    }
}

impl UnlockOracle for UnlockSet {
    fn is_weapon_unlocked(&self, tag: WeaponTag) -> bool {
        self.unlocked.contains(&tag)
    }
}
