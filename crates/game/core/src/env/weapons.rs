use crate::weapon::{BaseWeaponData, WeaponTag};

/// Static weapon content lookup.
pub trait WeaponOracle: Send + Sync {
    /// Immutable base stats for a weapon, `None` if the tag is unknown.
    fn base_data(&self, tag: WeaponTag) -> Option<BaseWeaponData>;

    /// Every weapon tag this oracle knows, in content order.
    fn tags(&self) -> Vec<WeaponTag>;

    /// Display name for a weapon, falling back to the tag.
    fn name(&self, tag: WeaponTag) -> String {
        self.base_data(tag)
            .map(|data| data.name)
            .unwrap_or_else(|| tag.to_string())
    }
}

/// Weapon table indexed by tag.
///
/// Tags are positions in the table, so content loaders intern names by
/// pushing weapons in order.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WeaponTable {
    weapons: Vec<BaseWeaponData>,
}

impl WeaponTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a weapon and returns its tag, or `None` once every tag is
    /// taken.
    pub fn push(&mut self, data: BaseWeaponData) -> Option<WeaponTag> {
        let tag = WeaponTag(u16::try_from(self.weapons.len()).ok()?);
        self.weapons.push(data);
        Some(tag)
    }

    pub fn get(&self, tag: WeaponTag) -> Option<&BaseWeaponData> {
        self.weapons.get(tag.0 as usize)
    }

    pub fn len(&self) -> usize {
        self.weapons.len()
    }

    pub fn is_empty(&self) -> bool {
        self.weapons.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (WeaponTag, &BaseWeaponData)> {
        self.weapons
            .iter()
            .enumerate()
            .map(|(index, data)| (WeaponTag(index as u16), data))
    }
}

impl WeaponOracle for WeaponTable {
    fn base_data(&self, tag: WeaponTag) -> Option<BaseWeaponData> {
        self.get(tag).cloned()
    }

    fn tags(&self) -> Vec<WeaponTag> {
        (0..self.weapons.len() as u16).map(WeaponTag).collect()
    }
}
