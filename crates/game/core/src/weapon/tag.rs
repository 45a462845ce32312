use core::fmt;

/// Interned weapon identifier assigned when content is loaded.
///
/// Upgrades and characters refer to weapons by name in content files; the
/// loader resolves those names once, so runtime matching is an integer compare.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WeaponTag(pub u16);

impl fmt::Display for WeaponTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "weapon:{}", self.0)
    }
}

/// Handle of a live weapon instance, issued by the weapon host (object pool).
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WeaponHandle(pub u32);

impl fmt::Display for WeaponHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Canonical key for a weapon name: whitespace removed, ASCII lowercased.
///
/// `"Magic Wand"`, `"MagicWand"` and `"magic wand"` share one key.
pub fn weapon_key(name: &str) -> String {
    name.chars()
        .filter(|c| !c.is_whitespace())
        .map(|c| c.to_ascii_lowercase())
        .collect()
}
