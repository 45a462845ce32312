use game_core::{UnlockOracle, UnlockSet, WeaponTag};

/// Save-data unlock flags as seen by a run.
#[derive(Debug, Clone, Default)]
pub enum UnlockOracleImpl {
    /// Fresh profile with every weapon available.
    #[default]
    All,
    /// Only the listed weapons may be unlocked in a run.
    Only(UnlockSet),
}

impl UnlockOracle for UnlockOracleImpl {
    fn is_weapon_unlocked(&self, tag: WeaponTag) -> bool {
        match self {
            Self::All => true,
            Self::Only(set) => set.is_weapon_unlocked(tag),
        }
    }
}
