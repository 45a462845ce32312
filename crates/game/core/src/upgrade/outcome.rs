use super::definition::UpgradeId;
use crate::stats::StatChange;
use crate::weapon::{WeaponHandle, WeaponTag};

/// What a successful pick did.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PickOutcome {
    /// Weapon track moved to level 1. No bonus was applied.
    ///
    /// `spawn_required` is set when no instance of `weapon` is live yet; the
    /// caller spawns one through its weapon host.
    Unlocked {
        weapon: WeaponTag,
        spawn_required: bool,
    },
    /// A weapon bonus level was applied to `affected`, whose stats are
    /// already recomputed. Empty when no compatible instance was live.
    WeaponUpgraded {
        level: u32,
        affected: Vec<WeaponHandle>,
    },
    /// A player stat changed. Live weapons recompute when the caller
    /// publishes `change`.
    PassiveApplied { change: StatChange, level: u32 },
}

impl PickOutcome {
    /// Track level after the pick.
    pub fn level(&self) -> u32 {
        match self {
            Self::Unlocked { .. } => 1,
            Self::WeaponUpgraded { level, .. } | Self::PassiveApplied { level, .. } => *level,
        }
    }
}

/// One entry of the end-of-run summary.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PickRecord {
    pub id: UpgradeId,
    /// Level the track reached with its latest pick.
    pub level: u32,
}
