//! Event types for different topics.

use game_core::{StatChange, UpgradeId, WeaponHandle, WeaponStats, WeaponTag};
use serde::{Deserialize, Serialize};

/// Why a run ended.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::Display,
)]
#[strum(serialize_all = "snake_case")]
pub enum RunOutcome {
    Victory,
    Defeat,
    Quit,
}

/// Offers and picks.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum UpgradeEvent {
    /// An offer was drawn, in draw order.
    Offered { nonce: u64, upgrades: Vec<UpgradeId> },

    /// Nothing was eligible; play resumes without a choice.
    Skipped { nonce: u64 },

    /// A pick was applied and its track reached `level`.
    Picked { upgrade: UpgradeId, level: u32 },

    /// A weapon instance was spawned for an unlocked weapon.
    WeaponUnlocked {
        weapon: WeaponTag,
        handle: WeaponHandle,
    },
}

/// Player and weapon stat changes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum StatsEvent {
    /// A passive upgrade changed a player stat.
    Changed(StatChange),

    /// A live weapon was recomputed and restarted.
    WeaponRecomputed {
        handle: WeaponHandle,
        stats: WeaponStats,
    },
}

/// Run lifecycle.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum RunEvent {
    Started { character: String, seed: u64 },
    LevelUp { level: u32, pending_picks: u32 },
    Ended { outcome: RunOutcome, level: u32 },
}
