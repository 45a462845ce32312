/// Per-run progress of one upgrade track.
///
/// Weapon tracks move `Locked → Unlocked → Upgraded { level: 2 } → …`; the
/// unlock never applies a bonus. Passive tracks skip `Unlocked` and go
/// straight from `Locked` to `Upgraded { level: 1 }`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TrackState {
    /// Never picked. For weapon tracks the weapon is inactive.
    #[default]
    Locked,
    /// Weapon active with unupgraded base stats.
    Unlocked,
    /// `level` picks taken. For weapons, `level - 1` bonuses applied.
    Upgraded { level: u32 },
}

impl TrackState {
    pub const fn level(self) -> u32 {
        match self {
            Self::Locked => 0,
            Self::Unlocked => 1,
            Self::Upgraded { level } => level,
        }
    }

    pub const fn is_locked(self) -> bool {
        matches!(self, Self::Locked)
    }

    /// Next state of a weapon track.
    pub const fn advance_weapon(self) -> Self {
        match self {
            Self::Locked => Self::Unlocked,
            Self::Unlocked => Self::Upgraded { level: 2 },
            Self::Upgraded { level } => Self::Upgraded { level: level + 1 },
        }
    }

    /// Next state of a passive track.
    pub const fn advance_passive(self) -> Self {
        Self::Upgraded {
            level: self.level() + 1,
        }
    }
}
