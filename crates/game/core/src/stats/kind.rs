//! Player stat identifiers.

/// Every player stat a passive upgrade can modify.
///
/// The string form (snake_case, case-insensitive) is what content files use.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
    strum::EnumIter,
    strum::EnumCount,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum StatKind {
    /// Maximum health
    Health,
    /// Global damage multiplier ("might")
    Damage,
    /// Movement speed
    MoveSpeed,
    /// Pickup luck, also feeds weapon crit chance
    Luck,
    /// Health recovery per second
    Regen,
    /// Attack area multiplier
    Area,
    /// Projectile speed multiplier
    ProjectileSpeed,
    /// Effect duration multiplier
    Duration,
    /// Cooldown reduction (accumulated, clamped)
    Cooldown,
    /// Flat damage reduction
    Armor,
    /// Extra lives
    Revival,
    /// Extra projectiles per weapon
    Amount,
    /// Pickup radius
    Magnet,
    /// Experience gain multiplier
    Growth,
}

impl StatKind {
    /// Stats stored as whole numbers; results are rounded after each upgrade.
    pub const fn is_integer(self) -> bool {
        matches!(self, Self::Armor | Self::Revival | Self::Amount)
    }

    /// Stats whose change must be pushed to live weapons.
    pub const fn affects_weapons(self) -> bool {
        matches!(
            self,
            Self::Damage
                | Self::Luck
                | Self::Area
                | Self::ProjectileSpeed
                | Self::Duration
                | Self::Cooldown
                | Self::Amount
        )
    }
}
