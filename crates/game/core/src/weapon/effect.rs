use crate::stats::StatEffect;

/// Weapon stats a weapon upgrade level can modify.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum WeaponStatKind {
    Damage,
    Speed,
    Area,
    /// Shorter is better: percentages multiply by `1 - amount/100`.
    Cooldown,
    Duration,
    Pierce,
    /// Extra projectiles, accumulated in the instance's amount bonus.
    Amount,
    Knockback,
    /// Shorter is better, like `Cooldown`.
    ProjInterval,
}

/// One weapon stat change; a weapon upgrade level applies a list atomically.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WeaponEffect {
    pub stat: WeaponStatKind,
    pub amount: f32,
    #[cfg_attr(feature = "serde", serde(default))]
    pub percentage: bool,
}

impl WeaponEffect {
    pub const fn flat(stat: WeaponStatKind, amount: f32) -> Self {
        Self {
            stat,
            amount,
            percentage: false,
        }
    }

    pub const fn percent(stat: WeaponStatKind, amount: f32) -> Self {
        Self {
            stat,
            amount,
            percentage: true,
        }
    }

    pub const fn effect(&self) -> StatEffect {
        StatEffect {
            amount: self.amount,
            percentage: self.percentage,
        }
    }
}
