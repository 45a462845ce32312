//! Playable characters and their starting stats.

use crate::weapon::WeaponTag;

/// Starting values for a run's [`StatBlock`](crate::stats::StatBlock).
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct StartingStats {
    pub health: f32,
    pub damage_mult: f32,
    pub move_speed: f32,
    pub luck: f32,
    pub regen: f32,
    pub area: f32,
    pub projectile_speed: f32,
    pub duration: f32,
    pub cooldown_reduction: f32,
    pub armor: i32,
    pub revival_count: i32,
    pub flat_amount_bonus: i32,
    pub magnet: f32,
    pub growth_mult: f32,
}

impl Default for StartingStats {
    fn default() -> Self {
        Self {
            health: 100.0,
            damage_mult: 1.0,
            move_speed: 5.0,
            luck: 0.0,
            regen: 0.0,
            area: 1.0,
            projectile_speed: 1.0,
            duration: 1.0,
            cooldown_reduction: 0.0,
            armor: 0,
            revival_count: 0,
            flat_amount_bonus: 0,
            magnet: 1.5,
            growth_mult: 1.0,
        }
    }
}

/// A selectable character: starting stats plus the weapon it begins with.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CharacterProfile {
    pub name: String,
    pub stats: StartingStats,
    pub starting_weapon: Option<WeaponTag>,
}

impl CharacterProfile {
    pub fn new(name: impl Into<String>, starting_weapon: Option<WeaponTag>) -> Self {
        Self {
            name: name.into(),
            stats: StartingStats::default(),
            starting_weapon,
        }
    }

    pub fn with_stats(mut self, stats: StartingStats) -> Self {
        self.stats = stats;
        self
    }
}
