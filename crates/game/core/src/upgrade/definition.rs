//! Immutable upgrade tracks.

use core::fmt;

use crate::stats::{StatEffect, StatKind};
use crate::weapon::{WeaponEffect, WeaponTag};

/// Text shown once a track has no further levels.
pub const MAX_LEVEL_TEXT: &str = "Max level reached!";

/// Position of a definition in its catalog.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct UpgradeId(pub u16);

impl fmt::Display for UpgradeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "upgrade:{}", self.0)
    }
}

/// One level of a passive track: a single player stat change.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PassiveEffect {
    pub stat: StatKind,
    pub amount: f32,
    #[cfg_attr(feature = "serde", serde(default))]
    pub percentage: bool,
}

impl PassiveEffect {
    pub const fn new(stat: StatKind, amount: f32, percentage: bool) -> Self {
        Self {
            stat,
            amount,
            percentage,
        }
    }

    pub const fn effect(&self) -> StatEffect {
        StatEffect {
            amount: self.amount,
            percentage: self.percentage,
        }
    }
}

/// One bonus level of a weapon track, applied atomically.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WeaponLevel {
    pub effects: Vec<WeaponEffect>,
}

impl WeaponLevel {
    pub fn new(effects: Vec<WeaponEffect>) -> Self {
        Self { effects }
    }
}

/// What a track changes.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum UpgradeKind {
    /// Player stat track. `restricted_to` limits offers to runs holding one
    /// of the listed weapons; empty means always compatible.
    Passive {
        levels: Vec<PassiveEffect>,
        restricted_to: Vec<WeaponTag>,
    },
    /// Weapon track. The first pick unlocks `weapon`; each later pick applies
    /// the next entry of `levels` to every live weapon in `compatible`.
    Weapon {
        weapon: WeaponTag,
        compatible: Vec<WeaponTag>,
        levels: Vec<WeaponLevel>,
    },
}

/// Immutable description of one upgrade track, shared across runs.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct UpgradeDefinition {
    pub id: UpgradeId,
    pub name: String,
    /// Text per level, indexed by the level the track is currently at.
    pub descriptions: Vec<String>,
    /// Relative offer likelihood. Zero or less is never offered.
    pub weight: f32,
    pub kind: UpgradeKind,
}

impl UpgradeDefinition {
    pub fn passive(name: impl Into<String>, weight: f32, levels: Vec<PassiveEffect>) -> Self {
        Self {
            id: UpgradeId(0),
            name: name.into(),
            descriptions: Vec::new(),
            weight,
            kind: UpgradeKind::Passive {
                levels,
                restricted_to: Vec::new(),
            },
        }
    }

    pub fn weapon(
        name: impl Into<String>,
        weight: f32,
        weapon: WeaponTag,
        levels: Vec<WeaponLevel>,
    ) -> Self {
        Self {
            id: UpgradeId(0),
            name: name.into(),
            descriptions: Vec::new(),
            weight,
            kind: UpgradeKind::Weapon {
                weapon,
                compatible: vec![weapon],
                levels,
            },
        }
    }

    pub fn with_descriptions(mut self, descriptions: Vec<String>) -> Self {
        self.descriptions = descriptions;
        self
    }

    /// Highest level the track can reach.
    ///
    /// Weapon tracks count the unlock as level 1, so they reach one level
    /// past their bonus list.
    pub fn max_level(&self) -> u32 {
        match &self.kind {
            UpgradeKind::Passive { levels, .. } => levels.len() as u32,
            UpgradeKind::Weapon { levels, .. } => levels.len() as u32 + 1,
        }
    }

    pub fn is_weapon(&self) -> bool {
        matches!(self.kind, UpgradeKind::Weapon { .. })
    }

    /// The weapon a weapon track unlocks.
    pub fn unlocks(&self) -> Option<WeaponTag> {
        match &self.kind {
            UpgradeKind::Weapon { weapon, .. } => Some(*weapon),
            UpgradeKind::Passive { .. } => None,
        }
    }

    /// Weapons this track needs; empty for unrestricted passives.
    pub fn weapon_tags(&self) -> &[WeaponTag] {
        match &self.kind {
            UpgradeKind::Weapon { compatible, .. } => compatible,
            UpgradeKind::Passive { restricted_to, .. } => restricted_to,
        }
    }

    /// Copies in the weighted offer pool: `max(1, ceil(weight))`.
    pub fn pool_copies(&self) -> u32 {
        (self.weight.ceil() as u32).max(1)
    }

    /// Whether the track may be offered at all.
    pub fn is_offerable(&self) -> bool {
        self.weight > 0.0 && self.max_level() > 0
    }

    /// Description for the pick that moves the track past `level`.
    pub fn description(&self, level: u32) -> &str {
        if level >= self.max_level() {
            return MAX_LEVEL_TEXT;
        }
        self.descriptions
            .get(level as usize)
            .map(String::as_str)
            .unwrap_or(&self.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::weapon::WeaponStatKind;

    fn wand_track() -> UpgradeDefinition {
        UpgradeDefinition::weapon(
            "Magic Wand",
            1.0,
            WeaponTag(0),
            vec![
                WeaponLevel::new(vec![WeaponEffect::flat(WeaponStatKind::Amount, 1.0)]),
                WeaponLevel::new(vec![WeaponEffect::percent(WeaponStatKind::Cooldown, 20.0)]),
            ],
        )
        .with_descriptions(vec![
            "Fires at the nearest enemy.".into(),
            "Fires 1 more projectile.".into(),
        ])
    }

    #[test]
    fn weapon_max_counts_unlock() {
        assert_eq!(wand_track().max_level(), 3);
        let passive = UpgradeDefinition::passive(
            "Might",
            1.0,
            vec![PassiveEffect::new(StatKind::Damage, 10.0, true); 5],
        );
        assert_eq!(passive.max_level(), 5);
    }

    #[test]
    fn description_falls_back() {
        let track = wand_track();
        assert_eq!(track.description(0), "Fires at the nearest enemy.");
        assert_eq!(track.description(2), "Magic Wand");
        assert_eq!(track.description(3), MAX_LEVEL_TEXT);
    }

    #[test]
    fn pool_copies_round_up() {
        let mut track = wand_track();
        track.weight = 0.3;
        assert_eq!(track.pool_copies(), 1);
        track.weight = 2.5;
        assert_eq!(track.pool_copies(), 3);
        track.weight = 0.0;
        assert!(!track.is_offerable());
    }
}
