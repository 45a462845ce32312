use super::base::WeaponBase;
use super::data::BaseWeaponData;
use super::stats::{WeaponStatResolver, WeaponStats};
use super::tag::{WeaponHandle, WeaponTag};
use crate::config::GameConfig;
use crate::stats::StatBlock;

/// Whether the weapon's firing loop is running.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, strum::Display)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case")]
pub enum FiringState {
    #[default]
    Stopped,
    Firing,
}

/// One live weapon: its upgraded base and the last resolved stats.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WeaponInstance {
    pub handle: WeaponHandle,
    pub tag: WeaponTag,
    pub base: WeaponBase,
    pub stats: WeaponStats,
    pub firing: FiringState,
}

impl WeaponInstance {
    /// Builds an instance with unupgraded base values and stats resolved
    /// against `player`.
    pub fn new(
        handle: WeaponHandle,
        tag: WeaponTag,
        data: &BaseWeaponData,
        player: &StatBlock,
        config: &GameConfig,
    ) -> Self {
        let base = WeaponBase::from_data(data);
        let stats = WeaponStatResolver::resolve(&base, player, config);
        Self {
            handle,
            tag,
            base,
            stats,
            firing: FiringState::Stopped,
        }
    }

    /// Re-resolves `stats` from the current base and player block.
    pub fn refresh(&mut self, player: &StatBlock, config: &GameConfig) -> &WeaponStats {
        self.stats = WeaponStatResolver::recompute(self, player, config);
        &self.stats
    }

    pub fn stop_firing(&mut self) {
        self.firing = FiringState::Stopped;
    }

    pub fn start_firing(&mut self) {
        self.firing = FiringState::Firing;
    }

    pub fn is_firing(&self) -> bool {
        self.firing == FiringState::Firing
    }
}
