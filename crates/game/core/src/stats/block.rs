//! The player's aggregate stats for one run.
//!
//! Values are cumulative: each upgrade mutates the current value in place and
//! the per-stat level counters are bookkeeping only. Nothing is ever re-derived
//! from the counters.

use strum::EnumCount;

use super::effect::StatEffect;
use super::kind::StatKind;
use crate::character::{CharacterProfile, StartingStats};
use crate::config::GameConfig;

/// Per-stat count of successful upgrades, for UI and debugging.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StatLevels {
    counts: [u32; StatKind::COUNT],
}

impl StatLevels {
    pub fn get(&self, kind: StatKind) -> u32 {
        self.counts[kind as usize]
    }

    fn bump(&mut self, kind: StatKind) -> u32 {
        let slot = &mut self.counts[kind as usize];
        *slot = slot.saturating_add(1);
        *slot
    }

    /// Sum of all counters.
    pub fn total(&self) -> u32 {
        self.counts.iter().sum()
    }
}

/// Record of one applied stat upgrade, published as a "stats changed" notice.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StatChange {
    pub kind: StatKind,
    pub previous: f32,
    pub current: f32,
    /// Upgrade counter for `kind` after this change.
    pub level: u32,
}

impl StatChange {
    /// Whether live weapons must recompute because of this change.
    pub fn affects_weapons(&self) -> bool {
        self.kind.affects_weapons()
    }
}

/// Aggregate player stats, one per active run.
///
/// Fields are read through getters and mutated exclusively through
/// [`StatBlock::apply_stat_upgrade`].
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StatBlock {
    health: f32,
    damage_mult: f32,
    move_speed: f32,
    luck: f32,
    regen: f32,
    area: f32,
    projectile_speed: f32,
    duration: f32,
    cooldown_reduction: f32,
    armor: i32,
    revival_count: i32,
    flat_amount_bonus: i32,
    magnet: f32,
    growth_mult: f32,
    levels: StatLevels,
    cooldown_cap: f32,
}

impl StatBlock {
    /// Creates a block from a character's starting values.
    pub fn from_starting(start: &StartingStats, config: &GameConfig) -> Self {
        let cooldown_cap = config.cooldown_reduction_cap;
        Self {
            health: start.health,
            damage_mult: start.damage_mult,
            move_speed: start.move_speed,
            luck: start.luck,
            regen: start.regen,
            area: start.area,
            projectile_speed: start.projectile_speed,
            duration: start.duration,
            cooldown_reduction: start.cooldown_reduction.clamp(0.0, cooldown_cap),
            armor: start.armor,
            revival_count: start.revival_count,
            flat_amount_bonus: start.flat_amount_bonus,
            magnet: start.magnet,
            growth_mult: start.growth_mult,
            levels: StatLevels::default(),
            cooldown_cap,
        }
    }

    /// Seeds a run from a character.
    pub fn from_profile(profile: &CharacterProfile, config: &GameConfig) -> Self {
        Self::from_starting(&profile.stats, config)
    }

    /// Applies one passive upgrade and returns what changed.
    ///
    /// - percentage: `value *= 1 + amount/100`; flat: `value += amount`
    /// - `Cooldown` accumulates into `cooldown_reduction` (percentages as
    ///   `amount/100`) and is clamped to `[0, cap]` immediately
    /// - `Armor`, `Revival`, `Amount` round to the nearest integer
    ///
    /// Never fails; `amount` is validated against the upgrade content at load.
    pub fn apply_stat_upgrade(&mut self, kind: StatKind, amount: f32, percentage: bool) -> StatChange {
        let effect = StatEffect { amount, percentage };
        let previous = self.get(kind);

        match kind {
            StatKind::Health => self.health = effect.apply(self.health),
            StatKind::Damage => self.damage_mult = effect.apply(self.damage_mult),
            StatKind::MoveSpeed => self.move_speed = effect.apply(self.move_speed),
            StatKind::Luck => self.luck = effect.apply(self.luck),
            StatKind::Regen => self.regen = effect.apply(self.regen),
            StatKind::Area => self.area = effect.apply(self.area),
            StatKind::ProjectileSpeed => {
                self.projectile_speed = effect.apply(self.projectile_speed)
            }
            StatKind::Duration => self.duration = effect.apply(self.duration),
            StatKind::Cooldown => {
                let accumulated = self.cooldown_reduction + effect.as_fraction();
                self.cooldown_reduction = clamp_reduction(accumulated, self.cooldown_cap);
            }
            StatKind::Armor => self.armor = apply_rounded(effect, self.armor),
            StatKind::Revival => self.revival_count = apply_rounded(effect, self.revival_count),
            StatKind::Amount => {
                self.flat_amount_bonus = apply_rounded(effect, self.flat_amount_bonus)
            }
            StatKind::Magnet => self.magnet = effect.apply(self.magnet),
            StatKind::Growth => self.growth_mult = effect.apply(self.growth_mult),
        }

        StatChange {
            kind,
            previous,
            current: self.get(kind),
            level: self.levels.bump(kind),
        }
    }

    /// Current value of a stat as a float (integers widened).
    pub fn get(&self, kind: StatKind) -> f32 {
        match kind {
            StatKind::Health => self.health,
            StatKind::Damage => self.damage_mult,
            StatKind::MoveSpeed => self.move_speed,
            StatKind::Luck => self.luck,
            StatKind::Regen => self.regen,
            StatKind::Area => self.area,
            StatKind::ProjectileSpeed => self.projectile_speed,
            StatKind::Duration => self.duration,
            StatKind::Cooldown => self.cooldown_reduction,
            StatKind::Armor => self.armor as f32,
            StatKind::Revival => self.revival_count as f32,
            StatKind::Amount => self.flat_amount_bonus as f32,
            StatKind::Magnet => self.magnet,
            StatKind::Growth => self.growth_mult,
        }
    }

    /// Upgrade counter for `kind`.
    pub fn level(&self, kind: StatKind) -> u32 {
        self.levels.get(kind)
    }

    pub fn levels(&self) -> &StatLevels {
        &self.levels
    }

    pub fn cooldown_cap(&self) -> f32 {
        self.cooldown_cap
    }

    pub fn health(&self) -> f32 {
        self.health
    }

    pub fn damage_mult(&self) -> f32 {
        self.damage_mult
    }

    pub fn move_speed(&self) -> f32 {
        self.move_speed
    }

    pub fn luck(&self) -> f32 {
        self.luck
    }

    pub fn regen(&self) -> f32 {
        self.regen
    }

    pub fn area(&self) -> f32 {
        self.area
    }

    pub fn projectile_speed(&self) -> f32 {
        self.projectile_speed
    }

    pub fn duration(&self) -> f32 {
        self.duration
    }

    /// Always inside `[0, cooldown_cap]`.
    pub fn cooldown_reduction(&self) -> f32 {
        self.cooldown_reduction
    }

    pub fn magnet(&self) -> f32 {
        self.magnet
    }

    pub fn growth_mult(&self) -> f32 {
        self.growth_mult
    }

    pub fn armor(&self) -> i32 {
        self.armor
    }

    pub fn revival_count(&self) -> i32 {
        self.revival_count
    }

    /// Extra projectiles added to every weapon.
    pub fn flat_amount_bonus(&self) -> i32 {
        self.flat_amount_bonus
    }
}

impl Default for StatBlock {
    fn default() -> Self {
        Self::from_starting(&StartingStats::default(), &GameConfig::default())
    }
}

fn clamp_reduction(value: f32, cap: f32) -> f32 {
    // NaN from a malformed amount collapses to 0 rather than escaping the clamp.
    if value.is_nan() { 0.0 } else { value.clamp(0.0, cap) }
}

fn apply_rounded(effect: StatEffect, value: i32) -> i32 {
    effect.apply(value as f32).round() as i32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn damage_percent_compounds() {
        let mut stats = StatBlock::default();
        assert_eq!(stats.damage_mult(), 1.0);
        for _ in 0..3 {
            stats.apply_stat_upgrade(StatKind::Damage, 10.0, true);
        }
        assert!((stats.damage_mult() - 1.331).abs() < 1e-5);
        assert_eq!(stats.level(StatKind::Damage), 3);
    }

    #[test]
    fn cooldown_stays_clamped() {
        let mut stats = StatBlock::default();
        let amounts = [30.0, 50.0, -400.0, 0.2, 80.0, 1e9, -1e9, 12.5];
        for (i, amount) in amounts.into_iter().enumerate() {
            stats.apply_stat_upgrade(StatKind::Cooldown, amount, i % 2 == 0);
            assert!(
                (0.0..=0.95).contains(&stats.cooldown_reduction()),
                "reduction {} escaped after step {i}",
                stats.cooldown_reduction()
            );
        }
    }

    #[test]
    fn cooldown_percent_accumulates() {
        let mut stats = StatBlock::default();
        stats.apply_stat_upgrade(StatKind::Cooldown, 8.0, true);
        stats.apply_stat_upgrade(StatKind::Cooldown, 8.0, true);
        assert!((stats.cooldown_reduction() - 0.16).abs() < 1e-6);
    }

    #[test]
    fn integer_stats_round() {
        let mut stats = StatBlock::default();
        stats.apply_stat_upgrade(StatKind::Armor, 1.4, false);
        assert_eq!(stats.armor(), 1);
        stats.apply_stat_upgrade(StatKind::Armor, 1.6, false);
        assert_eq!(stats.armor(), 3);
        stats.apply_stat_upgrade(StatKind::Amount, 1.0, false);
        assert_eq!(stats.flat_amount_bonus(), 1);
    }

    #[test]
    fn change_record() {
        let mut stats = StatBlock::default();
        let change = stats.apply_stat_upgrade(StatKind::Area, 10.0, true);
        assert_eq!(change.previous, 1.0);
        assert!((change.current - 1.1).abs() < 1e-6);
        assert_eq!(change.level, 1);
        assert!(change.affects_weapons());

        let change = stats.apply_stat_upgrade(StatKind::Magnet, 0.5, false);
        assert!(!change.affects_weapons());
        assert_eq!(stats.levels().total(), 2);
    }

    #[test]
    fn getters_follow_every_upgrade() {
        let start = StartingStats {
            cooldown_reduction: 3.0,
            ..StartingStats::default()
        };
        let mut stats = StatBlock::from_starting(&start, &GameConfig::default());
        assert_eq!(stats.cooldown_reduction(), stats.cooldown_cap());

        stats.apply_stat_upgrade(StatKind::Health, 20.0, false);
        stats.apply_stat_upgrade(StatKind::Revival, 1.0, false);
        stats.apply_stat_upgrade(StatKind::Growth, 50.0, true);
        stats.apply_stat_upgrade(StatKind::Cooldown, -500.0, true);

        assert_eq!(stats.health(), stats.get(StatKind::Health));
        assert_eq!(stats.revival_count(), 1);
        assert!((stats.growth_mult() - stats.get(StatKind::Growth)).abs() < 1e-6);
        assert_eq!(stats.cooldown_reduction(), 0.0);
        assert_eq!(stats.level(StatKind::Cooldown), 1);
    }
}
