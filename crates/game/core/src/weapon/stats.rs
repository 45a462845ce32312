//! Effective weapon stats: upgraded base values with player stats layered on.

use super::base::WeaponBase;
use super::instance::WeaponInstance;
use crate::config::GameConfig;
use crate::stats::{StatBlock, StatLayer};

/// Stats a weapon actually fires with. Never stored as authoritative state;
/// always rebuilt from a [`WeaponBase`] and the current [`StatBlock`].
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WeaponStats {
    pub damage: f32,
    pub speed: f32,
    pub area: f32,
    pub cooldown: f32,
    pub duration: f32,
    pub proj_interval: f32,
    pub knockback: f32,
    pub crit_chance: f32,
    pub crit_multi: f32,
    pub hit_delay: f32,
    pub amount: i32,
    pub pierce: i32,
    pub limit: i32,
    pub wall_block: bool,
}

impl StatLayer for WeaponStats {
    type Base = WeaponBase;
    type Bonuses = StatBlock;
    type Final = WeaponStats;

    fn compute(base: &WeaponBase, player: &StatBlock, config: &GameConfig) -> WeaponStats {
        let speedup = 1.0 - player.cooldown_reduction();
        WeaponStats {
            damage: base.damage * player.damage_mult(),
            area: base.area * player.area(),
            cooldown: (base.cooldown * speedup).max(config.min_timer),
            proj_interval: (base.proj_interval * speedup).max(config.min_timer),
            speed: base.speed * player.projectile_speed(),
            duration: base.duration * player.duration(),
            crit_chance: base.crit_chance + player.luck() * config.luck_crit_factor,
            knockback: base.knockback,
            amount: base.amount + base.amount_bonus + player.flat_amount_bonus(),
            pierce: base.pierce,
            crit_multi: base.crit_multi,
            hit_delay: base.hit_delay,
            limit: base.limit,
            wall_block: base.wall_block,
        }
    }
}

/// Recomputes effective weapon stats.
///
/// Pure: reads the instance's upgraded base and the player block, writes
/// nothing. Calling it twice with the same inputs gives identical results.
pub struct WeaponStatResolver;

impl WeaponStatResolver {
    pub fn recompute(weapon: &WeaponInstance, player: &StatBlock, config: &GameConfig) -> WeaponStats {
        WeaponStats::compute(&weapon.base, player, config)
    }

    /// Recomputes straight from a base, for previews.
    pub fn resolve(base: &WeaponBase, player: &StatBlock, config: &GameConfig) -> WeaponStats {
        WeaponStats::compute(base, player, config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stats::StatKind;
    use crate::weapon::{BaseWeaponData, WeaponEffect, WeaponStatKind};

    fn wand() -> WeaponBase {
        WeaponBase::from_data(
            &BaseWeaponData::new("Magic Wand")
                .with_damage(10.0)
                .with_cooldown(1.2)
                .with_amount(1),
        )
    }

    #[test]
    fn player_damage_multiplies() {
        let config = GameConfig::default();
        let mut player = StatBlock::default();
        player.apply_stat_upgrade(StatKind::Damage, 10.0, true);
        let stats = WeaponStatResolver::resolve(&wand(), &player, &config);
        assert!((stats.damage - 11.0).abs() < 1e-5);
    }

    #[test]
    fn cooldown_floors_at_min_timer() {
        let config = GameConfig::default();
        let mut base = wand();
        base.apply_effect(&WeaponEffect::flat(WeaponStatKind::Cooldown, 1.19));
        let mut player = StatBlock::default();
        player.apply_stat_upgrade(StatKind::Cooldown, 95.0, true);
        let stats = WeaponStatResolver::resolve(&base, &player, &config);
        assert_eq!(stats.cooldown, config.min_timer);
        assert!(stats.proj_interval >= config.min_timer);
    }

    #[test]
    fn amount_sums_three_sources() {
        let config = GameConfig::default();
        let mut base = wand();
        base.apply_effect(&WeaponEffect::flat(WeaponStatKind::Amount, 1.0));
        let mut player = StatBlock::default();
        player.apply_stat_upgrade(StatKind::Amount, 1.0, false);
        let stats = WeaponStatResolver::resolve(&base, &player, &config);
        assert_eq!(stats.amount, 3);
    }

    #[test]
    fn luck_adds_crit_chance() {
        let config = GameConfig::default();
        let mut player = StatBlock::default();
        player.apply_stat_upgrade(StatKind::Luck, 10.0, false);
        let stats = WeaponStatResolver::resolve(&wand(), &player, &config);
        assert!((stats.crit_chance - 0.1).abs() < 1e-6);
    }

    #[test]
    fn resolve_is_pure() {
        let config = GameConfig::default();
        let mut player = StatBlock::default();
        player.apply_stat_upgrade(StatKind::Area, 25.0, true);
        let base = wand();
        let first = WeaponStatResolver::resolve(&base, &player, &config);
        let second = WeaponStatResolver::resolve(&base, &player, &config);
        assert_eq!(first, second);
        assert_eq!(base, wand());
    }
}
