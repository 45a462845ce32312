//! Upgraded base values owned by one weapon instance.

use super::data::BaseWeaponData;
use super::effect::{WeaponEffect, WeaponStatKind};

/// A weapon instance's base stats after weapon-specific upgrades.
///
/// Seeded from [`BaseWeaponData`] when the weapon is unlocked and mutated in
/// place by weapon upgrade picks. Player stats never touch these values; they
/// are layered on top by the resolver. Only a full run reset discards them.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WeaponBase {
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
    /// Extra projectiles granted by weapon upgrades ("fires 1 more").
    pub amount_bonus: i32,
}

impl WeaponBase {
    pub fn from_data(data: &BaseWeaponData) -> Self {
        Self {
            damage: data.damage,
            speed: data.speed,
            area: data.area,
            cooldown: data.cooldown,
            duration: data.duration,
            proj_interval: data.proj_interval,
            knockback: data.knockback,
            crit_chance: data.crit_chance,
            crit_multi: data.crit_multi,
            hit_delay: data.hit_delay,
            amount: data.amount,
            pierce: data.pierce,
            limit: data.limit,
            wall_block: data.wall_block,
            amount_bonus: 0,
        }
    }

    /// Applies one weapon effect in place.
    ///
    /// Timers (`Cooldown`, `ProjInterval`) shrink and never drop below zero;
    /// `Amount` and `Pierce` round to whole numbers.
    pub fn apply_effect(&mut self, effect: &WeaponEffect) {
        let change = effect.effect();
        match effect.stat {
            WeaponStatKind::Damage => self.damage = change.apply(self.damage),
            WeaponStatKind::Speed => self.speed = change.apply(self.speed),
            WeaponStatKind::Area => self.area = change.apply(self.area),
            WeaponStatKind::Duration => self.duration = change.apply(self.duration),
            WeaponStatKind::Knockback => self.knockback = change.apply(self.knockback),
            WeaponStatKind::Cooldown => self.cooldown = change.reduce(self.cooldown).max(0.0),
            WeaponStatKind::ProjInterval => {
                self.proj_interval = change.reduce(self.proj_interval).max(0.0)
            }
            WeaponStatKind::Pierce => {
                self.pierce = change.apply(self.pierce as f32).round() as i32
            }
            WeaponStatKind::Amount => {
                // Percentages scale the weapon's own projectile count.
                let bonus = if effect.percentage {
                    (self.amount as f32 * effect.amount / 100.0).round() as i32
                } else {
                    effect.amount.round() as i32
                };
                self.amount_bonus += bonus;
            }
        }
    }

    /// Applies a whole upgrade level atomically.
    pub fn apply_level(&mut self, effects: &[WeaponEffect]) {
        for effect in effects {
            self.apply_effect(effect);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn wand() -> WeaponBase {
        WeaponBase::from_data(
            &BaseWeaponData::new("Magic Wand")
                .with_damage(10.0)
                .with_cooldown(8.0)
                .with_amount(1),
        )
    }

    #[test]
    fn percent_cooldown_reduces() {
        let mut base = wand();
        base.apply_effect(&WeaponEffect::percent(WeaponStatKind::Cooldown, 20.0));
        assert!((base.cooldown - 6.4).abs() < 1e-6);
    }

    #[test]
    fn flat_cooldown_never_negative() {
        let mut base = wand();
        base.apply_effect(&WeaponEffect::flat(WeaponStatKind::Cooldown, 20.0));
        assert_eq!(base.cooldown, 0.0);
    }

    #[test]
    fn amount_goes_to_bonus() {
        let mut base = wand();
        base.apply_level(&[
            WeaponEffect::flat(WeaponStatKind::Amount, 1.0),
            WeaponEffect::flat(WeaponStatKind::Damage, 5.0),
        ]);
        assert_eq!(base.amount, 1);
        assert_eq!(base.amount_bonus, 1);
        assert_eq!(base.damage, 15.0);
    }

    #[test]
    fn pierce_rounds() {
        let mut base = wand();
        base.apply_effect(&WeaponEffect::flat(WeaponStatKind::Pierce, 1.0));
        assert_eq!(base.pierce, 2);
    }
}
