//! Base → Bonuses → Final computation pattern.

use crate::config::GameConfig;

/// Trait for stat layers that follow the Base -> Bonuses -> Final pattern.
///
/// 1. **Base**: Raw or upgraded base values
/// 2. **Bonuses**: Multipliers and offsets from another source (the player)
/// 3. **Final**: Base values with bonuses applied
///
/// Implementations must be pure: the same inputs always produce bit-identical
/// outputs, so callers may recompute as often as they like.
///
/// # Layer Architecture
///
/// ```text
/// WeaponBase + StatBlock -> WeaponStats
/// ```
///
/// # Example
///
/// ```
/// # use game_core::stats::{StatBlock, StatLayer};
/// # use game_core::weapon::{BaseWeaponData, WeaponBase, WeaponStats};
/// # use game_core::GameConfig;
/// let data = BaseWeaponData::new("Magic Wand").with_damage(10.0).with_cooldown(1.2);
/// let base = WeaponBase::from_data(&data);
/// let stats = WeaponStats::from_base(&base, &GameConfig::default());
/// assert_eq!(stats.damage, 10.0);
/// ```
pub trait StatLayer {
    /// The base/input type for this layer
    type Base;

    /// The bonuses type for this layer
    type Bonuses: Default;

    /// The final/output type for this layer
    type Final;

    /// Compute the final values from base and bonuses.
    fn compute(base: &Self::Base, bonuses: &Self::Bonuses, config: &GameConfig) -> Self::Final;

    /// Compute with neutral bonuses (convenience method)
    fn from_base(base: &Self::Base, config: &GameConfig) -> Self::Final {
        Self::compute(base, &Self::Bonuses::default(), config)
    }
}
