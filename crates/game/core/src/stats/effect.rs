//! Shared upgrade arithmetic.
//!
//! Passive and weapon upgrades describe their change the same way: an amount
//! and a flag saying whether it is a percentage. Percentages compound on the
//! current value, flat amounts add to it.

/// One stat change carried by an upgrade level.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StatEffect {
    pub amount: f32,
    pub percentage: bool,
}

impl StatEffect {
    pub const fn flat(amount: f32) -> Self {
        Self {
            amount,
            percentage: false,
        }
    }

    pub const fn percent(amount: f32) -> Self {
        Self {
            amount,
            percentage: true,
        }
    }

    /// Grows `value`: `value * (1 + amount/100)` or `value + amount`.
    #[inline]
    pub fn apply(self, value: f32) -> f32 {
        if self.percentage {
            value * (1.0 + self.amount / 100.0)
        } else {
            value + self.amount
        }
    }

    /// Shrinks `value`: `value * (1 - amount/100)` or `value - amount`.
    ///
    /// Used for timers where an upgrade means "shorter".
    #[inline]
    pub fn reduce(self, value: f32) -> f32 {
        if self.percentage {
            value * (1.0 - self.amount / 100.0)
        } else {
            value - self.amount
        }
    }

    /// The amount expressed as a fraction (`20%` → `0.2`, flat `0.05` → `0.05`).
    #[inline]
    pub fn as_fraction(self) -> f32 {
        if self.percentage {
            self.amount / 100.0
        } else {
            self.amount
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn percent_compounds() {
        let effect = StatEffect::percent(10.0);
        let value = effect.apply(effect.apply(1.0));
        assert!((value - 1.21).abs() < 1e-6);
    }

    #[test]
    fn reduce_shortens_timers() {
        assert!((StatEffect::percent(20.0).reduce(8.0) - 6.4).abs() < 1e-6);
        assert_eq!(StatEffect::flat(0.5).reduce(2.0), 1.5);
    }

    #[test]
    fn fraction() {
        assert_eq!(StatEffect::percent(5.0).as_fraction(), 0.05);
        assert_eq!(StatEffect::flat(0.08).as_fraction(), 0.08);
    }
}
