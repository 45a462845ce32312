/// Game configuration constants and tunable parameters.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct GameConfig {
    /// Number of upgrades presented at each level-up.
    pub offer_count: usize,

    /// Upper bound for the player's accumulated cooldown reduction.
    /// Keeps effective cooldowns strictly positive.
    pub cooldown_reduction_cap: f32,

    /// Floor for resolved weapon cooldowns and projectile intervals (seconds).
    pub min_timer: f32,

    /// Critical chance granted per point of luck.
    pub luck_crit_factor: f32,
}

impl GameConfig {
    // ===== runtime-tunable defaults =====
    pub const DEFAULT_OFFER_COUNT: usize = 3;
    pub const DEFAULT_COOLDOWN_REDUCTION_CAP: f32 = 0.95;
    pub const DEFAULT_MIN_TIMER: f32 = 0.05;
    pub const DEFAULT_LUCK_CRIT_FACTOR: f32 = 0.01;

    pub fn new() -> Self {
        Self {
            offer_count: Self::DEFAULT_OFFER_COUNT,
            cooldown_reduction_cap: Self::DEFAULT_COOLDOWN_REDUCTION_CAP,
            min_timer: Self::DEFAULT_MIN_TIMER,
            luck_crit_factor: Self::DEFAULT_LUCK_CRIT_FACTOR,
        }
    }

    pub fn with_offer_count(offer_count: usize) -> Self {
        Self {
            offer_count,
            ..Self::new()
        }
    }

    /// Checks that every tunable is finite and inside its meaningful range.
    ///
    /// # Errors
    ///
    /// Returns the first [`ConfigError`] encountered.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.offer_count == 0 {
            return Err(ConfigError::ZeroOfferCount);
        }
        if !self.cooldown_reduction_cap.is_finite()
            || !(0.0..1.0).contains(&self.cooldown_reduction_cap)
        {
            return Err(ConfigError::CooldownCapOutOfRange(
                self.cooldown_reduction_cap,
            ));
        }
        if !self.min_timer.is_finite() || self.min_timer <= 0.0 {
            return Err(ConfigError::NonPositiveMinTimer(self.min_timer));
        }
        if !self.luck_crit_factor.is_finite() {
            return Err(ConfigError::NonFiniteLuckFactor);
        }
        Ok(())
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Invalid [`GameConfig`] values detected at load time.
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum ConfigError {
    #[error("offer_count must be at least 1")]
    ZeroOfferCount,

    #[error("cooldown_reduction_cap {0} must lie in [0, 1)")]
    CooldownCapOutOfRange(f32),

    #[error("min_timer {0} must be positive")]
    NonPositiveMinTimer(f32),

    #[error("luck_crit_factor must be finite")]
    NonFiniteLuckFactor,
}

impl crate::error::GameError for ConfigError {
    fn severity(&self) -> crate::error::ErrorSeverity {
        crate::error::ErrorSeverity::Fatal
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::ZeroOfferCount => "CONFIG_ZERO_OFFER_COUNT",
            Self::CooldownCapOutOfRange(_) => "CONFIG_COOLDOWN_CAP_OUT_OF_RANGE",
            Self::NonPositiveMinTimer(_) => "CONFIG_NON_POSITIVE_MIN_TIMER",
            Self::NonFiniteLuckFactor => "CONFIG_NON_FINITE_LUCK_FACTOR",
        }
    }
}
