//! Oracle access errors.

use crate::error::{ErrorSeverity, GameError};
use crate::weapon::WeaponTag;

/// Errors that occur when accessing oracle data.
///
/// Missing oracles are fatal: a run cannot start without weapon content. A
/// missing weapon means the catalog and weapon table disagree.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum OracleError {
    /// WeaponOracle is not available in the environment.
    #[error("WeaponOracle not available")]
    WeaponsNotAvailable,

    /// UnlockOracle is not available in the environment.
    #[error("UnlockOracle not available")]
    UnlocksNotAvailable,

    /// RngOracle is not available in the environment.
    #[error("RngOracle not available")]
    RngNotAvailable,

    /// No base data registered for the weapon.
    #[error("base data for {0} not found")]
    WeaponNotFound(WeaponTag),
}

impl GameError for OracleError {
    fn severity(&self) -> ErrorSeverity {
        use OracleError::*;
        match self {
            WeaponsNotAvailable | UnlocksNotAvailable | RngNotAvailable => ErrorSeverity::Fatal,
            WeaponNotFound(_) => ErrorSeverity::Internal,
        }
    }

    fn error_code(&self) -> &'static str {
        use OracleError::*;
        match self {
            WeaponsNotAvailable => "ORACLE_WEAPONS_NOT_AVAILABLE",
            UnlocksNotAvailable => "ORACLE_UNLOCKS_NOT_AVAILABLE",
            RngNotAvailable => "ORACLE_RNG_NOT_AVAILABLE",
            WeaponNotFound(_) => "ORACLE_WEAPON_NOT_FOUND",
        }
    }
}
