//! Pick errors.

use super::definition::UpgradeId;
use crate::error::{ErrorSeverity, GameError};

/// Reasons a pick is rejected without touching run state.
///
/// Both come from stale UI input (a delayed double click, a button for a
/// track that maxed since the offer). Callers log and ignore them.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PickError {
    #[error("{0} is not in the catalog")]
    UnknownUpgrade(UpgradeId),

    #[error("{id} is already at max level {level}")]
    AlreadyMaxed { id: UpgradeId, level: u32 },
}

impl GameError for PickError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Validation
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::UnknownUpgrade(_) => "PICK_UNKNOWN_UPGRADE",
            Self::AlreadyMaxed { .. } => "PICK_ALREADY_MAXED",
        }
    }
}
