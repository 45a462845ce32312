//! Unified error types surfaced by the runtime API.
//!
//! Wraps failures from content loading, configuration and oracle access so
//! clients can bubble them up with consistent context. Validation-severity
//! pick failures never reach the caller; they are logged and ignored.
use thiserror::Error;

use game_core::{ConfigError, ErrorSeverity, GameError, OracleError, PickError};

pub type Result<T> = std::result::Result<T, RuntimeError>;

#[derive(Debug, Error)]
pub enum RuntimeError {
    #[error("run context requires oracles to be configured before building")]
    MissingOracles,

    #[error("run context requires an upgrade catalog before building")]
    MissingCatalog,

    #[error("no run in progress")]
    NoActiveRun,

    #[error("unknown character '{0}'")]
    UnknownCharacter(String),

    #[error(transparent)]
    Oracle(#[from] OracleError),

    #[error(transparent)]
    Pick(#[from] PickError),

    #[error("invalid game configuration")]
    Config(#[from] ConfigError),

    #[error("failed to load content")]
    Content(#[source] anyhow::Error),
}

impl GameError for RuntimeError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            Self::MissingOracles | Self::MissingCatalog | Self::Content(_) => ErrorSeverity::Fatal,
            Self::NoActiveRun => ErrorSeverity::Recoverable,
            Self::UnknownCharacter(_) => ErrorSeverity::Validation,
            Self::Oracle(err) => err.severity(),
            Self::Pick(err) => err.severity(),
            Self::Config(err) => err.severity(),
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::MissingOracles => "RUNTIME_MISSING_ORACLES",
            Self::MissingCatalog => "RUNTIME_MISSING_CATALOG",
            Self::NoActiveRun => "RUNTIME_NO_ACTIVE_RUN",
            Self::UnknownCharacter(_) => "RUNTIME_UNKNOWN_CHARACTER",
            Self::Oracle(err) => err.error_code(),
            Self::Pick(err) => err.error_code(),
            Self::Config(err) => err.error_code(),
            Self::Content(_) => "RUNTIME_CONTENT",
        }
    }
}
