//! Common error infrastructure for game-core.
//!
//! Domain-specific errors (e.g., `PickError`, `OracleError`) are defined in
//! their respective modules alongside the operations they guard. This module
//! only provides the shared classification used to decide how callers react.
//!
//! # Design Principles
//!
//! - **Type Safety**: Each operation has its own error type with specific variants
//! - **Severity Classification**: Errors are categorized for recovery strategies
//! - **No Side Effects**: game-core never logs; the runtime decides what to report

/// Severity level of an error, used for categorization and recovery strategies.
///
/// - **Recoverable**: Temporary conditions that may succeed later
/// - **Validation**: Invalid input that should be rejected without retry
/// - **Internal**: Unexpected state inconsistencies that require investigation
/// - **Fatal**: Unrecoverable errors, the run cannot continue
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ErrorSeverity {
    /// Recoverable error - can retry with same or alternative input.
    ///
    /// Examples: a run operation called before `start_run`
    Recoverable,

    /// Validation error - invalid input, should not retry without changes.
    ///
    /// Examples: stale upgrade id from a double click, pick on a maxed track
    Validation,

    /// Internal error - unexpected state inconsistency.
    ///
    /// These indicate bugs and should be investigated.
    Internal,

    /// Fatal error - required data is missing, cannot continue.
    ///
    /// Examples: missing oracle, invalid configuration
    Fatal,
}

impl ErrorSeverity {
    /// Returns a human-readable description of this severity level.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Recoverable => "recoverable",
            Self::Validation => "validation",
            Self::Internal => "internal",
            Self::Fatal => "fatal",
        }
    }

    /// Returns true if the caller should treat this as a warning plus no-op.
    pub const fn is_validation(&self) -> bool {
        matches!(self, Self::Validation)
    }

    /// Returns true if this error indicates an internal bug.
    pub const fn is_internal(&self) -> bool {
        matches!(self, Self::Internal | Self::Fatal)
    }
}

/// Common trait for all game-core errors.
///
/// # Implementation Guidelines
///
/// - All error enums should implement this trait
/// - Use `#[derive(thiserror::Error)]` for Display/Error impl
/// - Classify severity based on recoverability, not impact
pub trait GameError: core::fmt::Display + core::fmt::Debug {
    /// Returns the severity level of this error.
    fn severity(&self) -> ErrorSeverity;

    /// Returns a static string identifier for this error variant.
    ///
    /// Useful for error categorization, log filtering, and testing.
    /// Default implementation uses the error type name.
    fn error_code(&self) -> &'static str {
        core::any::type_name::<Self>()
    }
}
