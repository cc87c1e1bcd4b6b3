//! Common error infrastructure for game-core.
//!
//! Shared severity classification and the [`GameError`] trait implemented by
//! every error enum in the workspace. Domain-specific errors live next to the
//! code that raises them (`StateError` here, `RobotError` in the decision core).

/// Severity level of an error, used for categorization and recovery strategies.
///
/// - **Recoverable**: the situation is legal and the caller can fall back
///   (e.g. no enemy left to target)
/// - **Validation**: malformed input that should be rejected
/// - **Internal**: unexpected inconsistency that needs investigation
/// - **Fatal**: the caller broke the contract and the request cannot be served
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum ErrorSeverity {
    /// Recoverable error - a fallback behavior exists.
    ///
    /// Examples: no living enemy, no supporting ally
    Recoverable,

    /// Validation error - invalid input, should not retry without changes.
    ///
    /// Examples: duplicate entity id, two objects on one tile
    Validation,

    /// Internal error - unexpected state inconsistency.
    Internal,

    /// Fatal error - the request itself is invalid.
    ///
    /// Examples: acting unit missing from the snapshot, unit not controlled by us
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

    /// Returns true if this error is potentially recoverable.
    pub const fn is_recoverable(&self) -> bool {
        matches!(self, Self::Recoverable)
    }

    /// Returns true if this error indicates a bug or a broken contract.
    pub const fn is_internal(&self) -> bool {
        matches!(self, Self::Internal | Self::Fatal)
    }
}

/// Common trait for all game errors.
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
    /// Useful for categorization and for matching in tests and JSON output.
    fn error_code(&self) -> &'static str {
        core::any::type_name::<Self>()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn severity_classification() {
        assert!(ErrorSeverity::Recoverable.is_recoverable());
        assert!(!ErrorSeverity::Validation.is_recoverable());
        assert!(ErrorSeverity::Fatal.is_internal());
        assert!(ErrorSeverity::Internal.is_internal());
        assert!(!ErrorSeverity::Validation.is_internal());
        assert_eq!(ErrorSeverity::Fatal.as_str(), "fatal");
    }
}
