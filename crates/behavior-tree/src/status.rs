//! Status returned by behavior nodes.

/// The result of evaluating a behavior node.
///
/// Every node resolves within a single tick:
/// - Conditions evaluate immediately (e.g., "Is the target adjacent?")
/// - Actions record a decision (e.g., "Attack north")
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Status {
    /// For conditions: the condition was met.
    /// For actions: the action was chosen.
    Success,

    /// For conditions: the condition was not met.
    /// For actions: the action is not possible this turn (e.g., blocked step).
    Failure,
}

impl Status {
    #[inline]
    pub fn is_success(self) -> bool {
        matches!(self, Status::Success)
    }

    #[inline]
    pub fn is_failure(self) -> bool {
        matches!(self, Status::Failure)
    }

    /// Inverts the status: Success becomes Failure and vice versa.
    #[inline]
    pub fn invert(self) -> Self {
        match self {
            Status::Success => Status::Failure,
            Status::Failure => Status::Success,
        }
    }

    /// Maps a boolean condition onto a status.
    #[inline]
    pub fn from_bool(condition: bool) -> Self {
        if condition {
            Status::Success
        } else {
            Status::Failure
        }
    }
}
