//! Snapshot construction errors.
//!
//! Raised while the host assembles a [`crate::GameState`]; once built, a
//! snapshot is only queried and cannot fail.

use crate::error::{ErrorSeverity, GameError};
use crate::state::{EntityId, Position};

/// Errors that occur while building a game state snapshot.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum StateError {
    /// Another object already uses this identifier.
    #[error("entity {id} is already present in the snapshot")]
    DuplicateId {
        /// The repeated identifier.
        id: EntityId,
    },

    /// Position is already occupied by another object.
    #[error("position {position} is already occupied by entity {occupant}")]
    PositionOccupied {
        /// The contested position.
        position: Position,
        /// The object already standing there.
        occupant: EntityId,
    },
}

impl GameError for StateError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            StateError::DuplicateId { .. } | StateError::PositionOccupied { .. } => {
                ErrorSeverity::Validation
            }
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            StateError::DuplicateId { .. } => "STATE_DUPLICATE_ID",
            StateError::PositionOccupied { .. } => "STATE_POSITION_OCCUPIED",
        }
    }
}
