//! Errors surfaced by the decision core.
use game_core::{EntityId, ErrorSeverity, GameError, Team};
use thiserror::Error;

pub type Result<T> = std::result::Result<T, RobotError>;

#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum RobotError {
    /// Every opposing unit has been eliminated.
    #[error("no living enemy left to target for unit {unit}")]
    NoValidTarget { unit: EntityId },

    /// The acting unit is the last living member of its team.
    #[error("unit {unit} has no living ally")]
    NoValidAlly { unit: EntityId },

    #[error("unit {unit} is not present in the snapshot")]
    UnitNotFound { unit: EntityId },

    /// The object exists but is terrain, dead, or fights for the other side.
    #[error("unit {unit} is not a living unit of team {team}")]
    NotControlled { unit: EntityId, team: Team },
}

impl GameError for RobotError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            Self::NoValidTarget { .. } | Self::NoValidAlly { .. } => ErrorSeverity::Recoverable,
            Self::UnitNotFound { .. } | Self::NotControlled { .. } => ErrorSeverity::Fatal,
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::NoValidTarget { .. } => "ROBOT_NO_VALID_TARGET",
            Self::NoValidAlly { .. } => "ROBOT_NO_VALID_ALLY",
            Self::UnitNotFound { .. } => "ROBOT_UNIT_NOT_FOUND",
            Self::NotControlled { .. } => "ROBOT_NOT_CONTROLLED",
        }
    }
}
