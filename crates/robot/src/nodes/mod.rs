//! Leaf nodes of the policy tree.
//!
//! Conditions only read the [`crate::RobotContext`]; actions record the
//! decision and succeed, or fail when their move is not possible this turn.

pub mod actions;
pub mod conditions;

pub use actions::{AttackTarget, Goal, HoldPosition, StepToward};
pub use conditions::{HasAlly, HasHeading, HasTarget, IsInDanger, IsTargetAdjacent};
