//! Per-unit decision core for the two-team grid skirmish.
//!
//! For one controlled unit and one snapshot the core:
//!
//! 1. picks the enemy to focus ([`closest_enemy`])
//! 2. picks the teammate to fall back on ([`closest_ally`])
//! 3. derives a heading toward the rally anchor ([`direction_to_center`])
//! 4. runs a behavior tree over those selections to choose an [`Action`]
//!
//! Evaluation is synchronous and stateless: nothing is remembered between
//! calls and the snapshot is only ever borrowed.
//!
//! # Core Components
//!
//! - [`RobotProvider`]: policy-tree provider implementing [`ActionProvider`]
//! - [`RobotContext`]: blackboard the tree reads from and decides into
//! - [`RobotConfig`]: anchor, danger threshold and board rules

pub mod config;
pub mod context;
pub mod error;
pub mod navigation;
pub mod nodes;
pub mod provider;
pub mod subtrees;
pub mod targeting;

pub use config::RobotConfig;
pub use context::RobotContext;
pub use error::{Result, RobotError};
pub use game_core::Action;
pub use navigation::{direction_to_center, step_toward};
pub use provider::{
    ActionProvider, Decision, HoldProvider, RobotProvider, Tactic, TurnOutput, run_turn_with,
};
pub use targeting::{TargetKey, closest_ally, closest_enemy};
