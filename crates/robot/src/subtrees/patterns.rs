//! Basic if-then patterns.
//!
//! Patterns follow the `action_when_condition()` convention where a
//! condition is involved.

use behavior_tree::builder::{inverter, leaf, sequence};

use crate::nodes::{
    AttackTarget, Goal, HasAlly, HasHeading, HasTarget, HoldPosition, IsInDanger,
    IsTargetAdjacent, StepToward,
};
use crate::provider::Tactic;

use super::BehaviorTree;

/// Attack the target when it shares an edge with the unit.
pub fn engage_when_adjacent<'a>() -> BehaviorTree<'a> {
    sequence(vec![
        leaf(HasTarget),
        leaf(IsTargetAdjacent),
        leaf(AttackTarget),
    ])
}

/// Fall back toward the closest ally when too many enemies are adjacent.
pub fn retreat_when_in_danger<'a>() -> BehaviorTree<'a> {
    sequence(vec![
        leaf(IsInDanger),
        leaf(HasAlly),
        leaf(StepToward::new(Goal::Ally, Tactic::Retreat)),
    ])
}

/// Close the distance to a target that is not yet in reach.
pub fn advance_on_target<'a>() -> BehaviorTree<'a> {
    sequence(vec![
        leaf(HasTarget),
        inverter(leaf(IsTargetAdjacent)),
        leaf(StepToward::new(Goal::Target, Tactic::Advance)),
    ])
}

/// Drift toward the rally anchor.
pub fn rally_to_anchor<'a>() -> BehaviorTree<'a> {
    sequence(vec![
        leaf(HasHeading),
        leaf(StepToward::new(Goal::Anchor, Tactic::Rally)),
    ])
}

pub fn hold_position<'a>() -> BehaviorTree<'a> {
    leaf(HoldPosition)
}
