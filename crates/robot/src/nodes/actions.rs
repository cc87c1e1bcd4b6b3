//! Action nodes for the policy tree.

use behavior_tree::{Behavior, Status};
use game_core::{Action, Position, clockwise_direction_towards};

use crate::context::RobotContext;
use crate::navigation::step_toward;
use crate::provider::Tactic;

/// Strikes the target. Fails unless the target is orthogonally adjacent.
pub struct AttackTarget;

impl Behavior<RobotContext<'_>> for AttackTarget {
    fn tick(&self, ctx: &mut RobotContext) -> Status {
        let Some(target) = ctx.target else {
            return Status::Failure;
        };
        if !ctx.unit.position.is_orthogonally_adjacent(target.position) {
            return Status::Failure;
        }

        match clockwise_direction_towards(ctx.position(), target.position) {
            Some(direction) => {
                tracing::debug!("unit {} attacks {} to the {}", ctx.unit.id, target.id, direction);
                ctx.decide(Tactic::Engage, Some(Action::Attack(direction)));
                Status::Success
            }
            None => Status::Failure,
        }
    }
}

/// Tile a [`StepToward`] node walks to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Goal {
    Target,
    Ally,
    Anchor,
}

impl Goal {
    fn resolve(self, ctx: &RobotContext) -> Option<Position> {
        match self {
            Goal::Target => ctx.target.map(|target| target.position),
            Goal::Ally => ctx.ally.map(|ally| ally.position),
            Goal::Anchor => ctx.heading.map(|_| ctx.config.anchor),
        }
    }
}

/// Moves one tile closer to a goal, sidestepping along the other axis when
/// the direct tile is taken. Fails when the goal is unknown or both tiles are
/// blocked or off the board.
pub struct StepToward {
    pub goal: Goal,
    /// Tactic reported when the step is taken.
    pub tactic: Tactic,
}

impl StepToward {
    pub const fn new(goal: Goal, tactic: Tactic) -> Self {
        Self { goal, tactic }
    }
}

impl Behavior<RobotContext<'_>> for StepToward {
    fn tick(&self, ctx: &mut RobotContext) -> Status {
        let Some(goal) = self.goal.resolve(ctx) else {
            return Status::Failure;
        };

        let dimensions = ctx.config.game.dimensions;
        match step_toward(ctx.state, dimensions, ctx.position(), goal) {
            Some(direction) => {
                tracing::debug!(
                    "unit {} steps {} toward {:?} at {}",
                    ctx.unit.id,
                    direction,
                    self.goal,
                    goal
                );
                ctx.decide(self.tactic, Some(Action::Move(direction)));
                Status::Success
            }
            None => Status::Failure,
        }
    }
}

/// Stays in place. Always succeeds, so it terminates any priority list.
pub struct HoldPosition;

impl Behavior<RobotContext<'_>> for HoldPosition {
    fn tick(&self, ctx: &mut RobotContext) -> Status {
        tracing::debug!("unit {} holds at {}", ctx.unit.id, ctx.position());
        ctx.decide(Tactic::Hold, None);
        Status::Success
    }
}
