//! Condition nodes for the policy tree.

use behavior_tree::{Behavior, Status};
use game_core::{GameState, Position, surrounding_tiles};

use crate::context::RobotContext;

/// An enemy is left to fight.
pub struct HasTarget;

impl Behavior<RobotContext<'_>> for HasTarget {
    fn tick(&self, ctx: &mut RobotContext) -> Status {
        Status::from_bool(ctx.target.is_some())
    }
}

/// The target shares an edge with the unit and can be struck this turn.
pub struct IsTargetAdjacent;

impl Behavior<RobotContext<'_>> for IsTargetAdjacent {
    fn tick(&self, ctx: &mut RobotContext) -> Status {
        let adjacent = ctx
            .target
            .is_some_and(|target| ctx.unit.position.is_orthogonally_adjacent(target.position));
        Status::from_bool(adjacent)
    }
}

/// At least `danger_threshold` living enemies stand next to the unit.
pub struct IsInDanger;

impl Behavior<RobotContext<'_>> for IsInDanger {
    fn tick(&self, ctx: &mut RobotContext) -> Status {
        let threat = living_threats(ctx.position(), ctx.state);
        Status::from_bool(threat >= ctx.config.danger_threshold)
    }
}

/// Orthogonal neighbours holding an enemy that can still strike.
///
/// Unlike `unsafe_surrounding_tiles`, a corpse left on the board is no threat.
fn living_threats(tile: Position, state: &GameState) -> u32 {
    let enemy = state.other_team();
    surrounding_tiles(tile)
        .into_iter()
        .filter(|&neighbour| {
            state
                .obj_by_coords(neighbour)
                .is_some_and(|object| object.is_alive_on(enemy))
        })
        .count() as u32
}

/// Another living teammate exists.
pub struct HasAlly;

impl Behavior<RobotContext<'_>> for HasAlly {
    fn tick(&self, ctx: &mut RobotContext) -> Status {
        Status::from_bool(ctx.ally.is_some())
    }
}

/// The unit is not yet standing on the rally anchor.
pub struct HasHeading;

impl Behavior<RobotContext<'_>> for HasHeading {
    fn tick(&self, ctx: &mut RobotContext) -> Status {
        Status::from_bool(ctx.heading.is_some())
    }
}
