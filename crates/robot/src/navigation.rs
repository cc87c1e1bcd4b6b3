//! Single-step movement toward a goal tile.
//!
//! There is no pathfinding: a unit only ever looks one tile ahead.

use game_core::grid::is_vacant;
use game_core::{
    CardinalDirection, GameObject, GameState, MapDimensions, Position, clockwise_direction_towards,
};

/// Heading from `unit` toward the rally `anchor`, `None` once standing on it.
pub fn direction_to_center(unit: &GameObject, anchor: Position) -> Option<CardinalDirection> {
    clockwise_direction_towards(unit.position, anchor)
}

/// True when a unit could step onto `tile` this turn.
pub fn is_walkable(state: &GameState, dimensions: MapDimensions, tile: Position) -> bool {
    dimensions.contains(tile) && is_vacant(tile, state)
}

/// Directions worth trying to close in on `goal`, best first.
///
/// The heading comes first, followed by the direction along the other axis
/// of the offset when that axis is not already aligned.
pub fn approach_directions(from: Position, goal: Position) -> Vec<CardinalDirection> {
    let Some(primary) = clockwise_direction_towards(from, goal) else {
        return Vec::new();
    };

    let dx = goal.x.cmp(&from.x);
    let dy = goal.y.cmp(&from.y);
    let secondary = match primary {
        CardinalDirection::East | CardinalDirection::West => match dy {
            std::cmp::Ordering::Greater => Some(CardinalDirection::North),
            std::cmp::Ordering::Less => Some(CardinalDirection::South),
            std::cmp::Ordering::Equal => None,
        },
        CardinalDirection::North | CardinalDirection::South => match dx {
            std::cmp::Ordering::Greater => Some(CardinalDirection::East),
            std::cmp::Ordering::Less => Some(CardinalDirection::West),
            std::cmp::Ordering::Equal => None,
        },
    };

    std::iter::once(primary).chain(secondary).collect()
}

/// First walkable direction that brings `from` closer to `goal`.
pub fn step_toward(
    state: &GameState,
    dimensions: MapDimensions,
    from: Position,
    goal: Position,
) -> Option<CardinalDirection> {
    approach_directions(from, goal)
        .into_iter()
        .find(|direction| is_walkable(state, dimensions, direction.step_from(from)))
}
