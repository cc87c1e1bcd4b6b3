//! Tile-adjacency geometry.
//!
//! Every function here is pure and total: it is defined for any integer
//! coordinate, on or off the board. Board membership is answered separately by
//! [`crate::MapDimensions::contains`], and classification treats off-board
//! tiles as holding no object.
pub mod classify;

pub use classify::{
    TileClass, allies_around_corner, classify, empty_surrounding_tiles,
    friendly_surrounding_tiles, is_enemy, is_friendly, is_terrain, is_vacant,
    unsafe_surrounding_tiles, vacant_surrounding_tiles,
};

use core::cmp::Ordering;

use crate::action::CardinalDirection;
use crate::state::Position;

/// Distance formula used when ranking units.
///
/// `Manhattan` matches 4-directional stepping. `Chebyshev` is available for
/// hosts whose movement rules allow diagonal steps.
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum DistanceMetric {
    #[default]
    Manhattan,
    Chebyshev,
}

/// Orthogonal neighbours of `tile`: north, south, west, east.
pub const fn surrounding_tiles(tile: Position) -> [Position; 4] {
    [
        tile.offset(0, 1),
        tile.offset(0, -1),
        tile.offset(-1, 0),
        tile.offset(1, 0),
    ]
}

/// Diagonal neighbours of `tile`: north-east, south-east, north-west, south-west.
pub const fn corner_tiles(tile: Position) -> [Position; 4] {
    [
        tile.offset(1, 1),
        tile.offset(1, -1),
        tile.offset(-1, 1),
        tile.offset(-1, -1),
    ]
}

/// Cardinal heading from `from` toward `to` along the dominant axis.
///
/// Returns `None` when both tiles coincide. On an exact diagonal the heading
/// is the first cardinal direction met when rotating clockwise from the
/// offset: north-east picks east, south-east picks south, south-west picks
/// west and north-west picks north.
pub fn clockwise_direction_towards(from: Position, to: Position) -> Option<CardinalDirection> {
    let dx = i64::from(to.x) - i64::from(from.x);
    let dy = i64::from(to.y) - i64::from(from.y);
    if dx == 0 && dy == 0 {
        return None;
    }

    let horizontal = if dx > 0 {
        CardinalDirection::East
    } else {
        CardinalDirection::West
    };
    let vertical = if dy > 0 {
        CardinalDirection::North
    } else {
        CardinalDirection::South
    };

    Some(match dx.abs().cmp(&dy.abs()) {
        Ordering::Greater => horizontal,
        Ordering::Less => vertical,
        Ordering::Equal => match (dx > 0, dy > 0) {
            (true, true) => CardinalDirection::East,
            (true, false) => CardinalDirection::South,
            (false, false) => CardinalDirection::West,
            (false, true) => CardinalDirection::North,
        },
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn surrounding_order_is_north_south_west_east() {
        let tiles = surrounding_tiles(Position::new(5, 5));
        assert_eq!(
            tiles,
            [
                Position::new(5, 6),
                Position::new(5, 4),
                Position::new(4, 5),
                Position::new(6, 5),
            ]
        );
    }

    #[test]
    fn corners_of_origin_go_off_board() {
        let tiles = corner_tiles(Position::ORIGIN);
        assert!(tiles.contains(&Position::new(-1, -1)));
        assert!(tiles.contains(&Position::new(1, 1)));
    }

    #[test]
    fn heading_follows_dominant_axis() {
        let from = Position::new(2, 8);
        let center = Position::new(9, 9);
        assert_eq!(
            clockwise_direction_towards(from, center),
            Some(CardinalDirection::East)
        );
        assert_eq!(
            clockwise_direction_towards(Position::new(9, 0), center),
            Some(CardinalDirection::North)
        );
        assert_eq!(
            clockwise_direction_towards(Position::new(9, 15), center),
            Some(CardinalDirection::South)
        );
        assert_eq!(
            clockwise_direction_towards(Position::new(18, 10), center),
            Some(CardinalDirection::West)
        );
    }

    #[test]
    fn heading_breaks_diagonal_ties_clockwise() {
        let center = Position::new(9, 9);
        // Offsets seen from the unit: center lies to the NE, SE, SW and NW.
        assert_eq!(
            clockwise_direction_towards(Position::new(6, 6), center),
            Some(CardinalDirection::East)
        );
        assert_eq!(
            clockwise_direction_towards(Position::new(6, 12), center),
            Some(CardinalDirection::South)
        );
        assert_eq!(
            clockwise_direction_towards(Position::new(12, 12), center),
            Some(CardinalDirection::West)
        );
        assert_eq!(
            clockwise_direction_towards(Position::new(12, 6), center),
            Some(CardinalDirection::North)
        );
    }

    #[test]
    fn heading_at_anchor_is_none() {
        let center = Position::new(9, 9);
        assert_eq!(clockwise_direction_towards(center, center), None);
    }

    #[test]
    fn metric_parses_from_env_strings() {
        assert_eq!("chebyshev".parse::<DistanceMetric>(), Ok(DistanceMetric::Chebyshev));
        assert_eq!("MANHATTAN".parse::<DistanceMetric>(), Ok(DistanceMetric::Manhattan));
        assert!("euclid".parse::<DistanceMetric>().is_err());
    }
}
