//! Tile classifier and neighbourhood scores.
//!
//! "Friendly" and "enemy" are always relative to [`GameState::our_team`], not
//! to any particular unit. Every count is bounded by the four tiles it looks at.
use super::{corner_tiles, surrounding_tiles};
use crate::state::{GameState, ObjDetails, Position};

/// What a single tile holds from our team's point of view.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::AsRefStr)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
#[strum(serialize_all = "snake_case")]
pub enum TileClass {
    /// No object, including every off-board tile.
    Empty,
    Friendly,
    Enemy,
    Terrain,
}

/// Classifies `tile` for the team evaluating `state`.
pub fn classify(tile: Position, state: &GameState) -> TileClass {
    match state.obj_by_coords(tile).map(|object| object.details) {
        None => TileClass::Empty,
        Some(ObjDetails::Terrain) => TileClass::Terrain,
        Some(ObjDetails::Unit(unit)) if unit.team == state.our_team() => TileClass::Friendly,
        Some(ObjDetails::Unit(_)) => TileClass::Enemy,
    }
}

pub fn is_friendly(tile: Position, state: &GameState) -> bool {
    classify(tile, state) == TileClass::Friendly
}

pub fn is_enemy(tile: Position, state: &GameState) -> bool {
    classify(tile, state) == TileClass::Enemy
}

pub fn is_terrain(tile: Position, state: &GameState) -> bool {
    classify(tile, state) == TileClass::Terrain
}

/// True when nothing at all stands on `tile`.
pub fn is_vacant(tile: Position, state: &GameState) -> bool {
    classify(tile, state) == TileClass::Empty
}

fn count_matching(tiles: [Position; 4], state: &GameState, class: TileClass) -> u32 {
    tiles
        .into_iter()
        .filter(|&tile| classify(tile, state) == class)
        .count() as u32
}

/// Enemy-occupied orthogonal neighbours: the danger of standing on `tile`.
pub fn unsafe_surrounding_tiles(tile: Position, state: &GameState) -> u32 {
    count_matching(surrounding_tiles(tile), state, TileClass::Enemy)
}

/// Friendly-occupied orthogonal neighbours.
pub fn friendly_surrounding_tiles(tile: Position, state: &GameState) -> u32 {
    count_matching(surrounding_tiles(tile), state, TileClass::Friendly)
}

/// Terrain-occupied orthogonal neighbours.
///
/// Despite the name this counts terrain, not vacancy. Use
/// [`vacant_surrounding_tiles`] for neighbours that hold no object.
pub fn empty_surrounding_tiles(tile: Position, state: &GameState) -> u32 {
    count_matching(surrounding_tiles(tile), state, TileClass::Terrain)
}

/// Orthogonal neighbours with no object on them.
pub fn vacant_surrounding_tiles(tile: Position, state: &GameState) -> u32 {
    count_matching(surrounding_tiles(tile), state, TileClass::Empty)
}

/// Friendly-occupied diagonal neighbours.
pub fn allies_around_corner(tile: Position, state: &GameState) -> u32 {
    count_matching(corner_tiles(tile), state, TileClass::Friendly)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::{EntityId, GameObject, Team};

    fn board() -> GameState {
        // Friendly at (5,5) with a friend north, an enemy south, a rock west.
        GameState::from_objects(
            0,
            Team::Red,
            [
                GameObject::unit(EntityId(1), Position::new(5, 5), Team::Red, 5),
                GameObject::unit(EntityId(2), Position::new(5, 6), Team::Red, 5),
                GameObject::unit(EntityId(3), Position::new(5, 4), Team::Blue, 5),
                GameObject::terrain(EntityId(4), Position::new(4, 5)),
                GameObject::unit(EntityId(5), Position::new(6, 6), Team::Red, 5),
                GameObject::unit(EntityId(6), Position::new(4, 4), Team::Blue, 5),
            ],
        )
        .unwrap()
    }

    #[test]
    fn classification_is_relative_to_our_team() {
        let state = board();
        assert_eq!(classify(Position::new(5, 6), &state), TileClass::Friendly);
        assert_eq!(classify(Position::new(5, 4), &state), TileClass::Enemy);
        assert_eq!(classify(Position::new(4, 5), &state), TileClass::Terrain);
        assert_eq!(classify(Position::new(6, 5), &state), TileClass::Empty);
        assert_eq!(classify(Position::new(-1, 30), &state), TileClass::Empty);
    }

    #[test]
    fn predicates_are_exclusive() {
        let state = board();
        for x in 3..8 {
            for y in 3..8 {
                let tile = Position::new(x, y);
                let hits = [
                    is_friendly(tile, &state),
                    is_enemy(tile, &state),
                    is_terrain(tile, &state),
                ]
                .into_iter()
                .filter(|hit| *hit)
                .count();
                assert!(hits <= 1, "tile {tile} matched {hits} classes");
                if is_vacant(tile, &state) {
                    assert_eq!(hits, 0);
                }
            }
        }
    }

    #[test]
    fn neighbourhood_counts() {
        let state = board();
        let tile = Position::new(5, 5);
        assert_eq!(unsafe_surrounding_tiles(tile, &state), 1);
        assert_eq!(friendly_surrounding_tiles(tile, &state), 1);
        assert_eq!(empty_surrounding_tiles(tile, &state), 1);
        assert_eq!(vacant_surrounding_tiles(tile, &state), 1);
        assert_eq!(allies_around_corner(tile, &state), 1);
    }

    #[test]
    fn fully_surrounded_tile_counts_four() {
        let tile = Position::new(5, 5);
        let enemies = surrounding_tiles(tile)
            .into_iter()
            .zip(1..)
            .map(|(neighbour, id)| GameObject::unit(EntityId(id), neighbour, Team::Blue, 5));
        let friends = corner_tiles(tile)
            .into_iter()
            .zip(10..)
            .map(|(corner, id)| GameObject::unit(EntityId(id), corner, Team::Red, 5));
        let state = GameState::from_objects(0, Team::Red, enemies.chain(friends)).unwrap();

        assert_eq!(unsafe_surrounding_tiles(tile, &state), 4);
        assert_eq!(vacant_surrounding_tiles(tile, &state), 0);
        assert_eq!(friendly_surrounding_tiles(tile, &state), 0);
        assert_eq!(allies_around_corner(tile, &state), 4);
    }

    #[test]
    fn dead_units_still_occupy_their_tile() {
        let state = GameState::from_objects(
            0,
            Team::Blue,
            [GameObject::unit(EntityId(1), Position::new(0, 0), Team::Red, 0)],
        )
        .unwrap();
        assert!(is_enemy(Position::new(0, 0), &state));
        assert!(!is_vacant(Position::new(0, 0), &state));
    }
}
