//! Property tests for the tile classifier on random boards.
use game_core::grid::{
    allies_around_corner, empty_surrounding_tiles, friendly_surrounding_tiles, is_enemy,
    is_friendly, is_terrain, is_vacant, unsafe_surrounding_tiles, vacant_surrounding_tiles,
};
use game_core::{EntityId, GameObject, GameState, Position, Team};
use proptest::prelude::*;

#[derive(Clone, Copy, Debug)]
enum Piece {
    Red(i32),
    Blue(i32),
    Rock,
}

fn piece() -> impl Strategy<Value = Piece> {
    prop_oneof![
        (-5i32..10).prop_map(Piece::Red),
        (-5i32..10).prop_map(Piece::Blue),
        Just(Piece::Rock),
    ]
}

fn team(red: bool) -> Team {
    if red { Team::Red } else { Team::Blue }
}

/// A crowded 6×6 board. Pieces landing on an occupied tile are dropped.
fn random_board() -> impl Strategy<Value = GameState> {
    let placements = prop::collection::vec((0i32..6, 0i32..6, piece()), 0..30);
    (any::<bool>(), placements).prop_map(|(red, placements)| {
        let mut state = GameState::new(team(red));
        for (index, (x, y, piece)) in placements.into_iter().enumerate() {
            let id = EntityId(index as u32);
            let position = Position::new(x, y);
            let object = match piece {
                Piece::Red(health) => GameObject::unit(id, position, Team::Red, health),
                Piece::Blue(health) => GameObject::unit(id, position, Team::Blue, health),
                Piece::Rock => GameObject::terrain(id, position),
            };
            let _ = state.insert(object);
        }
        state
    })
}

proptest! {
    #[test]
    fn each_tile_has_at_most_one_class(state in random_board()) {
        for x in -1..7 {
            for y in -1..7 {
                let tile = Position::new(x, y);
                let hits = [
                    is_friendly(tile, &state),
                    is_enemy(tile, &state),
                    is_terrain(tile, &state),
                ]
                .into_iter()
                .filter(|hit| *hit)
                .count();
                prop_assert!(hits <= 1, "tile {} matched {} classes", tile, hits);
                prop_assert_eq!(is_vacant(tile, &state), hits == 0);
            }
        }
    }

    #[test]
    fn neighbourhood_counts_stay_within_four(state in random_board()) {
        for x in -1..7 {
            for y in -1..7 {
                let tile = Position::new(x, y);
                let enemies = unsafe_surrounding_tiles(tile, &state);
                let friends = friendly_surrounding_tiles(tile, &state);
                let terrain = empty_surrounding_tiles(tile, &state);
                let vacant = vacant_surrounding_tiles(tile, &state);

                for count in [enemies, friends, terrain, vacant, allies_around_corner(tile, &state)] {
                    prop_assert!(count <= 4);
                }
                prop_assert_eq!(enemies + friends + terrain + vacant, 4);
            }
        }
    }
}
