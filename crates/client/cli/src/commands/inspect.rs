//! Show how the classifier sees one tile.

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use game_core::grid::{
    allies_around_corner, classify, empty_surrounding_tiles, friendly_surrounding_tiles,
    unsafe_surrounding_tiles, vacant_surrounding_tiles,
};
use game_core::{GameState, Position, TileClass};
use serde::Serialize;

use super::print_json;
use crate::snapshot;

/// Show the classification and neighbourhood counts of one tile
#[derive(Parser)]
pub struct Inspect {
    /// Path to the JSON board snapshot
    #[arg(short, long, value_name = "FILE")]
    state: PathBuf,

    #[arg(short, long, allow_negative_numbers = true)]
    x: i32,

    #[arg(short, long, allow_negative_numbers = true)]
    y: i32,

    /// Pretty-print the JSON output
    #[arg(long)]
    pretty: bool,
}

#[derive(Debug, PartialEq, Eq, Serialize)]
struct TileReport {
    tile: Position,
    class: TileClass,
    on_board: bool,
    unsafe_surrounding: u32,
    friendly_surrounding: u32,
    terrain_surrounding: u32,
    vacant_surrounding: u32,
    allies_around_corner: u32,
}

impl TileReport {
    fn new(tile: Position, state: &GameState, on_board: bool) -> Self {
        Self {
            tile,
            class: classify(tile, state),
            on_board,
            unsafe_surrounding: unsafe_surrounding_tiles(tile, state),
            friendly_surrounding: friendly_surrounding_tiles(tile, state),
            terrain_surrounding: empty_surrounding_tiles(tile, state),
            vacant_surrounding: vacant_surrounding_tiles(tile, state),
            allies_around_corner: allies_around_corner(tile, state),
        }
    }
}

impl Inspect {
    pub fn execute(self) -> Result<()> {
        let state = snapshot::load(&self.state)?;
        let dimensions = robot::RobotConfig::from_env().game.dimensions;

        let tile = Position::new(self.x, self.y);
        let report = TileReport::new(tile, &state, dimensions.contains(tile));
        print_json(&report, self.pretty)
    }
}

#[cfg(test)]
mod tests {
    use game_core::{EntityId, GameObject, Team};

    use super::*;

    #[test]
    fn report_counts_neighbourhood() {
        let state = GameState::from_objects(
            0,
            Team::Blue,
            [
                GameObject::unit(EntityId(1), Position::new(1, 1), Team::Blue, 5),
                GameObject::unit(EntityId(2), Position::new(1, 2), Team::Red, 5),
                GameObject::terrain(EntityId(3), Position::new(0, 1)),
                GameObject::unit(EntityId(4), Position::new(2, 2), Team::Blue, 5),
            ],
        )
        .unwrap();

        let report = TileReport::new(Position::new(1, 1), &state, true);
        assert_eq!(
            report,
            TileReport {
                tile: Position::new(1, 1),
                class: TileClass::Friendly,
                on_board: true,
                unsafe_surrounding: 1,
                friendly_surrounding: 0,
                terrain_surrounding: 1,
                vacant_surrounding: 2,
                allies_around_corner: 1,
            }
        );
    }
}
