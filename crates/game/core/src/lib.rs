//! Board data model and tile geometry shared by the decision core and tools.
//!
//! `game-core` defines the per-turn snapshot ([`GameState`]), the action
//! vocabulary a unit can answer with, and the pure geometry and tile
//! classification queries built on top of them. Nothing here performs I/O or
//! keeps state between turns.
pub mod action;
pub mod config;
pub mod error;
pub mod grid;
pub mod state;

pub use action::{Action, CardinalDirection};
pub use config::{GameConfig, MapDimensions};
pub use error::{ErrorSeverity, GameError};
pub use grid::{DistanceMetric, TileClass, clockwise_direction_towards, corner_tiles, surrounding_tiles};
pub use state::{
    EntityId, GameObject, GameState, ObjDetails, ObjType, Position, StateError, Team, Unit,
};
