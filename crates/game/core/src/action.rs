//! Action vocabulary returned by the decision core.
//!
//! A unit either moves one tile or attacks the tile next to it. Holding in
//! place is expressed as `Option<Action>::None` by callers.
use crate::state::Position;

/// The four compass directions a unit can step or strike in.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum CardinalDirection {
    North,
    East,
    South,
    West,
}

impl CardinalDirection {
    /// All directions in clockwise order starting from north.
    pub const ALL: [CardinalDirection; 4] = [
        CardinalDirection::North,
        CardinalDirection::East,
        CardinalDirection::South,
        CardinalDirection::West,
    ];

    pub const fn delta(self) -> (i32, i32) {
        match self {
            CardinalDirection::North => (0, 1),
            CardinalDirection::South => (0, -1),
            CardinalDirection::East => (1, 0),
            CardinalDirection::West => (-1, 0),
        }
    }

    /// Next direction when turning a quarter clockwise.
    pub const fn clockwise(self) -> Self {
        match self {
            CardinalDirection::North => CardinalDirection::East,
            CardinalDirection::East => CardinalDirection::South,
            CardinalDirection::South => CardinalDirection::West,
            CardinalDirection::West => CardinalDirection::North,
        }
    }

    pub const fn opposite(self) -> Self {
        self.clockwise().clockwise()
    }

    /// Tile reached by stepping once from `origin`.
    pub const fn step_from(self, origin: Position) -> Position {
        let (dx, dy) = self.delta();
        origin.offset(dx, dy)
    }
}

/// A single discrete move for one unit.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(tag = "type", content = "direction", rename_all = "snake_case")
)]
pub enum Action {
    /// Step onto the neighbouring tile.
    Move(CardinalDirection),
    /// Strike whatever stands on the neighbouring tile.
    Attack(CardinalDirection),
}

impl Action {
    pub const fn direction(self) -> CardinalDirection {
        match self {
            Action::Move(direction) | Action::Attack(direction) => direction,
        }
    }

    /// Tile affected by the action when performed from `origin`.
    pub const fn target_from(self, origin: Position) -> Position {
        self.direction().step_from(origin)
    }
}
