use crate::grid::DistanceMetric;
use crate::state::Position;

/// Board extent. Valid coordinates are `0..width` by `0..height`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MapDimensions {
    pub width: u32,
    pub height: u32,
}

impl MapDimensions {
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    pub const fn square(size: u32) -> Self {
        Self::new(size, size)
    }

    pub fn contains(&self, position: Position) -> bool {
        position.x >= 0
            && position.y >= 0
            && (position.x as i64) < self.width as i64
            && (position.y as i64) < self.height as i64
    }

    /// Middle tile, rounded toward the origin on even sides.
    pub const fn center(&self) -> Position {
        Position::new((self.width / 2) as i32, (self.height / 2) as i32)
    }
}

/// Board-wide rules shared by every consumer of a snapshot.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GameConfig {
    pub dimensions: MapDimensions,
    /// Metric used when ranking units by distance.
    pub metric: DistanceMetric,
}

impl GameConfig {
    // ===== runtime-tunable defaults =====
    pub const DEFAULT_BOARD_SIZE: u32 = 19;

    pub fn new() -> Self {
        Self {
            dimensions: MapDimensions::square(Self::DEFAULT_BOARD_SIZE),
            metric: DistanceMetric::default(),
        }
    }

    pub fn with_board_size(size: u32) -> Self {
        Self {
            dimensions: MapDimensions::square(size),
            ..Self::new()
        }
    }

    #[must_use]
    pub fn with_metric(mut self, metric: DistanceMetric) -> Self {
        self.metric = metric;
        self
    }

    pub const fn center(&self) -> Position {
        self.dimensions.center()
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new()
    }
}
