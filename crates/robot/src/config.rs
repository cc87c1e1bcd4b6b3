//! Decision core configuration and environment loader.

use std::env;

use game_core::{DistanceMetric, GameConfig, Position};

/// Tunables for the per-unit policy.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RobotConfig {
    pub game: GameConfig,
    /// Tile units drift toward when nothing better is available.
    pub anchor: Position,
    /// Adjacent enemies at which a unit falls back toward its closest ally.
    pub danger_threshold: u32,
}

impl RobotConfig {
    pub const DEFAULT_DANGER_THRESHOLD: u32 = 2;

    pub fn new(game: GameConfig) -> Self {
        Self {
            anchor: game.center(),
            game,
            danger_threshold: Self::DEFAULT_DANGER_THRESHOLD,
        }
    }

    #[must_use]
    pub fn with_anchor(mut self, anchor: Position) -> Self {
        self.anchor = anchor;
        self
    }

    #[must_use]
    pub fn with_danger_threshold(mut self, threshold: u32) -> Self {
        self.danger_threshold = threshold;
        self
    }

    /// Construct configuration from process environment variables.
    ///
    /// Environment variables:
    /// - `ROBOT_BOARD_SIZE` - Side of the square board (default: 19)
    /// - `ROBOT_ANCHOR_X` / `ROBOT_ANCHOR_Y` - Rally tile (default: board center)
    /// - `ROBOT_DANGER_THRESHOLD` - Adjacent enemies that trigger a retreat (default: 2)
    /// - `ROBOT_DISTANCE_METRIC` - `manhattan` or `chebyshev` (default: manhattan)
    ///
    /// Unparseable values are ignored and the default is kept.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Same as [`Self::from_env`] but reads values through `lookup`.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut game = GameConfig::default();
        if let Some(size) = read_var::<u32, _>(&lookup, "ROBOT_BOARD_SIZE") {
            game = GameConfig::with_board_size(size.max(1));
        }
        if let Some(metric) = read_var::<DistanceMetric, _>(&lookup, "ROBOT_DISTANCE_METRIC") {
            game.metric = metric;
        }

        let mut config = Self::new(game);
        if let Some(x) = read_var::<i32, _>(&lookup, "ROBOT_ANCHOR_X") {
            config.anchor.x = x;
        }
        if let Some(y) = read_var::<i32, _>(&lookup, "ROBOT_ANCHOR_Y") {
            config.anchor.y = y;
        }
        if let Some(threshold) = read_var::<u32, _>(&lookup, "ROBOT_DANGER_THRESHOLD") {
            config.danger_threshold = threshold;
        }

        config
    }
}

impl Default for RobotConfig {
    fn default() -> Self {
        Self::new(GameConfig::default())
    }
}

fn read_var<T, F>(lookup: &F, key: &str) -> Option<T>
where
    T: std::str::FromStr,
    F: Fn(&str) -> Option<String>,
{
    lookup(key)?.trim().parse().ok()
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn defaults_anchor_on_board_center() {
        let config = RobotConfig::default();
        assert_eq!(config.anchor, Position::new(9, 9));
        assert_eq!(config.danger_threshold, 2);
        assert_eq!(config.game.metric, DistanceMetric::Manhattan);
    }

    #[test]
    fn reads_overrides() {
        let config = RobotConfig::from_lookup(lookup(&[
            ("ROBOT_BOARD_SIZE", "11"),
            ("ROBOT_ANCHOR_Y", "2"),
            ("ROBOT_DANGER_THRESHOLD", "3"),
            ("ROBOT_DISTANCE_METRIC", "Chebyshev"),
        ]));
        assert_eq!(config.game.dimensions.width, 11);
        assert_eq!(config.anchor, Position::new(5, 2));
        assert_eq!(config.danger_threshold, 3);
        assert_eq!(config.game.metric, DistanceMetric::Chebyshev);
    }

    #[test]
    fn ignores_garbage() {
        let config = RobotConfig::from_lookup(lookup(&[
            ("ROBOT_BOARD_SIZE", "huge"),
            ("ROBOT_DISTANCE_METRIC", "euclid"),
            ("ROBOT_DANGER_THRESHOLD", "-1"),
        ]));
        assert_eq!(config, RobotConfig::default());
    }
}
