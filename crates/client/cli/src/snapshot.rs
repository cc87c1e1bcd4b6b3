//! JSON board snapshots.
//!
//! ```json
//! {
//!   "turn": 0,
//!   "our_team": "red",
//!   "objects": [
//!     {"id": 1, "position": {"x": 5, "y": 5}, "details": {"unit": {"team": "red", "health": 5}}},
//!     {"id": 9, "position": {"x": 0, "y": 0}, "details": "terrain"}
//!   ]
//! }
//! ```

use std::path::Path;

use anyhow::{Context, Result};
use game_core::{GameObject, GameState, Team};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct Snapshot {
    #[serde(default)]
    pub turn: u32,
    pub our_team: Team,
    pub objects: Vec<GameObject>,
}

impl Snapshot {
    pub fn into_state(self) -> Result<GameState> {
        GameState::from_objects(self.turn, self.our_team, self.objects)
            .context("Snapshot violates board invariants")
    }
}

pub fn parse(json: &str) -> Result<GameState> {
    let snapshot: Snapshot =
        serde_json::from_str(json).context("Failed to parse snapshot JSON")?;
    snapshot.into_state()
}

pub fn load(path: &Path) -> Result<GameState> {
    let json = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read snapshot: {}", path.display()))?;
    let state = parse(&json).with_context(|| format!("Invalid snapshot: {}", path.display()))?;

    tracing::info!(
        "Loaded snapshot {} (turn {}, {} objects, playing {})",
        path.display(),
        state.turn,
        state.len(),
        state.our_team()
    );
    Ok(state)
}
