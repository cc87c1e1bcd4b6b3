//! Target and support selection.
//!
//! Both selections scan the snapshot in ascending id order and keep the first
//! minimum, so identical snapshots always produce identical picks.

use std::cmp::Reverse;

use game_core::grid::{allies_around_corner, friendly_surrounding_tiles};
use game_core::{DistanceMetric, GameObject, GameState};

use crate::error::{Result, RobotError};

/// Ranking key for enemy candidates, compared field by field.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub struct TargetKey {
    /// Distance from the acting unit.
    pub distance: u64,
    /// Our units orthogonal or diagonal to the candidate. More is better.
    pub support: Reverse<u32>,
    pub health: i32,
}

impl TargetKey {
    pub fn evaluate(
        state: &GameState,
        unit: &GameObject,
        candidate: &GameObject,
        metric: DistanceMetric,
    ) -> Self {
        let tile = candidate.position;
        Self {
            distance: unit.position.distance(tile, metric),
            support: Reverse(allies_around_corner(tile, state) + friendly_surrounding_tiles(tile, state)),
            health: candidate.health().unwrap_or(i32::MAX),
        }
    }
}

/// Picks the enemy to focus.
///
/// Closest first, then the one our team already surrounds the most, then the
/// weakest.
///
/// # Errors
///
/// [`RobotError::NoValidTarget`] when no living unit is left on the other team.
pub fn closest_enemy<'a>(
    state: &'a GameState,
    unit: &GameObject,
    metric: DistanceMetric,
) -> Result<&'a GameObject> {
    state
        .objs_by_team(state.other_team())
        .filter(|candidate| candidate.is_alive())
        .min_by_key(|candidate| TargetKey::evaluate(state, unit, candidate, metric))
        .ok_or(RobotError::NoValidTarget { unit: unit.id })
}

/// Picks the nearest, then weakest, living teammate other than `unit`.
///
/// # Errors
///
/// [`RobotError::NoValidAlly`] when `unit` is the last one standing.
pub fn closest_ally<'a>(
    state: &'a GameState,
    unit: &GameObject,
    metric: DistanceMetric,
) -> Result<&'a GameObject> {
    let no_ally = RobotError::NoValidAlly { unit: unit.id };
    let Some(team) = unit.team() else {
        return Err(no_ally);
    };

    state
        .objs_by_team(team)
        .filter(|candidate| candidate.id != unit.id && candidate.is_alive())
        .min_by_key(|candidate| {
            (
                unit.position.distance(candidate.position, metric),
                candidate.health().unwrap_or(i32::MAX),
            )
        })
        .ok_or(no_ally)
}
