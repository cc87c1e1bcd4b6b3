//! Turn evaluation entry points.
//!
//! Hosts plug an [`ActionProvider`] into their game loop. [`RobotProvider`]
//! runs the policy tree; [`HoldProvider`] keeps every unit in place and is
//! handy as a fallback or in tests.

use std::collections::BTreeMap;

use behavior_tree::Behavior;
use game_core::{Action, EntityId, GameObject, GameState, Team};
use tracing::{debug, warn};

use crate::config::RobotConfig;
use crate::context::RobotContext;
use crate::error::{Result, RobotError};
use crate::navigation::direction_to_center;
use crate::subtrees::strategies;
use crate::targeting::{closest_ally, closest_enemy};

/// Which branch of the policy produced a decision.
#[derive(
    Clone,
    Copy,
    Debug,
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
pub enum Tactic {
    Engage,
    Retreat,
    Advance,
    Rally,
    Hold,
}

/// Outcome of one unit's turn along with the selections behind it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Decision {
    pub unit: EntityId,
    pub tactic: Tactic,
    /// `None` means the unit holds its position.
    pub action: Option<Action>,
    pub target: Option<EntityId>,
    pub ally: Option<EntityId>,
}

/// Trait for sourcing one unit's action from a snapshot.
pub trait ActionProvider: Send + Sync {
    /// Provide an action for `unit`, `Ok(None)` meaning hold.
    ///
    /// # Errors
    ///
    /// Implementations reject units that are missing from `state` or that
    /// `state.our_team()` does not control.
    fn provide_action(&self, unit: EntityId, state: &GameState) -> Result<Option<Action>>;
}

/// Looks up `unit` and checks that it is a living unit of our team.
fn controlled_unit(state: &GameState, unit: EntityId) -> Result<&GameObject> {
    let object = state
        .obj_by_id(unit)
        .ok_or(RobotError::UnitNotFound { unit })?;
    if !object.is_alive_on(state.our_team()) {
        return Err(RobotError::NotControlled {
            unit,
            team: state.our_team(),
        });
    }
    Ok(object)
}

/// Policy-tree driven provider.
#[derive(Clone, Debug, Default)]
pub struct RobotProvider {
    config: RobotConfig,
}

impl RobotProvider {
    pub fn new(config: RobotConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &RobotConfig {
        &self.config
    }

    /// Decides the action of one unit for this turn.
    ///
    /// Missing targets or allies are not errors here: the policy falls back
    /// to the next branch instead.
    pub fn decide(&self, unit: EntityId, state: &GameState) -> Result<Decision> {
        let me = controlled_unit(state, unit)?;
        let metric = self.config.game.metric;

        let target = match closest_enemy(state, me, metric) {
            Ok(target) => Some(target),
            Err(err) => {
                debug!("{err}");
                None
            }
        };
        let ally = match closest_ally(state, me, metric) {
            Ok(ally) => Some(ally),
            Err(err) => {
                debug!("{err}");
                None
            }
        };
        let heading = direction_to_center(me, self.config.anchor);

        debug!(
            "unit {} at {}: target={:?} ally={:?} heading={:?}",
            me.id,
            me.position,
            target.map(|t| t.id),
            ally.map(|a| a.id),
            heading
        );

        let mut ctx = RobotContext::new(me, state, &self.config)
            .with_target(target)
            .with_ally(ally)
            .with_heading(heading);
        let tree = strategies::skirmisher();
        tree.tick(&mut ctx);

        let decision = ctx.into_decision();
        debug!(
            "unit {} chose {} ({:?})",
            decision.unit, decision.tactic, decision.action
        );
        Ok(decision)
    }

    /// Evaluates every living unit of `state.our_team()` independently.
    pub fn run_turn(&self, state: &GameState) -> TurnOutput {
        let decisions = state
            .objs_by_team(state.our_team())
            .filter(|object| object.is_alive())
            .map(|object| {
                let decision = self.decide(object.id, state);
                if let Err(err) = &decision {
                    warn!("unit {} could not be evaluated: {err}", object.id);
                }
                (object.id, decision)
            })
            .collect();

        TurnOutput {
            turn: state.turn,
            team: state.our_team(),
            decisions,
        }
    }
}

impl ActionProvider for RobotProvider {
    fn provide_action(&self, unit: EntityId, state: &GameState) -> Result<Option<Action>> {
        self.decide(unit, state).map(|decision| decision.action)
    }
}

/// Provider that always holds. Useful for testing or as a fallback.
#[derive(Clone, Copy, Debug, Default)]
pub struct HoldProvider;

impl ActionProvider for HoldProvider {
    fn provide_action(&self, unit: EntityId, state: &GameState) -> Result<Option<Action>> {
        controlled_unit(state, unit)?;
        Ok(None)
    }
}

/// Every decision made for one team in one turn, keyed by unit id.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TurnOutput {
    pub turn: u32,
    pub team: Team,
    pub decisions: BTreeMap<EntityId, Result<Decision>>,
}

impl TurnOutput {
    /// Drops the tactics and keeps only what the host has to execute.
    pub fn actions(&self) -> BTreeMap<EntityId, Result<Option<Action>>> {
        self.decisions
            .iter()
            .map(|(id, decision)| (*id, decision.clone().map(|decision| decision.action)))
            .collect()
    }

    pub fn len(&self) -> usize {
        self.decisions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.decisions.is_empty()
    }
}

/// Runs any provider over every living unit of our team.
pub fn run_turn_with<P>(provider: &P, state: &GameState) -> BTreeMap<EntityId, Result<Option<Action>>>
where
    P: ActionProvider + ?Sized,
{
    state
        .objs_by_team(state.our_team())
        .filter(|object| object.is_alive())
        .map(|object| (object.id, provider.provide_action(object.id, state)))
        .collect()
}
