//! Blackboard shared by the policy tree while deciding one unit's turn.
//!
//! The context borrows the turn snapshot and the selections computed before
//! the tree runs (target, ally, heading). Action nodes write the outcome back
//! through [`RobotContext::decide`].

use game_core::{Action, CardinalDirection, GameObject, GameState, Position};

use crate::config::RobotConfig;
use crate::provider::{Decision, Tactic};

pub struct RobotContext<'a> {
    /// The unit making the decision.
    pub unit: &'a GameObject,

    /// Read-only access to the current snapshot.
    pub state: &'a GameState,

    pub config: &'a RobotConfig,

    /// Enemy picked by [`crate::closest_enemy`], if any is left.
    pub target: Option<&'a GameObject>,

    /// Teammate picked by [`crate::closest_ally`], if any is left.
    pub ally: Option<&'a GameObject>,

    /// Heading toward the rally anchor, `None` when already on it.
    pub heading: Option<CardinalDirection>,

    decision: Option<(Tactic, Option<Action>)>,
}

impl<'a> RobotContext<'a> {
    pub fn new(unit: &'a GameObject, state: &'a GameState, config: &'a RobotConfig) -> Self {
        Self {
            unit,
            state,
            config,
            target: None,
            ally: None,
            heading: None,
            decision: None,
        }
    }

    #[must_use]
    pub fn with_target(mut self, target: Option<&'a GameObject>) -> Self {
        self.target = target;
        self
    }

    #[must_use]
    pub fn with_ally(mut self, ally: Option<&'a GameObject>) -> Self {
        self.ally = ally;
        self
    }

    #[must_use]
    pub fn with_heading(mut self, heading: Option<CardinalDirection>) -> Self {
        self.heading = heading;
        self
    }

    pub fn position(&self) -> Position {
        self.unit.position
    }

    /// Records the outcome of the tree.
    ///
    /// Only one action node may succeed per evaluation; a second call keeps
    /// the first decision.
    pub fn decide(&mut self, tactic: Tactic, action: Option<Action>) {
        debug_assert!(
            self.decision.is_none(),
            "unit {} decided twice, dropping {tactic}",
            self.unit.id
        );
        if self.decision.is_some() {
            return;
        }
        self.decision = Some((tactic, action));
    }

    pub fn has_decided(&self) -> bool {
        self.decision.is_some()
    }

    /// Consumes the context. A tree that recorded nothing yields a hold.
    pub fn into_decision(self) -> Decision {
        let (tactic, action) = self.decision.unwrap_or((Tactic::Hold, None));
        Decision {
            unit: self.unit.id,
            tactic,
            action,
            target: self.target.map(|target| target.id),
            ally: self.ally.map(|ally| ally.id),
        }
    }
}
