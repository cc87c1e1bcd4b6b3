//! Run the decision core over a snapshot.

use std::collections::BTreeMap;
use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use game_core::{EntityId, GameError, GameState};
use robot::{Decision, RobotConfig, RobotError, RobotProvider};
use serde_json::{Value, json};

use super::print_json;
use crate::snapshot;

/// Decide actions for our team (or a single unit)
#[derive(Parser)]
pub struct Decide {
    /// Path to the JSON board snapshot
    #[arg(short, long, value_name = "FILE")]
    state: PathBuf,

    /// Only decide for this unit id
    #[arg(short, long, value_name = "ID")]
    unit: Option<u32>,

    /// Pretty-print the JSON output
    #[arg(long)]
    pretty: bool,
}

impl Decide {
    pub fn execute(self) -> Result<()> {
        let state = snapshot::load(&self.state)?;
        let config = RobotConfig::from_env();
        tracing::debug!("Robot config: {:?}", config);

        let report = decide_report(&RobotProvider::new(config), &state, self.unit.map(EntityId));
        print_json(&report, self.pretty)
    }
}

/// Builds the JSON report keyed by unit id.
fn decide_report(
    provider: &RobotProvider,
    state: &GameState,
    unit: Option<EntityId>,
) -> BTreeMap<String, Value> {
    let decisions: BTreeMap<EntityId, robot::Result<Decision>> = match unit {
        Some(id) => BTreeMap::from([(id, provider.decide(id, state))]),
        None => provider.run_turn(state).decisions,
    };

    decisions
        .into_iter()
        .map(|(id, outcome)| (id.0.to_string(), render(outcome)))
        .collect()
}

fn render(outcome: robot::Result<Decision>) -> Value {
    match outcome {
        Ok(decision) => json!({
            "action": decision.action,
            "tactic": decision.tactic,
            "target": decision.target,
            "ally": decision.ally,
        }),
        Err(err) => render_error(&err),
    }
}

fn render_error(err: &RobotError) -> Value {
    json!({
        "error": err.to_string(),
        "code": err.error_code(),
        "severity": err.severity().as_str(),
    })
}
