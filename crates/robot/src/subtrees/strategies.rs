//! Strategies: priority lists of patterns, first success wins.

use behavior_tree::builder::selector;

use super::{BehaviorTree, patterns};

/// Default robot policy.
///
/// 1. Retreat toward an ally when in danger
/// 2. Attack an adjacent target
/// 3. Advance on the target
/// 4. Rally to the anchor
/// 5. Hold
///
/// Always succeeds because holding cannot fail.
pub fn skirmisher<'a>() -> BehaviorTree<'a> {
    selector(vec![
        patterns::retreat_when_in_danger(),
        patterns::engage_when_adjacent(),
        patterns::advance_on_target(),
        patterns::rally_to_anchor(),
        patterns::hold_position(),
    ])
}

