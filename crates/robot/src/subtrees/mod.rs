//! Reusable policy subtrees.
//!
//! Subtrees are organized in two layers:
//!
//! - **Patterns**: one condition guarding one action
//! - **Strategies**: priority lists of patterns
//!
//! ```text
//! skirmisher()
//!     ├─ retreat_when_in_danger()
//!     ├─ engage_when_adjacent()
//!     ├─ advance_on_target()
//!     ├─ rally_to_anchor()
//!     └─ hold_position()
//! ```
//!
//! Trees borrow the snapshot through their context and are rebuilt for every
//! decision.

pub mod patterns;
pub mod strategies;

use behavior_tree::Node;

use crate::context::RobotContext;

/// Boxed policy tree ticking a context that lives for `'a`.
pub type BehaviorTree<'a> = Node<'a, RobotContext<'a>>;
