//! Lightweight behavior tree for turn-based decisions.
//!
//! A tree is evaluated once per unit per turn and every tick completes
//! immediately:
//!
//! - **No delta time**: a tick is one decision, never a frame
//! - **No Running state**: nodes either succeed or fail
//! - **Borrowing nodes**: a tree may borrow the turn's snapshot through its
//!   context, so trees are cheap to rebuild per decision
//! - **Zero dependencies**: pure Rust with no external crates
//!
//! # Architecture
//!
//! - [`Behavior`]: core trait for all nodes
//! - [`Node`]: boxed node alive for `'n`
//! - [`Status`]: Success or Failure
//! - Composite nodes: [`Sequence`], [`Selector`]
//! - Decorator nodes: [`Inverter`]

pub mod behavior;
pub mod builder;
pub mod composite;
pub mod decorator;
pub mod status;

pub use behavior::{Behavior, Node};
pub use composite::{Selector, Sequence};
pub use decorator::Inverter;
pub use status::Status;
