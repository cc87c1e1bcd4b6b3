//! Composite nodes.
//!
//! Composite nodes control the execution flow of several children:
//! [`Sequence`] (AND logic) and [`Selector`] (OR logic, first success wins).

use crate::{Behavior, Node, Status};

/// Executes children in order until one fails.
///
/// - If a child returns `Failure`, the sequence **stops immediately** and returns `Failure`
/// - If a child returns `Success`, the sequence **continues** to the next child
/// - If all children return `Success`, the sequence returns `Success`
///
/// This is analogous to a short-circuited logical AND (&&) operation.
pub struct Sequence<'n, C> {
    children: Vec<Node<'n, C>>,
}

impl<'n, C> Sequence<'n, C> {
    /// Creates a new sequence with the given children.
    ///
    /// # Panics
    ///
    /// Panics if `children` is empty. A sequence with no children is
    /// meaningless and likely indicates a programming error.
    pub fn new(children: Vec<Node<'n, C>>) -> Self {
        assert!(
            !children.is_empty(),
            "Sequence must have at least one child"
        );
        Self { children }
    }
}

impl<C> Behavior<C> for Sequence<'_, C> {
    fn tick(&self, ctx: &mut C) -> Status {
        for child in &self.children {
            if child.tick(ctx).is_failure() {
                return Status::Failure;
            }
        }
        Status::Success
    }
}

/// Executes children in order until one succeeds.
///
/// - If a child returns `Success`, the selector **stops immediately** and returns `Success`
/// - If a child returns `Failure`, the selector **continues** to the next child
/// - If all children return `Failure`, the selector returns `Failure`
///
/// This is analogous to a short-circuited logical OR (||) operation and is
/// how priority lists of tactics are expressed.
pub struct Selector<'n, C> {
    children: Vec<Node<'n, C>>,
}

impl<'n, C> Selector<'n, C> {
    /// Creates a new selector with the given children.
    ///
    /// # Panics
    ///
    /// Panics if `children` is empty.
    pub fn new(children: Vec<Node<'n, C>>) -> Self {
        assert!(
            !children.is_empty(),
            "Selector must have at least one child"
        );
        Self { children }
    }
}

impl<C> Behavior<C> for Selector<'_, C> {
    fn tick(&self, ctx: &mut C) -> Status {
        for child in &self.children {
            if child.tick(ctx).is_success() {
                return Status::Success;
            }
        }
        Status::Failure
    }
}
