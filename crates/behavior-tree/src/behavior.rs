//! Core behavior trait.
//!
//! [`Behavior`] is generic over a context type `C`, the blackboard a tree
//! reads from and writes its decision into. Contexts usually borrow the turn
//! snapshot, so boxed nodes carry an explicit lifetime instead of `'static`.

use crate::Status;

/// A behavior tree node that can be evaluated against a context.
pub trait Behavior<C>: Send + Sync {
    /// Evaluate this node against the given context.
    ///
    /// # Returns
    ///
    /// - `Status::Success` if the condition held or the action was recorded
    /// - `Status::Failure` otherwise
    fn tick(&self, ctx: &mut C) -> Status;
}

/// Boxed node that may borrow data living for `'n`.
pub type Node<'n, C> = Box<dyn Behavior<C> + 'n>;

/// Lets boxed nodes be used wherever a node is expected.
impl<'n, C> Behavior<C> for Node<'n, C> {
    #[inline]
    fn tick(&self, ctx: &mut C) -> Status {
        (**self).tick(ctx)
    }
}
