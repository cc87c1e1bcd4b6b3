//! Decorator nodes.
//!
//! Decorators wrap a single child and modify its result.

use crate::{Behavior, Node, Status};

/// Inverts the result of its child.
///
/// - If the child returns `Success`, the inverter returns `Failure`
/// - If the child returns `Failure`, the inverter returns `Success`
///
/// This is analogous to a logical NOT (!) operation.
pub struct Inverter<'n, C> {
    child: Node<'n, C>,
}

impl<'n, C> Inverter<'n, C> {
    pub fn new(child: Node<'n, C>) -> Self {
        Self { child }
    }
}

impl<C> Behavior<C> for Inverter<'_, C> {
    fn tick(&self, ctx: &mut C) -> Status {
        self.child.tick(ctx).invert()
    }
}
