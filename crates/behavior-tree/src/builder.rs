//! Builder utilities for ergonomic tree construction.
//!
//! Instead of writing `Box::new(Sequence::new(vec![...]))` use
//! `sequence(vec![...])`.

use crate::{Behavior, Inverter, Node, Selector, Sequence};

/// Boxes a leaf node.
#[inline]
pub fn leaf<'n, C, B>(node: B) -> Node<'n, C>
where
    B: Behavior<C> + 'n,
{
    Box::new(node)
}

/// Shorthand for `Box::new(Sequence::new(children))`.
#[inline]
pub fn sequence<'n, C: 'n>(children: Vec<Node<'n, C>>) -> Node<'n, C> {
    Box::new(Sequence::new(children))
}

/// Shorthand for `Box::new(Selector::new(children))`.
#[inline]
pub fn selector<'n, C: 'n>(children: Vec<Node<'n, C>>) -> Node<'n, C> {
    Box::new(Selector::new(children))
}

/// Shorthand for `Box::new(Inverter::new(child))`.
#[inline]
pub fn inverter<'n, C: 'n>(child: Node<'n, C>) -> Node<'n, C> {
    Box::new(Inverter::new(child))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Status;

    struct Threshold<'a> {
        limit: &'a i32,
    }

    impl Behavior<i32> for Threshold<'_> {
        fn tick(&self, ctx: &mut i32) -> Status {
            if *ctx >= *self.limit {
                Status::Success
            } else {
                Status::Failure
            }
        }
    }

    struct Bump;

    impl Behavior<i32> for Bump {
        fn tick(&self, ctx: &mut i32) -> Status {
            *ctx += 1;
            Status::Success
        }
    }

    #[test]
    fn borrowed_nodes_compose() {
        let limit = 3;
        let tree: Node<'_, i32> = selector(vec![
            sequence(vec![leaf(Threshold { limit: &limit }), leaf(Bump)]),
            inverter(leaf(Threshold { limit: &limit })),
        ]);

        let mut low = 1;
        assert_eq!(tree.tick(&mut low), Status::Success);
        assert_eq!(low, 1);

        let mut high = 5;
        assert_eq!(tree.tick(&mut high), Status::Success);
        assert_eq!(high, 6);
    }
}
