//! The actual splay tree implementation.
//!
//! This implementation has no generics and works only with `Node`
//! references. While the `pub struct SplayTree<'a, T>` users' API does use
//! generics for ergonomics, it immediately maps elements to their nodes
//! before calling into this `internal` implementation, which keeps the
//! monomorphized code small. Therefore, it doesn't make sense to allow the
//! larger `internal` methods to be inlined, or else all our work would be
//! undone.
//!
//! Unlike a top-down splay tree, the placement of new nodes is decided by the
//! caller and every node knows its parent. Splaying walks from a node upwards
//! until it becomes the root.

use super::Slot;
use crate::node::{is, Node};

#[derive(Debug, Default)]
pub struct SplayTree<'a> {
    root: Option<&'a Node<'a>>,
}

impl<'a> SplayTree<'a> {
    #[inline]
    pub const fn new() -> Self {
        SplayTree { root: None }
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    #[inline]
    pub fn root(&self) -> Option<&'a Node<'a>> {
        self.root
    }

    #[inline]
    pub fn first(&self) -> Option<&'a Node<'a>> {
        self.root.map(Node::leftmost)
    }

    #[inline]
    pub fn last(&self) -> Option<&'a Node<'a>> {
        self.root.map(Node::rightmost)
    }

    /// Make `parent`'s link to `old` (or the root, if there is no parent)
    /// point at `new` instead.
    fn change_child(
        &mut self,
        old: &'a Node<'a>,
        new: Option<&'a Node<'a>>,
        parent: Option<&'a Node<'a>>,
    ) {
        match parent {
            Some(parent) => {
                if is(parent.left.get(), old) {
                    parent.left.set(new);
                } else {
                    debug_assert!(is(parent.right.get(), old));
                    parent.right.set(new);
                }
            }
            None => self.root = new,
        }
    }

    /// Fix up the parent links after `top` was rotated above its former
    /// parent `child`. `child2` is the subtree that moved from `top` to
    /// `child`.
    fn rotate_switch_parents(
        &mut self,
        top: &'a Node<'a>,
        child: &'a Node<'a>,
        child2: Option<&'a Node<'a>>,
    ) {
        top.parent.set(child.parent.get());
        child.parent.set(Some(top));

        if let Some(child2) = child2 {
            child2.parent.set(Some(child));
        }

        self.change_child(child, Some(top), top.parent.get());
    }

    /// Rotate the subtree at `parent` to the left, so that its right child
    /// `top` becomes the subtree's root.
    fn rotate_left(&mut self, parent: &'a Node<'a>, top: &'a Node<'a>) {
        debug_assert!(is(parent.right.get(), top));

        let child2 = top.left.get();
        parent.right.set(child2);
        top.left.set(Some(parent));

        self.rotate_switch_parents(top, parent, child2);
    }

    /// Rotate the subtree at `parent` to the right, so that its left child
    /// `top` becomes the subtree's root.
    fn rotate_right(&mut self, parent: &'a Node<'a>, top: &'a Node<'a>) {
        debug_assert!(is(parent.left.get(), top));

        let child2 = top.right.get();
        parent.left.set(child2);
        top.right.set(Some(parent));

        self.rotate_switch_parents(top, parent, child2);
    }

    /// Move `node` up to the root with zig, zig-zig and zig-zag steps.
    #[inline(never)]
    pub fn splay(&mut self, node: &'a Node<'a>) {
        while let Some(parent) = node.parent.get() {
            let node_is_right = is(parent.right.get(), node);

            let grandparent = match parent.parent.get() {
                Some(grandparent) => grandparent,
                None => {
                    // Zig.
                    if node_is_right {
                        self.rotate_left(parent, node);
                    } else {
                        self.rotate_right(parent, node);
                    }
                    continue;
                }
            };

            match (node_is_right, parent.is_right_child()) {
                // Zig-zig.
                (true, true) => {
                    self.rotate_left(grandparent, parent);
                    self.rotate_left(parent, node);
                }
                (false, false) => {
                    self.rotate_right(grandparent, parent);
                    self.rotate_right(parent, node);
                }
                // Zig-zag.
                (true, false) => {
                    self.rotate_left(parent, node);
                    self.rotate_right(grandparent, node);
                }
                (false, true) => {
                    self.rotate_right(parent, node);
                    self.rotate_left(grandparent, node);
                }
            }
        }
    }

    /// Attach a free-standing `node` as a leaf at `slot`, without splaying.
    #[inline]
    pub fn link_node(&mut self, node: &'a Node<'a>, slot: Slot<&'a Node<'a>>) {
        debug_assert!(
            node.is_free() && !is(self.root, node),
            "node is already linked into a tree"
        );

        node.parent.set(slot.parent());
        node.left.set(None);
        node.right.set(None);

        match slot {
            Slot::Root => {
                debug_assert!(self.root.is_none(), "root slot is occupied");
                self.root = Some(node);
            }
            Slot::Left(parent) => {
                debug_assert!(parent.left.get().is_none(), "left slot is occupied");
                parent.left.set(Some(node));
            }
            Slot::Right(parent) => {
                debug_assert!(parent.right.get().is_none(), "right slot is occupied");
                parent.right.set(Some(node));
            }
        }
    }

    #[inline]
    pub fn insert(&mut self, node: &'a Node<'a>, slot: Slot<&'a Node<'a>>) {
        self.link_node(node, slot);
        self.splay(node);
    }

    /// Detach `node` from the tree without rebalancing.
    ///
    /// Returns the node whose subtree lost depth, which is where splaying
    /// should resume, or `None` if the tree is now empty or the root was
    /// replaced by its only child.
    #[inline(never)]
    pub fn erase_node(&mut self, node: &'a Node<'a>) -> Option<&'a Node<'a>> {
        debug_assert!(
            node.parent.get().is_some() || is(self.root, node),
            "node is not linked into this tree"
        );

        let parent = node.parent.get();

        let decreased = match (node.left.get(), node.right.get()) {
            (None, None) => {
                self.change_child(node, None, parent);
                parent
            }
            (Some(child), None) | (None, Some(child)) => {
                child.parent.set(parent);
                self.change_child(node, Some(child), parent);
                parent
            }
            (Some(left), Some(right)) => {
                // Replace `node` with its in-order successor.
                let smallest = right.leftmost();
                let smallest_parent = smallest.parent.get();
                let decreased = if core::ptr::eq(smallest, right) {
                    Some(right)
                } else {
                    smallest_parent
                };

                let smallest_right = smallest.right.get();
                if let Some(smallest_right) = smallest_right {
                    smallest_right.parent.set(smallest_parent);
                }
                self.change_child(smallest, smallest_right, smallest_parent);

                smallest.parent.set(parent);

                smallest.left.set(Some(left));
                left.parent.set(Some(smallest));

                // Re-read: splicing out `smallest` rewrote `node.right` when
                // `smallest` was the right child itself.
                let right = node.right.get();
                smallest.right.set(right);
                if let Some(right) = right {
                    right.parent.set(Some(smallest));
                }

                self.change_child(node, Some(smallest), parent);
                decreased
            }
        };

        node.parent.set(None);
        node.left.set(None);
        node.right.set(None);

        decreased
    }

    #[inline]
    pub fn erase(&mut self, node: &'a Node<'a>) {
        if let Some(decreased) = self.erase_node(node) {
            self.splay(decreased);
        }
    }
}
