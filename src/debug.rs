//! Rendering and consistency checks for debugging.
//!
//! Everything here walks the tree through the parent links instead of
//! recursing, since a tree built with `link` alone can be as deep as it is
//! long.

use core::fmt;

use crate::node::{is, Node};
use crate::{IntrusiveNode, SplayTree};

/// The next node in a pre-order walk of the tree containing `node`.
fn preorder_next<'a>(node: &'a Node<'a>) -> Option<&'a Node<'a>> {
    if let Some(left) = node.left.get() {
        return Some(left);
    }
    if let Some(right) = node.right.get() {
        return Some(right);
    }

    // Climb until we come up out of a left subtree whose parent has a right
    // subtree left to visit.
    let mut node = node;
    while let Some(parent) = node.parent.get() {
        if is(parent.left.get(), node) {
            if let Some(right) = parent.right.get() {
                return Some(right);
            }
        }
        node = parent;
    }
    None
}

fn depth<'a>(node: &'a Node<'a>) -> usize {
    let mut depth = 0;
    let mut node = node;
    while let Some(parent) = node.parent.get() {
        depth += 1;
        node = parent;
    }
    depth
}

impl<'a, T> SplayTree<'a, T>
where
    T: 'a + IntrusiveNode<'a>,
    T::Elem: fmt::Display,
{
    /// Render the tree sideways, largest element first.
    ///
    /// Every element gets one line: four spaces of indentation per level of
    /// depth, then `*` for the root, `/` for a right child or `\` for a left
    /// child, then the element itself.
    ///
    /// ```text
    ///     /3
    /// *2
    ///     \1
    /// ```
    pub fn write_tree<W: fmt::Write>(&self, mut w: W) -> fmt::Result {
        let mut cur = self.tree.last();
        while let Some(node) = cur {
            for _ in 0..depth(node) {
                w.write_str("    ")?;
            }

            let marker = match node.parent.get() {
                None => '*',
                Some(_) if node.is_right_child() => '/',
                Some(_) => '\\',
            };
            writeln!(w, "{}{}", marker, Self::elem(node))?;

            cur = node.prev();
        }
        Ok(())
    }

    /// Render the tree in Graphviz's dot language.
    ///
    /// Missing children are drawn as numbered `NIL` boxes, so that left and
    /// right children can be told apart.
    pub fn dotgraph<W: fmt::Write>(&self, mut w: W) -> fmt::Result {
        w.write_str("digraph G {\n")?;
        w.write_str("  graph [ordering=\"out\"];\n")?;

        let mut nil = 0usize;
        let mut cur = self.tree.root();
        while let Some(node) = cur {
            let elem = Self::elem(node);
            writeln!(w, "{};", elem)?;

            for (child, port) in [(node.left.get(), "sw"), (node.right.get(), "se")] {
                match child {
                    Some(child) => writeln!(w, "{}:{} -> {};", elem, port, Self::elem(child))?,
                    None => {
                        writeln!(
                            w,
                            "nil{} [label=\"NIL\", shape=box, color=\"black\"];",
                            nil
                        )?;
                        writeln!(w, "{}:{} -> nil{} [color=\"black\"];", elem, port, nil)?;
                        nil += 1;
                    }
                }
            }

            cur = preorder_next(node);
        }

        w.write_str("}\n")
    }
}

impl<'a, T> SplayTree<'a, T>
where
    T: 'a + IntrusiveNode<'a>,
{
    /// Check the tree's structural invariants, panicking if any is broken.
    ///
    /// * the root has no parent,
    /// * every child's parent link points back at the node holding it,
    /// * walking forwards and backwards visits every node exactly once.
    #[doc(hidden)]
    pub fn assert_invariants(&self) {
        let root = match self.tree.root() {
            Some(root) => root,
            None => {
                assert!(self.tree.first().is_none());
                assert!(self.tree.last().is_none());
                return;
            }
        };
        assert!(root.parent.get().is_none(), "root has a parent");

        let mut count = 0usize;
        let mut cur = Some(root);
        while let Some(node) = cur {
            for child in [node.left.get(), node.right.get()].into_iter().flatten() {
                assert!(
                    is(child.parent.get(), node),
                    "child's parent link does not point at its parent"
                );
            }
            assert!(
                !is(node.left.get(), node) && !is(node.right.get(), node),
                "node is its own child"
            );
            if let (Some(left), Some(right)) = (node.left.get(), node.right.get()) {
                assert!(!core::ptr::eq(left, right), "left and right child alias");
            }
            count += 1;
            cur = preorder_next(node);
        }

        let forwards = self.iter().count();
        let backwards = self.iter().rev().count();
        assert_eq!(forwards, count, "in-order walk missed or repeated nodes");
        assert_eq!(backwards, count, "reverse walk missed or repeated nodes");
    }
}
