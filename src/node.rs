use core::cell::Cell;
use core::fmt;
use core::ptr;

/// The intrusive links that an element embeds to be part of a splay tree.
///
/// An element may contain any number of `Node`s, one per tree it wants to be
/// a member of at the same time.
///
/// The links are only ever touched by the tree itself. A node that is not in
/// any tree has no parent and no children.
#[derive(Default)]
pub struct Node<'a> {
    pub(crate) parent: Cell<Option<&'a Node<'a>>>,
    pub(crate) left: Cell<Option<&'a Node<'a>>>,
    pub(crate) right: Cell<Option<&'a Node<'a>>>,
}

impl fmt::Debug for Node<'_> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        // Print addresses only: following the links would recurse forever
        // through the parent pointers.
        fn addr(link: Option<&Node>) -> Option<*const ()> {
            link.map(|n| n as *const Node as *const ())
        }

        f.debug_struct("Node")
            .field("parent", &addr(self.parent.get()))
            .field("left", &addr(self.left.get()))
            .field("right", &addr(self.right.get()))
            .finish()
    }
}

/// Does `link` point at `node`?
#[inline]
pub(crate) fn is<'a>(link: Option<&Node<'a>>, node: &Node<'a>) -> bool {
    link.map_or(false, |n| ptr::eq(n, node))
}

impl<'a> Node<'a> {
    /// Construct a new, unlinked node.
    #[inline]
    pub const fn new() -> Node<'a> {
        Node {
            parent: Cell::new(None),
            left: Cell::new(None),
            right: Cell::new(None),
        }
    }

    #[inline]
    pub(crate) fn is_free(&self) -> bool {
        self.parent.get().is_none() && self.left.get().is_none() && self.right.get().is_none()
    }

    #[inline]
    pub(crate) fn is_right_child(&self) -> bool {
        self.parent
            .get()
            .map_or(false, |parent| is(parent.right.get(), self))
    }

    pub(crate) fn leftmost(&'a self) -> &'a Node<'a> {
        let mut node = self;
        while let Some(left) = node.left.get() {
            node = left;
        }
        node
    }

    pub(crate) fn rightmost(&'a self) -> &'a Node<'a> {
        let mut node = self;
        while let Some(right) = node.right.get() {
            node = right;
        }
        node
    }

    /// The in-order successor of this node.
    pub(crate) fn next(&'a self) -> Option<&'a Node<'a>> {
        if let Some(right) = self.right.get() {
            return Some(right.leftmost());
        }

        // Climb while we are a right child; the first ancestor reached over a
        // left edge is the successor.
        let mut node = self;
        let mut parent = node.parent.get();
        while let Some(p) = parent {
            if !is(p.right.get(), node) {
                break;
            }
            node = p;
            parent = node.parent.get();
        }
        parent
    }

    /// The in-order predecessor of this node.
    pub(crate) fn prev(&'a self) -> Option<&'a Node<'a>> {
        if let Some(left) = self.left.get() {
            return Some(left.rightmost());
        }

        let mut node = self;
        let mut parent = node.parent.get();
        while let Some(p) = parent {
            if !is(p.left.get(), node) {
                break;
            }
            node = p;
            parent = node.parent.get();
        }
        parent
    }
}
