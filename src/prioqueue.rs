use core::fmt;

use crate::{IntrusiveNode, Slot, SplayTree, TreeOrd};

/// A min-priority queue built on an intrusive `SplayTree`.
///
/// The queue remembers its minimum element, so `peek` is O(1) and `pop` only
/// has to step to the minimum's successor.
///
/// Elements comparing equal are popped in reverse insertion order.
pub struct PrioQueue<'a, T>
where
    T: IntrusiveNode<'a>,
    T::Elem: 'a,
{
    tree: SplayTree<'a, T>,
    min: Option<&'a T::Elem>,
}

impl<'a, T> Default for PrioQueue<'a, T>
where
    T: 'a + IntrusiveNode<'a>,
{
    #[inline]
    fn default() -> Self {
        PrioQueue::new()
    }
}

impl<'a, T> fmt::Debug for PrioQueue<'a, T>
where
    T: 'a + IntrusiveNode<'a>,
    T::Elem: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("PrioQueue")
            .field("min", &self.min)
            .field("tree", &self.tree)
            .finish()
    }
}

impl<'a, T> PrioQueue<'a, T>
where
    T: 'a + IntrusiveNode<'a>,
{
    /// Construct a new, empty queue.
    #[inline]
    pub const fn new() -> Self {
        PrioQueue {
            tree: SplayTree::new(),
            min: None,
        }
    }

    /// Is this queue empty?
    #[inline]
    pub fn is_empty(&self) -> bool {
        debug_assert_eq!(self.min.is_none(), self.tree.is_empty());
        self.min.is_none()
    }

    /// Get the minimum element, without removing it.
    #[inline]
    pub fn peek(&self) -> Option<&'a T::Elem> {
        self.min
    }

    /// Get the tree holding the queued elements.
    #[inline]
    pub fn tree(&self) -> &SplayTree<'a, T> {
        &self.tree
    }

    /// Remove and return the minimum element, then splay the tree around
    /// where it was.
    pub fn pop(&mut self) -> Option<&'a T::Elem> {
        let elem = self.min?;
        self.min = self.tree.next(elem);
        self.tree.erase(elem);
        Some(elem)
    }

    /// Remove and return the minimum element, then splay the new minimum to
    /// the root instead of the erased element's parent.
    pub fn pop_unbalanced(&mut self) -> Option<&'a T::Elem> {
        let elem = self.min?;
        self.min = self.tree.next(elem);
        self.tree.erase_node(elem);
        if let Some(min) = self.min {
            self.tree.splay(min);
        }
        Some(elem)
    }
}

impl<'a, T> PrioQueue<'a, T>
where
    T: 'a + IntrusiveNode<'a>,
    T::Elem: TreeOrd<'a, T>,
{
    /// Find the slot for `elem`, and whether it will be the new minimum.
    fn slot_for(&self, elem: &'a T::Elem) -> (Slot<&'a T::Elem>, bool) {
        let mut slot = Slot::Root;
        let mut is_min = true;

        let mut cur = self.tree.root();
        while let Some(parent) = cur {
            if elem.tree_cmp(parent).is_le() {
                slot = Slot::Left(parent);
                cur = self.tree.left(parent);
            } else {
                slot = Slot::Right(parent);
                cur = self.tree.right(parent);
                is_min = false;
            }
        }

        (slot, is_min)
    }

    /// Add `elem` to the queue and splay it to the root.
    ///
    /// It is a logic error to push an element that is already in a `T` tree.
    pub fn push(&mut self, elem: &'a T::Elem) {
        let (slot, is_min) = self.slot_for(elem);
        if is_min {
            self.min = Some(elem);
        }
        self.tree.insert(elem, slot);
    }

    /// Add `elem` to the queue as a leaf, without splaying.
    ///
    /// It is a logic error to push an element that is already in a `T` tree.
    pub fn push_unbalanced(&mut self, elem: &'a T::Elem) {
        let (slot, is_min) = self.slot_for(elem);
        if is_min {
            self.min = Some(elem);
        }
        self.tree.link(elem, slot);
    }
}
