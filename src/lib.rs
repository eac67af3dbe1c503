#![doc = include_str!("../README.md")]
#![deny(missing_docs)]
#![deny(missing_debug_implementations)]
#![no_std]

mod debug;
mod internal;
mod node;
mod prioqueue;

pub use node::Node;
use node::is;
pub use prioqueue::PrioQueue;

use core::cmp;
use core::fmt;
use core::iter::FusedIterator;
use core::marker::PhantomData;

/// Defines how to get the intrusive node from a particular kind of
/// `SplayTree`'s element type, and how to get back from the node to its
/// element.
///
/// Don't implement this by hand -- doing so is both boring and dangerous!
/// Instead, use the `impl_intrusive_node!` macro.
pub unsafe trait IntrusiveNode<'a>
where
    Self: Sized,
{
    /// The element struct type that contains a node for this tree.
    type Elem;

    /// Get the node for this tree from the given element.
    fn elem_to_node(elem: &'a Self::Elem) -> &'a Node<'a>;

    /// Get the element containing this node, by subtracting the node field's
    /// offset from the node's address.
    ///
    /// ## Safety
    ///
    /// Given a node inside a different element type, or a node for a different
    /// tree within the same element type, this method will result in memory
    /// unsafety.
    unsafe fn node_to_elem(node: &'a Node<'a>) -> &'a Self::Elem;
}

/// Implement `IntrusiveNode` for a particular kind of `SplayTree` and its
/// element type.
///
/// The `node` names the field of the element holding the `Node` that this
/// kind of tree links through.
#[macro_export]
macro_rules! impl_intrusive_node {
    (
        impl< $($typarams:tt),* >
            IntrusiveNode<$intrusive_node_lifetime:tt>
            for $tree:ty
        where
            type Elem = $elem:ty ,
            node = $node:ident ;
    ) => {
        unsafe impl< $( $typarams )* > $crate::IntrusiveNode<$intrusive_node_lifetime> for $tree {
            type Elem = $elem;

            #[inline]
            fn elem_to_node(
                elem: & $intrusive_node_lifetime Self::Elem
            ) -> & $intrusive_node_lifetime $crate::Node< $intrusive_node_lifetime > {
                &elem.$node
            }

            #[inline]
            unsafe fn node_to_elem(
                node: & $intrusive_node_lifetime $crate::Node< $intrusive_node_lifetime >
            ) -> & $intrusive_node_lifetime Self::Elem {
                let offset = ::core::mem::offset_of!($elem, $node);

                // The element's provenance was exposed when it was linked into
                // the tree.
                let node = ::core::ptr::with_exposed_provenance::<u8>(
                    node as *const $crate::Node<'_> as usize
                );

                unsafe { &*node.sub(offset).cast::<$elem>() }
            }
        }
    }
}

/// A total ordering between the `Self` type and the tree's element type
/// `T::Elem`.
///
/// The tree itself never compares anything: callers decide where new elements
/// go. Comparator-driven helpers built on top of the tree, such as
/// `PrioQueue`, use this trait.
pub trait TreeOrd<'a, T: IntrusiveNode<'a>> {
    /// What is the ordering relationship between `self` and the given tree
    /// element?
    fn tree_cmp(&self, elem: &'a T::Elem) -> cmp::Ordering;
}

/// An empty position in a tree where a new leaf can be attached.
///
/// Callers find a slot by descending from `SplayTree::root` with their own
/// ordering, using `SplayTree::left` and `SplayTree::right`, until they reach
/// a missing child.
#[derive(Clone, Copy, Debug)]
pub enum Slot<P> {
    /// The root of an empty tree.
    Root,
    /// The missing left child of the given parent.
    Left(P),
    /// The missing right child of the given parent.
    Right(P),
}

impl<P> Slot<P> {
    /// The parent the new leaf will hang from, if any.
    #[inline]
    pub fn parent(self) -> Option<P> {
        match self {
            Slot::Root => None,
            Slot::Left(p) | Slot::Right(p) => Some(p),
        }
    }

    /// Convert the parent of this slot.
    #[inline]
    pub fn map<Q, F: FnOnce(P) -> Q>(self, f: F) -> Slot<Q> {
        match self {
            Slot::Root => Slot::Root,
            Slot::Left(p) => Slot::Left(f(p)),
            Slot::Right(p) => Slot::Right(f(p)),
        }
    }
}

/// An intrusive splay tree.
///
/// The tree is parameterized by some marker type `T` whose `IntrusiveNode`
/// implementation defines:
///
/// * the element type contained in this tree: `T::Elem`,
/// * how to get the intrusive node for this tree within an element,
/// * and how to get the container element from a given intrusive node for this
/// tree.
///
/// The tree does not know how its elements are ordered. New elements are
/// attached at a `Slot` the caller found, and in-order traversal reflects the
/// order the caller maintained.
pub struct SplayTree<'a, T>
where
    T: IntrusiveNode<'a>,
    T::Elem: 'a,
{
    tree: internal::SplayTree<'a>,
    _phantom: PhantomData<&'a T::Elem>,
}

impl<'a, T> Default for SplayTree<'a, T>
where
    T: 'a + IntrusiveNode<'a>,
    T::Elem: 'a,
{
    #[inline]
    fn default() -> SplayTree<'a, T> {
        SplayTree::new()
    }
}

impl<'a, T> fmt::Debug for SplayTree<'a, T>
where
    T: 'a + IntrusiveNode<'a>,
    T::Elem: 'a + fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

impl<'a, T> SplayTree<'a, T>
where
    T: 'a + IntrusiveNode<'a>,
{
    /// Construct a new, empty tree.
    #[inline]
    pub const fn new() -> Self {
        Self {
            tree: internal::SplayTree::new(),
            _phantom: PhantomData,
        }
    }

    /// Is this tree empty?
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.tree.is_empty()
    }

    #[inline]
    fn elem(node: &'a Node<'a>) -> &'a T::Elem {
        // Every node reachable from this tree was linked through
        // `T::elem_to_node`, so it lives inside a `T::Elem`.
        unsafe { T::node_to_elem(node) }
    }

    /// Get a reference to the root element, if any exists.
    #[inline]
    pub fn root(&self) -> Option<&'a T::Elem> {
        self.tree.root().map(Self::elem)
    }

    /// Get the parent of the given element, if it has one.
    #[inline]
    pub fn parent(&self, elem: &'a T::Elem) -> Option<&'a T::Elem> {
        T::elem_to_node(elem).parent.get().map(Self::elem)
    }

    /// Get the left child of the given element, if it has one.
    #[inline]
    pub fn left(&self, elem: &'a T::Elem) -> Option<&'a T::Elem> {
        T::elem_to_node(elem).left.get().map(Self::elem)
    }

    /// Get the right child of the given element, if it has one.
    #[inline]
    pub fn right(&self, elem: &'a T::Elem) -> Option<&'a T::Elem> {
        T::elem_to_node(elem).right.get().map(Self::elem)
    }

    /// Attach `elem` as a new leaf at `slot`, without splaying it.
    ///
    /// The result is a valid, but possibly unbalanced, tree. Call `splay` (or
    /// use `insert` instead) to restore the splay tree's amortized bounds.
    ///
    /// It is a logic error to link an element that is already in a `T` tree,
    /// or to pass a slot that is not empty.
    ///
    /// ## Panics
    ///
    /// If `debug_assertions` are enabled, then this function may panic if
    /// `elem` is already in a `T` tree or if `slot` is occupied. If
    /// `debug_assertions` are not defined, the behavior is safe, but
    /// unspecified.
    #[inline]
    pub fn link(&mut self, elem: &'a T::Elem, slot: Slot<&'a T::Elem>) {
        // To satisfy MIRI, we need to expose provenance of element added to the
        // tree, so that when we go from node-to-elem, we can use this exposed
        // provenance. While the lifetimes ensure that the element remains
        // borrowed while inserted in the tree, we don't have a good way to
        // plumb the original element's borrowed provenance through to all
        // node-to-elem conversions.
        let _ = (elem as *const T::Elem).expose_provenance();

        self.tree
            .link_node(T::elem_to_node(elem), slot.map(T::elem_to_node));
    }

    /// Attach `elem` as a new leaf at `slot` and splay it to the root.
    ///
    /// The same contract as `link` applies.
    #[inline]
    pub fn insert(&mut self, elem: &'a T::Elem, slot: Slot<&'a T::Elem>) {
        let _ = (elem as *const T::Elem).expose_provenance();

        self.tree
            .insert(T::elem_to_node(elem), slot.map(T::elem_to_node));
    }

    /// Splay `elem`, which must be in this tree, up to the root.
    #[inline]
    pub fn splay(&mut self, elem: &'a T::Elem) {
        self.tree.splay(T::elem_to_node(elem));
    }

    /// Remove `elem` from the tree without rebalancing.
    ///
    /// Returns the element whose subtree lost depth, if any. Splaying it
    /// restores the tree's balance guarantees; `erase` does both steps.
    ///
    /// Afterwards, `elem` is unlinked and may be inserted again.
    ///
    /// ## Panics
    ///
    /// If `debug_assertions` are enabled, then this function may panic if
    /// `elem` is not in this tree. If `debug_assertions` are not defined, the
    /// behavior is safe, but unspecified.
    #[inline]
    pub fn erase_node(&mut self, elem: &'a T::Elem) -> Option<&'a T::Elem> {
        self.tree
            .erase_node(T::elem_to_node(elem))
            .map(Self::elem)
    }

    /// Remove `elem` from the tree, then splay the element whose subtree lost
    /// depth.
    #[inline]
    pub fn erase(&mut self, elem: &'a T::Elem) {
        self.tree.erase(T::elem_to_node(elem));
    }

    /// Get the minimum element in the tree, without splaying.
    #[inline]
    pub fn first(&self) -> Option<&'a T::Elem> {
        self.tree.first().map(Self::elem)
    }

    /// Get the maximum element in the tree, without splaying.
    #[inline]
    pub fn last(&self) -> Option<&'a T::Elem> {
        self.tree.last().map(Self::elem)
    }

    /// Get the in-order successor of `elem`, which must be in this tree.
    #[inline]
    pub fn next(&self, elem: &'a T::Elem) -> Option<&'a T::Elem> {
        T::elem_to_node(elem).next().map(Self::elem)
    }

    /// Get the in-order predecessor of `elem`, which must be in this tree.
    #[inline]
    pub fn prev(&self, elem: &'a T::Elem) -> Option<&'a T::Elem> {
        T::elem_to_node(elem).prev().map(Self::elem)
    }

    /// Iterate over the elements in order.
    #[inline]
    pub fn iter(&self) -> Iter<'a, T> {
        Iter {
            front: self.tree.first(),
            back: self.tree.last(),
            _phantom: PhantomData,
        }
    }

    /// Walk the tree in order.
    ///
    /// The `C` type controls whether iteration should continue, or break and
    /// return a `C::Result` value. You can use `()` as `C`, and that always
    /// continues iteration. Using `Result<(), E>` as `C` allows you to halt
    /// iteration on error, and propagate the error value. Using `Option<T>` as
    /// `C` allows you to search for some value, halt iteration when its found,
    /// and return it.
    #[inline]
    pub fn walk<F, C>(&self, mut f: F) -> Option<C::Result>
    where
        F: FnMut(&'a T::Elem) -> C,
        C: WalkControl,
    {
        self.iter().find_map(|elem| f(elem).should_break())
    }
}

/// An in-order iterator over a `SplayTree`'s elements.
///
/// The tree must not be modified while iterating.
pub struct Iter<'a, T>
where
    T: IntrusiveNode<'a>,
    T::Elem: 'a,
{
    front: Option<&'a Node<'a>>,
    back: Option<&'a Node<'a>>,
    _phantom: PhantomData<&'a T::Elem>,
}

impl<'a, T> fmt::Debug for Iter<'a, T>
where
    T: 'a + IntrusiveNode<'a>,
{
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("Iter")
            .field("front", &self.front)
            .field("back", &self.back)
            .finish()
    }
}

impl<'a, T> Clone for Iter<'a, T>
where
    T: 'a + IntrusiveNode<'a>,
{
    fn clone(&self) -> Self {
        Iter {
            front: self.front,
            back: self.back,
            _phantom: PhantomData,
        }
    }
}

impl<'a, T> Iterator for Iter<'a, T>
where
    T: 'a + IntrusiveNode<'a>,
{
    type Item = &'a T::Elem;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        let node = self.front?;
        if is(self.back, node) {
            self.front = None;
            self.back = None;
        } else {
            self.front = node.next();
        }
        Some(SplayTree::<T>::elem(node))
    }
}

impl<'a, T> DoubleEndedIterator for Iter<'a, T>
where
    T: 'a + IntrusiveNode<'a>,
{
    #[inline]
    fn next_back(&mut self) -> Option<Self::Item> {
        let node = self.back?;
        if is(self.front, node) {
            self.front = None;
            self.back = None;
        } else {
            self.back = node.prev();
        }
        Some(SplayTree::<T>::elem(node))
    }
}

impl<'a, T> FusedIterator for Iter<'a, T> where T: 'a + IntrusiveNode<'a> {}

/// A trait that guides whether `SplayTree::walk` should continue or break, and
/// what the return value is.
pub trait WalkControl {
    /// The result type that is returned when we break.
    type Result;

    /// If iteration should halt, return `Some`. If iteration should continue,
    /// return `None`.
    fn should_break(self) -> Option<Self::Result>;
}

impl WalkControl for () {
    type Result = ();

    fn should_break(self) -> Option<()> {
        None
    }
}

impl<T> WalkControl for Option<T> {
    type Result = T;

    fn should_break(mut self) -> Option<T> {
        self.take()
    }
}

impl<E> WalkControl for Result<(), E> {
    type Result = E;

    fn should_break(self) -> Option<E> {
        self.err()
    }
}
