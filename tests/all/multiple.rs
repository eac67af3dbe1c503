use intrusive_splaytree::{impl_intrusive_node, IntrusiveNode, Node, Slot, SplayTree};
use std::cmp::min;

#[derive(Debug, Default)]
pub struct Multiple<'a> {
    by_x: Node<'a>,
    by_y: Node<'a>,
    pub x: usize,
    pub y: usize,
}

impl<'a> Multiple<'a> {
    pub fn new(x: usize, y: usize) -> Multiple<'a> {
        Multiple {
            x,
            y,
            ..Default::default()
        }
    }
}

pub struct ByX;

impl_intrusive_node! {
    impl<'a> IntrusiveNode<'a> for ByX
    where
        type Elem = Multiple<'a>,
        node = by_x;
}

pub struct ByY;

intrusive_splaytree::impl_intrusive_node! {
    impl<'a> IntrusiveNode<'a> for ByY
    where
        type Elem = Multiple<'a>,
        node = by_y;
}

/// Descend `tree` to the empty slot for `elem`, ordering by `key`.
pub fn slot_by<'a, T, K>(
    tree: &SplayTree<'a, T>,
    elem: &'a Multiple<'a>,
    key: K,
) -> Slot<&'a Multiple<'a>>
where
    T: 'a + IntrusiveNode<'a, Elem = Multiple<'a>>,
    K: Fn(&Multiple<'a>) -> usize,
{
    let mut slot = Slot::Root;
    let mut cur = tree.root();
    while let Some(parent) = cur {
        if key(elem) <= key(parent) {
            slot = Slot::Left(parent);
            cur = tree.left(parent);
        } else {
            slot = Slot::Right(parent);
            cur = tree.right(parent);
        }
    }
    slot
}

pub fn trees_from_xs_and_ys<'a>(
    arena: &'a bumpalo::Bump,
    xs: Vec<usize>,
    ys: Vec<usize>,
) -> (
    SplayTree<'a, ByX>,
    SplayTree<'a, ByY>,
    Vec<&'a Multiple<'a>>,
) {
    let min_len = min(xs.len(), ys.len());
    let mut xs = xs;
    let mut ys = ys;
    xs.truncate(min_len);
    ys.truncate(min_len);

    let mut by_x = SplayTree::<ByX>::default();
    let mut by_y = SplayTree::<ByY>::default();
    let mut elems = Vec::with_capacity(min_len);
    for (x, y) in xs.into_iter().zip(ys) {
        let m: &'a Multiple<'a> = arena.alloc(Multiple::new(x, y));

        let slot = slot_by(&by_x, m, |m| m.x);
        by_x.insert(m, slot);

        let slot = slot_by(&by_y, m, |m| m.y);
        by_y.insert(m, slot);

        elems.push(m);
    }

    (by_x, by_y, elems)
}
