use crate::single::{alloc_all, insert_unbalanced, SingleTree};
use intrusive_splaytree::{PrioQueue, SplayTree};

#[test]
fn write_tree_sideways() {
    let arena = bumpalo::Bump::new();
    let mut tree = SplayTree::<SingleTree>::new();
    for elem in alloc_all(&arena, &[2, 1, 3, 4]) {
        insert_unbalanced(&mut tree, elem);
    }

    let mut out = String::new();
    tree.write_tree(&mut out).unwrap();
    assert_eq!(
        out,
        "        /004\n\
         \x20   /003\n\
         *002\n\
         \x20   \\001\n"
    );
}

#[test]
fn dotgraph() {
    let arena = bumpalo::Bump::new();
    let mut tree = SplayTree::<SingleTree>::new();
    for elem in alloc_all(&arena, &[2, 1, 3]) {
        insert_unbalanced(&mut tree, elem);
    }

    let mut out = String::new();
    tree.dotgraph(&mut out).unwrap();

    let expected = [
        "digraph G {",
        "  graph [ordering=\"out\"];",
        "002;",
        "002:sw -> 001;",
        "002:se -> 003;",
        "001;",
        "nil0 [label=\"NIL\", shape=box, color=\"black\"];",
        "001:sw -> nil0 [color=\"black\"];",
        "nil1 [label=\"NIL\", shape=box, color=\"black\"];",
        "001:se -> nil1 [color=\"black\"];",
        "003;",
        "nil2 [label=\"NIL\", shape=box, color=\"black\"];",
        "003:sw -> nil2 [color=\"black\"];",
        "nil3 [label=\"NIL\", shape=box, color=\"black\"];",
        "003:se -> nil3 [color=\"black\"];",
        "}",
    ];
    assert_eq!(out.lines().collect::<Vec<_>>(), expected);
}

#[test]
fn render_empty() {
    let tree = SplayTree::<SingleTree>::new();

    let mut out = String::new();
    tree.write_tree(&mut out).unwrap();
    assert_eq!(out, "");

    tree.dotgraph(&mut out).unwrap();
    assert_eq!(out, "digraph G {\n  graph [ordering=\"out\"];\n}\n");
}

#[test]
fn render_queue_contents() {
    let arena = bumpalo::Bump::new();
    let mut queue = PrioQueue::<SingleTree>::new();
    for elem in alloc_all(&arena, &[1, 2]) {
        queue.push(elem);
    }

    // The last push was splayed to the root.
    let mut out = String::new();
    queue.tree().write_tree(&mut out).unwrap();
    assert_eq!(out, "*002\n    \\001\n");
}
