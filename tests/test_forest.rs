use itertools::Itertools;
use ntree::{Cursor, Forest, NodeId, Nodelike, TreeError};

fn child_values(forest: &Forest<&'static str>, node: NodeId) -> Vec<&'static str> {
    forest
        .children(node)
        .unwrap()
        .iter()
        .map(|c| *forest[*c].get())
        .collect_vec()
}

#[test_log::test]
fn test_build_insert_detach() {
    let mut forest = Forest::new();
    let r = forest.alloc("R").unwrap();
    for value in ["A", "B", "C"] {
        forest.add_child(r, value).unwrap();
    }
    assert_eq!(forest.out_degree(r).unwrap(), 3);
    let b = forest.child(r, 1).unwrap();
    assert_eq!(forest.value(b), Some(&"B"));
    assert_eq!(forest.depth(r, b).unwrap(), 1);
    assert_eq!(forest.height(r).unwrap(), 1);

    let d = forest.insert_child(b, "D", 0).unwrap();
    assert_eq!(forest.height(r).unwrap(), 2);
    assert_eq!(forest.height_of(b).unwrap(), 1);

    let subtree = forest.detach(b).unwrap();
    assert_eq!(forest.value(subtree), Some(&"B"));
    assert_eq!(forest.parent(subtree), None);
    assert_eq!(forest.out_degree(subtree).unwrap(), 1);
    assert_eq!(forest.child(subtree, 0), Some(d));

    assert_eq!(forest.out_degree(r).unwrap(), 2);
    assert_eq!(child_values(&forest, r), &["A", "C"]);
    let indices = forest
        .children(r)
        .unwrap()
        .iter()
        .map(|c| forest.index_in_parent(*c).unwrap())
        .collect_vec();
    assert_eq!(indices, &[0, 1]);
    assert_eq!(forest.height(r).unwrap(), 1);
}

#[test_log::test]
fn test_moving_subtrees_between_trees() {
    let mut forest = Forest::new();
    let left = forest.alloc("left").unwrap();
    let right = forest.alloc("right").unwrap();
    let branch = forest.add_child(left, "branch").unwrap();
    let twig = forest.add_child(branch, "twig").unwrap();
    forest.add_child(twig, "leaf").unwrap();
    forest.add_child(right, "x").unwrap();

    assert_eq!(forest.height(left).unwrap(), 3);
    assert_eq!(forest.height(right).unwrap(), 1);

    let twig = forest.detach(twig).unwrap();
    forest.insert_subtree(right, twig, 0).unwrap();
    assert_eq!(forest.height(left).unwrap(), 1);
    assert_eq!(forest.height_of(branch).unwrap(), 0);
    assert_eq!(forest.height(right).unwrap(), 2);
    assert_eq!(child_values(&forest, right), &["twig", "x"]);
    assert_eq!(forest.root_of(twig).unwrap(), right);
    assert_eq!(forest.depth(left, twig), Err(TreeError::NotInTree { node: twig, tree: left }));

    // Moving a whole tree below another one
    forest.add_subtree(branch, right).unwrap();
    assert_eq!(forest.height(left).unwrap(), 4);
    assert_eq!(forest.level(left, twig).unwrap(), 4);
    assert_eq!(forest.roots().collect_vec(), &[left]);
    assert_eq!(forest.add_subtree(twig, left), Err(TreeError::Cycle { parent: twig, subtree: left }));
}

#[test_log::test]
fn test_all_traversals_on_one_tree() {
    // Layout
    //         a
    //      /  |  \
    //     b   e   f
    //    / \      |
    //   c   d     g
    let mut forest = Forest::new();
    let a = forest.alloc('a').unwrap();
    let b = forest.add_child(a, 'b').unwrap();
    forest.add_child(b, 'c').unwrap();
    let d = forest.add_child(b, 'd').unwrap();
    forest.add_child(a, 'e').unwrap();
    let f = forest.add_child(a, 'f').unwrap();
    let g = forest.add_child(f, 'g').unwrap();

    let values = |nodes: Vec<NodeId>| nodes.into_iter().map(|n| *forest[n].get()).collect::<String>();

    assert_eq!(values(forest.iter_preorder(a).unwrap().collect_vec()), "abcdefg");
    assert_eq!(values(forest.iter_postorder(a).unwrap().collect_vec()), "cdbegfa");
    assert_eq!(values(forest.iter_leaves(a).unwrap().collect_vec()), "cdeg");
    assert_eq!(values(forest.iter_ancestors(a, g).unwrap().collect_vec()), "gfa");
    assert_eq!(values(forest.iter_ancestors(a, d).unwrap().collect_vec()), "dba");

    // A walk can be resumed as a cursor and turned around
    let mut walk = forest.iter_preorder(a).unwrap();
    assert_eq!(walk.by_ref().take(4).count(), 4);
    let mut cursor = walk.into_cursor();
    assert_eq!(cursor.current(), Some(d));
    assert_eq!(cursor.retreat(&forest).unwrap().map(|n| *forest[n].get()), Some('c'));
    assert_eq!(cursor.advance(&forest).unwrap(), Some(d));
    assert_eq!(cursor.advance(&forest).unwrap().map(|n| *forest[n].get()), Some('e'));

    let mut leaves = Cursor::leaves_first(&forest, a).unwrap();
    let mut seen = String::new();
    while leaves.has_next() {
        leaves.advance(&forest).unwrap();
        let node = leaves.current().unwrap();
        assert!(forest[node].is_leaf());
        seen.push(*leaves.current_value(&forest).unwrap());
    }
    assert_eq!(seen, "cdeg");
}

#[test_log::test]
fn test_payloads_are_handed_back() {
    use std::rc::Rc;

    let shared = Rc::new(String::from("shared"));
    let mut forest = Forest::new();
    let root = forest.alloc(Rc::clone(&shared)).unwrap();
    forest.add_child(root, Rc::clone(&shared)).unwrap();
    assert_eq!(Rc::strong_count(&shared), 3);

    let released = forest.free(root).unwrap();
    assert_eq!(released.len(), 2);
    assert!(forest.is_empty());
    drop(released);
    assert_eq!(Rc::strong_count(&shared), 1);
}
