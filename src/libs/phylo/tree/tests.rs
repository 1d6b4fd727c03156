use super::*;
use crate::libs::phylo::{Edge, TreeError, ROOT_NAME};

fn edges(pairs: &[(&str, &str)]) -> Vec<Edge> {
    pairs.iter().map(|(s, t)| Edge::new(*s, *t)).collect()
}

fn names(tree: &Tree, ids: &[NodeId]) -> Vec<String> {
    ids.iter().map(|&id| tree.name(id).to_string()).collect()
}

#[test]
fn test_tree_construction() {
    let tree = Tree::from_edges(
        &edges(&[("Root", "A"), ("A", "B"), ("B", "C"), ("B", "D")]),
        ROOT_NAME,
    )
    .unwrap();

    assert_eq!(tree.len(), 5);
    assert_eq!(tree.name(tree.get_root()), "Root");
    assert_eq!(tree.edges().len(), 4);

    let ids: Vec<&str> = tree.node_ids().iter().map(String::as_str).collect();
    assert_eq!(ids, vec!["Root", "A", "B", "C", "D"]);

    let b = tree.get_node_by_name("B").unwrap();
    let node = tree.get_node(b).unwrap();
    assert_eq!(names(&tree, &node.children), vec!["C", "D"]);
    assert_eq!(node.parent, tree.get_node_by_name("A"));
    assert!(tree.get_node(tree.get_node_by_name("C").unwrap()).unwrap().is_leaf());

    assert_eq!(tree.get_node_by_name("Z"), None);
}

#[test]
fn test_node_id_order() {
    // Sources come first, then targets
    let tree = Tree::from_edges(&edges(&[("Root", "B"), ("A", "C"), ("Root", "A")]), "Root").unwrap();

    let ids: Vec<&str> = tree.node_ids().iter().map(String::as_str).collect();
    assert_eq!(ids, vec!["Root", "A", "B", "C"]);

    let root = tree.get_node(tree.get_root()).unwrap();
    assert_eq!(names(&tree, &root.children), vec!["B", "A"]);
}

#[test]
fn test_builder_get_or_create() {
    let mut builder = TreeBuilder::new("Root");
    let a = builder.get_or_create("A");
    let root = builder.get_or_create("Root");
    assert_eq!(builder.get_or_create("A"), a);
    assert_ne!(a, root);

    builder.add_edge(Edge::new("Root", "A")).unwrap();
    let tree = builder.finish().unwrap();
    assert_eq!(tree.len(), 2);
    assert_eq!(tree.get_root(), root);
}

#[test]
fn test_missing_root() {
    let err = Tree::from_edges(&edges(&[("A", "B")]), "Root").unwrap_err();
    assert_eq!(err, TreeError::MissingRoot("Root".to_string()));

    let err = Tree::from_edges(&[], "Root").unwrap_err();
    assert_eq!(err, TreeError::MissingRoot("Root".to_string()));
}

#[test]
fn test_custom_root_name() {
    let tree = Tree::from_edges(&edges(&[("WT", "A")]), "WT").unwrap();
    assert_eq!(tree.name(tree.get_root()), "WT");
}

#[test]
fn test_detached_cycle() {
    let err = Tree::from_edges(
        &edges(&[("Root", "A"), ("X", "Y"), ("Y", "X")]),
        "Root",
    )
    .unwrap_err();
    assert!(matches!(err, TreeError::Cycle(_)));
}

#[test]
fn test_cycle_through_root() {
    let err = Tree::from_edges(&edges(&[("Root", "A"), ("A", "B"), ("B", "Root")]), "Root")
        .unwrap_err();
    assert!(matches!(err, TreeError::Cycle(_)));
}

#[test]
fn test_self_loop() {
    let err = Tree::from_edges(&edges(&[("Root", "A"), ("A", "A")]), "Root").unwrap_err();
    assert_eq!(err, TreeError::Cycle("A".to_string()));
}

#[test]
fn test_multiple_parents() {
    let err = Tree::from_edges(&edges(&[("Root", "A"), ("Root", "B"), ("B", "A")]), "Root")
        .unwrap_err();
    assert_eq!(
        err,
        TreeError::MultipleParents {
            child: "A".to_string(),
            parent: "Root".to_string(),
            other: "B".to_string(),
        }
    );
}

#[test]
fn test_duplicate_edge() {
    let tree = Tree::from_edges(&edges(&[("Root", "A"), ("Root", "A")]), "Root").unwrap();

    let root = tree.get_node(tree.get_root()).unwrap();
    assert_eq!(root.children.len(), 1);
    // The edge list keeps the input pairs
    assert_eq!(tree.edges().len(), 2);
}

#[test]
fn test_tree_traversals() {
    //     Root
    //     /  \
    //    A    B
    //   / \    \
    //  C   D    E
    let tree = Tree::from_edges(
        &edges(&[("Root", "A"), ("Root", "B"), ("A", "C"), ("A", "D"), ("B", "E")]),
        "Root",
    )
    .unwrap();

    let pre = tree.preorder(tree.get_root()).unwrap();
    assert_eq!(names(&tree, &pre), vec!["Root", "A", "C", "D", "B", "E"]);

    let level = tree.levelorder(tree.get_root()).unwrap();
    let level: Vec<(&str, usize)> = level.iter().map(|&(id, d)| (tree.name(id), d)).collect();
    assert_eq!(
        level,
        vec![("Root", 0), ("A", 1), ("B", 1), ("C", 2), ("D", 2), ("E", 2)]
    );

    let a = tree.get_node_by_name("A").unwrap();
    assert_eq!(names(&tree, &tree.preorder(a).unwrap()), vec!["A", "C", "D"]);

    // Unknown start
    assert!(tree.preorder(100).unwrap().is_empty());
}

#[test]
fn test_tree_paths() {
    let tree = Tree::from_edges(
        &edges(&[("Root", "A"), ("Root", "B"), ("A", "C"), ("A", "D")]),
        "Root",
    )
    .unwrap();
    let c = tree.get_node_by_name("C").unwrap();
    let b = tree.get_node_by_name("B").unwrap();

    let path = tree.get_path_from_root(c).unwrap();
    assert_eq!(names(&tree, &path), vec!["Root", "A", "C"]);

    let path = tree.get_path_from_root(b).unwrap();
    assert_eq!(names(&tree, &path), vec!["Root", "B"]);
}

#[test]
fn test_tree_stat() {
    let tree = Tree::from_edges(
        &edges(&[("Root", "A"), ("A", "B"), ("A", "C"), ("C", "D")]),
        "Root",
    )
    .unwrap();

    let leaves = tree.get_leaves().unwrap();
    assert_eq!(names(&tree, &leaves), vec!["B", "D"]);
    assert_eq!(tree.max_depth().unwrap(), 3);
    assert_eq!(tree.count_branchings(), 1);
}
