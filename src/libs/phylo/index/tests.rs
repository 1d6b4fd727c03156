use super::*;
use crate::libs::phylo::Edge;
use std::collections::BTreeSet;

fn build(pairs: &[(&str, &str)]) -> Tree {
    let edges: Vec<Edge> = pairs.iter().map(|(s, t)| Edge::new(*s, *t)).collect();
    Tree::from_edges(&edges, "Root").unwrap()
}

fn set(ids: &[String]) -> BTreeSet<&str> {
    ids.iter().map(String::as_str).collect()
}

//        Root
//          |
//          A
//        / | \
//       B  C  D
//       |     |
//       E     F
//            / \
//           G   H
//           |
//           I
fn clonal() -> Tree {
    build(&[
        ("Root", "A"),
        ("A", "B"),
        ("A", "C"),
        ("A", "D"),
        ("B", "E"),
        ("D", "F"),
        ("F", "G"),
        ("F", "H"),
        ("G", "I"),
    ])
}

#[test]
fn test_index_small_example() {
    let tree = build(&[("Root", "A"), ("A", "B"), ("B", "C"), ("B", "D")]);
    let index = TreeIndex::build(&tree).unwrap();

    assert_eq!(index.descendants("Root"), ["A", "B", "C", "D"]);
    assert_eq!(index.descendants("A"), ["B", "C", "D"]);
    assert!(index.descendants("C").is_empty());

    assert_eq!(set(index.ancestors("C")), BTreeSet::from(["Root", "A", "B"]));
    assert!(index.ancestors("Root").is_empty());

    assert_eq!(index.direct_children("B"), ["C", "D"]);
    assert!(index.direct_children("D").is_empty());
    assert_eq!(index.direct_parent("D"), Some("B"));
    assert_eq!(index.direct_parent("Root"), None);

    assert_eq!(index.siblings("C"), Some(&["D".to_string()][..]));
    assert_eq!(index.siblings("D"), Some(&["C".to_string()][..]));
    assert_eq!(index.siblings("A"), None);

    let chains: Vec<(&str, Vec<&str>)> = index
        .chain_map()
        .iter()
        .map(|(k, v)| (k.as_str(), v.iter().map(String::as_str).collect()))
        .collect();
    assert_eq!(
        chains,
        vec![("Root", vec!["A", "B"]), ("C", vec![]), ("D", vec![])]
    );
}

#[test]
fn test_ancestor_scan_order() {
    let tree = build(&[("Root", "A"), ("A", "B"), ("B", "C"), ("B", "D")]);
    let index = TreeIndex::build(&tree).unwrap();

    // Node set order: Root, A, B, C, D
    assert_eq!(index.ancestors("C"), ["Root", "A", "B"]);
    assert_eq!(index.ancestors("A"), ["Root"]);
}

#[test]
fn test_unknown_ids() {
    let index = TreeIndex::build(&clonal()).unwrap();

    assert!(index.descendants("Z").is_empty());
    assert!(index.ancestors("Z").is_empty());
    assert!(index.direct_children("Z").is_empty());
    assert_eq!(index.direct_parent("Z"), None);
    assert_eq!(index.siblings("Z"), None);
    assert_eq!(index.chain("Z"), None);
}

#[test]
fn test_parent_is_ancestor() {
    let tree = clonal();
    let index = TreeIndex::build(&tree).unwrap();

    for name in tree.node_ids() {
        match index.direct_parent(name) {
            Some(parent) => {
                assert!(index.ancestors(name).iter().any(|a| a == parent));

                let mut expected = set(index.ancestors(parent));
                expected.insert(parent);
                assert_eq!(set(index.ancestors(name)), expected);
            }
            None => assert_eq!(name, "Root"),
        }
    }
}

#[test]
fn test_ancestors_match_paths() {
    let tree = clonal();
    let index = TreeIndex::build(&tree).unwrap();

    for node in tree.nodes() {
        let path = tree.get_path_from_root(node.id).unwrap();
        let expected: BTreeSet<&str> = path[..path.len() - 1]
            .iter()
            .map(|&id| tree.name(id))
            .collect();
        assert_eq!(set(index.ancestors(&node.name)), expected);
    }
}

#[test]
fn test_descendant_ancestor_duality() {
    let tree = clonal();
    let index = TreeIndex::build(&tree).unwrap();

    for a in tree.node_ids() {
        assert!(!index.descendants(a).contains(a));
        assert!(!index.ancestors(a).contains(a));
        assert!(set(index.descendants(a)).is_disjoint(&set(index.ancestors(a))));

        for b in tree.node_ids() {
            assert_eq!(
                index.descendants(a).contains(b),
                index.ancestors(b).contains(a),
                "{} / {}",
                a,
                b
            );
        }
    }
}

#[test]
fn test_siblings_symmetric() {
    let tree = clonal();
    let index = TreeIndex::build(&tree).unwrap();

    assert_eq!(set(index.siblings("C").unwrap()), BTreeSet::from(["B", "D"]));
    assert_eq!(index.siblings("B").unwrap(), ["C", "D"]);
    assert_eq!(index.siblings("E"), None);

    for (a, sibs) in index.sibling_map() {
        for b in sibs {
            assert_ne!(a, b);
            assert!(index.siblings(b).unwrap().contains(a));
            assert_eq!(index.direct_parent(a), index.direct_parent(b));
        }
    }
}

#[test]
fn test_children_parent_consistent() {
    let tree = clonal();
    let index = TreeIndex::build(&tree).unwrap();

    assert_eq!(index.direct_children_map().len(), tree.len());
    assert_eq!(index.direct_parent_map().len(), tree.len() - 1);

    for (parent, children) in index.direct_children_map() {
        for child in children {
            assert_eq!(index.direct_parent(child), Some(parent.as_str()));
        }
    }
}

#[test]
fn test_chains_partition() {
    let tree = clonal();
    let index = TreeIndex::build(&tree).unwrap();

    assert_eq!(index.chain("Root").unwrap(), ["A"]);
    assert_eq!(index.chain("B").unwrap(), ["E"]);
    assert!(index.chain("C").unwrap().is_empty());
    assert_eq!(index.chain("D").unwrap(), ["F"]);
    assert_eq!(index.chain("G").unwrap(), ["I"]);
    assert!(index.chain("H").unwrap().is_empty());
    assert_eq!(index.chain("A"), None);

    let mut seen = BTreeSet::new();
    for (start, members) in index.chain_map() {
        assert!(seen.insert(start.as_str()));
        for m in members {
            assert!(seen.insert(m.as_str()), "{} appears twice", m);
        }
    }
    let all: BTreeSet<&str> = tree.node_ids().iter().map(String::as_str).collect();
    assert_eq!(seen, all);
}

#[test]
fn test_single_node_chain() {
    let tree = build(&[("Root", "A"), ("A", "B")]);
    let index = TreeIndex::build(&tree).unwrap();

    assert_eq!(index.chain_map().len(), 1);
    assert_eq!(index.chain("Root").unwrap(), ["A", "B"]);
}

#[test]
fn test_duplicate_edges_do_not_double_count() {
    let tree = build(&[("Root", "A"), ("Root", "B"), ("Root", "A")]);
    let index = TreeIndex::build(&tree).unwrap();

    assert_eq!(index.descendants("Root"), ["A", "B"]);
    assert_eq!(index.direct_children("Root"), ["A", "B"]);
    assert_eq!(index.siblings("A").unwrap(), ["B"]);
    assert_eq!(index.ancestors("A"), ["Root"]);
}

#[test]
fn test_detached_nodes() {
    // X -> Y never hangs under Root
    let tree = build(&[("Root", "A"), ("X", "Y")]);
    let index = TreeIndex::build(&tree).unwrap();

    assert_eq!(index.descendants("X"), ["Y"]);
    assert_eq!(index.ancestors("Y"), ["X"]);
    assert_eq!(index.direct_parent("Y"), None);
    assert_eq!(index.chain("X"), None);
    assert_eq!(index.chain("Root").unwrap(), ["A"]);
}

#[test]
fn test_rebuild_is_idempotent() {
    let first = TreeIndex::build(&clonal()).unwrap();
    let second = TreeIndex::build(&clonal()).unwrap();
    assert_eq!(first, second);
    assert_eq!(clonal().index().unwrap(), first);
}
