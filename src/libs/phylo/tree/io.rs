use super::Tree;
use crate::libs::phylo::node::NodeId;

/// Serialize tree to Newick string.
pub fn to_newick(tree: &Tree) -> String {
    to_newick_with_format(tree, "")
}

/// Serialize tree to Newick string with custom formatting options.
/// Currently supports indentation (empty for single line).
pub fn to_newick_with_format(tree: &Tree, indent: &str) -> String {
    let is_pretty = !indent.is_empty();

    // (node, depth, children already rendered)
    let mut stack: Vec<(NodeId, usize, bool)> = vec![(tree.get_root(), 0, false)];
    // Rendered subtrees, children in order at the tail
    let mut done: Vec<String> = Vec::new();

    while let Some((node_id, depth, expanded)) = stack.pop() {
        let node = &tree.nodes[node_id];
        let my_indent = if is_pretty {
            indent.repeat(depth)
        } else {
            String::new()
        };
        let label = quote_label(&node.name);

        if node.children.is_empty() {
            done.push(format!("{}{}", my_indent, label));
        } else if !expanded {
            stack.push((node_id, depth, true));
            for &child in node.children.iter().rev() {
                stack.push((child, depth + 1, false));
            }
        } else {
            let children_strs = done.split_off(done.len() - node.children.len());
            let s = if is_pretty {
                format!(
                    "{}(\n{}\n{}){}",
                    my_indent,
                    children_strs.join(",\n"),
                    my_indent,
                    label
                )
            } else {
                format!("({}){}", children_strs.join(","), label)
            };
            done.push(s);
        }
    }

    let mut s = done.pop().unwrap_or_default();
    s.push(';');
    s
}

/// Serialize the tree to a Graphviz DOT string.
///
/// Nodes are emitted in preorder from the root, so genotypes detached from
/// the root are left out.
pub fn to_dot(tree: &Tree) -> String {
    let mut s = String::from("digraph Tree {\n");
    s.push_str("    node [shape=box];\n");

    // Tree is acyclic once built, preorder cannot fail here
    let nodes = tree.preorder(tree.get_root()).unwrap_or_default();
    for &node_id in &nodes {
        let node = &tree.nodes[node_id];
        s.push_str(&format!(
            "    {} [label=\"{}\"];\n",
            node_id,
            node.name.replace('"', "\\\"")
        ));

        for &child_id in &node.children {
            s.push_str(&format!("    {} -> {};\n", node_id, child_id));
        }
    }

    s.push_str("}\n");
    s
}

fn quote_label(label: &str) -> String {
    let needs_quote = label.chars().any(|c| "(),:;[]' \t\n".contains(c));
    if needs_quote {
        format!("'{}'", label.replace('\'', "''"))
    } else {
        label.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::libs::phylo::Edge;

    fn build(pairs: &[(&str, &str)]) -> Tree {
        let edges: Vec<Edge> = pairs.iter().map(|(s, t)| Edge::new(*s, *t)).collect();
        Tree::from_edges(&edges, "Root").unwrap()
    }

    #[test]
    fn test_to_newick() {
        let tree = build(&[("Root", "A"), ("Root", "B")]);

        assert_eq!(to_newick(&tree), "(A,B)Root;");

        let expected_pretty = "(\n  A,\n  B\n)Root;";
        assert_eq!(to_newick_with_format(&tree, "  "), expected_pretty);
    }

    #[test]
    fn test_to_newick_complex() {
        //      Root
        //     /    \
        //    I1     C
        //   /  \
        //  A    B
        let tree = build(&[("Root", "I1"), ("Root", "C"), ("I1", "A"), ("I1", "B")]);

        let expected = "(\n\t(\n\t\tA,\n\t\tB\n\t)I1,\n\tC\n)Root;";
        assert_eq!(to_newick_with_format(&tree, "\t"), expected);
        assert_eq!(to_newick(&tree), "((A,B)I1,C)Root;");
    }

    #[test]
    fn test_to_newick_special_chars() {
        let tree = build(&[("Root", "clone (x)")]);
        assert_eq!(to_newick(&tree), "('clone (x)')Root;");

        let tree = build(&[("Root", "A'1")]);
        assert_eq!(to_newick(&tree), "('A''1')Root;");
    }

    #[test]
    fn test_to_newick_deep_chain() {
        let mut pairs = vec![("Root".to_string(), "g0".to_string())];
        for i in 1..5000 {
            pairs.push((format!("g{}", i - 1), format!("g{}", i)));
        }
        let edges: Vec<Edge> = pairs.iter().map(|(s, t)| Edge::new(s, t)).collect();
        let tree = Tree::from_edges(&edges, "Root").unwrap();

        let nwk = to_newick(&tree);
        assert_eq!(nwk.matches('(').count(), 5000);
        assert!(nwk.starts_with("((((g4999)g4998)"));
        assert!(nwk.ends_with(")g1)g0)Root;"));
    }

    #[test]
    fn test_to_dot() {
        let tree = build(&[("Root", "A")]);
        let root = tree.get_root();
        let a = tree.get_node_by_name("A").unwrap();

        let dot = to_dot(&tree);
        assert!(dot.contains("digraph Tree {"));
        assert!(dot.contains(&format!("{} [label=\"Root\"];", root)));
        assert!(dot.contains(&format!("{} [label=\"A\"];", a)));
        assert!(dot.contains(&format!("{} -> {};", root, a)));
    }
}
