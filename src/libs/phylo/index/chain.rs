use super::RelationMap;
use crate::libs::phylo::error::{Result, TreeError};
use crate::libs::phylo::node::NodeId;
use crate::libs::phylo::tree::Tree;

/// Split the tree into maximal linear segments.
///
/// Each key is the first node of a segment. Its value lists the nodes that
/// follow it through single-child links, ending with the first node that has
/// zero or several children. A segment whose first node already branches (or
/// is a leaf) maps to an empty list.
///
/// ```
/// use sweeptree::libs::phylo::{Edge, Tree};
/// use sweeptree::libs::phylo::index::chain::chain_index;
/// let edges = vec![
///     Edge::new("Root", "A"),
///     Edge::new("A", "B"),
///     Edge::new("B", "C"),
///     Edge::new("B", "D"),
/// ];
/// let tree = Tree::from_edges(&edges, "Root").unwrap();
/// let chains = chain_index(&tree).unwrap();
/// assert_eq!(chains["Root"], vec!["A", "B"]);
/// assert!(chains["C"].is_empty());
/// assert!(!chains.contains_key("A"));
/// ```
pub fn chain_index(tree: &Tree) -> Result<RelationMap> {
    let mut chains = RelationMap::new();
    let mut visited = vec![false; tree.len()];

    // (node, base of the chain it extends)
    let mut stack: Vec<(NodeId, Option<NodeId>)> = vec![(tree.get_root(), None)];

    while let Some((id, base)) = stack.pop() {
        let node = &tree.nodes[id];
        if std::mem::replace(&mut visited[id], true) {
            return Err(TreeError::Cycle(node.name.clone()));
        }

        let base = match base {
            None => {
                chains.insert(node.name.clone(), Vec::new());
                id
            }
            Some(base) => {
                if let Some(chain) = chains.get_mut(tree.name(base)) {
                    chain.push(node.name.clone());
                }
                base
            }
        };

        if node.is_linear() {
            stack.push((node.children[0], Some(base)));
        } else {
            for &child in node.children.iter().rev() {
                stack.push((child, None));
            }
        }
    }

    Ok(chains)
}
