use super::Tree;
use crate::libs::phylo::error::Result;
use crate::libs::phylo::node::NodeId;

/// Get IDs of all leaves in subtree rooted at `id`, in preorder.
pub fn get_leaves(tree: &Tree, id: NodeId) -> Result<Vec<NodeId>> {
    Ok(super::traversal::preorder(tree, id)?
        .into_iter()
        .filter(|&n| tree.nodes[n].is_leaf())
        .collect())
}

/// Number of edges on the longest downward path from `id`.
pub fn max_depth(tree: &Tree, id: NodeId) -> Result<usize> {
    Ok(super::traversal::levelorder(tree, id)?
        .into_iter()
        .map(|(_, depth)| depth)
        .max()
        .unwrap_or(0))
}

/// Count nodes with two or more children.
pub fn count_branchings(tree: &Tree) -> usize {
    tree.nodes.iter().filter(|n| n.children.len() > 1).count()
}
