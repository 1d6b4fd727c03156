use super::Tree;
use crate::libs::phylo::error::{Result, TreeError};
use crate::libs::phylo::node::NodeId;

/// Node IDs from the topmost ancestor of `id` down to `id` itself.
///
/// For a node attached under the root, the path starts at the root.
/// An unknown `id` yields an empty path.
pub fn get_path_from_root(tree: &Tree, id: NodeId) -> Result<Vec<NodeId>> {
    let mut path = Vec::new();
    let mut current = match tree.get_node(id) {
        Some(node) => node,
        None => return Ok(path),
    };

    loop {
        path.push(current.id);
        if path.len() > tree.len() {
            return Err(TreeError::Cycle(current.name.clone()));
        }
        match current.parent.and_then(|p| tree.get_node(p)) {
            Some(parent) => current = parent,
            None => break,
        }
    }

    path.reverse();
    Ok(path)
}
