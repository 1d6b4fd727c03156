use super::Tree;
use crate::libs::phylo::error::{Result, TreeError};
use crate::libs::phylo::node::NodeId;
use std::collections::VecDeque;

/// Get node IDs in preorder traversal (Root -> Children).
///
/// Fails with [`TreeError::Cycle`] when a node is reached twice.
/// An unknown `start_node` yields an empty list.
pub fn preorder(tree: &Tree, start_node: NodeId) -> Result<Vec<NodeId>> {
    let mut result = Vec::new();
    let mut visited = vec![false; tree.len()];
    let mut stack = vec![start_node];

    while let Some(id) = stack.pop() {
        if let Some(node) = tree.get_node(id) {
            if std::mem::replace(&mut visited[id], true) {
                return Err(TreeError::Cycle(node.name.clone()));
            }
            result.push(id);
            // Push children in reverse order so they are processed in order
            for &child in node.children.iter().rev() {
                stack.push(child);
            }
        }
    }

    Ok(result)
}

/// Get (node ID, depth) pairs in levelorder traversal (BFS).
/// `start_node` has depth 0.
pub fn levelorder(tree: &Tree, start_node: NodeId) -> Result<Vec<(NodeId, usize)>> {
    let mut result = Vec::new();
    let mut visited = vec![false; tree.len()];
    let mut queue = VecDeque::new();
    queue.push_back((start_node, 0));

    while let Some((id, depth)) = queue.pop_front() {
        if let Some(node) = tree.get_node(id) {
            if std::mem::replace(&mut visited[id], true) {
                return Err(TreeError::Cycle(node.name.clone()));
            }
            result.push((id, depth));
            for &child in &node.children {
                queue.push_back((child, depth + 1));
            }
        }
    }

    Ok(result)
}
