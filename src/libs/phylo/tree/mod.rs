pub mod io;
pub mod query;
pub mod stat;
#[cfg(test)]
pub mod tests;
pub mod traversal;

use super::builder::TreeBuilder;
use super::edge::Edge;
use super::error::Result;
use super::index::TreeIndex;
use super::node::{Node, NodeId};
use indexmap::IndexSet;
use std::collections::HashMap;

/// A read-only genotype tree.
///
/// Produced by [`TreeBuilder::finish`]; the arena, the name table and the
/// root never change afterwards.
#[derive(Debug, Clone)]
pub struct Tree {
    /// Arena storage for all nodes
    pub(crate) nodes: Vec<Node>,

    pub(crate) root: NodeId,

    /// Genotype name -> arena index
    pub(crate) by_name: HashMap<String, NodeId>,

    /// Distinct genotype names, sources before targets
    pub(crate) node_ids: IndexSet<String>,

    /// Edges in input order
    pub(crate) edges: Vec<Edge>,
}

impl Tree {
    /// Build a tree from an ordered edge list.
    ///
    /// # Example
    /// ```
    /// use sweeptree::libs::phylo::{Edge, Tree};
    /// let edges = vec![Edge::new("Root", "A"), Edge::new("A", "B")];
    /// let tree = Tree::from_edges(&edges, "Root").unwrap();
    /// assert_eq!(tree.node_ids().len(), 3);
    /// ```
    pub fn from_edges(edges: &[Edge], root_name: &str) -> Result<Tree> {
        let mut builder = TreeBuilder::new(root_name);
        builder.extend(edges.iter().cloned())?;
        builder.finish()
    }

    /// Read an edge list from a file (or `stdin`) and build the tree.
    pub fn from_file(infile: &str, root_name: &str) -> anyhow::Result<Tree> {
        let edges = super::edge::from_file(infile)?;
        Ok(Tree::from_edges(&edges, root_name)?)
    }

    /// Get number of nodes
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Get root ID
    pub fn get_root(&self) -> NodeId {
        self.root
    }

    /// Get a reference to a node by ID.
    pub fn get_node(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(id)
    }

    /// Get node ID by genotype name.
    pub fn get_node_by_name(&self, name: &str) -> Option<NodeId> {
        self.by_name.get(name).copied()
    }

    /// Genotype name of a node. `id` must come from this tree.
    pub fn name(&self, id: NodeId) -> &str {
        &self.nodes[id].name
    }

    /// Distinct genotype names, every source in edge order, then every target.
    pub fn node_ids(&self) -> &IndexSet<String> {
        &self.node_ids
    }

    /// Edges in input order, duplicates included.
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    /// All nodes in arena order.
    pub fn nodes(&self) -> impl Iterator<Item = &Node> {
        self.nodes.iter()
    }

    /// Compute every derived index of this tree.
    pub fn index(&self) -> Result<TreeIndex> {
        TreeIndex::build(self)
    }

    // --- Delegation to traversal ---

    pub fn preorder(&self, start_node: NodeId) -> Result<Vec<NodeId>> {
        traversal::preorder(self, start_node)
    }

    pub fn levelorder(&self, start_node: NodeId) -> Result<Vec<(NodeId, usize)>> {
        traversal::levelorder(self, start_node)
    }

    // --- Delegation to query ---

    pub fn get_path_from_root(&self, id: NodeId) -> Result<Vec<NodeId>> {
        query::get_path_from_root(self, id)
    }

    // --- Delegation to stat ---

    pub fn get_leaves(&self) -> Result<Vec<NodeId>> {
        stat::get_leaves(self, self.root)
    }

    pub fn max_depth(&self) -> Result<usize> {
        stat::max_depth(self, self.root)
    }

    pub fn count_branchings(&self) -> usize {
        stat::count_branchings(self)
    }

    // --- Delegation to io ---

    pub fn to_newick(&self) -> String {
        io::to_newick(self)
    }

    pub fn to_newick_with_format(&self, indent: &str) -> String {
        io::to_newick_with_format(self, indent)
    }

    pub fn to_dot(&self) -> String {
        io::to_dot(self)
    }
}
