//! Derived per-genotype relations of a [`Tree`].
//!
//! All maps are keyed by genotype name and built once; a structural change
//! needs a new tree and a new index.

pub mod chain;
pub mod relation;
#[cfg(test)]
mod tests;

use super::error::Result;
use super::tree::Tree;
use indexmap::IndexMap;
use serde::Serialize;
use tracing::debug;

/// Genotype name -> ordered genotype names.
pub type RelationMap = IndexMap<String, Vec<String>>;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct TreeIndex {
    descendants: RelationMap,
    ancestors: RelationMap,
    direct_children: RelationMap,
    direct_parent: IndexMap<String, String>,
    siblings: RelationMap,
    chains: RelationMap,
}

impl TreeIndex {
    /// Run every indexer over `tree`.
    ///
    /// ```
    /// use sweeptree::libs::phylo::{Edge, Tree, TreeIndex};
    /// let edges = vec![Edge::new("Root", "A"), Edge::new("Root", "B")];
    /// let tree = Tree::from_edges(&edges, "Root").unwrap();
    /// let index = TreeIndex::build(&tree).unwrap();
    /// assert_eq!(index.descendants("Root"), ["A", "B"]);
    /// assert_eq!(index.direct_parent("A"), Some("Root"));
    /// assert_eq!(index.siblings("B"), Some(&["A".to_string()][..]));
    /// assert_eq!(index.siblings("Root"), None);
    /// ```
    pub fn build(tree: &Tree) -> Result<Self> {
        let descendants = relation::descendant_index(tree)?;
        let ancestors = relation::ancestor_index(tree, &descendants);
        let direct_children = relation::direct_children_index(tree)?;
        let direct_parent = relation::direct_parent_index(tree)?;
        let siblings = relation::sibling_index(tree)?;
        let chains = chain::chain_index(tree)?;

        debug!(
            nodes = descendants.len(),
            chains = chains.len(),
            "tree index built"
        );

        Ok(Self {
            descendants,
            ancestors,
            direct_children,
            direct_parent,
            siblings,
            chains,
        })
    }

    /// All nodes below `id`. Empty for leaves and unknown ids.
    pub fn descendants(&self, id: &str) -> &[String] {
        lookup(&self.descendants, id)
    }

    /// All nodes above `id`. Empty for the root and unknown ids.
    pub fn ancestors(&self, id: &str) -> &[String] {
        lookup(&self.ancestors, id)
    }

    /// Immediate children of `id`, in edge order.
    pub fn direct_children(&self, id: &str) -> &[String] {
        lookup(&self.direct_children, id)
    }

    /// Immediate parent of `id`. `None` for the root and unknown ids.
    pub fn direct_parent(&self, id: &str) -> Option<&str> {
        self.direct_parent.get(id).map(String::as_str)
    }

    /// Other children of the parent of `id`. `None` when there are none.
    pub fn siblings(&self, id: &str) -> Option<&[String]> {
        self.siblings.get(id).map(Vec::as_slice)
    }

    /// Members following `id` in the linear segment it starts.
    /// `None` when `id` does not start a segment.
    pub fn chain(&self, id: &str) -> Option<&[String]> {
        self.chains.get(id).map(Vec::as_slice)
    }

    pub fn descendant_map(&self) -> &RelationMap {
        &self.descendants
    }

    pub fn ancestor_map(&self) -> &RelationMap {
        &self.ancestors
    }

    pub fn direct_children_map(&self) -> &RelationMap {
        &self.direct_children
    }

    pub fn direct_parent_map(&self) -> &IndexMap<String, String> {
        &self.direct_parent
    }

    pub fn sibling_map(&self) -> &RelationMap {
        &self.siblings
    }

    pub fn chain_map(&self) -> &RelationMap {
        &self.chains
    }
}

fn lookup<'a>(map: &'a RelationMap, id: &str) -> &'a [String] {
    map.get(id).map(Vec::as_slice).unwrap_or(&[])
}
