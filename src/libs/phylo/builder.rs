use super::edge::Edge;
use super::error::{Result, TreeError};
use super::node::{Node, NodeId};
use super::tree::Tree;
use indexmap::IndexSet;
use std::collections::HashMap;
use tracing::{debug, warn};

/// Incremental constructor of a genotype [`Tree`].
///
/// The builder owns the name -> node table. Nodes are materialized by
/// [`TreeBuilder::get_or_create`] the first time a name is seen, either as a
/// source or as a target. [`TreeBuilder::finish`] validates the structure and
/// hands back a read-only tree.
///
/// ```
/// use sweeptree::libs::phylo::{Edge, TreeBuilder};
/// let mut builder = TreeBuilder::new("Root");
/// builder.add_edge(Edge::new("Root", "A")).unwrap();
/// builder.add_edge(Edge::new("A", "B")).unwrap();
/// let tree = builder.finish().unwrap();
/// assert_eq!(tree.len(), 3);
/// assert_eq!(tree.name(tree.get_root()), "Root");
/// ```
#[derive(Debug, Clone)]
pub struct TreeBuilder {
    root_name: String,
    nodes: Vec<Node>,
    by_name: HashMap<String, NodeId>,
    edges: Vec<Edge>,
}

impl TreeBuilder {
    pub fn new(root_name: impl Into<String>) -> Self {
        Self {
            root_name: root_name.into(),
            nodes: Vec::new(),
            by_name: HashMap::new(),
            edges: Vec::new(),
        }
    }

    /// Look up a node by name, creating a childless one if absent.
    pub fn get_or_create(&mut self, name: &str) -> NodeId {
        if let Some(&id) = self.by_name.get(name) {
            return id;
        }

        let id = self.nodes.len();
        self.nodes.push(Node::new(id, name));
        self.by_name.insert(name.to_string(), id);
        id
    }

    /// Attach `edge.target` under `edge.source`.
    ///
    /// A repeated edge is a no-op. Self loops and a second, different parent
    /// are rejected.
    pub fn add_edge(&mut self, edge: Edge) -> Result<()> {
        let parent_id = self.get_or_create(&edge.source);
        let child_id = self.get_or_create(&edge.target);
        self.edges.push(edge);

        if parent_id == child_id {
            return Err(TreeError::Cycle(self.nodes[child_id].name.clone()));
        }

        match self.nodes[child_id].parent {
            Some(p) if p == parent_id => {
                debug!(
                    parent = %self.nodes[parent_id].name,
                    child = %self.nodes[child_id].name,
                    "duplicate edge ignored"
                );
            }
            Some(p) => {
                return Err(TreeError::MultipleParents {
                    child: self.nodes[child_id].name.clone(),
                    parent: self.nodes[p].name.clone(),
                    other: self.nodes[parent_id].name.clone(),
                });
            }
            None => {
                self.nodes[child_id].parent = Some(parent_id);
                self.nodes[parent_id].children.push(child_id);
            }
        }

        Ok(())
    }

    /// Add every edge in order, stopping at the first error.
    pub fn extend<I>(&mut self, edges: I) -> Result<()>
    where
        I: IntoIterator<Item = Edge>,
    {
        for edge in edges {
            self.add_edge(edge)?;
        }
        Ok(())
    }

    /// Validate and freeze the tree.
    pub fn finish(self) -> Result<Tree> {
        let root = *self
            .by_name
            .get(&self.root_name)
            .ok_or_else(|| TreeError::MissingRoot(self.root_name.clone()))?;

        check_acyclic(&self.nodes)?;

        if let Some(p) = self.nodes[root].parent {
            warn!(
                root = %self.root_name,
                parent = %self.nodes[p].name,
                "root node has a parent"
            );
        }

        // Sources first, then targets
        let node_ids: IndexSet<String> = self
            .edges
            .iter()
            .map(|e| e.source.clone())
            .chain(self.edges.iter().map(|e| e.target.clone()))
            .collect();

        let tree = Tree {
            nodes: self.nodes,
            root,
            by_name: self.by_name,
            node_ids,
            edges: self.edges,
        };

        let reachable = tree.preorder(root)?.len();
        if reachable < tree.len() {
            warn!(
                detached = tree.len() - reachable,
                "nodes not reachable from the root"
            );
        }
        debug!(nodes = tree.len(), edges = tree.edges.len(), "tree constructed");

        Ok(tree)
    }
}

#[derive(Clone, Copy, PartialEq, Eq)]
enum Mark {
    Unseen,
    OnPath,
    Done,
}

/// Every parent chain must end at a parentless node.
fn check_acyclic(nodes: &[Node]) -> Result<()> {
    let mut marks = vec![Mark::Unseen; nodes.len()];

    for start in 0..nodes.len() {
        let mut path = Vec::new();
        let mut current = Some(start);

        while let Some(id) = current {
            match marks[id] {
                Mark::Done => break,
                Mark::OnPath => return Err(TreeError::Cycle(nodes[id].name.clone())),
                Mark::Unseen => {
                    marks[id] = Mark::OnPath;
                    path.push(id);
                    current = nodes[id].parent;
                }
            }
        }

        for id in path {
            marks[id] = Mark::Done;
        }
    }

    Ok(())
}
