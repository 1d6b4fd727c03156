/// NodeId is an index into the Tree's node vector.
/// It is lightweight (Copy) and safe (no pointers).
pub type NodeId = usize;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Node {
    /// Index in the arena
    pub id: NodeId,

    /// Genotype label, unique within a tree
    pub name: String,

    /// Parent node ID (None for root and detached nodes)
    pub parent: Option<NodeId>,

    /// Child node IDs, in edge insertion order
    pub children: Vec<NodeId>,
}

impl Node {
    /// Create a new childless node
    pub fn new(id: NodeId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            parent: None,
            children: Vec::new(),
        }
    }

    /// Check if the node is a leaf (no children)
    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    /// A node with exactly one child continues a linear chain
    pub fn is_linear(&self) -> bool {
        self.children.len() == 1
    }
}
