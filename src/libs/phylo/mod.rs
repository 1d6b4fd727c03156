pub mod builder;
pub mod edge;
pub mod error;
pub mod index;
pub mod node;
pub mod tree;

pub use builder::TreeBuilder;
pub use edge::Edge;
pub use error::{Result, TreeError};
pub use index::TreeIndex;
pub use node::{Node, NodeId};
pub use tree::Tree;

/// Label of the distinguished root genotype.
pub const ROOT_NAME: &str = "Root";
