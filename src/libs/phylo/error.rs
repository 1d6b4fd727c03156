use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TreeError {
    /// The root label never appears in the edge list
    #[error("Root node `{0}` not found in the edge list")]
    MissingRoot(String),

    /// A node was reached twice while walking the tree
    #[error("Cyclic structure detected at node `{0}`")]
    Cycle(String),

    /// A node was attached under a second, different parent
    #[error("Node `{child}` already has parent `{parent}`, cannot attach it to `{other}`")]
    MultipleParents {
        child: String,
        parent: String,
        other: String,
    },

    /// Malformed input (edge list, layout or links)
    #[error("Parse error at line {line}: {message}")]
    Parse { line: usize, message: String },
}

pub type Result<T> = std::result::Result<T, TreeError>;

impl TreeError {
    pub fn parse(line: usize, message: impl Into<String>) -> Self {
        Self::Parse {
            line,
            message: message.into(),
        }
    }
}
