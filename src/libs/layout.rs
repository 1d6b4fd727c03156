//! Per-time-point genotype layout and the emergence query over it.
//!
//! The layout itself is computed elsewhere; here it is only read, as a JSON
//! object of the shape
//!
//! ```json
//! {"T1": {"Root": {"state": "emerges", "x": 0.1}, "A": {"state": "present"}}}
//! ```

use crate::libs::phylo::error::{Result, TreeError};
use crate::libs::phylo::TreeIndex;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// State marking a genotype that becomes visible at a time point.
pub const EMERGES: &str = "emerges";

/// Layout of one genotype at one time point.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LayoutEntry {
    #[serde(default)]
    pub state: String,

    /// Any other layout fields, kept as-is
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

impl LayoutEntry {
    pub fn new(state: impl Into<String>) -> Self {
        Self {
            state: state.into(),
            extra: serde_json::Map::new(),
        }
    }

    pub fn emerges(&self) -> bool {
        self.state == EMERGES
    }
}

/// time point -> genotype -> layout entry
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TimepointLayout {
    timepoints: IndexMap<String, IndexMap<String, LayoutEntry>>,
}

impl TimepointLayout {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a layout from JSON text.
    pub fn from_json(text: &str) -> Result<Self> {
        serde_json::from_str(text).map_err(|e| TreeError::parse(e.line(), e.to_string()))
    }

    /// Read a JSON layout from a file (or `stdin`).
    pub fn from_file(infile: &str) -> anyhow::Result<Self> {
        let text = crate::libs::io::read_to_string(infile)?;
        Ok(Self::from_json(&text)?)
    }

    pub fn insert(&mut self, timepoint: &str, genotype: &str, entry: LayoutEntry) {
        self.timepoints
            .entry(timepoint.to_string())
            .or_default()
            .insert(genotype.to_string(), entry);
    }

    pub fn get(&self, timepoint: &str, genotype: &str) -> Option<&LayoutEntry> {
        self.timepoints.get(timepoint)?.get(genotype)
    }

    /// Time points in input order.
    pub fn timepoints(&self) -> impl Iterator<Item = &str> {
        self.timepoints.keys().map(String::as_str)
    }

    /// Genotypes laid out at `timepoint`, in input order.
    pub fn genotypes(&self, timepoint: &str) -> impl Iterator<Item = &str> {
        self.timepoints
            .get(timepoint)
            .into_iter()
            .flat_map(|m| m.keys().map(String::as_str))
    }

    pub fn is_empty(&self) -> bool {
        self.timepoints.is_empty()
    }
}

/// Ancestors of `genotype` that emerge at `timepoint`, in ancestor index order.
///
/// An ancestor without a layout entry at `timepoint` does not emerge. Unknown
/// genotypes and time points give an empty list.
///
/// ```
/// use sweeptree::libs::layout::{emergent_ancestors, LayoutEntry, TimepointLayout};
/// use sweeptree::libs::phylo::{Edge, Tree};
/// let edges = vec![Edge::new("Root", "A"), Edge::new("A", "B"), Edge::new("B", "C")];
/// let index = Tree::from_edges(&edges, "Root").unwrap().index().unwrap();
///
/// let mut layout = TimepointLayout::new();
/// layout.insert("t5", "A", LayoutEntry::new("emerges"));
/// layout.insert("t5", "B", LayoutEntry::new("established"));
///
/// assert_eq!(emergent_ancestors(&layout, &index, "C", "t5"), vec!["A"]);
/// assert!(emergent_ancestors(&layout, &index, "C", "t9").is_empty());
/// ```
pub fn emergent_ancestors<'a>(
    layout: &TimepointLayout,
    index: &'a TreeIndex,
    genotype: &str,
    timepoint: &str,
) -> Vec<&'a str> {
    index
        .ancestors(genotype)
        .iter()
        .filter(|ancestor| {
            layout
                .get(timepoint, ancestor)
                .map_or(false, LayoutEntry::emerges)
        })
        .map(String::as_str)
        .collect()
}
