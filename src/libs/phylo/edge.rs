use super::error::{Result, TreeError};
use serde::{Deserialize, Serialize};

/// A parent -> child link between two genotypes.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Edge {
    pub source: String,
    pub target: String,
}

impl Edge {
    pub fn new(source: impl Into<String>, target: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            target: target.into(),
        }
    }
}

#[derive(Deserialize)]
struct EdgeConfig {
    tree_edges: Vec<Edge>,
}

/// Parse an edge list.
///
/// Three layouts are accepted:
/// * two whitespace separated columns per line, `source target`;
/// * a JSON array of `{"source": .., "target": ..}` objects;
/// * a JSON object carrying that array under `tree_edges`.
///
/// In the column layout, blank lines, `#` comments and a leading
/// `source target` header are skipped.
///
/// ```
/// use sweeptree::libs::phylo::edge::parse_edges;
/// let edges = parse_edges("Root\tA\nA\tB\n").unwrap();
/// assert_eq!(edges.len(), 2);
/// assert_eq!(edges[1].source, "A");
///
/// let edges = parse_edges(r#"[{"source":"Root","target":"A"}]"#).unwrap();
/// assert_eq!(edges[0].target, "A");
/// ```
pub fn parse_edges(text: &str) -> Result<Vec<Edge>> {
    let trimmed = text.trim_start();
    if trimmed.starts_with('[') {
        serde_json::from_str::<Vec<Edge>>(text).map_err(json_error)
    } else if trimmed.starts_with('{') {
        serde_json::from_str::<EdgeConfig>(text)
            .map(|c| c.tree_edges)
            .map_err(json_error)
    } else {
        parse_columns(text)
    }
}

fn parse_columns(text: &str) -> Result<Vec<Edge>> {
    let mut edges = Vec::new();
    let mut seen_data = false;

    for (i, line) in text.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        let fields: Vec<&str> = line.split_whitespace().collect();
        if fields.len() != 2 {
            return Err(TreeError::parse(
                i + 1,
                format!("expected 2 columns, found {}", fields.len()),
            ));
        }

        if !seen_data
            && fields[0].eq_ignore_ascii_case("source")
            && fields[1].eq_ignore_ascii_case("target")
        {
            seen_data = true;
            continue;
        }
        seen_data = true;

        edges.push(Edge::new(fields[0], fields[1]));
    }

    Ok(edges)
}

fn json_error(e: serde_json::Error) -> TreeError {
    TreeError::parse(e.line(), e.to_string())
}

/// Read an edge list from a file (or `stdin`).
pub fn from_file(infile: &str) -> anyhow::Result<Vec<Edge>> {
    let text = crate::libs::io::read_to_string(infile)?;
    Ok(parse_edges(&text)?)
}
