//! Orthogonal connector between a parent and a child layout point.

use crate::libs::phylo::error::{Result, TreeError};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Link {
    pub source: Point,
    pub target: Point,
}

impl Link {
    pub fn new(x0: f64, y0: f64, x1: f64, y1: f64) -> Self {
        Self {
            source: Point { x: x0, y: y0 },
            target: Point { x: x1, y: y1 },
        }
    }
}

/// Step path from `link.source` to `link.target`: horizontal to the midpoint,
/// vertical to the target's y, horizontal to the target.
///
/// ```
/// use sweeptree::libs::elbow::{elbow, Link};
/// assert_eq!(elbow(&Link::new(0.0, 0.0, 10.0, 20.0)), "M0,0H5V20H10");
/// assert_eq!(elbow(&Link::new(1.5, 2.0, 4.0, -1.0)), "M1.5,2H2.75V-1H4");
/// ```
pub fn elbow(link: &Link) -> String {
    let Link { source, target } = link;
    let mid_x = source.x + (target.x - source.x) / 2.0;
    format!(
        "M{},{}H{}V{}H{}",
        source.x, source.y, mid_x, target.y, target.x
    )
}

/// Parse links from JSON (`[{"source": {"x":..,"y":..}, "target": {..}}]`)
/// or from lines of four whitespace separated numbers `x0 y0 x1 y1`.
/// Blank lines and `#` comments are skipped in the column layout.
pub fn parse_links(text: &str) -> Result<Vec<Link>> {
    if text.trim_start().starts_with('[') {
        return serde_json::from_str(text).map_err(|e| TreeError::parse(e.line(), e.to_string()));
    }

    let mut links = Vec::new();
    for (i, line) in text.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        let values = line
            .split_whitespace()
            .map(|f| f.parse::<f64>())
            .collect::<std::result::Result<Vec<_>, _>>()
            .map_err(|e| TreeError::parse(i + 1, e.to_string()))?;
        if values.len() != 4 {
            return Err(TreeError::parse(
                i + 1,
                format!("expected 4 columns, found {}", values.len()),
            ));
        }

        links.push(Link::new(values[0], values[1], values[2], values[3]));
    }

    Ok(links)
}
