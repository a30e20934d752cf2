//! Plain-text edge lists: one `source target weight` triple per line.
//! Blank lines and lines starting with `#` are skipped.

use std::path::Path;
use std::str::FromStr;

use log::debug;

use crate::{GraphError, GraphBase, Weight, WeightedGraph};

pub fn parse_edge_list<W>(
    text: &str,
    bidirectional: bool,
) -> Result<WeightedGraph<String, W>, GraphError>
where
    W: Weight + FromStr,
{
    let mut graph = WeightedGraph::new();

    for (index, raw) in text.lines().enumerate() {
        let line = index + 1;
        let trimmed = raw.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }

        let parts: Vec<&str> = trimmed.split_whitespace().collect();
        let [source, target, weight] = parts[..] else {
            return Err(GraphError::MalformedLine {
                line,
                content: trimmed.to_string(),
            });
        };
        let weight = weight.parse::<W>().map_err(|_| GraphError::InvalidWeight {
            line,
            value: weight.to_string(),
        })?;

        graph.add_edge(source.to_string(), target.to_string(), weight, bidirectional);
    }

    debug!(
        "parsed edge list: {} nodes, {} edges",
        graph.order(),
        graph.size()
    );
    Ok(graph)
}

pub fn read_edge_list<W>(
    path: impl AsRef<Path>,
    bidirectional: bool,
) -> Result<WeightedGraph<String, W>, GraphError>
where
    W: Weight + FromStr,
{
    let text = std::fs::read_to_string(path.as_ref())?;
    parse_edge_list(&text, bidirectional)
}
