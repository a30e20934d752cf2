mod cli;

use anyhow::{Context, Result};
use clap::Parser;
use log::info;
use serde::Serialize;
use wgraph::{
    GraphBase, LatexDisplay, ShortestPaths, WeightedGraph, dijkstra, escape_latex, read_edge_list,
};

use crate::cli::{Cli, Format};

const SAMPLE_EDGES: [(&str, &str, u64); 7] = [
    ("A", "B", 4),
    ("A", "C", 2),
    ("B", "C", 5),
    ("B", "D", 10),
    ("C", "E", 3),
    ("E", "D", 4),
    ("D", "F", 11),
];

#[derive(Serialize)]
struct Report<'a> {
    start: &'a str,
    distances: Vec<Row<'a>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    path: Option<PathReport<'a>>,
}

#[derive(Serialize)]
struct Row<'a> {
    node: &'a str,
    distance: Option<u64>,
    predecessor: Option<&'a str>,
}

#[derive(Serialize)]
struct PathReport<'a> {
    to: &'a str,
    distance: Option<u64>,
    nodes: Vec<String>,
}

fn load_graph(cli: &Cli) -> Result<WeightedGraph<String, u64>> {
    let bidirectional = !cli.directed;
    match &cli.edges {
        Some(path) => read_edge_list(path, bidirectional)
            .with_context(|| format!("failed to load edge list {}", path.display())),
        None => Ok(WeightedGraph::from_edges(SAMPLE_EDGES, bidirectional)),
    }
}

fn format_distance(distance: Option<u64>) -> String {
    distance.map_or_else(|| "inf".to_string(), |d| d.to_string())
}

fn no_path(result: &ShortestPaths<String, u64>, to: &str) -> String {
    format!("No path from {} to {}.", result.source(), to)
}

fn render_text(result: &ShortestPaths<String, u64>, to: Option<&str>) -> String {
    let mut out = format!("Shortest distances from {}:\n", result.source());
    for (node, distance, _) in result.iter() {
        out.push_str(&format!("{}: {}\n", node, format_distance(distance)));
    }

    if let Some(to) = to {
        match result.lightest_path_to(to) {
            Some((weight, path)) => out.push_str(&format!(
                "Shortest path from {} to {} has weight {}: {}\n",
                result.source(),
                to,
                weight,
                path.join(" -> ")
            )),
            None => {
                out.push_str(&no_path(result, to));
                out.push('\n');
            }
        }
    }
    out
}

fn render_latex(result: &ShortestPaths<String, u64>, to: Option<&str>) -> String {
    let mut out = result.to_latex();
    if let Some(to) = to {
        let path = result.path_to(to);
        if path.is_empty() {
            out.push_str(&escape_latex(&no_path(result, to)));
        } else {
            let labels: Vec<String> = path.iter().map(|node| escape_latex(node)).collect();
            out.push_str(&format!("Path: {}", labels.join(" $\\to$ ")));
        }
        out.push('\n');
    }
    out
}

fn render_json(result: &ShortestPaths<String, u64>, to: Option<&str>) -> Result<String> {
    let report = Report {
        start: result.source(),
        distances: result
            .iter()
            .map(|(node, distance, predecessor)| Row {
                node,
                distance,
                predecessor: predecessor.map(String::as_str),
            })
            .collect(),
        path: to.map(|to| PathReport {
            to,
            distance: result.distance(to),
            nodes: result.path_to(to),
        }),
    };
    Ok(serde_json::to_string_pretty(&report)? + "\n")
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let graph = load_graph(&cli)?;
    info!(
        "graph loaded: {} nodes, {} directed edges",
        graph.order(),
        graph.size()
    );
    if !graph.contains_node(cli.start.as_str()) {
        info!("start node {} has no edges", cli.start);
    }

    let result = dijkstra(&graph, cli.start.clone());
    let to = cli.to.as_deref();

    let output = match cli.format {
        Format::Text => render_text(&result, to),
        Format::Latex => render_latex(&result, to),
        Format::Json => render_json(&result, to)?,
    };
    print!("{output}");

    Ok(())
}
