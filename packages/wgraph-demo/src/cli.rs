use clap::{Parser, ValueEnum};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "wgraph-demo",
    about = "Shortest distances and paths on a weighted graph",
    version
)]
pub struct Cli {
    /// Edge list with one `source target weight` per line. Uses the built-in sample graph if omitted.
    #[arg(long)]
    pub edges: Option<PathBuf>,

    /// Treat edges as one-way instead of mirroring them.
    #[arg(long)]
    pub directed: bool,

    #[arg(long, default_value = "A")]
    pub start: String,

    /// Also print the shortest path to this node.
    #[arg(long)]
    pub to: Option<String>,

    #[arg(long, value_enum, default_value_t = Format::Text)]
    pub format: Format,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum Format {
    Text,
    Latex,
    Json,
}
