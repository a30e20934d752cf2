pub mod weighted_graph;

pub use weighted_graph::{Edge, WeightedGraph};
