pub mod dijkstra;
pub mod path;

pub use dijkstra::*;
pub use path::*;
