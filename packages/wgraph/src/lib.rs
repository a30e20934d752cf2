pub mod algorithms;
pub mod core;
pub mod edge_list;
pub mod error;
pub mod interner;
pub mod latex;
pub mod storage;
pub mod traits;

pub use algorithms::*;
pub use core::*;
pub use edge_list::*;
pub use error::*;
pub use interner::*;
pub use latex::*;
pub use storage::*;
pub use traits::*;
