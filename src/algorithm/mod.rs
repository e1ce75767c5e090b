pub mod traits;
pub mod thru_nodes;
pub mod paths;
pub mod label_correcting;
pub mod dijkstra;
pub mod skim;

pub use traits::{SearchSettings, ShortestPathAlgorithm, ShortestPathResult};
pub use thru_nodes::ThruNodes;
pub use paths::PathTrace;
