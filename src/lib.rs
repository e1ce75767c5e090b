//! Path Engine - label-correcting single-origin shortest paths
//!
//! This library computes, for one origin node of a directed network, the
//! minimum-cost path to every other node. Links are filtered by travel mode
//! and centroid nodes (traffic analysis zones) can be barred from acting as
//! intermediate hops.
//!
//! The engine is meant to be called once per origin from an outer loop. All
//! label and scan-list storage lives in caller-owned [`SearchBuffers`] that are
//! reset at the start of every call, so a single buffer set can serve
//! thousands of origins without reallocating.

pub mod algorithm;
pub mod config;
pub mod data_structures;
#[cfg(feature = "ffi")]
pub mod ffi;
pub mod graph;

pub use algorithm::{
    dijkstra::Dijkstra,
    label_correcting::{LabelCorrecting, SearchBuffers, SearchStats},
    skim::CostSkim,
    ShortestPathAlgorithm, ShortestPathResult, ThruNodes,
};
pub use config::SearchConfig;
/// Re-export main types for convenient use
pub use graph::{AllowedUses, ForwardStar, LinkSpec, Mode, NetworkView};

/// Error types for the library
#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("Invalid node index: {0}")]
    InvalidNode(usize),

    #[error("Invalid link {link}: from {from} to {to}")]
    InvalidLink { link: usize, from: usize, to: usize },

    #[error("Link {0} has a negative or non-finite cost")]
    InvalidCost(usize),

    #[error("Malformed forward star: {0}")]
    MalformedForwardStar(String),

    #[error("Source node not found in network")]
    SourceNotFound,

    #[error("Invalid mode: {0:?}")]
    InvalidMode(String),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("Configuration error: {0}")]
    Config(#[from] serde_json::Error),
}

/// Result type for the library
pub type Result<T> = std::result::Result<T, Error>;
