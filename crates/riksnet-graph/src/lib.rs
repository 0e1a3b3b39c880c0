//! Riksnet Graph - node/edge models for the course notebooks
//!
//! Builds co-authorship graphs from Riksdagen documents, wraps
//! attribute-bearing node/edge lists in a [`Network`], and carries the
//! small sample datasets and the party colour palette.

pub mod aggregate;
pub mod edge;
pub mod intersect;
pub mod network;
pub mod palette;
pub mod samples;

// Re-exports for convenience
pub use aggregate::{CoauthorGraph, GraphBuilder, Node, nodes_and_edges, try_nodes_and_edges};
pub use edge::Edge;
pub use intersect::pairwise_intersection;
pub use network::{Network, Record};
pub use palette::PartyPalette;
