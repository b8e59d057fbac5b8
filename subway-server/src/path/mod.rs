//! Shortest paths between stations.
//!
//! All sections of all lines are assembled into one weighted graph per
//! query, and Dijkstra's algorithm finds the least-distance route.

mod graph;
mod service;

pub use graph::{Graph, Path, PathError};
pub use service::{
    PathResponse, PathService, PathServiceError, SectionProvider, StationProvider,
};
