//! Shortest-path queries over the stored network.
//!
//! `PathService` owns no state: each query loads the current stations and
//! sections, builds a fresh `Graph`, and maps the resulting station ids back
//! to full station records.

use std::collections::HashMap;
use std::future::Future;

use tracing::debug;

use crate::domain::{Station, StationId};
use crate::store::{SectionRecord, StoreError};

use super::graph::{Graph, PathError};

/// Source of station records.
///
/// This abstraction allows the path service to be tested with mock data.
pub trait StationProvider {
    /// All registered stations.
    fn find_all_stations(&self) -> impl Future<Output = Result<Vec<Station>, StoreError>> + Send;
}

/// Source of the sections of every line.
pub trait SectionProvider {
    /// Every section of every line, as one consistent snapshot.
    fn find_all_sections(
        &self,
    ) -> impl Future<Output = Result<Vec<SectionRecord>, StoreError>> + Send;
}

/// Error from a path query.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PathServiceError {
    #[error(transparent)]
    Path(#[from] PathError),

    #[error(transparent)]
    Store(#[from] StoreError),
}

/// Stations along the shortest path, in travel order, with the total
/// distance.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathResponse {
    pub stations: Vec<Station>,
    pub distance: u64,
}

/// Computes shortest paths between stations.
#[derive(Debug, Clone)]
pub struct PathService<S, L> {
    stations: S,
    sections: L,
}

impl<S: StationProvider, L: SectionProvider> PathService<S, L> {
    pub fn new(stations: S, sections: L) -> Self {
        Self { stations, sections }
    }

    /// Find the shortest path from `source` to `target`.
    ///
    /// Stations in the response follow the path order. A station on the
    /// path with no record (deleted while still on a line) is reported as
    /// `StationNotFound`.
    pub async fn find_path(
        &self,
        source: StationId,
        target: StationId,
    ) -> Result<PathResponse, PathServiceError> {
        let stations = self.stations.find_all_stations().await?;
        let records = self.sections.find_all_sections().await?;

        let graph = Graph::new(records.iter().map(|r| &r.section));
        debug!(
            vertices = graph.vertex_count(),
            edges = graph.edge_count(),
            %source,
            %target,
            "computing shortest path"
        );
        let path = graph.find_shortest_path(source, target)?;

        let by_id: HashMap<StationId, Station> =
            stations.into_iter().map(|s| (s.id, s)).collect();
        let ordered = path
            .stations
            .iter()
            .map(|id| {
                by_id
                    .get(id)
                    .cloned()
                    .ok_or(StoreError::StationNotFound(*id))
            })
            .collect::<Result<Vec<_>, _>>()?;

        debug!(distance = path.distance, hops = ordered.len(), "found path");
        Ok(PathResponse {
            stations: ordered,
            distance: path.distance,
        })
    }
}
