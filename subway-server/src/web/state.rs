//! Application state for the web layer.

use crate::path::PathService;
use crate::store::{LineStore, SectionService, StationStore};

/// Shared application state.
///
/// Contains all the services needed to handle requests. Every field is a
/// cheap handle over shared storage, so cloning per request is fine.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Station repository
    pub stations: StationStore,

    /// Line repository
    pub lines: LineStore,

    /// Section add/remove with station checks
    pub sections: SectionService,

    /// Shortest-path queries
    pub paths: PathService<StationStore, LineStore>,
}

impl AppState {
    /// Create state over the given stores.
    pub fn new(stations: StationStore, lines: LineStore) -> Self {
        Self {
            sections: SectionService::new(stations.clone(), lines.clone()),
            paths: PathService::new(stations.clone(), lines.clone()),
            stations,
            lines,
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(StationStore::new(), LineStore::new())
    }
}
