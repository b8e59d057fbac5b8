//! Station repository.

use std::collections::BTreeMap;
use std::sync::Arc;

use tokio::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};
use tracing::info;

use crate::domain::{Station, StationId};
use crate::path::StationProvider;

use super::error::StoreError;

#[derive(Debug, Default)]
pub(super) struct StationTable {
    last_id: u64,
    stations: BTreeMap<StationId, Station>,
}

impl StationTable {
    pub(super) fn get(&self, id: StationId) -> Result<&Station, StoreError> {
        self.stations.get(&id).ok_or(StoreError::StationNotFound(id))
    }

    pub(super) fn remove(&mut self, id: StationId) -> Result<Station, StoreError> {
        let station = self
            .stations
            .remove(&id)
            .ok_or(StoreError::StationNotFound(id))?;
        info!(station = %id, "deleted station");
        Ok(station)
    }
}

/// Thread-safe in-memory station storage.
///
/// Cloning is cheap and every clone sees the same data.
#[derive(Debug, Clone, Default)]
pub struct StationStore {
    inner: Arc<RwLock<StationTable>>,
}

impl StationStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a station under the next free id.
    pub async fn create(&self, name: impl Into<String>) -> Result<Station, StoreError> {
        let mut table = self.inner.write().await;
        let id = StationId(table.last_id + 1);
        let station = Station::new(id, name)?;

        table.last_id = id.0;
        table.stations.insert(id, station.clone());
        info!(station = %id, name = %station.name, "created station");

        Ok(station)
    }

    /// All stations ordered by id.
    pub async fn find_all(&self) -> Vec<Station> {
        let table = self.inner.read().await;
        table.stations.values().cloned().collect()
    }

    pub async fn find_by_id(&self, id: StationId) -> Result<Station, StoreError> {
        let table = self.inner.read().await;
        table.get(id).cloned()
    }

    pub async fn delete(&self, id: StationId) -> Result<(), StoreError> {
        let mut table = self.inner.write().await;
        table.remove(id)?;
        Ok(())
    }

    /// Hold the table for reading while touching another store.
    ///
    /// Callers that also lock the line store must take this lock first.
    pub(super) async fn read(&self) -> RwLockReadGuard<'_, StationTable> {
        self.inner.read().await
    }

    /// Hold the table for writing while touching another store.
    ///
    /// Callers that also lock the line store must take this lock first.
    pub(super) async fn write(&self) -> RwLockWriteGuard<'_, StationTable> {
        self.inner.write().await
    }
}

impl StationProvider for StationStore {
    async fn find_all_stations(&self) -> Result<Vec<Station>, StoreError> {
        Ok(self.find_all().await)
    }
}
