//! Section operations that span the station and line stores.

use crate::domain::{Line, LineId, StationId};

use super::error::StoreError;
use super::line::LineStore;
use super::station::StationStore;

/// Adds and removes sections after checking the stations exist.
///
/// The station table lock is held across each line change, so a station
/// cannot be deleted between the existence check and the commit. Locks are
/// always taken stations first, then lines.
#[derive(Debug, Clone)]
pub struct SectionService {
    stations: StationStore,
    lines: LineStore,
}

impl SectionService {
    pub fn new(stations: StationStore, lines: LineStore) -> Self {
        Self { stations, lines }
    }

    /// Attach a section to a line.
    ///
    /// Both stations must be registered; otherwise `StationNotFound` is
    /// returned before the line is touched.
    pub async fn add_section(
        &self,
        line_id: LineId,
        up_station: StationId,
        down_station: StationId,
        distance: u32,
    ) -> Result<Line, StoreError> {
        let stations = self.stations.read().await;
        stations.get(up_station)?;
        stations.get(down_station)?;

        self.lines
            .add_section(line_id, up_station, down_station, distance)
            .await
    }

    /// Remove a station from a line.
    pub async fn delete_section(
        &self,
        line_id: LineId,
        station: StationId,
    ) -> Result<Line, StoreError> {
        self.lines.delete_section(line_id, station).await
    }

    /// Delete a station that no line runs through.
    pub async fn delete_station(&self, station: StationId) -> Result<(), StoreError> {
        let mut stations = self.stations.write().await;
        if let Some(line) = self.lines.line_containing(station).await {
            return Err(StoreError::StationInUse { station, line });
        }
        stations.remove(station)?;
        Ok(())
    }
}
