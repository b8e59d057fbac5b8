//! Line repository.
//!
//! Section changes are applied to a copy of the line while the write lock is
//! held and written back only on success. Readers therefore never see a
//! half-split or half-merged topology, and a rejected change leaves the
//! stored line exactly as it was.

use std::collections::BTreeMap;
use std::sync::Arc;

use tokio::sync::RwLock;
use tracing::info;

use crate::domain::{Line, LineId, Section, StationId};
use crate::path::SectionProvider;

use super::error::StoreError;

/// A section together with the line it belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SectionRecord {
    pub line_id: LineId,
    pub section: Section,
}

#[derive(Debug, Default)]
struct LineTable {
    last_id: u64,
    lines: BTreeMap<LineId, Line>,
}

impl LineTable {
    fn get(&self, id: LineId) -> Result<&Line, StoreError> {
        self.lines.get(&id).ok_or(StoreError::LineNotFound(id))
    }
}

/// Thread-safe in-memory line storage.
#[derive(Debug, Clone, Default)]
pub struct LineStore {
    inner: Arc<RwLock<LineTable>>,
}

impl LineStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a line with no sections.
    pub async fn create(
        &self,
        name: impl Into<String>,
        color: impl Into<String>,
    ) -> Result<Line, StoreError> {
        let mut table = self.inner.write().await;
        let id = LineId(table.last_id + 1);
        let line = Line::new(id, name, color)?;

        table.last_id = id.0;
        table.lines.insert(id, line.clone());
        info!(line = %id, name = line.name(), "created line");

        Ok(line)
    }

    /// All lines ordered by id.
    pub async fn find_all(&self) -> Vec<Line> {
        let table = self.inner.read().await;
        table.lines.values().cloned().collect()
    }

    pub async fn find_by_id(&self, id: LineId) -> Result<Line, StoreError> {
        let table = self.inner.read().await;
        table.get(id).cloned()
    }

    pub async fn update(
        &self,
        id: LineId,
        name: impl Into<String>,
        color: impl Into<String>,
    ) -> Result<Line, StoreError> {
        self.modify(id, |line| line.update(name, color)).await
    }

    /// Delete a line and every section it owns.
    pub async fn delete(&self, id: LineId) -> Result<(), StoreError> {
        let mut table = self.inner.write().await;
        let line = table
            .lines
            .remove(&id)
            .ok_or(StoreError::LineNotFound(id))?;
        info!(line = %id, sections = line.sections().len(), "deleted line");
        Ok(())
    }

    pub async fn add_section(
        &self,
        id: LineId,
        up_station: StationId,
        down_station: StationId,
        distance: u32,
    ) -> Result<Line, StoreError> {
        let line = self
            .modify(id, |line| line.add_section(up_station, down_station, distance))
            .await?;
        info!(
            line = %id,
            up = %up_station,
            down = %down_station,
            distance,
            "added section"
        );
        Ok(line)
    }

    pub async fn delete_section(&self, id: LineId, station: StationId) -> Result<Line, StoreError> {
        let line = self
            .modify(id, |line| line.remove_section(station))
            .await?;
        info!(line = %id, station = %station, "removed station from line");
        Ok(line)
    }

    /// Every section of every line, read under one lock.
    pub async fn find_all_sections(&self) -> Vec<SectionRecord> {
        let table = self.inner.read().await;
        table
            .lines
            .values()
            .flat_map(|line| {
                line.sections().iter().map(|section| SectionRecord {
                    line_id: line.id(),
                    section: *section,
                })
            })
            .collect()
    }

    /// The first line whose sections touch `station`, if any.
    pub async fn line_containing(&self, station: StationId) -> Option<LineId> {
        let table = self.inner.read().await;
        table
            .lines
            .values()
            .find(|line| line.sections().contains_station(station))
            .map(Line::id)
    }

    /// Apply `change` to a copy of the line and commit it if it succeeds.
    async fn modify<F, E>(&self, id: LineId, change: F) -> Result<Line, StoreError>
    where
        F: FnOnce(&mut Line) -> Result<(), E>,
        StoreError: From<E>,
    {
        let mut table = self.inner.write().await;
        let mut line = table.get(id)?.clone();
        change(&mut line)?;
        table.lines.insert(id, line.clone());
        Ok(line)
    }
}

impl SectionProvider for LineStore {
    async fn find_all_sections(&self) -> Result<Vec<SectionRecord>, StoreError> {
        Ok(LineStore::find_all_sections(self).await)
    }
}
