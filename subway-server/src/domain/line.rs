//! Line aggregate.

use super::{DomainError, LineId, Section, Sections, StationId};

/// A subway line: a name, a color, and the sections it owns.
///
/// Dropping a `Line` drops its sections; no section is shared between
/// lines.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Line {
    id: LineId,
    name: String,
    color: String,
    sections: Sections,
}

impl Line {
    /// Create a line with no sections.
    pub fn new(
        id: LineId,
        name: impl Into<String>,
        color: impl Into<String>,
    ) -> Result<Self, DomainError> {
        let name = non_blank(name.into(), "line name")?;
        let color = non_blank(color.into(), "line color")?;
        Ok(Self {
            id,
            name,
            color,
            sections: Sections::new(),
        })
    }

    pub fn id(&self) -> LineId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn color(&self) -> &str {
        &self.color
    }

    pub fn sections(&self) -> &Sections {
        &self.sections
    }

    /// Replace the name and color.
    ///
    /// Leaves the line untouched if either value is blank.
    pub fn update(
        &mut self,
        name: impl Into<String>,
        color: impl Into<String>,
    ) -> Result<(), DomainError> {
        let name = non_blank(name.into(), "line name")?;
        let color = non_blank(color.into(), "line color")?;
        self.name = name;
        self.color = color;
        Ok(())
    }

    /// Build a section from raw values and attach it.
    pub fn add_section(
        &mut self,
        up_station: StationId,
        down_station: StationId,
        distance: u32,
    ) -> Result<(), DomainError> {
        let section = Section::new(up_station, down_station, distance)?;
        self.sections.add(section)
    }

    pub fn remove_section(&mut self, station: StationId) -> Result<(), DomainError> {
        self.sections.remove_section(station)
    }

    pub fn ordered_station_ids(&self) -> Result<Vec<StationId>, DomainError> {
        self.sections.ordered_station_ids()
    }
}

fn non_blank(value: String, field: &'static str) -> Result<String, DomainError> {
    if value.trim().is_empty() {
        return Err(DomainError::InvalidName(field));
    }
    Ok(value)
}
