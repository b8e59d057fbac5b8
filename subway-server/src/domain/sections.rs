//! Line topology.
//!
//! `Sections` holds the track segments of one line in no particular order.
//! The station order is derived by walking from the only section with no
//! predecessor to the only section with no successor.

use super::{DomainError, Section, StationId};

/// The sections of a single line.
///
/// # Invariants
///
/// - The sections form exactly one simple directed path: every station is
///   the up station of at most one section and the down station of at most
///   one section.
/// - No cycles and no disconnected pieces.
///
/// `add` and `remove_section` preserve these; reads do not re-check them but
/// report `DomainError::Inconsistent` instead of panicking if the walk breaks.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Sections {
    sections: Vec<Section>,
}

impl Sections {
    /// Create an empty topology.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of sections.
    pub fn len(&self) -> usize {
        self.sections.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }

    /// Sections in storage order (not line order).
    pub fn iter(&self) -> impl Iterator<Item = &Section> {
        self.sections.iter()
    }

    /// Sum of all section distances.
    pub fn total_distance(&self) -> u64 {
        self.sections.iter().map(|s| u64::from(s.distance())).sum()
    }

    /// Attach a section to the line.
    ///
    /// The first section is always accepted. After that the section must
    /// touch the line at exactly one station: it either extends the line
    /// past its first or last station, or splits the existing section that
    /// shares its known endpoint.
    pub fn add(&mut self, added: Section) -> Result<(), DomainError> {
        if self.sections.is_empty() {
            self.sections.push(added);
            return Ok(());
        }

        self.validate_added(&added)?;

        if self.is_new_first_or_last(&added)? {
            self.sections.push(added);
            return Ok(());
        }

        let connected_idx = self
            .sections
            .iter()
            .position(|s| s.starts_or_ends_together(&added))
            .ok_or(DomainError::Inconsistent(added.up_station()))?;
        let connected = self.sections[connected_idx];

        if connected.is_shorter_than_or_equal(&added) {
            return Err(DomainError::CannotAddSection(
                "new section must be shorter than the section it splits",
            ));
        }
        let remainder = connected.subtract(&added)?;

        self.sections.swap_remove(connected_idx);
        self.sections.push(added);
        self.sections.push(remainder);
        Ok(())
    }

    fn validate_added(&self, added: &Section) -> Result<(), DomainError> {
        let has_up = self.contains_station(added.up_station());
        let has_down = self.contains_station(added.down_station());

        match (has_up, has_down) {
            (true, true) => Err(DomainError::CannotAddSection(
                "both stations are already on the line",
            )),
            (false, false) => Err(DomainError::CannotAddSection(
                "neither station is on the line",
            )),
            _ => Ok(()),
        }
    }

    fn is_new_first_or_last(&self, added: &Section) -> Result<bool, DomainError> {
        Ok(self.first_section()?.is_after(added) || self.last_section()?.is_before(added))
    }

    /// Remove a station from the line.
    ///
    /// Removing the first or last station drops its section. Removing an
    /// interior station merges the two sections around it into one whose
    /// distance is their sum.
    pub fn remove_section(&mut self, station: StationId) -> Result<(), DomainError> {
        if self.sections.len() < 2 {
            return Err(DomainError::CannotDeleteSection(
                "line must keep at least one section",
            ));
        }

        if !self.contains_station(station) {
            return Err(DomainError::CannotDeleteSection(
                "station is not on the line",
            ));
        }

        let first = self.first_section()?;
        if first.match_up_station(station) {
            self.remove(&first);
            return Ok(());
        }

        let last = self.last_section()?;
        if last.match_down_station(station) {
            self.remove(&last);
            return Ok(());
        }

        let incoming = self.find_by_down_station(station)?;
        let outgoing = self.find_by_up_station(station)?;
        if incoming.distance().checked_add(outgoing.distance()).is_none() {
            return Err(DomainError::CannotDeleteSection(
                "merged section would be too long",
            ));
        }
        let combined = incoming.combine(&outgoing)?;

        self.remove(&incoming);
        self.remove(&outgoing);
        self.sections.push(combined);
        Ok(())
    }

    fn remove(&mut self, section: &Section) {
        if let Some(idx) = self.sections.iter().position(|s| s == section) {
            self.sections.swap_remove(idx);
        }
    }

    /// True if any section starts or ends at `station`.
    pub fn contains_station(&self, station: StationId) -> bool {
        self.sections
            .iter()
            .any(|s| s.match_up_station(station) || s.match_down_station(station))
    }

    /// Station ids from the first station to the last.
    ///
    /// Returns an empty vector for an empty line.
    pub fn ordered_station_ids(&self) -> Result<Vec<StationId>, DomainError> {
        let ordered = self.ordered_sections()?;
        let mut ids = Vec::with_capacity(ordered.len() + 1);
        if let Some(first) = ordered.first() {
            ids.push(first.up_station());
        }
        ids.extend(ordered.iter().map(Section::down_station));
        Ok(ids)
    }

    /// Sections in line order.
    pub fn ordered_sections(&self) -> Result<Vec<Section>, DomainError> {
        if self.sections.is_empty() {
            return Ok(Vec::new());
        }

        let last = self.last_section()?;
        let mut current = self.first_section()?;
        let mut ordered = Vec::with_capacity(self.sections.len());

        while current != last {
            ordered.push(current);
            if ordered.len() >= self.sections.len() {
                return Err(DomainError::Inconsistent(current.down_station()));
            }
            current = self.find_by_up_station(current.down_station())?;
        }
        ordered.push(current);

        Ok(ordered)
    }

    /// The first station of the line, if any.
    pub fn first_station(&self) -> Result<Option<StationId>, DomainError> {
        if self.sections.is_empty() {
            return Ok(None);
        }
        Ok(Some(self.first_section()?.up_station()))
    }

    /// The last station of the line, if any.
    pub fn last_station(&self) -> Result<Option<StationId>, DomainError> {
        if self.sections.is_empty() {
            return Ok(None);
        }
        Ok(Some(self.last_section()?.down_station()))
    }

    /// The section with no predecessor.
    ///
    /// On a cycle every up station has an incoming section; the error names
    /// the up station of the first stored one.
    fn first_section(&self) -> Result<Section, DomainError> {
        let probe = self.sections.first().ok_or(DomainError::EmptyLine)?;
        self.sections
            .iter()
            .find(|s| !self.sections.iter().any(|other| other.is_before(s)))
            .copied()
            .ok_or(DomainError::Inconsistent(probe.up_station()))
    }

    /// The section with no successor.
    fn last_section(&self) -> Result<Section, DomainError> {
        let probe = self.sections.first().ok_or(DomainError::EmptyLine)?;
        self.sections
            .iter()
            .find(|s| !self.sections.iter().any(|other| other.is_after(s)))
            .copied()
            .ok_or(DomainError::Inconsistent(probe.down_station()))
    }

    fn find_by_up_station(&self, station: StationId) -> Result<Section, DomainError> {
        self.sections
            .iter()
            .find(|s| s.match_up_station(station))
            .copied()
            .ok_or(DomainError::Inconsistent(station))
    }

    fn find_by_down_station(&self, station: StationId) -> Result<Section, DomainError> {
        self.sections
            .iter()
            .find(|s| s.match_down_station(station))
            .copied()
            .ok_or(DomainError::Inconsistent(station))
    }
}
