//! Section type.
//!
//! A `Section` is one directed track segment of a line, from an up station
//! to a down station, with a positive distance.

use super::{DomainError, StationId};

/// A directed track segment between two distinct stations.
///
/// # Invariants
///
/// - `up_station != down_station`
/// - `distance > 0`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Section {
    up_station: StationId,
    down_station: StationId,
    distance: u32,
}

impl Section {
    /// Create a section.
    ///
    /// # Errors
    ///
    /// Returns `InvalidSection` if both ends are the same station or the
    /// distance is zero.
    ///
    /// # Examples
    ///
    /// ```
    /// use subway_server::domain::{Section, StationId};
    ///
    /// let section = Section::new(StationId(1), StationId(2), 10).unwrap();
    /// assert_eq!(section.distance(), 10);
    ///
    /// assert!(Section::new(StationId(1), StationId(1), 10).is_err());
    /// assert!(Section::new(StationId(1), StationId(2), 0).is_err());
    /// ```
    pub fn new(
        up_station: StationId,
        down_station: StationId,
        distance: u32,
    ) -> Result<Self, DomainError> {
        if up_station == down_station {
            return Err(DomainError::InvalidSection(
                "up and down stations must differ",
            ));
        }
        if distance == 0 {
            return Err(DomainError::InvalidSection("distance must be positive"));
        }
        Ok(Self {
            up_station,
            down_station,
            distance,
        })
    }

    pub fn up_station(&self) -> StationId {
        self.up_station
    }

    pub fn down_station(&self) -> StationId {
        self.down_station
    }

    pub fn distance(&self) -> u32 {
        self.distance
    }

    /// Remove the part of `self` covered by `other`, which must share
    /// exactly one endpoint with `self` and be strictly shorter.
    ///
    /// Sharing the up station leaves `other.down -> self.down`; sharing the
    /// down station leaves `self.up -> other.up`.
    pub fn subtract(&self, other: &Section) -> Result<Section, DomainError> {
        if other.distance >= self.distance {
            return Err(DomainError::InvalidSection(
                "subtracted section must be shorter",
            ));
        }
        let remainder = self.distance - other.distance;

        match (self.starts_together(other), self.ends_together(other)) {
            (true, false) => Section::new(other.down_station, self.down_station, remainder),
            (false, true) => Section::new(self.up_station, other.up_station, remainder),
            _ => Err(DomainError::InvalidSection(
                "sections must overlap on exactly one endpoint",
            )),
        }
    }

    /// Join `self` with the section immediately following it.
    ///
    /// Fails if the sections are not adjacent or the summed distance does
    /// not fit in a `u32`.
    pub fn combine(&self, next: &Section) -> Result<Section, DomainError> {
        if !self.is_before(next) {
            return Err(DomainError::InvalidSection(
                "combined sections must be adjacent",
            ));
        }
        let distance = self
            .distance
            .checked_add(next.distance)
            .ok_or(DomainError::InvalidSection("combined distance overflows"))?;
        Section::new(self.up_station, next.down_station, distance)
    }

    pub fn starts_together(&self, other: &Section) -> bool {
        self.up_station == other.up_station
    }

    pub fn ends_together(&self, other: &Section) -> bool {
        self.down_station == other.down_station
    }

    pub fn starts_or_ends_together(&self, other: &Section) -> bool {
        self.starts_together(other) || self.ends_together(other)
    }

    pub fn is_shorter_than_or_equal(&self, other: &Section) -> bool {
        self.distance <= other.distance
    }

    pub fn match_up_station(&self, station: StationId) -> bool {
        self.up_station == station
    }

    pub fn match_down_station(&self, station: StationId) -> bool {
        self.down_station == station
    }

    /// True if `self` ends where `other` begins.
    pub fn is_before(&self, other: &Section) -> bool {
        self.down_station == other.up_station
    }

    /// True if `self` begins where `other` ends.
    pub fn is_after(&self, other: &Section) -> bool {
        self.up_station == other.down_station
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn section(up: u64, down: u64, distance: u32) -> Section {
        Section::new(StationId(up), StationId(down), distance).unwrap()
    }

    #[test]
    fn reject_self_loop() {
        assert_eq!(
            Section::new(StationId(1), StationId(1), 5),
            Err(DomainError::InvalidSection(
                "up and down stations must differ"
            ))
        );
    }

    #[test]
    fn reject_zero_distance() {
        assert_eq!(
            Section::new(StationId(1), StationId(2), 0),
            Err(DomainError::InvalidSection("distance must be positive"))
        );
    }

    #[test]
    fn subtract_when_starting_together() {
        let existing = section(1, 3, 10);
        let added = section(1, 2, 4);

        let remainder = existing.subtract(&added).unwrap();
        assert_eq!(remainder, section(2, 3, 6));
    }

    #[test]
    fn subtract_when_ending_together() {
        let existing = section(1, 3, 10);
        let added = section(2, 3, 3);

        let remainder = existing.subtract(&added).unwrap();
        assert_eq!(remainder, section(1, 2, 7));
    }

    #[test]
    fn subtract_preserves_total_distance() {
        let existing = section(1, 3, 10);
        let added = section(1, 2, 4);
        let remainder = existing.subtract(&added).unwrap();
        assert_eq!(existing.distance(), remainder.distance() + added.distance());
    }

    #[test]
    fn subtract_rejects_equal_or_longer() {
        let existing = section(1, 3, 10);
        assert!(existing.subtract(&section(1, 2, 10)).is_err());
        assert!(existing.subtract(&section(1, 2, 11)).is_err());
    }

    #[test]
    fn subtract_rejects_disjoint_sections() {
        let existing = section(1, 3, 10);
        assert_eq!(
            existing.subtract(&section(4, 5, 2)),
            Err(DomainError::InvalidSection(
                "sections must overlap on exactly one endpoint"
            ))
        );
    }

    #[test]
    fn subtract_rejects_overlap_on_both_ends() {
        let existing = section(1, 3, 10);
        // Same endpoints but shorter: both ends coincide.
        assert!(existing.subtract(&section(1, 3, 4)).is_err());
    }

    #[test]
    fn combine_adjacent() {
        let combined = section(1, 2, 4).combine(&section(2, 3, 6)).unwrap();
        assert_eq!(combined, section(1, 3, 10));
    }

    #[test]
    fn combine_rejects_non_adjacent() {
        assert!(section(1, 2, 4).combine(&section(3, 4, 6)).is_err());
        // Wrong order
        assert!(section(2, 3, 6).combine(&section(1, 2, 4)).is_err());
    }

    #[test]
    fn combine_rejects_overflowing_distance() {
        let a = section(1, 2, 3_000_000_000);
        let b = section(2, 3, 3_000_000_000);
        assert_eq!(
            a.combine(&b),
            Err(DomainError::InvalidSection("combined distance overflows"))
        );

        let max = section(1, 2, u32::MAX - 1).combine(&section(2, 3, 1)).unwrap();
        assert_eq!(max.distance(), u32::MAX);
    }

    #[test]
    fn predicates() {
        let a = section(1, 2, 4);
        let b = section(2, 3, 6);
        let c = section(1, 5, 9);

        assert!(a.is_before(&b));
        assert!(b.is_after(&a));
        assert!(!a.is_after(&b));
        assert!(a.starts_together(&c));
        assert!(!a.ends_together(&c));
        assert!(a.starts_or_ends_together(&c));
        assert!(!a.starts_or_ends_together(&b));
        assert!(a.is_shorter_than_or_equal(&b));
        assert!(a.match_up_station(StationId(1)));
        assert!(a.match_down_station(StationId(2)));
        assert!(!a.match_down_station(StationId(1)));
    }
}
