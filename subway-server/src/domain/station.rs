//! Station type.

use serde::Serialize;

use super::{DomainError, StationId};

/// A station registered in the network.
///
/// Sections refer to stations by id only; the name lives here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Station {
    pub id: StationId,
    pub name: String,
}

impl Station {
    /// Create a station, rejecting a blank name.
    ///
    /// # Examples
    ///
    /// ```
    /// use subway_server::domain::{Station, StationId};
    ///
    /// let station = Station::new(StationId(1), "강남역").unwrap();
    /// assert_eq!(station.name, "강남역");
    ///
    /// assert!(Station::new(StationId(2), "   ").is_err());
    /// ```
    pub fn new(id: StationId, name: impl Into<String>) -> Result<Self, DomainError> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(DomainError::InvalidName("station name"));
        }
        Ok(Self { id, name })
    }
}
