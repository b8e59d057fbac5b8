//! Data transfer objects for web requests and responses.

use serde::{Deserialize, Serialize};

use crate::domain::{Line, LineId, Station, StationId};
use crate::path::PathResponse;

/// Request to register a station.
#[derive(Debug, Deserialize)]
pub struct CreateStationRequest {
    pub name: String,
}

/// A station in responses.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StationResult {
    pub id: StationId,
    pub name: String,
}

impl From<Station> for StationResult {
    fn from(station: Station) -> Self {
        Self {
            id: station.id,
            name: station.name,
        }
    }
}

/// Request to create a line.
///
/// The initial section is optional; when any of its fields is given, all
/// three must be.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateLineRequest {
    pub name: String,
    pub color: String,
    pub up_station_id: Option<StationId>,
    pub down_station_id: Option<StationId>,
    pub distance: Option<u32>,
}

impl CreateLineRequest {
    /// The initial section, if one was requested.
    ///
    /// Returns `Err` if only some of the section fields are present.
    pub fn initial_section(&self) -> Result<Option<SectionRequest>, &'static str> {
        match (self.up_station_id, self.down_station_id, self.distance) {
            (Some(up_station_id), Some(down_station_id), Some(distance)) => {
                Ok(Some(SectionRequest {
                    up_station_id,
                    down_station_id,
                    distance,
                }))
            }
            (None, None, None) => Ok(None),
            _ => Err("upStationId, downStationId and distance must be given together"),
        }
    }
}

/// Request to rename or recolor a line.
#[derive(Debug, Deserialize)]
pub struct UpdateLineRequest {
    pub name: String,
    pub color: String,
}

/// A line with its stations in order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LineResult {
    pub id: LineId,
    pub name: String,
    pub color: String,
    pub stations: Vec<StationResult>,
}

impl LineResult {
    /// Build from a line and its ordered stations.
    pub fn new(line: &Line, stations: Vec<StationResult>) -> Self {
        Self {
            id: line.id(),
            name: line.name().to_string(),
            color: line.color().to_string(),
            stations,
        }
    }
}

/// Request to add a section to a line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SectionRequest {
    pub up_station_id: StationId,
    pub down_station_id: StationId,
    pub distance: u32,
}

/// Query for removing a station from a line.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeleteSectionQuery {
    pub station_id: StationId,
}

/// Query for a shortest path.
#[derive(Debug, Deserialize)]
pub struct PathQuery {
    pub source: StationId,
    pub target: StationId,
}

/// Shortest path response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PathResult {
    /// Stations in travel order
    pub stations: Vec<StationResult>,

    /// Total distance
    pub distance: u64,
}

impl From<PathResponse> for PathResult {
    fn from(response: PathResponse) -> Self {
        Self {
            stations: response.stations.into_iter().map(StationResult::from).collect(),
            distance: response.distance,
        }
    }
}

/// Error response.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}
