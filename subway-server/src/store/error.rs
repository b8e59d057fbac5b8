//! Store error types.

use crate::domain::{DomainError, LineId, StationId};

/// Errors from the in-memory repositories.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StoreError {
    /// No station with this id
    #[error("station {0} not found")]
    StationNotFound(StationId),

    /// No line with this id
    #[error("line {0} not found")]
    LineNotFound(LineId),

    /// Station is still part of a line and cannot be deleted
    #[error("station {station} is still on line {line}")]
    StationInUse { station: StationId, line: LineId },

    /// The requested change was rejected by the domain model
    #[error(transparent)]
    Domain(#[from] DomainError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        assert_eq!(
            StoreError::StationNotFound(StationId(4)).to_string(),
            "station 4 not found"
        );
        assert_eq!(
            StoreError::LineNotFound(LineId(2)).to_string(),
            "line 2 not found"
        );
        assert_eq!(
            StoreError::StationInUse {
                station: StationId(1),
                line: LineId(3)
            }
            .to_string(),
            "station 1 is still on line 3"
        );

        let err: StoreError = DomainError::CannotDeleteSection("station is not on the line").into();
        assert_eq!(
            err.to_string(),
            "cannot delete section: station is not on the line"
        );
    }
}
