//! Identifier types.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Identifier of a persisted station.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StationId(pub u64);

/// Identifier of a persisted line.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LineId(pub u64);

impl fmt::Debug for StationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "StationId({})", self.0)
    }
}

impl fmt::Display for StationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl fmt::Debug for LineId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "LineId({})", self.0)
    }
}

impl fmt::Display for LineId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_is_bare_number() {
        assert_eq!(StationId(42).to_string(), "42");
        assert_eq!(LineId(3).to_string(), "3");
    }

    #[test]
    fn debug() {
        assert_eq!(format!("{:?}", StationId(42)), "StationId(42)");
        assert_eq!(format!("{:?}", LineId(3)), "LineId(3)");
    }

    #[test]
    fn serializes_transparently() {
        assert_eq!(serde_json::to_string(&StationId(5)).unwrap(), "5");
        let id: LineId = serde_json::from_str("9").unwrap();
        assert_eq!(id, LineId(9));
    }
}
