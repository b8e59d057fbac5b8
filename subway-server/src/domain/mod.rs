//! Domain types for the subway network.
//!
//! This module contains the core model: stations, the sections that make up
//! a line, and the line aggregate that owns them. All types enforce their
//! invariants at construction or mutation time, so code that receives them
//! can trust their validity.

mod error;
mod ids;
mod line;
mod section;
mod sections;
mod station;

pub use error::DomainError;
pub use ids::{LineId, StationId};
pub use line::Line;
pub use section::Section;
pub use sections::Sections;
pub use station::Station;
