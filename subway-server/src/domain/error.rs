//! Domain error types.
//!
//! These errors represent rejected topology changes and broken invariants
//! in the domain layer. They are distinct from storage and HTTP errors.

use super::StationId;

/// Domain-level errors for validation and topology consistency.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DomainError {
    /// A section could not be attached to the line
    #[error("cannot add section: {0}")]
    CannotAddSection(&'static str),

    /// A station could not be removed from the line
    #[error("cannot delete section: {0}")]
    CannotDeleteSection(&'static str),

    /// Section geometry is invalid (self-loop, zero distance, bad overlap)
    #[error("invalid section: {0}")]
    InvalidSection(&'static str),

    /// A name or color attribute is blank
    #[error("invalid {0}: must not be blank")]
    InvalidName(&'static str),

    /// The sections of a line no longer form a single path
    #[error("inconsistent line topology at station {0}")]
    Inconsistent(StationId),

    /// A topology walk was attempted on a line with no sections
    #[error("line has no sections")]
    EmptyLine,
}
