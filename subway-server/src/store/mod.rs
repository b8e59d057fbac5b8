//! In-memory persistence for stations and lines.
//!
//! Each store is a cheaply cloneable handle over shared state guarded by an
//! async `RwLock`. A line's sections are only ever replaced as a whole under
//! the write lock, which is the transactional boundary for section changes.

mod error;
mod line;
mod section;
mod station;

pub use error::StoreError;
pub use line::{LineStore, SectionRecord};
pub use section::SectionService;
pub use station::StationStore;
