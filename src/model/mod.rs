//! Pathway record model and static taxonomy.

pub mod taxonomy;
pub mod types;

pub use types::{Pathway, PathwayName, Publication, PublisherName, SectorEntry};
