//! Port definitions (hexagonal architecture)
//!
//! Ports describe the shapes exchanged with external collaborators. Storage
//! itself lives outside this crate; only the record it hands back is modelled.

mod record;

pub use record::AccountRecord;
