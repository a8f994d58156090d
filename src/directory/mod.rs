//! Read-only organizational directory collaborator.
//!
//! The organizational hierarchy is owned by an external subsystem; this
//! module consumes a snapshot of it. [`OrgDirectory`] answers the queries
//! the engine needs (active employees, unit membership, bounded parent
//! walks) and [`OrgDirectory::load`] reads a snapshot from YAML files.

mod loader;
mod types;

pub use types::{Employee, MAX_HIERARCHY_DEPTH, OrgDirectory, OrgUnit};
