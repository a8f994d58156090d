//! Periodic personnel-evaluation orchestration engine.
//!
//! This crate determines which employees are evaluated in a given cycle
//! ("period") and by whom, materializes exactly one evaluation record per
//! eligible employee, and gates both the per-record scoring workflow and
//! the period lifecycle itself.

#![warn(missing_docs)]

pub mod api;
pub mod directory;
pub mod engine;
pub mod error;
pub mod models;
pub mod store;
