//! Application state for the evaluation engine API.
//!
//! This module defines the shared application state that is available
//! to all request handlers.

use std::sync::Arc;

use crate::directory::OrgDirectory;
use crate::store::EvaluationStore;

/// Shared application state.
///
/// Contains the organizational directory snapshot and the evaluation
/// store, shared across all request handlers.
#[derive(Clone)]
pub struct AppState {
    directory: Arc<OrgDirectory>,
    store: Arc<EvaluationStore>,
}

impl AppState {
    /// Creates a new application state with the given directory snapshot
    /// and an empty store.
    pub fn new(directory: OrgDirectory) -> Self {
        Self {
            directory: Arc::new(directory),
            store: Arc::new(EvaluationStore::new()),
        }
    }

    /// Returns a reference to the directory snapshot.
    pub fn directory(&self) -> &OrgDirectory {
        &self.directory
    }

    /// Returns a reference to the evaluation store.
    pub fn store(&self) -> &EvaluationStore {
        &self.store
    }
}
