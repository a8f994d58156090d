//! Error types for the evaluation orchestration engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for all error conditions that can occur while managing evaluation
//! periods, generating evaluation records, and driving the scoring
//! workflows.

use thiserror::Error;
use uuid::Uuid;

/// The main error type for the evaluation orchestration engine.
///
/// All operations in the engine return this error type, making it easy
/// to handle errors consistently throughout the application.
///
/// # Example
///
/// ```
/// use appraisal_engine::error::EngineError;
/// use uuid::Uuid;
///
/// let id = Uuid::nil();
/// let error = EngineError::PeriodNotFound { id };
/// assert_eq!(
///     error.to_string(),
///     format!("Evaluation period not found: {}", id)
/// );
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// No evaluation period exists with the given id.
    #[error("Evaluation period not found: {id}")]
    PeriodNotFound {
        /// The period id that was not found.
        id: Uuid,
    },

    /// No evaluation record exists with the given id.
    #[error("Evaluation not found: {id}")]
    EvaluationNotFound {
        /// The evaluation id that was not found.
        id: Uuid,
    },

    /// No organizational unit exists with the given code.
    #[error("Organizational unit not found: {code}")]
    UnitNotFound {
        /// The unit code that was not found.
        code: String,
    },

    /// The organizational directory data was not found at the specified path.
    #[error("Directory data not found: {path}")]
    DirectoryNotFound {
        /// The path that was not found.
        path: String,
    },

    /// The organizational directory data could not be parsed.
    #[error("Failed to parse directory file '{path}': {message}")]
    DirectoryParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// An input field was missing, malformed, or out of range.
    #[error("Invalid field '{field}': {message}")]
    Validation {
        /// The field that was invalid.
        field: String,
        /// A description of what made the field invalid.
        message: String,
    },

    /// The operation conflicts with the current state of the target record.
    #[error("State conflict: {message}")]
    StateConflict {
        /// A description of the conflicting state.
        message: String,
    },
}

impl EngineError {
    /// Creates a validation error for the given field.
    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        EngineError::Validation {
            field: field.into(),
            message: message.into(),
        }
    }

    /// Creates a state-conflict error with the given description.
    pub fn state_conflict(message: impl Into<String>) -> Self {
        EngineError::StateConflict {
            message: message.into(),
        }
    }
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;
