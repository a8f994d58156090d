//! Employee-authored self-evaluation record.
//!
//! This module defines the [`SelfEvaluation`] record and its two-state
//! submission workflow, which is independent of the evaluator-side record
//! for the same period.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// The submission status of a self-evaluation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SelfEvaluationStatus {
    /// Saved but not yet submitted; still editable by the employee.
    Draft,
    /// Submitted; immutable to further employee edits for this period.
    Submitted,
}

/// One self-reported process score line.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProcessScore {
    /// The process item being scored (e.g., "planning").
    pub item: String,
    /// The self-reported score, 0 to 100.
    pub score: Decimal,
}

/// The employee-authored self-evaluation, unique per (period, user).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SelfEvaluation {
    /// The period this self-evaluation belongs to.
    pub period_id: Uuid,
    /// The submitting user.
    pub user_id: String,
    /// Self-reported process scores.
    pub process_scores: Vec<ProcessScore>,
    /// The growth category the employee chose for this cycle.
    pub growth_category: String,
    /// The growth level the employee chose, 1 to 5.
    pub growth_level: u8,
    /// The submission status.
    pub status: SelfEvaluationStatus,
    /// When the record was submitted.
    pub submitted_at: Option<DateTime<Utc>>,
}

impl SelfEvaluation {
    /// Returns true once the record has been submitted.
    pub fn is_submitted(&self) -> bool {
        self.status == SelfEvaluationStatus::Submitted
    }
}
