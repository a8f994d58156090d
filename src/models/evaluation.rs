//! Evaluator-side evaluation record and score derivation.
//!
//! This module defines the [`Evaluation`] record created by the generation
//! engine, its [`EvaluationStatus`] workflow states, and the derivation of
//! the final score and [`Grade`] applied by the completion gate.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// The workflow status of an evaluator-side evaluation record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EvaluationStatus {
    /// Created by generation; no scores recorded yet.
    Pending,
    /// At least one score slot has been recorded.
    InProgress,
    /// All required scores present; final score and grade derived.
    Completed,
    /// Confirmed by the administrative review step.
    Confirmed,
}

/// The letter grade derived from a final score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Grade {
    /// 90 and above.
    S,
    /// 80 to below 90.
    A,
    /// 70 to below 80.
    B,
    /// 60 to below 70.
    C,
    /// Below 60.
    D,
}

impl Grade {
    /// Maps a final score onto its grade band.
    ///
    /// # Example
    ///
    /// ```
    /// use appraisal_engine::models::Grade;
    /// use rust_decimal::Decimal;
    ///
    /// assert_eq!(Grade::from_score(Decimal::from(90)), Grade::S);
    /// assert_eq!(Grade::from_score(Decimal::from(59)), Grade::D);
    /// ```
    pub fn from_score(score: Decimal) -> Self {
        if score >= Decimal::from(90) {
            Grade::S
        } else if score >= Decimal::from(80) {
            Grade::A
        } else if score >= Decimal::from(70) {
            Grade::B
        } else if score >= Decimal::from(60) {
            Grade::C
        } else {
            Grade::D
        }
    }
}

/// Derives the final score from the populated score slots.
///
/// The final score is the arithmetic mean of the slots that are present.
/// Returns `None` when no slot is populated.
pub fn derive_final_score(slots: &[Option<Decimal>]) -> Option<Decimal> {
    let present: Vec<Decimal> = slots.iter().copied().flatten().collect();
    if present.is_empty() {
        return None;
    }
    let total: Decimal = present.iter().sum();
    Some(total / Decimal::from(present.len()))
}

/// The evaluator-side evaluation record, unique per (period, employee).
///
/// Created only by the generation engine in `Pending` status; score slots
/// are recorded by the evaluator and the status is advanced only through
/// the completion gate and the confirmation step.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Evaluation {
    /// Unique identifier for this record.
    pub id: Uuid,
    /// The period this evaluation belongs to.
    pub period_id: Uuid,
    /// The employee being evaluated.
    pub employee_id: String,
    /// The evaluator resolved at generation time.
    pub evaluator_id: String,
    /// The current workflow status.
    pub status: EvaluationStatus,
    /// Achievement score, populated by an earlier objective-setting step.
    pub achievement_score: Option<Decimal>,
    /// Competency score, required for completion.
    pub competency_score: Option<Decimal>,
    /// Attitude score, required for completion.
    pub attitude_score: Option<Decimal>,
    /// Final score derived at completion time.
    pub final_score: Option<Decimal>,
    /// Grade derived from the final score at completion time.
    pub grade: Option<Grade>,
    /// Free-text evaluator comment.
    pub comment: Option<String>,
    /// When the completion gate passed.
    pub completed_at: Option<DateTime<Utc>>,
}

impl Evaluation {
    /// Creates a new pending evaluation for the given assignment.
    pub fn new_pending(period_id: Uuid, employee_id: String, evaluator_id: String) -> Self {
        Evaluation {
            id: Uuid::new_v4(),
            period_id,
            employee_id,
            evaluator_id,
            status: EvaluationStatus::Pending,
            achievement_score: None,
            competency_score: None,
            attitude_score: None,
            final_score: None,
            grade: None,
            comment: None,
            completed_at: None,
        }
    }

    /// Returns the score slot names that are required for completion but
    /// not yet populated.
    pub fn missing_required_scores(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();
        if self.competency_score.is_none() {
            missing.push("competency_score");
        }
        if self.attitude_score.is_none() {
            missing.push("attitude_score");
        }
        missing
    }
}
