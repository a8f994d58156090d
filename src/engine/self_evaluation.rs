//! Self-evaluation submission workflow.
//!
//! Employees submit one self-evaluation per active period. Submission is
//! an atomic create-or-update: the already-submitted guard is applied by
//! the store under the same write guard as the record replacement.

use chrono::Utc;
use rust_decimal::Decimal;
use tracing::info;
use uuid::Uuid;

use crate::error::{EngineError, EngineResult};
use crate::models::{PeriodStatus, ProcessScore, SelfEvaluation, SelfEvaluationStatus};
use crate::store::EvaluationStore;

/// The employee-supplied fields of a submission.
#[derive(Debug, Clone)]
pub struct SelfEvaluationInput {
    /// The submitting user.
    pub user_id: String,
    /// Self-reported process scores; at least one is required.
    pub process_scores: Vec<ProcessScore>,
    /// The chosen growth category.
    pub growth_category: String,
    /// The chosen growth level, 1 to 5.
    pub growth_level: u8,
}

fn validate(input: &SelfEvaluationInput) -> EngineResult<()> {
    if input.user_id.trim().is_empty() {
        return Err(EngineError::validation("user_id", "must not be empty"));
    }
    if input.process_scores.is_empty() {
        return Err(EngineError::validation(
            "process_scores",
            "at least one process score is required",
        ));
    }
    for entry in &input.process_scores {
        if entry.score < Decimal::ZERO || entry.score > Decimal::from(100) {
            return Err(EngineError::validation(
                "process_scores",
                format!("score for '{}' must be between 0 and 100", entry.item),
            ));
        }
    }
    if input.growth_category.trim().is_empty() {
        return Err(EngineError::validation(
            "growth_category",
            "must not be empty",
        ));
    }
    if !(1..=5).contains(&input.growth_level) {
        return Err(EngineError::validation(
            "growth_level",
            "must be between 1 and 5",
        ));
    }
    Ok(())
}

/// Submits a self-evaluation for a (period, user) pair.
///
/// # Preconditions
///
/// The period must exist and be Active, the user's existing record (if
/// any) must not already be Submitted, and all required fields must be
/// present and in range.
///
/// # Returns
///
/// The submitted record with `submitted_at` stamped, or
/// `PeriodNotFound` / `StateConflict` / `Validation`.
pub fn submit_self_evaluation(
    store: &EvaluationStore,
    period_id: Uuid,
    input: SelfEvaluationInput,
) -> EngineResult<SelfEvaluation> {
    let period = store.get_period(period_id)?;
    if period.status != PeriodStatus::Active {
        return Err(EngineError::state_conflict(format!(
            "self-evaluations can only be submitted while the period is active, not {:?}",
            period.status
        )));
    }
    validate(&input)?;

    let record = SelfEvaluation {
        period_id,
        user_id: input.user_id,
        process_scores: input.process_scores,
        growth_category: input.growth_category,
        growth_level: input.growth_level,
        status: SelfEvaluationStatus::Submitted,
        submitted_at: Some(Utc::now()),
    };
    let submitted = store.submit_self_evaluation(record)?;

    info!(%period_id, user_id = %submitted.user_id, "Self-evaluation submitted");
    Ok(submitted)
}
