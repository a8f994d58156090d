//! Evaluator-side scoring and the completion gate.
//!
//! Evaluators record score slots against their pending records; the
//! completion gate verifies the required slots are present before
//! deriving the final score and grade and marking the record completed.
//! A separate confirmation step seals completed records.

use chrono::Utc;
use rust_decimal::Decimal;
use tracing::info;
use uuid::Uuid;

use crate::error::{EngineError, EngineResult};
use crate::models::{Evaluation, EvaluationStatus, Grade, derive_final_score};
use crate::store::EvaluationStore;

/// Score slots and comment supplied by the evaluator.
///
/// Only `Some` fields are written; existing values are kept otherwise.
#[derive(Debug, Clone, Default)]
pub struct ScoreUpdate {
    /// Achievement score slot.
    pub achievement_score: Option<Decimal>,
    /// Competency score slot.
    pub competency_score: Option<Decimal>,
    /// Attitude score slot.
    pub attitude_score: Option<Decimal>,
    /// Free-text comment.
    pub comment: Option<String>,
}

fn validate_score(field: &str, value: Option<Decimal>) -> EngineResult<()> {
    if let Some(score) = value {
        if score < Decimal::ZERO || score > Decimal::from(100) {
            return Err(EngineError::validation(field, "must be between 0 and 100"));
        }
    }
    Ok(())
}

/// Records score slots on an evaluation.
///
/// The first recorded score moves a Pending record to InProgress.
/// Records that have already passed the completion gate reject further
/// score changes.
pub fn record_scores(
    store: &EvaluationStore,
    evaluation_id: Uuid,
    update: ScoreUpdate,
) -> EngineResult<Evaluation> {
    validate_score("achievement_score", update.achievement_score)?;
    validate_score("competency_score", update.competency_score)?;
    validate_score("attitude_score", update.attitude_score)?;

    store.update_evaluation(evaluation_id, |evaluation| {
        if matches!(
            evaluation.status,
            EvaluationStatus::Completed | EvaluationStatus::Confirmed
        ) {
            return Err(EngineError::state_conflict(format!(
                "scores cannot be changed on a {:?} evaluation",
                evaluation.status
            )));
        }

        if let Some(score) = update.achievement_score {
            evaluation.achievement_score = Some(score);
        }
        if let Some(score) = update.competency_score {
            evaluation.competency_score = Some(score);
        }
        if let Some(score) = update.attitude_score {
            evaluation.attitude_score = Some(score);
        }
        if let Some(comment) = update.comment {
            evaluation.comment = Some(comment);
        }

        if evaluation.status == EvaluationStatus::Pending {
            evaluation.status = EvaluationStatus::InProgress;
        }
        Ok(())
    })
}

/// Completes an evaluation once all required scores are present.
///
/// # Preconditions
///
/// The record must exist and both `competency_score` and
/// `attitude_score` must be non-null; the validation error names each
/// absent slot.
///
/// # Effect
///
/// Derives the final score (mean of the populated slots) and grade, sets
/// the status to Completed and stamps `completed_at`.
pub fn complete_evaluation(
    store: &EvaluationStore,
    evaluation_id: Uuid,
) -> EngineResult<Evaluation> {
    let evaluation = store.update_evaluation(evaluation_id, |evaluation| {
        if matches!(
            evaluation.status,
            EvaluationStatus::Completed | EvaluationStatus::Confirmed
        ) {
            return Err(EngineError::state_conflict(format!(
                "evaluation is already {:?}",
                evaluation.status
            )));
        }

        let missing = evaluation.missing_required_scores();
        if !missing.is_empty() {
            return Err(EngineError::validation(
                missing.join(", "),
                "required score not recorded",
            ));
        }

        let final_score = derive_final_score(&[
            evaluation.achievement_score,
            evaluation.competency_score,
            evaluation.attitude_score,
        ]);
        evaluation.grade = final_score.map(Grade::from_score);
        evaluation.final_score = final_score;
        evaluation.status = EvaluationStatus::Completed;
        evaluation.completed_at = Some(Utc::now());
        Ok(())
    })?;

    info!(
        %evaluation_id,
        employee_id = %evaluation.employee_id,
        grade = ?evaluation.grade,
        "Evaluation completed"
    );
    Ok(evaluation)
}

/// Confirms a completed evaluation.
///
/// Only Completed records can be confirmed; anything else is a state
/// conflict.
pub fn confirm_evaluation(
    store: &EvaluationStore,
    evaluation_id: Uuid,
) -> EngineResult<Evaluation> {
    store.update_evaluation(evaluation_id, |evaluation| {
        if evaluation.status != EvaluationStatus::Completed {
            return Err(EngineError::state_conflict(format!(
                "only completed evaluations can be confirmed, not {:?}",
                evaluation.status
            )));
        }
        evaluation.status = EvaluationStatus::Confirmed;
        Ok(())
    })
}
