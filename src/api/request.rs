//! Request types for the evaluation engine API.
//!
//! This module defines the JSON request structures for all endpoints.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::engine::{ScoreUpdate, SelfEvaluationInput};
use crate::models::{PeriodStatus, ProcessScore};

/// Request body for `POST /periods`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreatePeriodRequest {
    /// The evaluation year.
    pub year: i32,
    /// The term within the year.
    pub term: u8,
    /// The start date of the period (inclusive).
    pub start_date: NaiveDate,
    /// The end date of the period (inclusive).
    pub end_date: NaiveDate,
}

/// Request body for `POST /periods/:id/transition`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TransitionRequest {
    /// The status to transition the period to.
    pub target: PeriodStatus,
}

/// Request body for `POST /periods/:id/generate`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GenerateRequest {
    /// Optional organizational unit restricting generation scope.
    #[serde(default)]
    pub unit_code: Option<String>,
}

/// One process score line in a self-evaluation submission.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProcessScoreRequest {
    /// The process item being scored.
    pub item: String,
    /// The self-reported score, 0 to 100.
    pub score: Decimal,
}

/// Request body for `POST /periods/:id/self-evaluations`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SubmitSelfEvaluationRequest {
    /// The submitting user.
    pub user_id: String,
    /// Self-reported process scores.
    pub process_scores: Vec<ProcessScoreRequest>,
    /// The chosen growth category.
    pub growth_category: String,
    /// The chosen growth level, 1 to 5.
    pub growth_level: u8,
}

/// Request body for `POST /evaluations/:id/scores`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ScoreUpdateRequest {
    /// Achievement score slot.
    #[serde(default)]
    pub achievement_score: Option<Decimal>,
    /// Competency score slot.
    #[serde(default)]
    pub competency_score: Option<Decimal>,
    /// Attitude score slot.
    #[serde(default)]
    pub attitude_score: Option<Decimal>,
    /// Free-text evaluator comment.
    #[serde(default)]
    pub comment: Option<String>,
}

/// Request body for `POST /overrides`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateOverrideRequest {
    /// The employee whose evaluator is overridden.
    pub employee_id: String,
    /// The evaluator to assign.
    pub evaluator_id: String,
    /// The period this override applies to; omit for all periods.
    #[serde(default)]
    pub period_id: Option<Uuid>,
    /// Start of the effective window (inclusive).
    #[serde(default)]
    pub effective_from: Option<NaiveDate>,
    /// End of the effective window (inclusive).
    #[serde(default)]
    pub effective_to: Option<NaiveDate>,
}

/// Request body for `POST /exclusions`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateExclusionRequest {
    /// The employee removed from scope.
    pub employee_id: String,
    /// The period this exclusion applies to; omit for all periods.
    #[serde(default)]
    pub period_id: Option<Uuid>,
    /// Why the employee is excluded.
    pub reason: String,
}

impl From<ProcessScoreRequest> for ProcessScore {
    fn from(req: ProcessScoreRequest) -> Self {
        ProcessScore {
            item: req.item,
            score: req.score,
        }
    }
}

impl From<SubmitSelfEvaluationRequest> for SelfEvaluationInput {
    fn from(req: SubmitSelfEvaluationRequest) -> Self {
        SelfEvaluationInput {
            user_id: req.user_id,
            process_scores: req.process_scores.into_iter().map(Into::into).collect(),
            growth_category: req.growth_category,
            growth_level: req.growth_level,
        }
    }
}

impl From<ScoreUpdateRequest> for ScoreUpdate {
    fn from(req: ScoreUpdateRequest) -> Self {
        ScoreUpdate {
            achievement_score: req.achievement_score,
            competency_score: req.competency_score,
            attitude_score: req.attitude_score,
            comment: req.comment,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_create_period_request() {
        let json = r#"{
            "year": 2025,
            "term": 1,
            "start_date": "2025-01-01",
            "end_date": "2025-06-30"
        }"#;
        let request: CreatePeriodRequest = serde_json::from_str(json).unwrap();
        assert_eq!(request.year, 2025);
        assert_eq!(request.term, 1);
    }

    #[test]
    fn test_deserialize_transition_request() {
        let request: TransitionRequest = serde_json::from_str(r#"{"target": "active"}"#).unwrap();
        assert_eq!(request.target, PeriodStatus::Active);
    }

    #[test]
    fn test_generate_request_unit_code_defaults_to_none() {
        let request: GenerateRequest = serde_json::from_str("{}").unwrap();
        assert!(request.unit_code.is_none());
    }

    #[test]
    fn test_self_evaluation_request_conversion() {
        let json = r#"{
            "user_id": "emp_001",
            "process_scores": [{"item": "planning", "score": "80"}],
            "growth_category": "domain_expertise",
            "growth_level": 2
        }"#;
        let request: SubmitSelfEvaluationRequest = serde_json::from_str(json).unwrap();
        let input: SelfEvaluationInput = request.into();
        assert_eq!(input.user_id, "emp_001");
        assert_eq!(input.process_scores.len(), 1);
        assert_eq!(input.growth_level, 2);
    }

    #[test]
    fn test_score_update_request_fields_default_to_none() {
        let request: ScoreUpdateRequest = serde_json::from_str("{}").unwrap();
        let update: ScoreUpdate = request.into();
        assert!(update.achievement_score.is_none());
        assert!(update.competency_score.is_none());
        assert!(update.attitude_score.is_none());
        assert!(update.comment.is_none());
    }

    #[test]
    fn test_deserialize_override_request_without_optional_fields() {
        let json = r#"{"employee_id": "emp_001", "evaluator_id": "emp_100"}"#;
        let request: CreateOverrideRequest = serde_json::from_str(json).unwrap();
        assert!(request.period_id.is_none());
        assert!(request.effective_from.is_none());
        assert!(request.effective_to.is_none());
    }
}
