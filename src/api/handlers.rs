//! HTTP request handlers for the evaluation engine API.
//!
//! This module contains the handler functions for all API endpoints.

use axum::{
    Json, Router,
    extract::{Path, State, rejection::JsonRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
};
use tracing::{info, warn};
use uuid::Uuid;

use crate::engine::{
    complete_evaluation, confirm_evaluation, generate_evaluations, record_scores,
    submit_self_evaluation, transition_period,
};

use super::request::{
    CreateExclusionRequest, CreateOverrideRequest, CreatePeriodRequest, GenerateRequest,
    ScoreUpdateRequest, SubmitSelfEvaluationRequest, TransitionRequest,
};
use super::response::{ApiError, ApiErrorResponse};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/periods", post(create_period_handler))
        .route("/periods/:id", get(get_period_handler))
        .route("/periods/:id/transition", post(transition_handler))
        .route("/periods/:id/generate", post(generate_handler))
        .route("/periods/:id/evaluations", get(list_evaluations_handler))
        .route(
            "/periods/:id/self-evaluations",
            post(submit_self_evaluation_handler),
        )
        .route("/evaluations/:id/scores", post(record_scores_handler))
        .route("/evaluations/:id/complete", post(complete_handler))
        .route("/evaluations/:id/confirm", post(confirm_handler))
        .route(
            "/overrides",
            post(create_override_handler).get(list_overrides_handler),
        )
        .route(
            "/exclusions",
            post(create_exclusion_handler).get(list_exclusions_handler),
        )
        .with_state(state)
}

/// Translates a JSON extraction failure into a structured 400 response.
fn rejection_response(correlation_id: Uuid, rejection: JsonRejection) -> Response {
    let error = match rejection {
        JsonRejection::JsonDataError(err) => {
            let body_text = err.body_text();
            warn!(correlation_id = %correlation_id, error = %body_text, "JSON data error");
            if body_text.contains("missing field") {
                ApiError::new("VALIDATION_ERROR", body_text)
            } else {
                ApiError::malformed_json(body_text)
            }
        }
        JsonRejection::JsonSyntaxError(err) => {
            warn!(correlation_id = %correlation_id, error = %err, "JSON syntax error");
            ApiError::malformed_json(format!("Invalid JSON syntax: {}", err))
        }
        JsonRejection::MissingJsonContentType(_) => ApiError::new(
            "MISSING_CONTENT_TYPE",
            "Content-Type must be application/json",
        ),
        _ => ApiError::malformed_json("Failed to parse request body"),
    };
    (StatusCode::BAD_REQUEST, Json(error)).into_response()
}

async fn create_period_handler(
    State(state): State<AppState>,
    payload: Result<Json<CreatePeriodRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return rejection_response(correlation_id, rejection),
    };

    match state
        .store()
        .create_period(request.year, request.term, request.start_date, request.end_date)
    {
        Ok(period) => {
            info!(
                correlation_id = %correlation_id,
                period_id = %period.id,
                year = period.year,
                term = period.term,
                "Period created"
            );
            (StatusCode::CREATED, Json(period)).into_response()
        }
        Err(err) => {
            warn!(correlation_id = %correlation_id, error = %err, "Period creation failed");
            ApiErrorResponse::from(err).into_response()
        }
    }
}

async fn get_period_handler(State(state): State<AppState>, Path(id): Path<Uuid>) -> Response {
    match state.store().get_period(id) {
        Ok(period) => Json(period).into_response(),
        Err(err) => ApiErrorResponse::from(err).into_response(),
    }
}

async fn transition_handler(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    payload: Result<Json<TransitionRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return rejection_response(correlation_id, rejection),
    };

    match transition_period(state.store(), id, request.target) {
        Ok(period) => (StatusCode::OK, Json(period)).into_response(),
        Err(err) => {
            warn!(correlation_id = %correlation_id, period_id = %id, error = %err, "Transition rejected");
            ApiErrorResponse::from(err).into_response()
        }
    }
}

async fn generate_handler(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    payload: Result<Json<GenerateRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, period_id = %id, "Processing generation request");
    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return rejection_response(correlation_id, rejection),
    };

    match generate_evaluations(
        state.directory(),
        state.store(),
        id,
        request.unit_code.as_deref(),
    ) {
        Ok(summary) => (StatusCode::OK, Json(summary)).into_response(),
        Err(err) => {
            warn!(correlation_id = %correlation_id, period_id = %id, error = %err, "Generation failed");
            ApiErrorResponse::from(err).into_response()
        }
    }
}

async fn list_evaluations_handler(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Response {
    // Listing an unknown period is an error, not an empty collection.
    match state.store().get_period(id) {
        Ok(_) => Json(state.store().evaluations_for_period(id)).into_response(),
        Err(err) => ApiErrorResponse::from(err).into_response(),
    }
}

async fn submit_self_evaluation_handler(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    payload: Result<Json<SubmitSelfEvaluationRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return rejection_response(correlation_id, rejection),
    };

    match submit_self_evaluation(state.store(), id, request.into()) {
        Ok(record) => (StatusCode::CREATED, Json(record)).into_response(),
        Err(err) => {
            warn!(correlation_id = %correlation_id, period_id = %id, error = %err, "Self-evaluation rejected");
            ApiErrorResponse::from(err).into_response()
        }
    }
}

async fn record_scores_handler(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    payload: Result<Json<ScoreUpdateRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return rejection_response(correlation_id, rejection),
    };

    match record_scores(state.store(), id, request.into()) {
        Ok(evaluation) => (StatusCode::OK, Json(evaluation)).into_response(),
        Err(err) => {
            warn!(correlation_id = %correlation_id, evaluation_id = %id, error = %err, "Score update rejected");
            ApiErrorResponse::from(err).into_response()
        }
    }
}

async fn complete_handler(State(state): State<AppState>, Path(id): Path<Uuid>) -> Response {
    match complete_evaluation(state.store(), id) {
        Ok(evaluation) => (StatusCode::OK, Json(evaluation)).into_response(),
        Err(err) => {
            warn!(evaluation_id = %id, error = %err, "Completion rejected");
            ApiErrorResponse::from(err).into_response()
        }
    }
}

async fn confirm_handler(State(state): State<AppState>, Path(id): Path<Uuid>) -> Response {
    match confirm_evaluation(state.store(), id) {
        Ok(evaluation) => (StatusCode::OK, Json(evaluation)).into_response(),
        Err(err) => {
            warn!(evaluation_id = %id, error = %err, "Confirmation rejected");
            ApiErrorResponse::from(err).into_response()
        }
    }
}

async fn create_override_handler(
    State(state): State<AppState>,
    payload: Result<Json<CreateOverrideRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return rejection_response(correlation_id, rejection),
    };

    match state.store().create_override(
        request.employee_id,
        request.evaluator_id,
        request.period_id,
        request.effective_from,
        request.effective_to,
    ) {
        Ok(record) => (StatusCode::CREATED, Json(record)).into_response(),
        Err(err) => {
            warn!(correlation_id = %correlation_id, error = %err, "Override creation failed");
            ApiErrorResponse::from(err).into_response()
        }
    }
}

async fn list_overrides_handler(State(state): State<AppState>) -> Response {
    Json(state.store().list_overrides()).into_response()
}

async fn create_exclusion_handler(
    State(state): State<AppState>,
    payload: Result<Json<CreateExclusionRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return rejection_response(correlation_id, rejection),
    };

    match state
        .store()
        .create_exclusion(request.employee_id, request.period_id, request.reason)
    {
        Ok(record) => (StatusCode::CREATED, Json(record)).into_response(),
        Err(err) => {
            warn!(correlation_id = %correlation_id, error = %err, "Exclusion creation failed");
            ApiErrorResponse::from(err).into_response()
        }
    }
}

async fn list_exclusions_handler(State(state): State<AppState>) -> Response {
    Json(state.store().list_exclusions()).into_response()
}
