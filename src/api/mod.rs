//! HTTP API for the evaluation orchestration engine.
//!
//! This module provides the administrative/service boundary: the axum
//! router, request and response types, and shared application state.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::{
    CreateExclusionRequest, CreateOverrideRequest, CreatePeriodRequest, GenerateRequest,
    ProcessScoreRequest, ScoreUpdateRequest, SubmitSelfEvaluationRequest, TransitionRequest,
};
pub use response::{ApiError, ApiErrorResponse};
pub use state::AppState;
