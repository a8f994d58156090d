//! Core data models for the evaluation orchestration engine.
//!
//! This module contains all the domain models used throughout the engine.

mod assignment;
mod evaluation;
mod period;
mod self_evaluation;

pub use assignment::{EvaluatorOverride, Exclusion};
pub use evaluation::{Evaluation, EvaluationStatus, Grade, derive_final_score};
pub use period::{Period, PeriodStatus};
pub use self_evaluation::{ProcessScore, SelfEvaluation, SelfEvaluationStatus};
