//! Orchestration logic for the evaluation engine.
//!
//! This module contains the rule components: scope resolution, evaluator
//! resolution, bulk generation, the period lifecycle controller, the
//! self-evaluation submission workflow, and the evaluation completion
//! gate.

mod completion;
mod evaluator;
mod generation;
mod lifecycle;
mod scope;
mod self_evaluation;

pub use completion::{ScoreUpdate, complete_evaluation, confirm_evaluation, record_scores};
pub use evaluator::{EvaluatorResolution, resolve_evaluator};
pub use generation::{GenerationSummary, generate_evaluations};
pub use lifecycle::{transition_period, validate_transition};
pub use scope::resolve_scope;
pub use self_evaluation::{SelfEvaluationInput, submit_self_evaluation};
