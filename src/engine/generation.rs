//! Bulk evaluation generation.
//!
//! Turns resolved scope and evaluator assignments into persisted
//! evaluation records, exactly one per eligible employee per period.
//! Generation is idempotent: repeated invocation never duplicates
//! records, and a concurrent duplicate insert is counted as a skip.

use serde::{Deserialize, Serialize};
use tracing::{info, warn};
use uuid::Uuid;

use crate::directory::OrgDirectory;
use crate::error::{EngineError, EngineResult};
use crate::models::Evaluation;
use crate::store::{EvaluationStore, InsertOutcome};

use super::evaluator::{EvaluatorResolution, resolve_evaluator};
use super::scope::resolve_scope;

/// The result summary of one generation invocation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerationSummary {
    /// Number of evaluation records created by this invocation.
    pub created: usize,
    /// Number of in-scope employees that already had a record.
    pub skipped: usize,
    /// Employees for whom no evaluator could be determined, in scope
    /// order. These are skipped, not failed.
    pub unresolved: Vec<String>,
}

/// Generates evaluation records for every in-scope employee of a period.
///
/// # Arguments
///
/// * `directory` - The organizational directory snapshot
/// * `store` - The store records are persisted to
/// * `period_id` - The target period
/// * `unit_filter` - Optional organizational unit restricting scope
///
/// # Returns
///
/// A [`GenerationSummary`]; the run fails outright only when the period
/// does not exist, the period's status forbids generation, or the unit
/// filter is unknown. Per-employee resolution failures never abort the
/// batch.
pub fn generate_evaluations(
    directory: &OrgDirectory,
    store: &EvaluationStore,
    period_id: Uuid,
    unit_filter: Option<&str>,
) -> EngineResult<GenerationSummary> {
    let period = store.get_period(period_id)?;
    if !period.status.permits_generation() {
        return Err(EngineError::state_conflict(format!(
            "cannot generate evaluations for a period in {:?} status",
            period.status
        )));
    }

    let scope = resolve_scope(directory, store, period_id, unit_filter)?;

    let mut summary = GenerationSummary {
        created: 0,
        skipped: 0,
        unresolved: Vec::new(),
    };

    for employee_id in scope {
        match resolve_evaluator(directory, store, &employee_id, &period) {
            EvaluatorResolution::Resolved(evaluator_id) => {
                let record = Evaluation::new_pending(period_id, employee_id, evaluator_id);
                match store.insert_evaluation_if_absent(record) {
                    InsertOutcome::Created => summary.created += 1,
                    InsertOutcome::AlreadyExists => summary.skipped += 1,
                }
            }
            EvaluatorResolution::Unresolved => {
                warn!(%period_id, %employee_id, "No evaluator could be resolved");
                summary.unresolved.push(employee_id);
            }
        }
    }

    info!(
        %period_id,
        created = summary.created,
        skipped = summary.skipped,
        unresolved = summary.unresolved.len(),
        "Generation completed"
    );
    Ok(summary)
}
