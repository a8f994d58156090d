//! Period lifecycle controller.
//!
//! Enforces the period status transition table and its guards. The
//! transition table itself lives on
//! [`PeriodStatus`](crate::models::PeriodStatus); this module applies it
//! atomically through the store so concurrent transition requests cannot
//! both validate against a stale status.

use tracing::info;
use uuid::Uuid;

use crate::error::{EngineError, EngineResult};
use crate::models::{Period, PeriodStatus};
use crate::store::EvaluationStore;

/// Validates a transition against the table.
///
/// # Transition table
///
/// Draft → Active; Active → Review | Draft; Review → Closed | Active;
/// Closed → Review. Anything else is a state conflict.
pub fn validate_transition(current: PeriodStatus, target: PeriodStatus) -> EngineResult<()> {
    if current.can_transition_to(target) {
        Ok(())
    } else {
        Err(EngineError::state_conflict(format!(
            "cannot transition a period from {:?} to {:?}",
            current, target
        )))
    }
}

/// Transitions a period to the target status.
///
/// # Guards
///
/// Draft → Active additionally requires that at least one evaluation
/// record exists for the period, i.e. generation has run. Re-opening
/// Closed → Review is permitted to support correction workflows.
///
/// # Returns
///
/// The updated period, or `PeriodNotFound` / `StateConflict`.
pub fn transition_period(
    store: &EvaluationStore,
    period_id: Uuid,
    target: PeriodStatus,
) -> EngineResult<Period> {
    let period = store.transition_period(period_id, target, |period, evaluation_count| {
        validate_transition(period.status, target)?;
        if period.status == PeriodStatus::Draft
            && target == PeriodStatus::Active
            && evaluation_count == 0
        {
            return Err(EngineError::state_conflict(
                "cannot activate a period before evaluations are generated",
            ));
        }
        Ok(())
    })?;

    info!(%period_id, status = ?period.status, "Period transitioned");
    Ok(period)
}
