//! In-process persistence collaborator.
//!
//! The surrounding system persists to a relational datastore; this module
//! consumes that collaborator through [`EvaluationStore`], which provides
//! the same atomic primitives the engine relies on: a
//! uniqueness-constrained insert for evaluation records, a guarded upsert
//! for self-evaluations, and check-and-set period transitions. Every
//! multi-step invariant check runs under a single write guard.

use std::collections::{HashMap, HashSet};
use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use chrono::NaiveDate;
use uuid::Uuid;

use crate::error::{EngineError, EngineResult};
use crate::models::{
    Evaluation, EvaluatorOverride, Exclusion, Period, PeriodStatus, SelfEvaluation,
};

/// The outcome of a uniqueness-constrained insert.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InsertOutcome {
    /// The record was inserted.
    Created,
    /// A record with the same unique key already existed; nothing changed.
    AlreadyExists,
}

#[derive(Debug, Default)]
struct Tables {
    periods: HashMap<Uuid, Period>,
    period_terms: HashSet<(i32, u8)>,
    overrides: HashMap<Uuid, EvaluatorOverride>,
    override_keys: HashSet<(String, Option<Uuid>)>,
    exclusions: HashMap<Uuid, Exclusion>,
    exclusion_keys: HashSet<(String, Option<Uuid>)>,
    evaluations: HashMap<Uuid, Evaluation>,
    evaluation_keys: HashMap<(Uuid, String), Uuid>,
    self_evaluations: HashMap<(Uuid, String), SelfEvaluation>,
}

/// The store backing all engine operations.
///
/// Cheap to share behind an `Arc`; all methods take `&self`.
#[derive(Debug, Default)]
pub struct EvaluationStore {
    inner: RwLock<Tables>,
}

impl EvaluationStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    fn read(&self) -> RwLockReadGuard<'_, Tables> {
        // A poisoned lock only means a panic elsewhere; the data is still
        // consistent because every write path completes its checks first.
        self.inner.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, Tables> {
        self.inner.write().unwrap_or_else(PoisonError::into_inner)
    }

    // ----- periods -----

    /// Creates a new period in Draft status.
    ///
    /// # Returns
    ///
    /// Returns the created period, or an error if:
    /// - `end_date` precedes `start_date` or `term` is zero (`Validation`)
    /// - a period already exists for (year, term) (`StateConflict`)
    pub fn create_period(
        &self,
        year: i32,
        term: u8,
        start_date: NaiveDate,
        end_date: NaiveDate,
    ) -> EngineResult<Period> {
        if term == 0 {
            return Err(EngineError::validation("term", "must be at least 1"));
        }
        if end_date < start_date {
            return Err(EngineError::validation(
                "end_date",
                "must not precede start_date",
            ));
        }

        let mut tables = self.write();
        if !tables.period_terms.insert((year, term)) {
            return Err(EngineError::state_conflict(format!(
                "a period already exists for year {} term {}",
                year, term
            )));
        }

        let period = Period {
            id: Uuid::new_v4(),
            year,
            term,
            start_date,
            end_date,
            status: PeriodStatus::Draft,
        };
        tables.periods.insert(period.id, period.clone());
        Ok(period)
    }

    /// Fetches a period by id.
    pub fn get_period(&self, id: Uuid) -> EngineResult<Period> {
        self.read()
            .periods
            .get(&id)
            .cloned()
            .ok_or(EngineError::PeriodNotFound { id })
    }

    /// Applies a status transition to a period.
    ///
    /// The `guard` closure receives the current period and the number of
    /// evaluation records referencing it, and decides whether the
    /// transition may proceed. Guard evaluation and the status write
    /// happen under one write guard, so two concurrent transition
    /// requests cannot both validate against a stale status.
    pub fn transition_period<F>(
        &self,
        id: Uuid,
        target: PeriodStatus,
        guard: F,
    ) -> EngineResult<Period>
    where
        F: FnOnce(&Period, usize) -> EngineResult<()>,
    {
        let mut tables = self.write();
        let evaluation_count = tables
            .evaluation_keys
            .keys()
            .filter(|(period_id, _)| *period_id == id)
            .count();
        let period = tables
            .periods
            .get_mut(&id)
            .ok_or(EngineError::PeriodNotFound { id })?;
        guard(period, evaluation_count)?;
        period.status = target;
        Ok(period.clone())
    }

    // ----- overrides -----

    /// Creates an evaluator override.
    ///
    /// # Returns
    ///
    /// Returns the created override, or an error if:
    /// - the evaluator equals the employee (`Validation`)
    /// - the effective window is inverted (`Validation`)
    /// - an override already exists for (employee, period) (`StateConflict`)
    pub fn create_override(
        &self,
        employee_id: String,
        evaluator_id: String,
        period_id: Option<Uuid>,
        effective_from: Option<NaiveDate>,
        effective_to: Option<NaiveDate>,
    ) -> EngineResult<EvaluatorOverride> {
        if evaluator_id == employee_id {
            return Err(EngineError::validation(
                "evaluator_id",
                "an employee cannot be their own evaluator",
            ));
        }
        if let (Some(from), Some(to)) = (effective_from, effective_to) {
            if to < from {
                return Err(EngineError::validation(
                    "effective_to",
                    "must not precede effective_from",
                ));
            }
        }

        let mut tables = self.write();
        if !tables
            .override_keys
            .insert((employee_id.clone(), period_id))
        {
            return Err(EngineError::state_conflict(format!(
                "an override already exists for employee '{}' in this scope",
                employee_id
            )));
        }

        let record = EvaluatorOverride {
            id: Uuid::new_v4(),
            employee_id,
            evaluator_id,
            period_id,
            effective_from,
            effective_to,
        };
        tables.overrides.insert(record.id, record.clone());
        Ok(record)
    }

    /// Finds the override for an exact (employee, period scope) key.
    ///
    /// Pass `Some(period_id)` for the period-specific record and `None`
    /// for the global one; precedence between the two is the resolver's
    /// concern.
    pub fn find_override(
        &self,
        employee_id: &str,
        period_id: Option<Uuid>,
    ) -> Option<EvaluatorOverride> {
        self.read()
            .overrides
            .values()
            .find(|o| o.employee_id == employee_id && o.period_id == period_id)
            .cloned()
    }

    /// Lists all overrides.
    pub fn list_overrides(&self) -> Vec<EvaluatorOverride> {
        self.read().overrides.values().cloned().collect()
    }

    // ----- exclusions -----

    /// Creates an exclusion.
    ///
    /// # Returns
    ///
    /// Returns the created exclusion, or an error if:
    /// - the reason is empty (`Validation`)
    /// - an exclusion already exists for (employee, period) (`StateConflict`)
    pub fn create_exclusion(
        &self,
        employee_id: String,
        period_id: Option<Uuid>,
        reason: String,
    ) -> EngineResult<Exclusion> {
        if reason.trim().is_empty() {
            return Err(EngineError::validation("reason", "must not be empty"));
        }

        let mut tables = self.write();
        if !tables
            .exclusion_keys
            .insert((employee_id.clone(), period_id))
        {
            return Err(EngineError::state_conflict(format!(
                "an exclusion already exists for employee '{}' in this scope",
                employee_id
            )));
        }

        let record = Exclusion {
            id: Uuid::new_v4(),
            employee_id,
            period_id,
            reason,
        };
        tables.exclusions.insert(record.id, record.clone());
        Ok(record)
    }

    /// Returns the ids of employees excluded for the given period, either
    /// specifically or globally.
    pub fn excluded_employee_ids(&self, period_id: Uuid) -> HashSet<String> {
        self.read()
            .exclusions
            .values()
            .filter(|e| e.period_id.is_none() || e.period_id == Some(period_id))
            .map(|e| e.employee_id.clone())
            .collect()
    }

    /// Lists all exclusions.
    pub fn list_exclusions(&self) -> Vec<Exclusion> {
        self.read().exclusions.values().cloned().collect()
    }

    // ----- evaluations -----

    /// Inserts an evaluation unless one already exists for its
    /// (period, employee) key.
    ///
    /// This is the uniqueness-constrained insert the generation engine
    /// builds its idempotence on: two concurrent inserts for the same
    /// employee converge to one record, with the loser observing
    /// [`InsertOutcome::AlreadyExists`] rather than an error.
    pub fn insert_evaluation_if_absent(&self, evaluation: Evaluation) -> InsertOutcome {
        let mut tables = self.write();
        let key = (evaluation.period_id, evaluation.employee_id.clone());
        if tables.evaluation_keys.contains_key(&key) {
            return InsertOutcome::AlreadyExists;
        }
        tables.evaluation_keys.insert(key, evaluation.id);
        tables.evaluations.insert(evaluation.id, evaluation);
        InsertOutcome::Created
    }

    /// Fetches an evaluation by id.
    pub fn get_evaluation(&self, id: Uuid) -> EngineResult<Evaluation> {
        self.read()
            .evaluations
            .get(&id)
            .cloned()
            .ok_or(EngineError::EvaluationNotFound { id })
    }

    /// Lists the evaluations for a period, ordered by employee id.
    pub fn evaluations_for_period(&self, period_id: Uuid) -> Vec<Evaluation> {
        let mut evaluations: Vec<Evaluation> = self
            .read()
            .evaluations
            .values()
            .filter(|e| e.period_id == period_id)
            .cloned()
            .collect();
        evaluations.sort_by(|a, b| a.employee_id.cmp(&b.employee_id));
        evaluations
    }

    /// Applies a validated mutation to an evaluation.
    ///
    /// The closure's checks and the write happen under one write guard;
    /// returning an error leaves the record untouched.
    pub fn update_evaluation<F>(&self, id: Uuid, f: F) -> EngineResult<Evaluation>
    where
        F: FnOnce(&mut Evaluation) -> EngineResult<()>,
    {
        let mut tables = self.write();
        let evaluation = tables
            .evaluations
            .get_mut(&id)
            .ok_or(EngineError::EvaluationNotFound { id })?;
        let mut candidate = evaluation.clone();
        f(&mut candidate)?;
        *evaluation = candidate.clone();
        Ok(candidate)
    }

    // ----- self-evaluations -----

    /// Atomically creates or replaces the self-evaluation for the
    /// record's (period, user) key.
    ///
    /// The already-submitted guard is evaluated under the same write
    /// guard as the replacement, so two near-simultaneous submissions
    /// cannot both succeed.
    pub fn submit_self_evaluation(&self, record: SelfEvaluation) -> EngineResult<SelfEvaluation> {
        let mut tables = self.write();
        let key = (record.period_id, record.user_id.clone());
        if let Some(existing) = tables.self_evaluations.get(&key) {
            if existing.is_submitted() {
                return Err(EngineError::state_conflict(format!(
                    "self-evaluation for user '{}' is already submitted for this period",
                    record.user_id
                )));
            }
        }
        tables.self_evaluations.insert(key, record.clone());
        Ok(record)
    }

    /// Fetches the self-evaluation for a (period, user) key.
    pub fn get_self_evaluation(&self, period_id: Uuid, user_id: &str) -> Option<SelfEvaluation> {
        self.read()
            .self_evaluations
            .get(&(period_id, user_id.to_string()))
            .cloned()
    }
}
