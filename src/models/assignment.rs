//! Evaluator overrides and scope exclusions.
//!
//! This module defines the administrator-maintained records that adjust
//! the organizational defaults: [`EvaluatorOverride`] reassigns an
//! employee's evaluator, [`Exclusion`] removes an employee from scope.
//! Both are scoped to a single period or, when `period_id` is `None`,
//! apply globally; a period-specific record always takes precedence over a
//! global one.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// An administrator-defined evaluator assignment that supersedes the
/// organizational default for one employee.
///
/// At most one override exists per (employee, period) pair. An override
/// only applies when its effective window intersects the period's date
/// range; a missing bound is treated as unbounded on that side.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EvaluatorOverride {
    /// Unique identifier for this override.
    pub id: Uuid,
    /// The employee whose evaluator is overridden.
    pub employee_id: String,
    /// The evaluator to assign. Must differ from `employee_id`.
    pub evaluator_id: String,
    /// The period this override applies to; `None` means all periods.
    pub period_id: Option<Uuid>,
    /// Start of the effective window (inclusive); `None` is unbounded.
    pub effective_from: Option<NaiveDate>,
    /// End of the effective window (inclusive); `None` is unbounded.
    pub effective_to: Option<NaiveDate>,
}

impl EvaluatorOverride {
    /// Returns true if the effective window intersects the given date
    /// range.
    ///
    /// # Example
    ///
    /// ```
    /// use appraisal_engine::models::EvaluatorOverride;
    /// use chrono::NaiveDate;
    /// use uuid::Uuid;
    ///
    /// let override_record = EvaluatorOverride {
    ///     id: Uuid::new_v4(),
    ///     employee_id: "emp_001".to_string(),
    ///     evaluator_id: "emp_100".to_string(),
    ///     period_id: None,
    ///     effective_from: Some(NaiveDate::from_ymd_opt(2025, 3, 1).unwrap()),
    ///     effective_to: None,
    /// };
    /// let start = NaiveDate::from_ymd_opt(2025, 1, 1).unwrap();
    /// let end = NaiveDate::from_ymd_opt(2025, 6, 30).unwrap();
    /// assert!(override_record.window_intersects(start, end));
    /// ```
    pub fn window_intersects(&self, range_start: NaiveDate, range_end: NaiveDate) -> bool {
        let starts_in_time = match self.effective_from {
            Some(from) => from <= range_end,
            None => true,
        };
        let ends_in_time = match self.effective_to {
            Some(to) => to >= range_start,
            None => true,
        };
        starts_in_time && ends_in_time
    }
}

/// A marker removing an employee from evaluation scope for a period, or
/// for all periods when `period_id` is `None`.
///
/// At most one exclusion exists per (employee, period) pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Exclusion {
    /// Unique identifier for this exclusion.
    pub id: Uuid,
    /// The employee removed from scope.
    pub employee_id: String,
    /// The period this exclusion applies to; `None` means all periods.
    pub period_id: Option<Uuid>,
    /// Why the employee is excluded (e.g., "on leave").
    pub reason: String,
}
