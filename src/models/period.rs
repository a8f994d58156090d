//! Evaluation period model and lifecycle states.
//!
//! This module contains the [`Period`] and [`PeriodStatus`] types that
//! define one evaluation cycle and the finite state machine its status
//! moves through.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// The lifecycle status of an evaluation period.
///
/// Statuses form a small state machine; the allowed transitions are
/// exposed through [`PeriodStatus::allowed_targets`] and enforced by the
/// lifecycle controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PeriodStatus {
    /// The period is being prepared; evaluations may be generated.
    Draft,
    /// The period is live; self-evaluations and scoring are open.
    Active,
    /// Scoring is under administrative review.
    Review,
    /// The period is closed. Can be re-opened to Review for corrections.
    Closed,
}

impl PeriodStatus {
    /// Returns the statuses this status may transition to.
    ///
    /// # Example
    ///
    /// ```
    /// use appraisal_engine::models::PeriodStatus;
    ///
    /// assert_eq!(PeriodStatus::Draft.allowed_targets(), &[PeriodStatus::Active]);
    /// assert!(PeriodStatus::Closed.allowed_targets().contains(&PeriodStatus::Review));
    /// ```
    pub fn allowed_targets(self) -> &'static [PeriodStatus] {
        match self {
            PeriodStatus::Draft => &[PeriodStatus::Active],
            PeriodStatus::Active => &[PeriodStatus::Review, PeriodStatus::Draft],
            PeriodStatus::Review => &[PeriodStatus::Closed, PeriodStatus::Active],
            PeriodStatus::Closed => &[PeriodStatus::Review],
        }
    }

    /// Returns true if a transition from this status to `target` is in the
    /// transition table.
    pub fn can_transition_to(self, target: PeriodStatus) -> bool {
        self.allowed_targets().contains(&target)
    }

    /// Returns true if evaluation generation is permitted in this status.
    ///
    /// Generation runs while a period is being prepared (Draft) and may be
    /// re-run for late joiners while it is live (Active).
    pub fn permits_generation(self) -> bool {
        matches!(self, PeriodStatus::Draft | PeriodStatus::Active)
    }
}

/// Represents one evaluation cycle.
///
/// Exactly one period exists per (year, term) pair. The status field is
/// mutated only through the lifecycle controller.
///
/// # Example
///
/// ```
/// use appraisal_engine::models::{Period, PeriodStatus};
/// use chrono::NaiveDate;
/// use uuid::Uuid;
///
/// let period = Period {
///     id: Uuid::new_v4(),
///     year: 2025,
///     term: 1,
///     start_date: NaiveDate::from_ymd_opt(2025, 1, 1).unwrap(),
///     end_date: NaiveDate::from_ymd_opt(2025, 6, 30).unwrap(),
///     status: PeriodStatus::Draft,
/// };
/// assert!(period.contains_date(NaiveDate::from_ymd_opt(2025, 3, 15).unwrap()));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Period {
    /// Unique identifier for the period.
    pub id: Uuid,
    /// The evaluation year (e.g., 2025).
    pub year: i32,
    /// The term within the year (e.g., 1 or 2 for half-year cycles).
    pub term: u8,
    /// The start date of the period (inclusive).
    pub start_date: NaiveDate,
    /// The end date of the period (inclusive).
    pub end_date: NaiveDate,
    /// The current lifecycle status.
    pub status: PeriodStatus,
}

impl Period {
    /// Checks if a given date falls within this period (inclusive).
    pub fn contains_date(&self, date: NaiveDate) -> bool {
        date >= self.start_date && date <= self.end_date
    }
}
