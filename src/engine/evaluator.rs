//! Evaluator resolution.
//!
//! Determines who evaluates a given employee for a period, in priority
//! order: a period-specific override, a global override, then the first
//! registered manager found walking the employee's unit hierarchy from
//! finest to coarsest. An employee is never assigned to themself.

use tracing::warn;

use crate::directory::OrgDirectory;
use crate::models::Period;
use crate::store::EvaluationStore;

/// The outcome of evaluator resolution for one employee.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EvaluatorResolution {
    /// An evaluator was determined.
    Resolved(String),
    /// No override applied and no manager was found at any level; the
    /// generation engine skips this employee and reports them.
    Unresolved,
}

/// Resolves the evaluator for one employee and period.
///
/// # Algorithm
///
/// 1. A period-specific override whose effective window intersects the
///    period's date range.
/// 2. Else a global override under the same window rule.
/// 3. Else the first unit in the employee's parent chain (unit → parent →
///    grandparent) with a registered manager other than the employee.
/// 4. Else [`EvaluatorResolution::Unresolved`].
///
/// Overrides naming the employee as their own evaluator are rejected at
/// write time by the store, so the resolver does not re-check them.
pub fn resolve_evaluator(
    directory: &OrgDirectory,
    store: &EvaluationStore,
    employee_id: &str,
    period: &Period,
) -> EvaluatorResolution {
    if let Some(o) = store.find_override(employee_id, Some(period.id)) {
        if o.window_intersects(period.start_date, period.end_date) {
            return EvaluatorResolution::Resolved(o.evaluator_id);
        }
    }

    if let Some(o) = store.find_override(employee_id, None) {
        if o.window_intersects(period.start_date, period.end_date) {
            return EvaluatorResolution::Resolved(o.evaluator_id);
        }
    }

    let Some(employee) = directory.employee(employee_id) else {
        warn!(employee_id, "Employee missing from directory snapshot");
        return EvaluatorResolution::Unresolved;
    };

    for unit in directory.unit_chain(&employee.unit_code) {
        if let Some(manager_id) = &unit.manager_id {
            if manager_id != employee_id {
                return EvaluatorResolution::Resolved(manager_id.clone());
            }
        }
    }

    EvaluatorResolution::Unresolved
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn load_directory() -> OrgDirectory {
        OrgDirectory::load("./config/org_demo").expect("Failed to load directory")
    }

    fn create_period(store: &EvaluationStore) -> Period {
        store
            .create_period(
                2025,
                1,
                NaiveDate::from_ymd_opt(2025, 1, 1).unwrap(),
                NaiveDate::from_ymd_opt(2025, 6, 30).unwrap(),
            )
            .unwrap()
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_resolves_team_manager() {
        let directory = load_directory();
        let store = EvaluationStore::new();
        let period = create_period(&store);

        let resolution = resolve_evaluator(&directory, &store, "emp_001", &period);
        assert_eq!(resolution, EvaluatorResolution::Resolved("emp_100".into()));
    }

    #[test]
    fn test_walks_up_when_unit_has_no_manager() {
        let directory = load_directory();
        let store = EvaluationStore::new();
        let period = create_period(&store);

        // team_data has no manager; the department manager applies.
        let resolution = resolve_evaluator(&directory, &store, "emp_004", &period);
        assert_eq!(resolution, EvaluatorResolution::Resolved("emp_200".into()));
    }

    #[test]
    fn test_manager_skips_themself_and_walks_up() {
        let directory = load_directory();
        let store = EvaluationStore::new();
        let period = create_period(&store);

        // emp_100 manages their own unit; the department manager applies.
        let resolution = resolve_evaluator(&directory, &store, "emp_100", &period);
        assert_eq!(resolution, EvaluatorResolution::Resolved("emp_200".into()));
    }

    #[test]
    fn test_top_of_hierarchy_is_unresolved() {
        let directory = load_directory();
        let store = EvaluationStore::new();
        let period = create_period(&store);

        // emp_300 manages the division and has no one above them.
        let resolution = resolve_evaluator(&directory, &store, "emp_300", &period);
        assert_eq!(resolution, EvaluatorResolution::Unresolved);
    }

    #[test]
    fn test_managerless_branch_is_unresolved() {
        let directory = load_directory();
        let store = EvaluationStore::new();
        let period = create_period(&store);

        let resolution = resolve_evaluator(&directory, &store, "emp_009", &period);
        assert_eq!(resolution, EvaluatorResolution::Unresolved);
    }

    #[test]
    fn test_global_override_beats_hierarchy() {
        let directory = load_directory();
        let store = EvaluationStore::new();
        let period = create_period(&store);
        store
            .create_override("emp_001".into(), "emp_210".into(), None, None, None)
            .unwrap();

        let resolution = resolve_evaluator(&directory, &store, "emp_001", &period);
        assert_eq!(resolution, EvaluatorResolution::Resolved("emp_210".into()));
    }

    #[test]
    fn test_period_override_beats_global_override() {
        let directory = load_directory();
        let store = EvaluationStore::new();
        let period = create_period(&store);
        store
            .create_override("emp_001".into(), "emp_210".into(), None, None, None)
            .unwrap();
        store
            .create_override(
                "emp_001".into(),
                "emp_300".into(),
                Some(period.id),
                None,
                None,
            )
            .unwrap();

        let resolution = resolve_evaluator(&directory, &store, "emp_001", &period);
        assert_eq!(resolution, EvaluatorResolution::Resolved("emp_300".into()));
    }

    #[test]
    fn test_override_outside_effective_window_is_ignored() {
        let directory = load_directory();
        let store = EvaluationStore::new();
        let period = create_period(&store);
        store
            .create_override(
                "emp_001".into(),
                "emp_210".into(),
                None,
                Some(date(2024, 1, 1)),
                Some(date(2024, 12, 31)),
            )
            .unwrap();

        // Window ended before the period; fall back to the hierarchy.
        let resolution = resolve_evaluator(&directory, &store, "emp_001", &period);
        assert_eq!(resolution, EvaluatorResolution::Resolved("emp_100".into()));
    }

    #[test]
    fn test_expired_period_override_falls_back_to_global() {
        let directory = load_directory();
        let store = EvaluationStore::new();
        let period = create_period(&store);
        store
            .create_override(
                "emp_001".into(),
                "emp_300".into(),
                Some(period.id),
                Some(date(2024, 1, 1)),
                Some(date(2024, 12, 31)),
            )
            .unwrap();
        store
            .create_override("emp_001".into(), "emp_210".into(), None, None, None)
            .unwrap();

        let resolution = resolve_evaluator(&directory, &store, "emp_001", &period);
        assert_eq!(resolution, EvaluatorResolution::Resolved("emp_210".into()));
    }

    #[test]
    fn test_override_window_touching_period_boundary_applies() {
        let directory = load_directory();
        let store = EvaluationStore::new();
        let period = create_period(&store);
        store
            .create_override(
                "emp_001".into(),
                "emp_210".into(),
                None,
                None,
                Some(period.start_date),
            )
            .unwrap();

        let resolution = resolve_evaluator(&directory, &store, "emp_001", &period);
        assert_eq!(resolution, EvaluatorResolution::Resolved("emp_210".into()));
    }

    #[test]
    fn test_unknown_employee_is_unresolved() {
        let directory = load_directory();
        let store = EvaluationStore::new();
        let period = create_period(&store);

        let resolution = resolve_evaluator(&directory, &store, "emp_999", &period);
        assert_eq!(resolution, EvaluatorResolution::Unresolved);
    }
}
