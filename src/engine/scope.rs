//! Scope resolution.
//!
//! Determines which employees are eligible for evaluation in a period:
//! active employees, optionally restricted to an organizational unit's
//! subtree, minus any employee under a matching exclusion.

use uuid::Uuid;

use crate::directory::OrgDirectory;
use crate::error::{EngineError, EngineResult};
use crate::store::EvaluationStore;

/// Resolves the ordered set of employee ids in scope for a period.
///
/// # Arguments
///
/// * `directory` - The organizational directory snapshot
/// * `store` - The store holding exclusions
/// * `period_id` - The period whose exclusions apply
/// * `unit_filter` - When given, restricts scope to this unit's subtree
///
/// # Returns
///
/// Employee ids ordered by (unit code, employee id) so repeated runs
/// produce reviewable, deterministic output. An empty result is valid.
/// An unknown filter unit returns `UnitNotFound`.
pub fn resolve_scope(
    directory: &OrgDirectory,
    store: &EvaluationStore,
    period_id: Uuid,
    unit_filter: Option<&str>,
) -> EngineResult<Vec<String>> {
    if let Some(code) = unit_filter {
        if directory.unit(code).is_none() {
            return Err(EngineError::UnitNotFound {
                code: code.to_string(),
            });
        }
    }

    let excluded = store.excluded_employee_ids(period_id);

    let mut in_scope: Vec<(&str, &str)> = directory
        .active_employees()
        .into_iter()
        .filter(|e| match unit_filter {
            Some(ancestor) => directory.is_within(&e.unit_code, ancestor),
            None => true,
        })
        .filter(|e| !excluded.contains(&e.id))
        .map(|e| (e.unit_code.as_str(), e.id.as_str()))
        .collect();

    in_scope.sort();
    Ok(in_scope.into_iter().map(|(_, id)| id.to_string()).collect())
}
