//! Organizational unit and employee types, and the directory queries
//! built on them.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

/// Upper bound on parent-chain walks.
///
/// The hierarchy is nominally three levels (division → department →
/// team); walks stop here so malformed parent data cannot loop.
pub const MAX_HIERARCHY_DEPTH: usize = 8;

/// One organizational unit in the hierarchy.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrgUnit {
    /// Unique unit code (e.g., "dept_platform").
    pub code: String,
    /// Display name.
    pub name: String,
    /// The parent unit's code; `None` for a top-level unit.
    #[serde(default)]
    pub parent: Option<String>,
    /// The designated manager of this unit, if one is registered.
    #[serde(default)]
    pub manager_id: Option<String>,
}

/// One person in the organizational hierarchy.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Employee {
    /// Unique identifier for the employee.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Whether the employee is currently active.
    pub is_active: bool,
    /// The code of the unit the employee belongs to.
    pub unit_code: String,
}

/// An in-process snapshot of the organizational hierarchy.
///
/// The directory is read-only from the engine's perspective: it is built
/// once (from YAML via [`OrgDirectory::load`](crate::directory::OrgDirectory::load),
/// or programmatically for tests) and queried during scope and evaluator
/// resolution.
#[derive(Debug, Clone)]
pub struct OrgDirectory {
    units: HashMap<String, OrgUnit>,
    employees: HashMap<String, Employee>,
}

impl OrgDirectory {
    /// Builds a directory from unit and employee lists.
    ///
    /// # Returns
    ///
    /// Returns the directory, or a `Validation` error if:
    /// - a unit code or employee id appears twice
    /// - a unit references an unknown parent
    /// - an employee references an unknown unit
    pub fn new(units: Vec<OrgUnit>, employees: Vec<Employee>) -> EngineResult<Self> {
        let mut unit_map: HashMap<String, OrgUnit> = HashMap::new();
        for unit in units {
            if unit_map.contains_key(&unit.code) {
                return Err(EngineError::validation(
                    "units",
                    format!("duplicate unit code '{}'", unit.code),
                ));
            }
            unit_map.insert(unit.code.clone(), unit);
        }

        for unit in unit_map.values() {
            if let Some(parent) = &unit.parent {
                if !unit_map.contains_key(parent) {
                    return Err(EngineError::validation(
                        "units",
                        format!("unit '{}' references unknown parent '{}'", unit.code, parent),
                    ));
                }
            }
        }

        let mut employee_map: HashMap<String, Employee> = HashMap::new();
        for employee in employees {
            if !unit_map.contains_key(&employee.unit_code) {
                return Err(EngineError::validation(
                    "employees",
                    format!(
                        "employee '{}' references unknown unit '{}'",
                        employee.id, employee.unit_code
                    ),
                ));
            }
            if employee_map.contains_key(&employee.id) {
                return Err(EngineError::validation(
                    "employees",
                    format!("duplicate employee id '{}'", employee.id),
                ));
            }
            employee_map.insert(employee.id.clone(), employee);
        }

        Ok(OrgDirectory {
            units: unit_map,
            employees: employee_map,
        })
    }

    /// Looks up a unit by code.
    pub fn unit(&self, code: &str) -> Option<&OrgUnit> {
        self.units.get(code)
    }

    /// Looks up an employee by id.
    pub fn employee(&self, id: &str) -> Option<&Employee> {
        self.employees.get(id)
    }

    /// Returns all active employees, in no particular order.
    pub fn active_employees(&self) -> Vec<&Employee> {
        self.employees.values().filter(|e| e.is_active).collect()
    }

    /// Returns true if `unit_code` equals `ancestor_code` or lies beneath
    /// it in the hierarchy.
    ///
    /// The parent walk is bounded by [`MAX_HIERARCHY_DEPTH`]; a chain that
    /// runs past the bound (a data cycle) counts as not-within.
    pub fn is_within(&self, unit_code: &str, ancestor_code: &str) -> bool {
        let mut current = Some(unit_code.to_string());
        for _ in 0..MAX_HIERARCHY_DEPTH {
            match current {
                Some(code) if code == ancestor_code => return true,
                Some(code) => {
                    current = self.unit(&code).and_then(|u| u.parent.clone());
                }
                None => return false,
            }
        }
        false
    }

    /// Walks the parent chain from the given unit (inclusive), finest to
    /// coarsest, yielding each unit in order.
    ///
    /// Bounded by [`MAX_HIERARCHY_DEPTH`] so malformed parent data yields
    /// a truncated chain rather than an infinite loop.
    pub fn unit_chain(&self, unit_code: &str) -> Vec<&OrgUnit> {
        let mut chain = Vec::new();
        let mut current = self.unit(unit_code);
        while let Some(unit) = current {
            if chain.len() >= MAX_HIERARCHY_DEPTH {
                break;
            }
            chain.push(unit);
            current = unit.parent.as_deref().and_then(|p| self.unit(p));
        }
        chain
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn unit(code: &str, parent: Option<&str>, manager: Option<&str>) -> OrgUnit {
        OrgUnit {
            code: code.to_string(),
            name: code.to_string(),
            parent: parent.map(String::from),
            manager_id: manager.map(String::from),
        }
    }

    fn employee(id: &str, unit_code: &str, active: bool) -> Employee {
        Employee {
            id: id.to_string(),
            name: id.to_string(),
            is_active: active,
            unit_code: unit_code.to_string(),
        }
    }

    fn three_level_directory() -> OrgDirectory {
        OrgDirectory::new(
            vec![
                unit("div_products", None, Some("emp_300")),
                unit("dept_platform", Some("div_products"), Some("emp_200")),
                unit("team_core", Some("dept_platform"), Some("emp_100")),
            ],
            vec![
                employee("emp_001", "team_core", true),
                employee("emp_002", "team_core", false),
                employee("emp_100", "team_core", true),
            ],
        )
        .unwrap()
    }

    #[test]
    fn test_active_employees_excludes_inactive() {
        let directory = three_level_directory();
        let active = directory.active_employees();
        assert_eq!(active.len(), 2);
        assert!(active.iter().all(|e| e.is_active));
    }

    #[test]
    fn test_unit_chain_walks_finest_to_coarsest() {
        let directory = three_level_directory();
        let chain = directory.unit_chain("team_core");
        let codes: Vec<&str> = chain.iter().map(|u| u.code.as_str()).collect();
        assert_eq!(codes, vec!["team_core", "dept_platform", "div_products"]);
    }

    #[test]
    fn test_unit_chain_for_unknown_unit_is_empty() {
        let directory = three_level_directory();
        assert!(directory.unit_chain("team_unknown").is_empty());
    }

    #[test]
    fn test_is_within_self_and_ancestors() {
        let directory = three_level_directory();
        assert!(directory.is_within("team_core", "team_core"));
        assert!(directory.is_within("team_core", "dept_platform"));
        assert!(directory.is_within("team_core", "div_products"));
        assert!(!directory.is_within("div_products", "team_core"));
    }

    #[test]
    fn test_cyclic_parent_data_terminates() {
        // A two-node parent cycle; both walks must stop at the bound.
        let directory = OrgDirectory::new(
            vec![unit("a", Some("b"), None), unit("b", Some("a"), None)],
            vec![],
        )
        .unwrap();
        assert!(!directory.is_within("a", "nonexistent"));
        assert!(directory.unit_chain("a").len() <= MAX_HIERARCHY_DEPTH);
    }

    #[test]
    fn test_duplicate_unit_code_rejected() {
        let result = OrgDirectory::new(vec![unit("a", None, None), unit("a", None, None)], vec![]);
        assert!(matches!(
            result,
            Err(crate::error::EngineError::Validation { .. })
        ));
    }

    #[test]
    fn test_unknown_parent_rejected() {
        let result = OrgDirectory::new(vec![unit("a", Some("missing"), None)], vec![]);
        assert!(matches!(
            result,
            Err(crate::error::EngineError::Validation { .. })
        ));
    }

    #[test]
    fn test_employee_with_unknown_unit_rejected() {
        let result = OrgDirectory::new(
            vec![unit("a", None, None)],
            vec![employee("emp_001", "missing", true)],
        );
        assert!(matches!(
            result,
            Err(crate::error::EngineError::Validation { .. })
        ));
    }

    #[test]
    fn test_duplicate_employee_id_rejected() {
        let result = OrgDirectory::new(
            vec![unit("a", None, None)],
            vec![
                employee("emp_001", "a", true),
                employee("emp_001", "a", true),
            ],
        );
        assert!(matches!(
            result,
            Err(crate::error::EngineError::Validation { .. })
        ));
    }
}
