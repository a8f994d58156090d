//! Directory snapshot loading.
//!
//! Loads an [`OrgDirectory`] from YAML files in a snapshot directory.

use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::error::{EngineError, EngineResult};

use super::types::{Employee, OrgDirectory, OrgUnit};

#[derive(Debug, Deserialize)]
struct UnitsFile {
    units: Vec<OrgUnit>,
}

#[derive(Debug, Deserialize)]
struct EmployeesFile {
    employees: Vec<Employee>,
}

impl OrgDirectory {
    /// Loads a directory snapshot from the specified directory.
    ///
    /// # Directory Structure
    ///
    /// ```text
    /// config/org_demo/
    /// ├── units.yaml      # Organizational units with parents and managers
    /// └── employees.yaml  # Employees with unit membership
    /// ```
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the snapshot directory (e.g., "./config/org_demo")
    ///
    /// # Returns
    ///
    /// Returns an `OrgDirectory` on success, or an error if:
    /// - Either file is missing (`DirectoryNotFound`)
    /// - Either file contains invalid YAML (`DirectoryParseError`)
    /// - The data is internally inconsistent (`Validation`)
    ///
    /// # Example
    ///
    /// ```no_run
    /// use appraisal_engine::directory::OrgDirectory;
    ///
    /// let directory = OrgDirectory::load("./config/org_demo")?;
    /// # Ok::<(), appraisal_engine::error::EngineError>(())
    /// ```
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();

        let units_file = load_yaml::<UnitsFile>(&path.join("units.yaml"))?;
        let employees_file = load_yaml::<EmployeesFile>(&path.join("employees.yaml"))?;

        OrgDirectory::new(units_file.units, employees_file.employees)
    }
}

/// Loads and parses a YAML file.
fn load_yaml<T: serde::de::DeserializeOwned>(path: &Path) -> EngineResult<T> {
    let path_str = path.display().to_string();

    let content = fs::read_to_string(path).map_err(|_| EngineError::DirectoryNotFound {
        path: path_str.clone(),
    })?;

    serde_yaml::from_str(&content).map_err(|e| EngineError::DirectoryParseError {
        path: path_str,
        message: e.to_string(),
    })
}
