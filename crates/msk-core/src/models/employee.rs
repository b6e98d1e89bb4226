//! Employee reference data.

use jiff::Timestamp;
use serde::{Deserialize, Serialize};

use super::RiskLevel;

/// An employee whose workstation has been assessed for MSK risk.
///
/// Employees are owned outside the dashboard core and treated as read-only
/// lookup data for the lifetime of a session.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Employee {
    pub id: String,
    pub name: String,
    pub department: String,
    pub job_title: String,
    pub workstation: String,
    pub risk_level: RiskLevel,
    pub last_assessment: Timestamp,
}

/// Fields for inserting an employee; the storage layer assigns the ID.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct NewEmployee {
    pub name: String,
    pub department: String,
    pub job_title: String,
    pub workstation: String,
    pub risk_level: RiskLevel,
    pub last_assessment: Timestamp,
}

/// Resolves employee names for free-text search.
pub trait EmployeeLookup {
    /// Name of the employee with the given ID, if known.
    fn employee_name(&self, employee_id: &str) -> Option<&str>;
}

impl EmployeeLookup for [Employee] {
    fn employee_name(&self, employee_id: &str) -> Option<&str> {
        self.iter()
            .find(|employee| employee.id == employee_id)
            .map(|employee| employee.name.as_str())
    }
}

impl EmployeeLookup for Vec<Employee> {
    fn employee_name(&self, employee_id: &str) -> Option<&str> {
        self.as_slice().employee_name(employee_id)
    }
}
