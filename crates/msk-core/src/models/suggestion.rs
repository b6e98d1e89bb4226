//! Suggestion model definition and related functionality.

use jiff::Timestamp;
use serde::{Deserialize, Serialize};

use super::{Employee, Priority, RiskLevel, Source, SuggestionStatus, SuggestionType};

/// A recommended MSK-risk-reduction action tied to one employee.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Suggestion {
    /// Opaque identifier assigned by the storage layer
    pub id: String,

    /// ID of the employee the suggestion is for
    pub employee_id: String,

    /// Category of the suggestion
    #[serde(rename = "type")]
    pub suggestion_type: SuggestionType,

    /// What the employee or their manager should do
    pub description: String,

    pub status: SuggestionStatus,

    #[serde(default)]
    pub priority: Priority,

    pub source: Source,

    /// Identity of the creator (an email address for admin suggestions)
    pub created_by: String,

    pub date_created: Timestamp,

    /// Never earlier than `date_created`
    pub date_updated: Timestamp,

    /// Present only while `status` is completed
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date_completed: Option<Timestamp>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,

    /// Display amount such as "£85.00"
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub estimated_cost: Option<String>,
}

impl Suggestion {
    /// Whether the completion date agrees with the status.
    pub fn has_consistent_completion(&self) -> bool {
        (self.status == SuggestionStatus::Completed) == self.date_completed.is_some()
    }

    /// Whether the suggestion is still pending past `threshold_days` at `now`.
    pub fn is_overdue_at(&self, now: Timestamp, threshold_days: i64) -> bool {
        crate::format::dates::is_overdue_at(self.date_created, self.status, threshold_days, now)
    }
}

impl AsRef<Suggestion> for Suggestion {
    fn as_ref(&self) -> &Suggestion {
        self
    }
}

/// The minimal employee fields joined onto a suggestion for display.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeSummary {
    pub name: String,
    pub department: String,
    pub risk_level: RiskLevel,
}

impl From<&Employee> for EmployeeSummary {
    fn from(employee: &Employee) -> Self {
        Self {
            name: employee.name.clone(),
            department: employee.department.clone(),
            risk_level: employee.risk_level,
        }
    }
}

/// A suggestion joined with its employee's summary fields.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SuggestionWithEmployee {
    #[serde(flatten)]
    pub suggestion: Suggestion,
    pub employee: EmployeeSummary,
}

impl SuggestionWithEmployee {
    /// Join a suggestion with the employee it belongs to.
    pub fn new(suggestion: Suggestion, employee: &Employee) -> Self {
        Self {
            suggestion,
            employee: employee.into(),
        }
    }
}

impl AsRef<Suggestion> for SuggestionWithEmployee {
    fn as_ref(&self) -> &Suggestion {
        &self.suggestion
    }
}
