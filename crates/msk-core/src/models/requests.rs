//! Request types for creating and updating suggestions.

use jiff::Timestamp;
use serde::{Deserialize, Serialize};

use super::{Priority, Source, Suggestion, SuggestionStatus, SuggestionType};
use crate::error::{DashboardError, Result};

/// Admin-entered fields for a new suggestion.
///
/// Status, source and timestamps are assigned by the storage layer.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CreateSuggestion {
    pub employee_id: String,
    #[serde(rename = "type")]
    pub suggestion_type: SuggestionType,
    pub description: String,
    #[serde(default)]
    pub priority: Option<Priority>,
    #[serde(default)]
    pub notes: Option<String>,
    #[serde(default)]
    pub estimated_cost: Option<String>,
}

impl CreateSuggestion {
    /// Validate required fields before any storage call is made.
    ///
    /// # Errors
    ///
    /// * `DashboardError::InvalidInput` - When the employee ID is empty
    /// * `DashboardError::InvalidInput` - When the description is empty or
    ///   whitespace only
    pub fn validate(&self) -> Result<()> {
        if self.employee_id.trim().is_empty() {
            return Err(DashboardError::invalid_input("employeeId")
                .with_reason("Employee and Description are required"));
        }
        if self.description.trim().is_empty() {
            return Err(DashboardError::invalid_input("description")
                .with_reason("Employee and Description are required"));
        }
        Ok(())
    }

    /// Priority to persist; medium when not chosen.
    pub fn priority_or_default(&self) -> Priority {
        self.priority.unwrap_or_default()
    }

    /// Notes with empty input treated as absent.
    pub fn notes(&self) -> Option<&str> {
        non_empty(self.notes.as_deref())
    }

    /// Estimated cost with empty input treated as absent.
    pub fn estimated_cost(&self) -> Option<&str> {
        non_empty(self.estimated_cost.as_deref())
    }
}

/// Partial update of a suggestion.
///
/// Outer `None` means "leave unchanged"; for the optional text fields
/// `Some(None)` explicitly clears the stored value.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UpdateSuggestion {
    pub status: Option<SuggestionStatus>,
    pub notes: Option<Option<String>>,
    pub estimated_cost: Option<Option<String>>,
}

impl UpdateSuggestion {
    /// A status change that sets notes only when non-empty notes are given.
    pub fn status_change(status: SuggestionStatus, notes: Option<String>) -> Self {
        Self {
            status: Some(status),
            notes: non_empty(notes.as_deref()).map(|n| Some(n.to_string())),
            estimated_cost: None,
        }
    }

    /// Also set the estimated cost, when non-empty.
    pub fn with_estimated_cost(mut self, estimated_cost: Option<String>) -> Self {
        if let Some(cost) = non_empty(estimated_cost.as_deref()) {
            self.estimated_cost = Some(Some(cost.to_string()));
        }
        self
    }

    /// Whether the update would change nothing but `date_updated`.
    pub fn is_empty(&self) -> bool {
        self.status.is_none() && self.notes.is_none() && self.estimated_cost.is_none()
    }

    /// Apply the update to an in-memory suggestion as of `now`.
    ///
    /// Stamps `date_updated`, stamps `date_completed` when the new status is
    /// completed and clears it for any other new status.
    pub fn apply_to(&self, suggestion: &mut Suggestion, now: Timestamp) {
        let now = now.max(suggestion.date_created);
        if let Some(status) = self.status {
            suggestion.status = status;
            suggestion.date_completed = (status == SuggestionStatus::Completed).then_some(now);
        }
        if let Some(notes) = &self.notes {
            suggestion.notes = notes.clone();
        }
        if let Some(cost) = &self.estimated_cost {
            suggestion.estimated_cost = cost.clone();
        }
        suggestion.date_updated = now;
    }
}

/// Outcome of a status update as reported by the storage layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusUpdateResult {
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl StatusUpdateResult {
    pub fn ok() -> Self {
        Self {
            success: true,
            error: None,
        }
    }

    pub fn failed(error: impl Into<String>) -> Self {
        Self {
            success: false,
            error: Some(error.into()),
        }
    }
}

/// A complete suggestion record stored verbatim, used for seeding.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SuggestionImport {
    pub employee_id: String,
    #[serde(rename = "type")]
    pub suggestion_type: SuggestionType,
    pub description: String,
    pub status: SuggestionStatus,
    #[serde(default)]
    pub priority: Priority,
    pub source: Source,
    #[serde(default)]
    pub created_by: Option<String>,
    pub date_created: Timestamp,
    pub date_updated: Timestamp,
    #[serde(default)]
    pub date_completed: Option<Timestamp>,
    #[serde(default)]
    pub notes: Option<String>,
    #[serde(default)]
    pub estimated_cost: Option<String>,
}

/// Creator recorded for imported suggestions that carry none.
pub const SYSTEM_CREATOR: &str = "vida-system@company.com";

impl SuggestionImport {
    /// The recorded creator, falling back to the recommendation system.
    pub fn created_by(&self) -> &str {
        non_empty(self.created_by.as_deref()).unwrap_or(SYSTEM_CREATOR)
    }
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}
