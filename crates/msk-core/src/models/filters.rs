//! Filter criteria and sort specification for suggestion lists.

use serde::{Deserialize, Serialize};

use super::{Priority, SortDirection, SortField, Source, SuggestionStatus, SuggestionType};

/// Optional constraints on a suggestion list, all ANDed together.
///
/// An empty criteria value retains every suggestion.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SuggestionFilters {
    /// Exact employee ID
    pub employee: Option<String>,

    /// Exact suggestion type
    pub category: Option<SuggestionType>,

    pub status: Option<SuggestionStatus>,

    pub source: Option<Source>,

    pub priority: Option<Priority>,

    /// Case-insensitive free text matched against the joined searchable fields
    pub search: Option<String>,
}

impl SuggestionFilters {
    /// Whether no constraint is set.
    pub fn is_empty(&self) -> bool {
        self.employee.as_deref().map_or(true, str::is_empty)
            && self.category.is_none()
            && self.status.is_none()
            && self.source.is_none()
            && self.priority.is_none()
            && self.search.as_deref().map_or(true, str::is_empty)
    }

    /// Criteria restricted to a single employee.
    pub fn for_employee(employee_id: impl Into<String>) -> Self {
        Self {
            employee: Some(employee_id.into()),
            ..Default::default()
        }
    }
}

/// A sort key paired with a direction.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortSpec {
    pub field: SortField,
    pub direction: SortDirection,
}

impl SortSpec {
    pub fn new(field: SortField, direction: SortDirection) -> Self {
        Self { field, direction }
    }
}
