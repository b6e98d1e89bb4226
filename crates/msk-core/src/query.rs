//! In-memory filtering and sorting of suggestion lists.
//!
//! Both functions are pure: inputs are never mutated and the original order of
//! the list is kept so it can be re-filtered with different criteria. They are
//! generic over anything that exposes a [`Suggestion`], so they apply equally
//! to bare suggestions and to suggestions joined with employee data.

use std::cmp::Ordering;

use crate::models::{
    EmployeeLookup, SortDirection, SortField, SortSpec, Suggestion, SuggestionFilters,
};

/// Whether a suggestion satisfies every non-empty constraint in `filters`.
///
/// The search term matches case-insensitively against description, type,
/// status, priority, source, the resolved employee name, notes and estimated
/// cost joined with single spaces. A term spanning two adjacent fields can
/// therefore match.
pub fn matches(
    suggestion: &Suggestion,
    filters: &SuggestionFilters,
    employees: Option<&dyn EmployeeLookup>,
) -> bool {
    if let Some(employee) = filters.employee.as_deref().filter(|e| !e.is_empty()) {
        if suggestion.employee_id != employee {
            return false;
        }
    }
    if filters.category.is_some_and(|c| c != suggestion.suggestion_type) {
        return false;
    }
    if filters.status.is_some_and(|s| s != suggestion.status) {
        return false;
    }
    if filters.source.is_some_and(|s| s != suggestion.source) {
        return false;
    }
    if filters.priority.is_some_and(|p| p != suggestion.priority) {
        return false;
    }

    match filters.search.as_deref().filter(|s| !s.is_empty()) {
        Some(term) => searchable_text(suggestion, employees).contains(&term.to_lowercase()),
        None => true,
    }
}

/// Lower-cased concatenation of the fields free-text search looks at.
fn searchable_text(suggestion: &Suggestion, employees: Option<&dyn EmployeeLookup>) -> String {
    let employee_name = employees
        .and_then(|lookup| lookup.employee_name(&suggestion.employee_id))
        .unwrap_or_default();

    [
        suggestion.description.as_str(),
        suggestion.suggestion_type.as_str(),
        suggestion.status.as_str(),
        suggestion.priority.as_str(),
        suggestion.source.as_str(),
        employee_name,
        suggestion.notes.as_deref().unwrap_or_default(),
        suggestion.estimated_cost.as_deref().unwrap_or_default(),
    ]
    .join(" ")
    .to_lowercase()
}

/// Suggestions that satisfy `filters`, in their original relative order.
pub fn filter_suggestions<T>(
    suggestions: &[T],
    filters: &SuggestionFilters,
    employees: Option<&dyn EmployeeLookup>,
) -> Vec<T>
where
    T: AsRef<Suggestion> + Clone,
{
    suggestions
        .iter()
        .filter(|item| matches(item.as_ref(), filters, employees))
        .cloned()
        .collect()
}

/// Natural ascending order of two suggestions for a sort field.
pub fn compare(a: &Suggestion, b: &Suggestion, field: SortField) -> Ordering {
    match field {
        SortField::DateUpdated => a
            .date_updated
            .as_millisecond()
            .cmp(&b.date_updated.as_millisecond()),
        SortField::Priority => a.priority.rank().cmp(&b.priority.rank()),
        SortField::Status => a.status.rank().cmp(&b.status.rank()),
    }
}

/// An ordered copy of `suggestions`.
///
/// The sort is stable in both directions: suggestions with equal keys keep
/// their original relative order.
pub fn sort_suggestions<T>(suggestions: &[T], field: SortField, direction: SortDirection) -> Vec<T>
where
    T: AsRef<Suggestion> + Clone,
{
    let mut sorted = suggestions.to_vec();
    sorted.sort_by(|a, b| {
        let ordering = compare(a.as_ref(), b.as_ref(), field);
        match direction {
            SortDirection::Asc => ordering,
            SortDirection::Desc => ordering.reverse(),
        }
    });
    sorted
}

/// Filter then sort, the projection shown by list views.
pub fn project<T>(
    suggestions: &[T],
    filters: &SuggestionFilters,
    sort: SortSpec,
    employees: Option<&dyn EmployeeLookup>,
) -> Vec<T>
where
    T: AsRef<Suggestion> + Clone,
{
    let filtered = filter_suggestions(suggestions, filters, employees);
    sort_suggestions(&filtered, sort.field, sort.direction)
}
