//! Data models for suggestions and employees.
//!
//! Markdown `Display` implementations for these models live in
//! [`crate::format::models`] so that presentation stays separate from the
//! data structures.

pub mod employee;
pub mod filters;
pub mod requests;
pub mod stats;
pub mod status;
pub mod suggestion;

#[cfg(test)]
mod tests;

pub use employee::{Employee, EmployeeLookup, NewEmployee};
pub use filters::{SortSpec, SuggestionFilters};
pub use requests::{CreateSuggestion, StatusUpdateResult, SuggestionImport, UpdateSuggestion};
pub use stats::DashboardStats;
pub use status::{
    Priority, RiskLevel, SortDirection, SortField, Source, SuggestionStatus, SuggestionType,
};
pub use suggestion::{EmployeeSummary, Suggestion, SuggestionWithEmployee};
