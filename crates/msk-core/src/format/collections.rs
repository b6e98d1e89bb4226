//! Collection wrapper types for displaying groups of domain objects.

use std::fmt;

use jiff::Timestamp;

use super::{
    dates::{relative_time_at, DEFAULT_OVERDUE_THRESHOLD_DAYS},
    labels::{status_badges, Badged},
};
use crate::models::{Employee, SuggestionWithEmployee};

/// A suggestion table, one markdown row per suggestion.
///
/// # Examples
///
/// ```rust
/// use msk_core::format::SuggestionTable;
///
/// let table = SuggestionTable::new(Vec::new());
/// assert!(table.to_string().contains("No suggestions found."));
/// ```
pub struct SuggestionTable {
    pub rows: Vec<SuggestionWithEmployee>,
    pub overdue_threshold_days: i64,
}

impl SuggestionTable {
    pub fn new(rows: Vec<SuggestionWithEmployee>) -> Self {
        Self {
            rows,
            overdue_threshold_days: DEFAULT_OVERDUE_THRESHOLD_DAYS,
        }
    }

    pub fn with_overdue_threshold(mut self, days: i64) -> Self {
        self.overdue_threshold_days = days;
        self
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }
}

impl fmt::Display for SuggestionTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.rows.is_empty() {
            return writeln!(f, "No suggestions found.");
        }

        let now = Timestamp::now();
        writeln!(f, "| ID | Employee | Type | Description | Priority | Status | Updated |")?;
        writeln!(f, "|---|---|---|---|---|---|---|")?;
        for row in &self.rows {
            let s = &row.suggestion;
            let status = status_badges(s, now, self.overdue_threshold_days)
                .iter()
                .map(|b| b.label)
                .collect::<Vec<_>>()
                .join(", ");
            writeln!(
                f,
                "| {} | {} | {} | {} | {} | {} | {} |",
                s.id,
                row.employee.name,
                s.suggestion_type.badge().label,
                s.description.replace('|', "/"),
                s.priority.badge().label,
                status,
                relative_time_at(&s.date_updated, now)
            )?;
        }
        Ok(())
    }
}

/// Newtype wrapper for displaying the employee directory.
pub struct Employees(pub Vec<Employee>);

impl Employees {
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Employee> {
        self.0.iter()
    }
}

impl fmt::Display for Employees {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            writeln!(f, "No employees found.")
        } else {
            for employee in &self.0 {
                write!(f, "{employee}")?;
            }
            Ok(())
        }
    }
}
