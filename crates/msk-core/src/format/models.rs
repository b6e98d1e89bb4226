//! Markdown `Display` implementations for the domain models.

use std::fmt;

use jiff::Timestamp;

use super::{
    currency::format_currency,
    dates::{relative_time, UkDate, UkDateTime, DEFAULT_OVERDUE_THRESHOLD_DAYS},
    labels::{status_badges, Badged},
};
use crate::models::{DashboardStats, Employee, Suggestion, SuggestionWithEmployee};

impl Suggestion {
    fn fmt_details(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "- ID: {}", self.id)?;
        writeln!(f, "- Type: {}", self.suggestion_type.badge().label)?;
        writeln!(f, "- Priority: {}", self.priority.with_icon())?;
        writeln!(f, "- Source: {}", self.source.badge().label)?;
        writeln!(f, "- Created by: {}", self.created_by)?;
        writeln!(f, "- Created: {}", UkDateTime(&self.date_created))?;
        writeln!(f, "- Updated: {}", relative_time(&self.date_updated))?;
        if let Some(completed) = &self.date_completed {
            writeln!(f, "- Completed: {}", UkDate(completed))?;
        }
        if let Some(cost) = &self.estimated_cost {
            writeln!(f, "- Estimated cost: {}", format_currency(cost))?;
        }
        writeln!(f)?;
        writeln!(f, "{}", self.description)?;

        if let Some(notes) = &self.notes {
            writeln!(f)?;
            writeln!(f, "#### Notes")?;
            writeln!(f)?;
            writeln!(f, "{notes}")?;
        }
        Ok(())
    }

    fn status_line(&self, overdue_threshold_days: i64) -> String {
        status_badges(self, Timestamp::now(), overdue_threshold_days)
            .iter()
            .map(|b| format!("{} {}", b.icon, b.label))
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl fmt::Display for Suggestion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "### {} suggestion for {} ({})",
            self.suggestion_type.badge().label,
            self.employee_id,
            self.status_line(DEFAULT_OVERDUE_THRESHOLD_DAYS)
        )?;
        writeln!(f)?;
        self.fmt_details(f)
    }
}

impl SuggestionWithEmployee {
    fn fmt_card(&self, f: &mut fmt::Formatter<'_>, overdue_threshold_days: i64) -> fmt::Result {
        let s = &self.suggestion;
        writeln!(
            f,
            "### {} suggestion for {} ({})",
            s.suggestion_type.badge().label,
            self.employee.name,
            s.status_line(overdue_threshold_days)
        )?;
        writeln!(f)?;
        writeln!(
            f,
            "- Employee: {} ({}, {})",
            self.employee.name,
            self.employee.department,
            self.employee.risk_level.badge().label
        )?;
        s.fmt_details(f)
    }
}

impl fmt::Display for SuggestionWithEmployee {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.fmt_card(f, DEFAULT_OVERDUE_THRESHOLD_DAYS)
    }
}

/// Detail card for one suggestion, flagging it overdue against a configured
/// threshold.
pub struct SuggestionDetail {
    pub row: SuggestionWithEmployee,
    pub overdue_threshold_days: i64,
}

impl SuggestionDetail {
    pub fn new(row: SuggestionWithEmployee) -> Self {
        Self {
            row,
            overdue_threshold_days: DEFAULT_OVERDUE_THRESHOLD_DAYS,
        }
    }

    pub fn with_overdue_threshold(mut self, days: i64) -> Self {
        self.overdue_threshold_days = days;
        self
    }
}

impl fmt::Display for SuggestionDetail {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.row.fmt_card(f, self.overdue_threshold_days)
    }
}

impl fmt::Display for Employee {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "## {} (ID: {})", self.name, self.id)?;
        writeln!(f)?;
        writeln!(f, "- **Department**: {}", self.department)?;
        writeln!(f, "- **Job title**: {}", self.job_title)?;
        writeln!(f, "- **Workstation**: {}", self.workstation)?;
        writeln!(f, "- **Risk level**: {}", self.risk_level.with_icon())?;
        writeln!(f, "- **Last assessment**: {}", UkDate(&self.last_assessment))?;
        writeln!(f)
    }
}

impl fmt::Display for DashboardStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "## Overview")?;
        writeln!(f)?;
        writeln!(f, "- **Total**: {}", self.total)?;
        writeln!(f, "- **Pending**: {}", self.pending)?;
        writeln!(f, "- **In progress**: {}", self.in_progress)?;
        writeln!(f, "- **Completed**: {} ({}%)", self.completed, self.completion_rate())?;
        writeln!(f, "- **Dismissed**: {}", self.dismissed)?;
        writeln!(f)?;
        writeln!(f, "## Priority")?;
        writeln!(f)?;
        writeln!(f, "- **High**: {}", self.high_priority)?;
        writeln!(f, "- **Medium**: {}", self.medium_priority)?;
        writeln!(f, "- **Low**: {}", self.low_priority)?;
        writeln!(f)?;
        writeln!(f, "## Source")?;
        writeln!(f)?;
        writeln!(f, "- **Vida**: {}", self.vida)?;
        writeln!(f, "- **Admin**: {}", self.admin)?;

        if self.overdue > 0 {
            let plural = if self.overdue == 1 { "" } else { "s" };
            writeln!(f)?;
            writeln!(
                f,
                "**Attention**: {} suggestion{plural} pending past the overdue threshold",
                self.overdue
            )?;
        }
        Ok(())
    }
}
