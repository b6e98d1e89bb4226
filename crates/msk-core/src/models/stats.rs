//! Aggregate dashboard statistics.

use jiff::Timestamp;
use serde::{Deserialize, Serialize};

use super::{Priority, Source, Suggestion, SuggestionStatus};

/// Counts shown on the dashboard overview.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardStats {
    pub total: usize,
    pub pending: usize,
    pub in_progress: usize,
    pub completed: usize,
    pub dismissed: usize,
    pub high_priority: usize,
    pub medium_priority: usize,
    pub low_priority: usize,
    pub vida: usize,
    pub admin: usize,
    /// Pending suggestions older than the overdue threshold
    pub overdue: usize,
}

impl DashboardStats {
    /// Tally a suggestion list as of `now`.
    pub fn from_suggestions<T: AsRef<Suggestion>>(
        suggestions: &[T],
        now: Timestamp,
        overdue_threshold_days: i64,
    ) -> Self {
        suggestions
            .iter()
            .map(AsRef::as_ref)
            .fold(Self::default(), |mut stats, s| {
                stats.total += 1;
                match s.status {
                    SuggestionStatus::Pending => stats.pending += 1,
                    SuggestionStatus::InProgress => stats.in_progress += 1,
                    SuggestionStatus::Completed => stats.completed += 1,
                    SuggestionStatus::Dismissed => stats.dismissed += 1,
                }
                match s.priority {
                    Priority::High => stats.high_priority += 1,
                    Priority::Medium => stats.medium_priority += 1,
                    Priority::Low => stats.low_priority += 1,
                }
                match s.source {
                    Source::Vida => stats.vida += 1,
                    Source::Admin => stats.admin += 1,
                }
                if s.is_overdue_at(now, overdue_threshold_days) {
                    stats.overdue += 1;
                }
                stats
            })
    }

    /// Share of suggestions completed, as a whole percentage.
    pub fn completion_rate(&self) -> u32 {
        if self.total == 0 {
            0
        } else {
            ((self.completed * 100) / self.total) as u32
        }
    }
}
