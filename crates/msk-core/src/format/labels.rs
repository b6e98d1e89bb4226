//! Display labels for enum-valued attributes.
//!
//! Each attribute maps to a [`Badge`] through an exhaustive table, so adding a
//! variant fails to compile until it has a label.

use jiff::Timestamp;

use crate::models::{Priority, RiskLevel, Source, Suggestion, SuggestionStatus, SuggestionType};

/// Text and icon shown for an attribute value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Badge {
    pub label: &'static str,
    pub icon: &'static str,
}

const fn badge(label: &'static str, icon: &'static str) -> Badge {
    Badge { label, icon }
}

/// Badge shown next to suggestions that are overdue.
pub const OVERDUE_BADGE: Badge = badge("Overdue", "!");

/// Attribute values that render as a badge.
pub trait Badged {
    fn badge(&self) -> Badge;

    /// `icon label`, for plain-text contexts.
    fn with_icon(&self) -> String {
        let badge = self.badge();
        format!("{} {}", badge.icon, badge.label)
    }
}

impl Badged for SuggestionStatus {
    fn badge(&self) -> Badge {
        match self {
            SuggestionStatus::Pending => badge("pending", "○"),
            SuggestionStatus::InProgress => badge("in progress", "➤"),
            SuggestionStatus::Completed => badge("completed", "✓"),
            SuggestionStatus::Dismissed => badge("dismissed", "✗"),
        }
    }
}

impl Badged for SuggestionType {
    fn badge(&self) -> Badge {
        match self {
            SuggestionType::Exercise => badge("exercise", "🏃"),
            SuggestionType::Equipment => badge("equipment", "🪑"),
            SuggestionType::Behavioural => badge("behavioural", "🧠"),
            SuggestionType::Lifestyle => badge("lifestyle", "🌱"),
        }
    }
}

impl Badged for Priority {
    fn badge(&self) -> Badge {
        match self {
            Priority::High => badge("high", "▲"),
            Priority::Medium => badge("medium", "■"),
            Priority::Low => badge("low", "▼"),
        }
    }
}

impl Badged for RiskLevel {
    fn badge(&self) -> Badge {
        match self {
            RiskLevel::High => badge("high risk", "▲"),
            RiskLevel::Medium => badge("medium risk", "■"),
            RiskLevel::Low => badge("low risk", "▼"),
        }
    }
}

impl Badged for Source {
    fn badge(&self) -> Badge {
        match self {
            Source::Vida => badge("Vida", "◆"),
            Source::Admin => badge("Admin", "◇"),
        }
    }
}

/// Status badge plus the overdue badge when it applies.
pub fn status_badges(suggestion: &Suggestion, now: Timestamp, threshold_days: i64) -> Vec<Badge> {
    let mut badges = vec![suggestion.status.badge()];
    if suggestion.status != SuggestionStatus::Completed
        && suggestion.is_overdue_at(now, threshold_days)
    {
        badges.push(OVERDUE_BADGE);
    }
    badges
}
