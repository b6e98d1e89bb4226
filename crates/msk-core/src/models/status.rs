//! Enumerations for suggestion and employee attributes.
//!
//! Every enum round-trips through the same lowercase wire string used by the
//! storage layer and the JSON sample data (`as_str` / [`FromStr`]).

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

/// Category of an MSK-risk-reduction suggestion.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum SuggestionType {
    Exercise,
    Equipment,
    Behavioural,
    Lifestyle,
}

impl SuggestionType {
    pub const ALL: [SuggestionType; 4] = [
        SuggestionType::Exercise,
        SuggestionType::Equipment,
        SuggestionType::Behavioural,
        SuggestionType::Lifestyle,
    ];

    /// Convert to database string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            SuggestionType::Exercise => "exercise",
            SuggestionType::Equipment => "equipment",
            SuggestionType::Behavioural => "behavioural",
            SuggestionType::Lifestyle => "lifestyle",
        }
    }
}

impl FromStr for SuggestionType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "exercise" => Ok(SuggestionType::Exercise),
            "equipment" => Ok(SuggestionType::Equipment),
            "behavioural" | "behavioral" => Ok(SuggestionType::Behavioural),
            "lifestyle" => Ok(SuggestionType::Lifestyle),
            _ => Err(format!("Invalid suggestion type: {s}")),
        }
    }
}

/// Lifecycle status of a suggestion.
///
/// Transitions are unconstrained: any status may move to any other.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "snake_case")]
pub enum SuggestionStatus {
    #[default]
    Pending,
    InProgress,
    Completed,
    Dismissed,
}

impl SuggestionStatus {
    pub const ALL: [SuggestionStatus; 4] = [
        SuggestionStatus::Pending,
        SuggestionStatus::InProgress,
        SuggestionStatus::Completed,
        SuggestionStatus::Dismissed,
    ];

    /// Convert to database string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            SuggestionStatus::Pending => "pending",
            SuggestionStatus::InProgress => "in_progress",
            SuggestionStatus::Completed => "completed",
            SuggestionStatus::Dismissed => "dismissed",
        }
    }

    /// Sort rank: pending < in progress < completed < dismissed.
    pub fn rank(&self) -> u8 {
        match self {
            SuggestionStatus::Pending => 1,
            SuggestionStatus::InProgress => 2,
            SuggestionStatus::Completed => 3,
            SuggestionStatus::Dismissed => 4,
        }
    }
}

impl FromStr for SuggestionStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "pending" => Ok(SuggestionStatus::Pending),
            "in_progress" | "inprogress" | "in-progress" => Ok(SuggestionStatus::InProgress),
            "completed" => Ok(SuggestionStatus::Completed),
            "dismissed" => Ok(SuggestionStatus::Dismissed),
            _ => Err(format!("Invalid suggestion status: {s}")),
        }
    }
}

/// Urgency of a suggestion.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    Low,
    #[default]
    Medium,
    High,
}

impl Priority {
    pub const ALL: [Priority; 3] = [Priority::High, Priority::Medium, Priority::Low];

    /// Convert to database string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            Priority::Low => "low",
            Priority::Medium => "medium",
            Priority::High => "high",
        }
    }

    /// Sort rank: low < medium < high.
    pub fn rank(&self) -> u8 {
        match self {
            Priority::High => 3,
            Priority::Medium => 2,
            Priority::Low => 1,
        }
    }
}

impl FromStr for Priority {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "low" => Ok(Priority::Low),
            "medium" => Ok(Priority::Medium),
            "high" => Ok(Priority::High),
            _ => Err(format!("Invalid priority: {s}")),
        }
    }
}

/// Provenance of a suggestion.
///
/// `Vida` suggestions come from the external recommendation process, `Admin`
/// suggestions are entered manually by staff.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Source {
    Vida,
    Admin,
}

impl Source {
    pub const ALL: [Source; 2] = [Source::Vida, Source::Admin];

    /// Convert to database string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            Source::Vida => "vida",
            Source::Admin => "admin",
        }
    }
}

impl FromStr for Source {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "vida" => Ok(Source::Vida),
            "admin" => Ok(Source::Admin),
            _ => Err(format!("Invalid suggestion source: {s}")),
        }
    }
}

/// Assessed MSK risk level of an employee.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum RiskLevel {
    High,
    Medium,
    Low,
}

impl RiskLevel {
    /// Convert to database string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            RiskLevel::High => "high",
            RiskLevel::Medium => "medium",
            RiskLevel::Low => "low",
        }
    }
}

impl FromStr for RiskLevel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "high" => Ok(RiskLevel::High),
            "medium" => Ok(RiskLevel::Medium),
            "low" => Ok(RiskLevel::Low),
            _ => Err(format!("Invalid risk level: {s}")),
        }
    }
}

/// Field a suggestion list can be ordered by.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "camelCase")]
pub enum SortField {
    #[default]
    DateUpdated,
    Priority,
    Status,
}

impl FromStr for SortField {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "dateupdated" | "date_updated" | "updated" => Ok(SortField::DateUpdated),
            "priority" => Ok(SortField::Priority),
            "status" => Ok(SortField::Status),
            _ => Err(format!("Invalid sort field: {s}")),
        }
    }
}

/// Ordering direction for [`SortField`].
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    Asc,
    #[default]
    Desc,
}

impl FromStr for SortDirection {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "asc" => Ok(SortDirection::Asc),
            "desc" => Ok(SortDirection::Desc),
            _ => Err(format!("Invalid sort direction: {s}")),
        }
    }
}

macro_rules! display_as_str {
    ($($ty:ty),*) => {
        $(
            impl fmt::Display for $ty {
                fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                    f.write_str(self.as_str())
                }
            }
        )*
    };
}

display_as_str!(SuggestionType, SuggestionStatus, Priority, Source, RiskLevel);
