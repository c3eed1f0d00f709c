//! Core task record and its enumerated fields.
//!
//! A [`Task`] is the only entity the recurrence and ordering engine operates
//! on. Enum fields are stored as lowercase text in the database; parsing is
//! fail-soft for `recurrence_pattern` (unknown text means "no recurrence")
//! and strict-with-default for priority and status.

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Default advisory complexity for tasks created without an estimate.
pub const DEFAULT_COMPLEXITY: i64 = 3;

/// Valid range for the advisory complexity score.
pub const COMPLEXITY_RANGE: std::ops::RangeInclusive<i64> = 1..=5;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    Low,
    #[default]
    Medium,
    High,
}

impl Priority {
    pub fn as_str(&self) -> &'static str {
        match self {
            Priority::Low => "low",
            Priority::Medium => "medium",
            Priority::High => "high",
        }
    }

    /// Parses stored text, falling back to the default for unknown values.
    pub fn parse(s: &str) -> Self {
        match s {
            "low" => Priority::Low,
            "high" => Priority::High,
            _ => Priority::Medium,
        }
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum Status {
    #[default]
    Pending,
    InProgress,
    Completed,
    Cancelled,
}

impl Status {
    pub fn as_str(&self) -> &'static str {
        match self {
            Status::Pending => "pending",
            Status::InProgress => "in_progress",
            Status::Completed => "completed",
            Status::Cancelled => "cancelled",
        }
    }

    pub fn parse(s: &str) -> Self {
        match s {
            "in_progress" => Status::InProgress,
            "completed" => Status::Completed,
            "cancelled" => Status::Cancelled,
            _ => Status::Pending,
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// How often a recurring task regenerates after completion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum RecurrencePattern {
    Daily,
    Weekly,
    Monthly,
    Yearly,
}

impl RecurrencePattern {
    pub fn as_str(&self) -> &'static str {
        match self {
            RecurrencePattern::Daily => "daily",
            RecurrencePattern::Weekly => "weekly",
            RecurrencePattern::Monthly => "monthly",
            RecurrencePattern::Yearly => "yearly",
        }
    }

    /// Parses stored text. Unknown values yield `None`, which the engine
    /// treats as "never regenerates" rather than an error.
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "daily" => Some(RecurrencePattern::Daily),
            "weekly" => Some(RecurrencePattern::Weekly),
            "monthly" => Some(RecurrencePattern::Monthly),
            "yearly" => Some(RecurrencePattern::Yearly),
            _ => None,
        }
    }
}

impl fmt::Display for RecurrencePattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Task {
    pub id: Option<i64>,
    pub title: String,
    pub description: String,
    pub priority: Priority,
    pub status: Status,
    pub due_date: Option<NaiveDateTime>,
    pub recurrence_pattern: Option<RecurrencePattern>,
    pub recurrence_end_date: Option<NaiveDate>,
    pub task_order: i64,
    pub parent_task_id: Option<i64>,
    pub tags: Vec<String>,
    pub complexity: i64,
    pub created_at: Option<NaiveDateTime>,
    pub completed_at: Option<NaiveDateTime>,
}

impl Task {
    pub fn new(title: &str, description: &str, priority: Priority) -> Self {
        Task {
            id: None,
            title: title.to_string(),
            description: description.to_string(),
            priority,
            status: Status::Pending,
            due_date: None,
            recurrence_pattern: None,
            recurrence_end_date: None,
            task_order: 0,
            parent_task_id: None,
            tags: Vec::new(),
            complexity: DEFAULT_COMPLEXITY,
            created_at: None,
            completed_at: None,
        }
    }

    pub fn is_completed(&self) -> bool {
        self.status == Status::Completed
    }

    /// Clamps an advisory complexity estimate into the valid 1..=5 range.
    pub fn clamp_complexity(value: i64) -> i64 {
        value.clamp(*COMPLEXITY_RANGE.start(), *COMPLEXITY_RANGE.end())
    }
}

#[derive(Debug, Clone)]
pub enum TaskFilter {
    All,
    /// Tasks still waiting for work: pending or in progress.
    Open,
    Completed,
    ByIds(Vec<i64>),
    ByTag(String),
    ChildrenOf(i64),
}
