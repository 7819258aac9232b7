//! Core types for the Recommendation Engine

use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifies a recommendation rule
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RuleId {
    /// Completion-rate band (exactly one branch fires)
    CompletionRate,
    /// Recurring title keywords
    KeywordPattern,
    /// Morning/afternoon/evening framing
    TimeOfDay,
    /// Pending backlog size
    Backlog,
}

impl RuleId {
    pub fn as_str(&self) -> &'static str {
        match self {
            RuleId::CompletionRate => "completion_rate",
            RuleId::KeywordPattern => "keyword_pattern",
            RuleId::TimeOfDay => "time_of_day",
            RuleId::Backlog => "backlog",
        }
    }
}

impl fmt::Display for RuleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Aggregate completion statistics over one todo snapshot
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportStats {
    pub total_todos: usize,
    pub completed_todos: usize,
    pub pending_todos: usize,
    /// Rounded percentage in 0..=100; 0 when there are no todos
    pub completion_rate: u8,
}

/// Output of one recommendation run
///
/// Fully determined by the input snapshot and the hour the run was made;
/// two runs over the same snapshot within the same hour band are
/// field-for-field equal.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Report {
    /// Observations about the current list, in rule order
    pub insights: Vec<String>,
    /// Actionable next steps, in rule order
    pub suggestions: Vec<String>,
    pub stats: ReportStats,
}
