//! Recommendation engine - orchestrates rule evaluation and report assembly

use chrono::{DateTime, Local, Timelike};

use crate::models::Todo;

use super::backlog::BacklogRule;
use super::completion_rate::CompletionRateRule;
use super::keyword_pattern::KeywordPatternRule;
use super::keywords::frequent_terms;
use super::stats::compute_stats;
use super::time_of_day::TimeOfDayRule;
use super::types::{Report, ReportStats, RuleId};

/// Inputs shared by all rules for one report
///
/// Built once per run: the clock is read a single time, so every
/// time-dependent rule sees the same hour.
pub struct RuleContext<'a> {
    /// Aggregate stats over the snapshot
    pub stats: ReportStats,
    /// Frequent title keywords, most common first
    pub keywords: &'a [String],
    /// Local hour (0-23) at evaluation time
    pub hour: u32,
}

/// Messages produced by one rule evaluation
#[derive(Debug, Default)]
pub struct RuleOutput {
    pub insights: Vec<String>,
    pub suggestions: Vec<String>,
}

/// Trait for recommendation rules
///
/// Rules are pure and infallible: they read the shared context and return
/// zero or more messages. Evaluation order is the engine's registration
/// order; rules never see each other's output.
pub trait Rule: Send + Sync {
    /// Unique identifier for this rule
    fn id(&self) -> RuleId;

    /// Evaluate the rule against one snapshot's context
    fn evaluate(&self, ctx: &RuleContext<'_>) -> RuleOutput;
}

/// The recommendation engine: an ordered set of independent rules
pub struct RecommendationEngine {
    rules: Vec<Box<dyn Rule>>,
}

impl Default for RecommendationEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl RecommendationEngine {
    /// Create an engine with the built-in rules, in evaluation order
    pub fn new() -> Self {
        let mut engine = Self { rules: vec![] };

        // Register built-in rules
        engine.register(Box::new(CompletionRateRule));
        engine.register(Box::new(KeywordPatternRule));
        engine.register(Box::new(TimeOfDayRule));
        engine.register(Box::new(BacklogRule));

        engine
    }

    /// Append a rule to the evaluation order
    pub fn register(&mut self, rule: Box<dyn Rule>) {
        self.rules.push(rule);
    }

    /// Generate a report for the snapshot using the current wall clock
    pub fn generate(&self, todos: &[Todo]) -> Report {
        self.generate_at(todos, Local::now())
    }

    /// Generate a report for the snapshot at a fixed point in time
    ///
    /// Given the same snapshot and the same hour, the report is identical
    /// field for field, including list ordering.
    pub fn generate_at(&self, todos: &[Todo], now: DateTime<Local>) -> Report {
        let stats = compute_stats(todos);
        let keywords = frequent_terms(todos.iter().map(|t| t.title.as_str()));

        let ctx = RuleContext {
            stats,
            keywords: &keywords,
            hour: now.hour(),
        };

        let mut report = Report {
            stats,
            ..Default::default()
        };

        for rule in &self.rules {
            let out = rule.evaluate(&ctx);
            tracing::debug!(
                rule = rule.id().as_str(),
                insights = out.insights.len(),
                suggestions = out.suggestions.len(),
                "Rule evaluated"
            );
            report.insights.extend(out.insights);
            report.suggestions.extend(out.suggestions);
        }

        report
    }

    /// Rule ids in evaluation order
    pub fn rule_ids(&self) -> Vec<RuleId> {
        self.rules.iter().map(|r| r.id()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    use crate::insights::backlog::{ALL_CLEAR_SUGGESTION, BACKLOG_SUGGESTION};
    use crate::insights::completion_rate::{LOW_RATE_INSIGHT, LOW_RATE_SUGGESTION};
    use crate::insights::time_of_day::MORNING_SUGGESTION;

    fn todo(id: i64, title: &str, completed: bool) -> Todo {
        Todo {
            id,
            title: title.to_string(),
            completed,
            created_at: Utc::now(),
        }
    }

    fn at_hour(hour: u32) -> DateTime<Local> {
        Local.with_ymd_and_hms(2026, 3, 2, hour, 30, 0).unwrap()
    }

    #[test]
    fn test_engine_creation() {
        let engine = RecommendationEngine::new();
        let ids = engine.rule_ids();

        assert_eq!(
            ids,
            vec![
                RuleId::CompletionRate,
                RuleId::KeywordPattern,
                RuleId::TimeOfDay,
                RuleId::Backlog,
            ]
        );
    }

    #[test]
    fn test_empty_snapshot() {
        let engine = RecommendationEngine::new();
        // Noon: outside every time-of-day band
        let report = engine.generate_at(&[], at_hour(12));

        assert_eq!(report.stats, Default::default());
        assert_eq!(report.insights, vec![LOW_RATE_INSIGHT.to_string()]);
        assert_eq!(report.suggestions, vec![LOW_RATE_SUGGESTION.to_string()]);
    }

    #[test]
    fn test_rule_order_in_report() {
        // Low completion, repeated keyword, morning hour, 11 pending
        let mut todos: Vec<Todo> = (0..10)
            .map(|i| todo(i, &format!("errand number {}", i), false))
            .collect();
        todos.push(todo(10, "final errand", false));

        let engine = RecommendationEngine::new();
        let report = engine.generate_at(&todos, at_hour(10));

        assert_eq!(report.insights.len(), 2);
        assert_eq!(report.insights[0], LOW_RATE_INSIGHT);
        assert!(report.insights[1].contains("errand"));

        assert_eq!(report.suggestions.len(), 4);
        assert_eq!(report.suggestions[0], LOW_RATE_SUGGESTION);
        assert!(report.suggestions[1].contains("errand"));
        assert_eq!(report.suggestions[2], MORNING_SUGGESTION);
        assert_eq!(report.suggestions[3], BACKLOG_SUGGESTION);
    }

    #[test]
    fn test_all_clear_report() {
        let todos = vec![todo(1, "Buy milk", true), todo(2, "Walk dog", true)];

        let engine = RecommendationEngine::new();
        let report = engine.generate_at(&todos, at_hour(12));

        assert_eq!(report.stats.completion_rate, 100);
        assert!(report
            .suggestions
            .contains(&ALL_CLEAR_SUGGESTION.to_string()));
    }

    #[test]
    fn test_rate_band_boundaries() {
        let engine = RecommendationEngine::new();

        // 4/5 = 80: the middle band, not the high one
        let todos: Vec<Todo> = (0..5).map(|i| todo(i, "task", i < 4)).collect();
        let report = engine.generate_at(&todos, at_hour(12));
        assert_eq!(report.stats.completion_rate, 80);
        assert_ne!(report.insights[0], LOW_RATE_INSIGHT);
        assert!(report.insights[0].contains("pace"));

        // 1/2 = 50: the low band
        let todos = vec![todo(1, "task", true), todo(2, "task", false)];
        let report = engine.generate_at(&todos, at_hour(12));
        assert_eq!(report.stats.completion_rate, 50);
        assert_eq!(report.insights[0], LOW_RATE_INSIGHT);
    }

    #[test]
    fn test_idempotent_within_hour_band() {
        let todos = vec![
            todo(1, "Buy milk", false),
            todo(2, "buy milk again", true),
            todo(3, "Walk dog", false),
        ];

        let engine = RecommendationEngine::new();
        let first = engine.generate_at(&todos, at_hour(15));
        let second = engine.generate_at(&todos, at_hour(15));

        assert_eq!(first, second);
    }

    #[test]
    fn test_snapshot_not_mutated() {
        let todos = vec![todo(1, "Buy milk", false)];
        let before = todos.clone();

        RecommendationEngine::new().generate_at(&todos, at_hour(12));

        assert_eq!(todos, before);
    }
}
