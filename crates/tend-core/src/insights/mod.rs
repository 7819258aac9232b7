//! Recommendation Engine - usage analytics over the todo list
//!
//! The engine is a pure function of the current todo snapshot (plus the
//! local clock, read once per run). It aggregates completion statistics,
//! ranks frequent title keywords, and evaluates an ordered set of
//! independent heuristic rules, producing a report of human-readable
//! insights and suggestions.
//!
//! ## Built-in Rules
//!
//! - **Completion Rate** - praises, encourages, or nudges based on the rate
//! - **Keyword Pattern** - surfaces recurring title keywords for batching
//! - **Time Of Day** - morning/afternoon/evening framing suggestions
//! - **Backlog** - flags a heavy pending list or an all-clear
//!
//! ## Usage
//!
//! ```rust,ignore
//! use tend_core::insights::RecommendationEngine;
//!
//! let engine = RecommendationEngine::new();
//! let report = engine.generate(&todos);
//! ```

pub mod backlog;
pub mod completion_rate;
pub mod engine;
pub mod keyword_pattern;
pub mod keywords;
pub mod stats;
pub mod time_of_day;
pub mod types;

pub use backlog::BacklogRule;
pub use completion_rate::CompletionRateRule;
pub use engine::{RecommendationEngine, Rule, RuleContext, RuleOutput};
pub use keyword_pattern::KeywordPatternRule;
pub use keywords::frequent_terms;
pub use stats::compute_stats;
pub use time_of_day::TimeOfDayRule;
pub use types::{Report, ReportStats, RuleId};
