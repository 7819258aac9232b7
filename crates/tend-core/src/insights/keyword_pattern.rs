//! Keyword Pattern Rule
//!
//! Surfaces recurring title keywords: an insight naming up to the top three
//! ranked terms, and a suggestion to batch tasks around the top one. Silent
//! when no term repeats.

use super::engine::{Rule, RuleContext, RuleOutput};
use super::types::RuleId;

/// Rule that surfaces recurring title keywords
pub struct KeywordPatternRule;

impl Rule for KeywordPatternRule {
    fn id(&self) -> RuleId {
        RuleId::KeywordPattern
    }

    fn evaluate(&self, ctx: &RuleContext<'_>) -> RuleOutput {
        let mut out = RuleOutput::default();

        if let Some(top) = ctx.keywords.first() {
            let listed = ctx
                .keywords
                .iter()
                .take(3)
                .map(String::as_str)
                .collect::<Vec<_>>()
                .join(", ");

            out.insights
                .push(format!("🔍 Frequent keywords: {}", listed));
            out.suggestions.push(format!(
                "Batching \"{}\" tasks together could save time",
                top
            ));
        }

        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::insights::types::ReportStats;

    fn ctx(keywords: &[String]) -> RuleContext<'_> {
        RuleContext {
            stats: ReportStats::default(),
            keywords,
            hour: 12,
        }
    }

    #[test]
    fn test_silent_without_keywords() {
        let out = KeywordPatternRule.evaluate(&ctx(&[]));
        assert!(out.insights.is_empty());
        assert!(out.suggestions.is_empty());
    }

    #[test]
    fn test_top_three_listed_in_rank_order() {
        let keywords: Vec<String> = ["buy", "milk", "today", "walk"]
            .iter()
            .map(|s| s.to_string())
            .collect();

        let out = KeywordPatternRule.evaluate(&ctx(&keywords));
        assert_eq!(out.insights.len(), 1);
        assert!(out.insights[0].contains("buy, milk, today"));
        assert!(!out.insights[0].contains("walk"));
    }

    #[test]
    fn test_suggestion_names_top_keyword() {
        let keywords = vec!["groceries".to_string()];

        let out = KeywordPatternRule.evaluate(&ctx(&keywords));
        assert_eq!(out.suggestions.len(), 1);
        assert!(out.suggestions[0].contains("\"groceries\""));
    }
}
