//! Completion Rate Rule
//!
//! Exactly one band fires per run, selected by the rounded completion rate:
//! above 80 praises, above 50 encourages the pace, everything else (the
//! empty list included) nudges toward a first small win.

use super::engine::{Rule, RuleContext, RuleOutput};
use super::types::RuleId;

pub(crate) const HIGH_RATE_INSIGHT: &str =
    "🎉 Excellent! Your completion rate shows strong productivity";
pub(crate) const HIGH_RATE_SUGGESTION: &str =
    "Try adding a more challenging task to keep the momentum going";
pub(crate) const MID_RATE_INSIGHT: &str = "👍 You're moving at a good pace";
pub(crate) const MID_RATE_SUGGESTION: &str =
    "Splitting tasks into smaller pieces makes them easier to finish";
pub(crate) const LOW_RATE_INSIGHT: &str = "💪 Start with a small task to build momentum";
pub(crate) const LOW_RATE_SUGGESTION: &str = "Aim for one completed task per day";

/// Rule that frames the current completion rate
pub struct CompletionRateRule;

impl Rule for CompletionRateRule {
    fn id(&self) -> RuleId {
        RuleId::CompletionRate
    }

    fn evaluate(&self, ctx: &RuleContext<'_>) -> RuleOutput {
        let mut out = RuleOutput::default();

        // Strict thresholds: 80 and 50 themselves land in the lower band
        let rate = ctx.stats.completion_rate;
        if rate > 80 {
            out.insights.push(HIGH_RATE_INSIGHT.to_string());
            out.suggestions.push(HIGH_RATE_SUGGESTION.to_string());
        } else if rate > 50 {
            out.insights.push(MID_RATE_INSIGHT.to_string());
            out.suggestions.push(MID_RATE_SUGGESTION.to_string());
        } else {
            out.insights.push(LOW_RATE_INSIGHT.to_string());
            out.suggestions.push(LOW_RATE_SUGGESTION.to_string());
        }

        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::insights::types::ReportStats;

    fn ctx_with_rate(rate: u8) -> RuleContext<'static> {
        RuleContext {
            stats: ReportStats {
                completion_rate: rate,
                ..Default::default()
            },
            keywords: &[],
            hour: 12,
        }
    }

    fn band_of(rate: u8) -> String {
        let out = CompletionRateRule.evaluate(&ctx_with_rate(rate));
        assert_eq!(out.insights.len(), 1);
        assert_eq!(out.suggestions.len(), 1);
        out.insights.into_iter().next().unwrap()
    }

    #[test]
    fn test_high_band_above_80() {
        assert_eq!(band_of(81), HIGH_RATE_INSIGHT);
        assert_eq!(band_of(100), HIGH_RATE_INSIGHT);
    }

    #[test]
    fn test_80_is_mid_band() {
        assert_eq!(band_of(80), MID_RATE_INSIGHT);
        assert_eq!(band_of(51), MID_RATE_INSIGHT);
    }

    #[test]
    fn test_50_is_low_band() {
        assert_eq!(band_of(50), LOW_RATE_INSIGHT);
        assert_eq!(band_of(0), LOW_RATE_INSIGHT);
    }
}
