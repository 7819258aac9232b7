//! Backlog Rule
//!
//! Keyed on the pending count: more than ten open items suggests working by
//! priority; a fully completed non-empty list earns an all-clear. Between
//! one and ten pending items the rule stays silent.

use super::engine::{Rule, RuleContext, RuleOutput};
use super::types::RuleId;

pub(crate) const BACKLOG_SUGGESTION: &str =
    "📝 Quite a few tasks are still open. Work through them in priority order";
pub(crate) const ALL_CLEAR_SUGGESTION: &str =
    "🎯 Everything is done! Time to set a new goal";

/// Rule that reacts to the size of the pending backlog
pub struct BacklogRule;

impl Rule for BacklogRule {
    fn id(&self) -> RuleId {
        RuleId::Backlog
    }

    fn evaluate(&self, ctx: &RuleContext<'_>) -> RuleOutput {
        let mut out = RuleOutput::default();

        let pending = ctx.stats.pending_todos;
        if pending > 10 {
            out.suggestions.push(BACKLOG_SUGGESTION.to_string());
        } else if pending == 0 && ctx.stats.total_todos > 0 {
            // The all-clear congratulates finished work, so an empty list
            // does not qualify
            out.suggestions.push(ALL_CLEAR_SUGGESTION.to_string());
        }

        out
    }
}
