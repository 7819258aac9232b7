//! Time Of Day Rule
//!
//! At most one band fires, keyed on the local hour captured in the rule
//! context: morning focus (9-11), afternoon organization (14-16), evening
//! review (20 onward). Other hours stay silent.

use super::engine::{Rule, RuleContext, RuleOutput};
use super::types::RuleId;

pub(crate) const MORNING_SUGGESTION: &str =
    "🌅 Focus is highest in the morning. Take on your most important task now";
pub(crate) const AFTERNOON_SUGGESTION: &str =
    "🌞 Afternoons suit lighter tasks and tidying up your list";
pub(crate) const EVENING_SUGGESTION: &str =
    "🌙 Evenings are good for reviewing today and preparing tomorrow";

/// Rule that suggests work matching the time of day
pub struct TimeOfDayRule;

impl Rule for TimeOfDayRule {
    fn id(&self) -> RuleId {
        RuleId::TimeOfDay
    }

    fn evaluate(&self, ctx: &RuleContext<'_>) -> RuleOutput {
        let mut out = RuleOutput::default();

        match ctx.hour {
            9..=11 => out.suggestions.push(MORNING_SUGGESTION.to_string()),
            14..=16 => out.suggestions.push(AFTERNOON_SUGGESTION.to_string()),
            hour if hour >= 20 => out.suggestions.push(EVENING_SUGGESTION.to_string()),
            _ => {}
        }

        out
    }
}
