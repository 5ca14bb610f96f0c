//! The summary artifact produced on a successful submit.
//!
//! A `RuleSummary` is the rule set reshaped into its external form: a
//! top-level `rules` array (row keys in the order ruleType, operator, value,
//! score) and a `combinator` string. `render` pretty-prints it with 2-space
//! indentation; `value` and `score` are emitted as the raw strings the user
//! typed. This is the only externally consumable format - nothing is
//! persisted to disk or sent anywhere.

use serde::{Deserialize, Serialize};

use crate::core::{Connector, Expression, RuleSet};

/// The serialized rule produced on successful submission.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuleSummary {
    /// Expression rows, in form order.
    pub rules: Vec<Expression>,

    /// Logical combinator joining the rows.
    pub combinator: Connector,
}

impl RuleSummary {
    /// Build the summary for a rule set.
    #[must_use]
    pub fn from_rule_set(rule_set: &RuleSet) -> Self {
        Self {
            rules: rule_set.expressions.iter().cloned().collect(),
            combinator: rule_set.connector,
        }
    }

    /// Render as the formatted JSON text block the view displays.
    #[must_use]
    pub fn render(&self) -> String {
        // Plain derive with string-keyed fields; serialization cannot fail.
        serde_json::to_string_pretty(self).expect("summary serialization is infallible")
    }
}
