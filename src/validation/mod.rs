//! Submit-time validation of the expression rows.
//!
//! Runs only when the form is submitted, never while editing. Each row's
//! `value` and `score` must be non-empty text that parses as a number; a
//! failed check records a message under the key `value<index>` or
//! `score<index>`. The error map is fully recomputed on every pass - stale
//! keys from a previous submit never survive.
//!
//! `ruleType` and `operator` are drawn from closed enumerations via selection
//! controls and are never independently validated.

use im::Vector;
use rustc_hash::FxHashMap;
use smallvec::SmallVec;

use crate::core::{Expression, FieldKind};

/// Message recorded when a row's threshold value fails the numeric check.
pub const VALUE_MESSAGE: &str = "Value must be a number.";

/// Message recorded when a row's score fails the numeric check.
pub const SCORE_MESSAGE: &str = "Score must be a number.";

/// Per-field validation errors, keyed `value<index>` / `score<index>`.
pub type ValidationErrors = FxHashMap<String, String>;

/// One failed check from a validation pass.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FieldIssue {
    /// Error-map key (field name + row index).
    pub key: String,

    /// Human-readable message for the view.
    pub message: &'static str,
}

/// Numeric check applied to `value` and `score` text.
///
/// Surrounding whitespace is tolerated. Empty text and text that does not
/// parse as an f64 fail; literal NaN text fails too, since "not a number"
/// is the thing being checked for.
#[must_use]
pub fn is_numeric(text: &str) -> bool {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return false;
    }
    trimmed.parse::<f64>().is_ok_and(|number| !number.is_nan())
}

/// Check one row, returning the issues for its `value` and `score` fields.
#[must_use]
pub fn check_row(index: usize, expression: &Expression) -> SmallVec<[FieldIssue; 2]> {
    let mut issues = SmallVec::new();

    if !is_numeric(&expression.value) {
        issues.push(FieldIssue {
            key: FieldKind::Value.error_key(index),
            message: VALUE_MESSAGE,
        });
    }
    if !is_numeric(&expression.score) {
        issues.push(FieldIssue {
            key: FieldKind::Score.error_key(index),
            message: SCORE_MESSAGE,
        });
    }

    issues
}

/// Validate every row in order. An empty result means the form is valid;
/// an empty sequence validates vacuously.
#[must_use]
pub fn validate(expressions: &Vector<Expression>) -> ValidationErrors {
    let mut errors = ValidationErrors::default();

    for (index, expression) in expressions.iter().enumerate() {
        for issue in check_row(index, expression) {
            errors.insert(issue.key, issue.message.to_owned());
        }
    }

    errors
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::RuleSet;

    #[test]
    fn test_is_numeric_accepts_numbers() {
        assert!(is_numeric("30"));
        assert!(is_numeric("3.5"));
        assert!(is_numeric("-2"));
        assert!(is_numeric("0"));
        assert!(is_numeric(" 42 "));
        assert!(is_numeric("1e3"));
    }

    #[test]
    fn test_is_numeric_rejects_non_numbers() {
        assert!(!is_numeric(""));
        assert!(!is_numeric("   "));
        assert!(!is_numeric("abc"));
        assert!(!is_numeric("3a"));
        assert!(!is_numeric("."));
        assert!(!is_numeric("NaN"));
    }

    #[test]
    fn test_check_row_both_fields_fail() {
        let expression = Expression::new();

        let issues = check_row(0, &expression);

        assert_eq!(issues.len(), 2);
        assert_eq!(issues[0].key, "value0");
        assert_eq!(issues[0].message, VALUE_MESSAGE);
        assert_eq!(issues[1].key, "score0");
        assert_eq!(issues[1].message, SCORE_MESSAGE);
    }

    #[test]
    fn test_check_row_passes() {
        let mut expression = Expression::new();
        expression.value = "30".to_owned();
        expression.score = "5".to_owned();

        assert!(check_row(0, &expression).is_empty());
    }

    #[test]
    fn test_validate_keys_carry_row_index() {
        let mut rule_set = RuleSet::new();
        rule_set.add_expression();
        rule_set
            .edit_expression(0, FieldKind::Value, "30")
            .unwrap();
        rule_set
            .edit_expression(0, FieldKind::Score, "5")
            .unwrap();
        rule_set
            .edit_expression(1, FieldKind::Value, "not a number")
            .unwrap();

        let errors = validate(&rule_set.expressions);

        assert_eq!(errors.len(), 2);
        assert_eq!(errors["value1"], VALUE_MESSAGE);
        assert_eq!(errors["score1"], SCORE_MESSAGE);
        assert!(!errors.contains_key("value0"));
    }

    #[test]
    fn test_validate_empty_sequence_is_vacuously_valid() {
        let expressions: Vector<Expression> = Vector::new();

        assert!(validate(&expressions).is_empty());
    }
}
