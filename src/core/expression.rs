//! Expression rows: the comparison clauses that make up a rule.
//!
//! An `Expression` is one row of the form: a rule type (the quantity being
//! compared), a comparison operator, a threshold `value`, and a `score`
//! awarded when the comparison holds. `value` and `score` are held as the raw
//! text the user typed; they are only interpreted as numbers during the
//! submit-time validation pass.
//!
//! `RuleType` and `Operator` are closed enumerations. The view populates its
//! selection controls from the `ALL` catalogs and round-trips choices as
//! strings, so both implement `Display` and `FromStr`.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::FormError;

/// The quantity an expression compares against.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RuleType {
    #[default]
    Age,
    CreditScore,
    AccountBalance,
}

impl RuleType {
    /// All rule types, in the order a view should list them.
    pub const ALL: [RuleType; 3] = [
        RuleType::Age,
        RuleType::CreditScore,
        RuleType::AccountBalance,
    ];

    /// The string form used in selection controls and the summary.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            RuleType::Age => "Age",
            RuleType::CreditScore => "CreditScore",
            RuleType::AccountBalance => "AccountBalance",
        }
    }
}

impl fmt::Display for RuleType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RuleType {
    type Err = FormError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        RuleType::ALL
            .into_iter()
            .find(|rule_type| rule_type.as_str() == s)
            .ok_or_else(|| FormError::UnknownRuleType(s.to_owned()))
    }
}

/// Comparison operator between the rule quantity and the threshold value.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Operator {
    #[serde(rename = ">")]
    GreaterThan,
    #[serde(rename = "<")]
    LessThan,
    #[default]
    #[serde(rename = ">=")]
    GreaterOrEqual,
    #[serde(rename = "<=")]
    LessOrEqual,
    #[serde(rename = "=")]
    Equal,
}

impl Operator {
    /// All operators, in the order a view should list them.
    pub const ALL: [Operator; 5] = [
        Operator::GreaterThan,
        Operator::LessThan,
        Operator::GreaterOrEqual,
        Operator::LessOrEqual,
        Operator::Equal,
    ];

    /// The symbol used in selection controls and the summary.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Operator::GreaterThan => ">",
            Operator::LessThan => "<",
            Operator::GreaterOrEqual => ">=",
            Operator::LessOrEqual => "<=",
            Operator::Equal => "=",
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Operator {
    type Err = FormError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Operator::ALL
            .into_iter()
            .find(|operator| operator.as_str() == s)
            .ok_or_else(|| FormError::UnknownOperator(s.to_owned()))
    }
}

/// Which field of an expression row an edit targets.
///
/// Edits arrive from the view as `(row index, field, raw text)`; this is the
/// field half of that message. `as_str` matches the serialized key names.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum FieldKind {
    RuleType,
    Operator,
    Value,
    Score,
}

impl FieldKind {
    /// The serialized key name for this field.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            FieldKind::RuleType => "ruleType",
            FieldKind::Operator => "operator",
            FieldKind::Value => "value",
            FieldKind::Score => "score",
        }
    }

    /// Error-map key for this field at row `index` (e.g. `value0`).
    #[must_use]
    pub fn error_key(self, index: usize) -> String {
        format!("{}{}", self.as_str(), index)
    }
}

impl fmt::Display for FieldKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One comparison clause of the rule.
///
/// Field order matters: serde emits keys in declaration order, and the
/// summary artifact requires ruleType, operator, value, score.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Expression {
    /// The quantity being compared.
    pub rule_type: RuleType,

    /// Comparison operator.
    pub operator: Operator,

    /// Threshold text as typed. Validated as a number on submit.
    pub value: String,

    /// Score text as typed. Validated as a number on submit.
    pub score: String,
}

impl Expression {
    /// The default row: `{Age, >=, "", ""}`.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace one field with raw text from the view.
    ///
    /// Enum-backed fields parse the text against their closed enumeration;
    /// text a selection control cannot produce is a contract violation.
    /// No numeric validation happens here.
    pub fn set_field(&mut self, field: FieldKind, raw: &str) -> Result<(), FormError> {
        match field {
            FieldKind::RuleType => self.rule_type = raw.parse()?,
            FieldKind::Operator => self.operator = raw.parse()?,
            FieldKind::Value => self.value = raw.to_owned(),
            FieldKind::Score => self.score = raw.to_owned(),
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_expression() {
        let expression = Expression::new();

        assert_eq!(expression.rule_type, RuleType::Age);
        assert_eq!(expression.operator, Operator::GreaterOrEqual);
        assert_eq!(expression.value, "");
        assert_eq!(expression.score, "");
    }

    #[test]
    fn test_rule_type_round_trip() {
        for rule_type in RuleType::ALL {
            assert_eq!(rule_type.to_string().parse::<RuleType>(), Ok(rule_type));
        }
    }

    #[test]
    fn test_operator_round_trip() {
        for operator in Operator::ALL {
            assert_eq!(operator.to_string().parse::<Operator>(), Ok(operator));
        }
    }

    #[test]
    fn test_unknown_rule_type() {
        assert_eq!(
            "Income".parse::<RuleType>(),
            Err(FormError::UnknownRuleType("Income".to_owned()))
        );
    }

    #[test]
    fn test_unknown_operator() {
        assert_eq!(
            "!=".parse::<Operator>(),
            Err(FormError::UnknownOperator("!=".to_owned()))
        );
    }

    #[test]
    fn test_set_field() {
        let mut expression = Expression::new();

        expression.set_field(FieldKind::RuleType, "CreditScore").unwrap();
        expression.set_field(FieldKind::Operator, "<").unwrap();
        expression.set_field(FieldKind::Value, "700").unwrap();
        expression.set_field(FieldKind::Score, "10").unwrap();

        assert_eq!(expression.rule_type, RuleType::CreditScore);
        assert_eq!(expression.operator, Operator::LessThan);
        assert_eq!(expression.value, "700");
        assert_eq!(expression.score, "10");
    }

    #[test]
    fn test_set_field_rejects_unknown_enum_text() {
        let mut expression = Expression::new();

        assert!(expression.set_field(FieldKind::Operator, "between").is_err());
        // Row untouched on error
        assert_eq!(expression.operator, Operator::GreaterOrEqual);
    }

    #[test]
    fn test_error_key() {
        assert_eq!(FieldKind::Value.error_key(0), "value0");
        assert_eq!(FieldKind::Score.error_key(12), "score12");
    }

    #[test]
    fn test_expression_serialization_key_order() {
        let expression = Expression {
            rule_type: RuleType::Age,
            operator: Operator::GreaterOrEqual,
            value: "30".to_owned(),
            score: "5".to_owned(),
        };

        let json = serde_json::to_string(&expression).unwrap();
        assert_eq!(
            json,
            r#"{"ruleType":"Age","operator":">=","value":"30","score":"5"}"#
        );

        let deserialized: Expression = serde_json::from_str(&json).unwrap();
        assert_eq!(deserialized, expression);
    }
}
