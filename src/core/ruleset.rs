//! The rule under construction: a connector plus an ordered row sequence.
//!
//! `RuleSet` is the form's document. Rows are kept in an `im::Vector` so the
//! snapshots handed to the view clone in O(1) via structural sharing; order
//! is significant and matches the view's top-to-bottom list.

use std::fmt;
use std::str::FromStr;

use im::Vector;
use serde::{Deserialize, Serialize};

use super::expression::{Expression, FieldKind};
use crate::error::FormError;

/// Logical combinator joining all expressions of a rule.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Connector {
    #[default]
    And,
    Or,
}

impl Connector {
    /// Both connectors, in the order a view should list them.
    pub const ALL: [Connector; 2] = [Connector::And, Connector::Or];

    /// The string form used in selection controls and the summary.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Connector::And => "and",
            Connector::Or => "or",
        }
    }
}

impl fmt::Display for Connector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Connector {
    type Err = FormError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Connector::ALL
            .into_iter()
            .find(|connector| connector.as_str() == s)
            .ok_or_else(|| FormError::UnknownConnector(s.to_owned()))
    }
}

/// The rule being built: a connector and an ordered sequence of expressions.
///
/// Created with a single default row. Mutated in place by the edit, add, and
/// delete operations; reset to its initial state on a confirmed clear.
/// Deleting the last remaining row is allowed - the sequence may be empty.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuleSet {
    /// Combinator applied across all rows.
    pub connector: Connector,

    /// Rows in view order.
    pub expressions: Vector<Expression>,
}

impl RuleSet {
    /// A fresh rule set: connector `and`, one default expression.
    #[must_use]
    pub fn new() -> Self {
        Self {
            connector: Connector::And,
            expressions: Vector::from(vec![Expression::new()]),
        }
    }

    /// Number of rows.
    #[must_use]
    pub fn len(&self) -> usize {
        self.expressions.len()
    }

    /// True if every row has been deleted.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.expressions.is_empty()
    }

    /// Append a default row at the end of the sequence.
    pub fn add_expression(&mut self) {
        self.expressions.push_back(Expression::new());
    }

    /// Remove the row at `index`; later rows shift down by one.
    pub fn delete_expression(&mut self, index: usize) -> Result<(), FormError> {
        self.check_index(index)?;
        self.expressions.remove(index);
        Ok(())
    }

    /// Replace one field of the row at `index` with raw text from the view.
    pub fn edit_expression(
        &mut self,
        index: usize,
        field: FieldKind,
        raw: &str,
    ) -> Result<(), FormError> {
        self.check_index(index)?;
        // Parse before mutating so a bad enum value leaves the row untouched.
        let mut expression = self.expressions[index].clone();
        expression.set_field(field, raw)?;
        self.expressions[index] = expression;
        Ok(())
    }

    fn check_index(&self, index: usize) -> Result<(), FormError> {
        if index < self.expressions.len() {
            Ok(())
        } else {
            Err(FormError::IndexOutOfBounds {
                index,
                len: self.expressions.len(),
            })
        }
    }
}

impl Default for RuleSet {
    fn default() -> Self {
        Self::new()
    }
}
