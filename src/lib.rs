//! # rule-form
//!
//! View-state engine for a scoring-rule builder form: a logical connector
//! (AND/OR) joining an ordered list of comparison expressions (rule type,
//! operator, threshold value, score). Numeric fields are validated on
//! submission, a formatted JSON summary is rendered on success, and clearing
//! the form goes through a confirm-before-clear prompt.
//!
//! ## Design Principles
//!
//! 1. **Controller Owns State**: `RuleFormController` holds all mutable
//!    state. A passive view renders `FormSnapshot`s and forwards user
//!    intents; it never mutates the form directly.
//!
//! 2. **Raw Text Until Submit**: `value` and `score` are stored as typed
//!    text. Numeric interpretation happens only in the validation pass.
//!
//! 3. **Closed Enumerations**: Rule types, operators, and connectors come
//!    from `ALL` catalogs; a selection control can never produce text the
//!    controller rejects.
//!
//! 4. **Cheap Snapshots**: Rows live in an `im::Vector`, so the snapshot
//!    handed to the view after every state change clones in O(1).
//!
//! ## Modules
//!
//! - `core`: Expressions, field kinds, connectors, the rule set
//! - `validation`: Submit-time numeric checks and the per-field error map
//! - `summary`: The `{rules, combinator}` JSON artifact
//! - `controller`: The form controller, view intents, snapshots
//! - `error`: Contract-violation errors for misbehaving views

pub mod controller;
pub mod core;
pub mod error;
pub mod summary;
pub mod validation;

// Re-export commonly used types
pub use crate::core::{Connector, Expression, FieldKind, Operator, RuleSet, RuleType};

pub use crate::controller::{FormIntent, FormSnapshot, RuleFormController};

pub use crate::error::FormError;

pub use crate::summary::RuleSummary;

pub use crate::validation::{
    check_row, is_numeric, validate, FieldIssue, ValidationErrors, SCORE_MESSAGE, VALUE_MESSAGE,
};
