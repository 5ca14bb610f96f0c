//! Core form types: expressions, field kinds, connectors, the rule set.
//!
//! These are the fundamental building blocks the controller mutates and the
//! view renders. Everything here is plain data with serde derives; behavior
//! (validation, summary rendering, intent dispatch) lives in the sibling
//! modules.

pub mod expression;
pub mod ruleset;

pub use expression::{Expression, FieldKind, Operator, RuleType};
pub use ruleset::{Connector, RuleSet};
