//! Contract-violation errors.
//!
//! Validation failures (non-numeric value/score text) are domain data, not
//! errors - they live in the controller's error map. `FormError` covers the
//! only real fault path: a misbehaving view handing the controller an index
//! outside the current row range, or text that is not a member of a closed
//! enumeration. The controller fails fast and leaves its state untouched.

use thiserror::Error;

/// A programming-contract violation by the view layer.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum FormError {
    /// Row index outside the current expression sequence.
    #[error("expression index {index} out of bounds (row count {len})")]
    IndexOutOfBounds { index: usize, len: usize },

    /// Text that does not name a rule type.
    #[error("unknown rule type: {0:?}")]
    UnknownRuleType(String),

    /// Text that does not name an operator.
    #[error("unknown operator: {0:?}")]
    UnknownOperator(String),

    /// Text that does not name a connector.
    #[error("unknown connector: {0:?}")]
    UnknownConnector(String),
}
