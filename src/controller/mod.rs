//! The form controller: owns all mutable state, applies view intents.
//!
//! `RuleFormController` holds the rule set, the current validation-error map,
//! the last rendered summary, and the clear-confirmation flag. The view calls
//! one method per user action (or dispatches a `FormIntent` through `apply`)
//! and re-renders from `snapshot` after every state change.
//!
//! Every operation runs to completion in response to exactly one view event;
//! there is no background work and no I/O, so state reads and writes are
//! serialized by event dispatch order.

use im::Vector;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::core::{Connector, Expression, FieldKind, RuleSet};
use crate::error::FormError;
use crate::summary::RuleSummary;
use crate::validation::{self, ValidationErrors};

/// A user intent forwarded by the view, 1:1 with the controller operations.
///
/// Mirrors the shape of the per-operation methods; views that prefer a single
/// message channel dispatch these through [`RuleFormController::apply`].
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum FormIntent {
    /// Choose the connector joining all rows.
    SetConnector(Connector),
    /// Replace one field of one row with raw text.
    EditExpression {
        index: usize,
        field: FieldKind,
        text: String,
    },
    /// Append a default row.
    AddExpression,
    /// Remove the row at `index`.
    DeleteExpression { index: usize },
    /// Validate and, if valid, render the summary.
    Submit,
    /// Open the clear-confirmation prompt.
    RequestClear,
    /// Confirm the clear: reset the form to its initial state.
    ConfirmClear,
    /// Dismiss the clear-confirmation prompt without changes.
    CancelClear,
}

/// Read-only projection of the controller state for the view to render.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct FormSnapshot {
    /// Current connector choice.
    pub connector: Connector,

    /// Rows in view order. Cloning out of the controller is O(1).
    pub expressions: Vector<Expression>,

    /// Validation errors from the most recent submit.
    pub errors: ValidationErrors,

    /// Rendered summary from the most recent successful submit.
    pub summary_text: Option<String>,

    /// Whether the clear-confirmation prompt is open.
    pub confirmation_visible: bool,
}

impl FormSnapshot {
    /// Look up the validation message for a field at a row, if any.
    #[must_use]
    pub fn error(&self, field: FieldKind, index: usize) -> Option<&str> {
        self.errors.get(&field.error_key(index)).map(String::as_str)
    }
}

/// Owns the form state and applies user intents.
///
/// Initialized with one default expression row and connector `and`. There is
/// no state machine beyond two flags: the confirmation prompt is open or
/// closed, and a summary is present or absent.
#[derive(Clone, Debug, Default)]
pub struct RuleFormController {
    rule_set: RuleSet,
    errors: ValidationErrors,
    summary: Option<String>,
    confirmation_visible: bool,
}

impl RuleFormController {
    /// Create a controller in its initial state.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    // === Accessors ===

    /// Current connector.
    #[must_use]
    pub fn connector(&self) -> Connector {
        self.rule_set.connector
    }

    /// Rows in view order.
    #[must_use]
    pub fn expressions(&self) -> &Vector<Expression> {
        &self.rule_set.expressions
    }

    /// Validation errors from the most recent submit.
    #[must_use]
    pub fn errors(&self) -> &ValidationErrors {
        &self.errors
    }

    /// Rendered summary from the most recent successful submit.
    #[must_use]
    pub fn summary(&self) -> Option<&str> {
        self.summary.as_deref()
    }

    /// Whether the clear-confirmation prompt is open.
    #[must_use]
    pub fn is_confirming_clear(&self) -> bool {
        self.confirmation_visible
    }

    /// Take a read-only snapshot for the view.
    #[must_use]
    pub fn snapshot(&self) -> FormSnapshot {
        FormSnapshot {
            connector: self.rule_set.connector,
            expressions: self.rule_set.expressions.clone(),
            errors: self.errors.clone(),
            summary_text: self.summary.clone(),
            confirmation_visible: self.confirmation_visible,
        }
    }

    // === Operations ===

    /// Set the connector. No validation, no other side effect.
    pub fn set_connector(&mut self, connector: Connector) {
        debug!(%connector, "set connector");
        self.rule_set.connector = connector;
    }

    /// Replace one field of the row at `index` with raw text from the view.
    ///
    /// No numeric validation happens here; `value`/`score` text is checked
    /// only on submit.
    pub fn edit_expression(
        &mut self,
        index: usize,
        field: FieldKind,
        text: &str,
    ) -> Result<(), FormError> {
        debug!(index, %field, text, "edit expression");
        self.rule_set.edit_expression(index, field, text)
    }

    /// Append a default row at the end of the sequence.
    pub fn add_expression(&mut self) {
        self.rule_set.add_expression();
        debug!(rows = self.rule_set.len(), "added expression");
    }

    /// Remove the row at `index`. Deleting the last remaining row is allowed.
    pub fn delete_expression(&mut self, index: usize) -> Result<(), FormError> {
        self.rule_set.delete_expression(index)?;
        debug!(index, rows = self.rule_set.len(), "deleted expression");
        Ok(())
    }

    /// Validate all rows and, if valid, render and store the summary.
    ///
    /// The error map is fully replaced on every call. On failure the previous
    /// summary, if any, stays in place.
    pub fn submit(&mut self) -> bool {
        let errors = validation::validate(&self.rule_set.expressions);
        let valid = errors.is_empty();

        if valid {
            self.summary = Some(RuleSummary::from_rule_set(&self.rule_set).render());
        }
        self.errors = errors;

        debug!(rows = self.rule_set.len(), valid, "form submitted");
        valid
    }

    /// Open the clear-confirmation prompt. Does not touch the rule set.
    pub fn request_clear(&mut self) {
        self.confirmation_visible = true;
    }

    /// Reset to the initial state: one default row, connector `and`, no
    /// summary, prompt closed.
    pub fn confirm_clear(&mut self) {
        debug!("form cleared");
        self.rule_set = RuleSet::new();
        self.summary = None;
        self.confirmation_visible = false;
    }

    /// Close the clear-confirmation prompt without changes.
    pub fn cancel_clear(&mut self) {
        self.confirmation_visible = false;
    }

    /// Dispatch a tagged intent onto the operation it names.
    pub fn apply(&mut self, intent: FormIntent) -> Result<(), FormError> {
        match intent {
            FormIntent::SetConnector(connector) => self.set_connector(connector),
            FormIntent::EditExpression { index, field, text } => {
                self.edit_expression(index, field, &text)?;
            }
            FormIntent::AddExpression => self.add_expression(),
            FormIntent::DeleteExpression { index } => self.delete_expression(index)?,
            FormIntent::Submit => {
                self.submit();
            }
            FormIntent::RequestClear => self.request_clear(),
            FormIntent::ConfirmClear => self.confirm_clear(),
            FormIntent::CancelClear => self.cancel_clear(),
        }
        Ok(())
    }
}
