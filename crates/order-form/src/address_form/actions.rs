//! Custom actions for the address form.

use super::SubmitOutcome;

/// Discrete actions on the address form.
#[derive(Debug, Clone)]
pub enum AddressAction {
    /// Latches the submitted flag, validates every field and records the confirmation.
    Submit,
}

/// Results from AddressActions - variants match 1:1 with AddressAction
#[derive(Debug, Clone)]
pub enum AddressActionResult {
    Submitted(SubmitOutcome),
}

/// Input event: one field changed.
#[derive(Debug, Clone)]
pub struct FieldUpdate {
    pub field: crate::model::AddressField,
    pub value: String,
}
