//! Error types for the address form.

use crate::model::AddressField;
use serde::Serialize;
use thiserror::Error;

/// Why a single address field failed validation.
///
/// These are returned in a [`SubmitOutcome`](super::SubmitOutcome), never raised: an invalid
/// address is an ordinary result of submitting the form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error, Serialize)]
pub enum FieldError {
    /// The field is empty.
    #[error("Value required.")]
    Required,

    /// The field is non-empty but contains characters other than letters and apostrophes.
    #[error("Letters and apostrophes only.")]
    Pattern,
}

impl FieldError {
    /// The message shown under `field` for this error.
    pub fn message(self, field: AddressField) -> &'static str {
        match (field, self) {
            (AddressField::Street, FieldError::Required) => "Street address is required.",
            (_, FieldError::Required) => "Value required.",
            (_, FieldError::Pattern) => "Letters and apostrophes only.",
        }
    }
}
