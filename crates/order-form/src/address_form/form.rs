use super::validation::validate_address;
use super::FieldError;
use crate::model::{Address, AddressField};
use serde::Serialize;
use std::collections::BTreeMap;
use tracing::{debug, info};

/// Result of submitting the address form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SubmitOutcome {
    /// Every field passed its rule.
    pub ok: bool,
    /// Failing fields and why. Empty when `ok`.
    pub errors: BTreeMap<AddressField, FieldError>,
}

/// Shipping address form with a submitted latch and a confirmed flag.
///
/// - `submitted` becomes true on the first submit and stays true; from then on
///   [`visible_errors`](Self::visible_errors) reports the current problems on every read.
/// - `confirmed` mirrors the `ok` of the most recent submit. It only drives the
///   confirmation line and does not gate item entry.
#[derive(Debug, Clone, Default)]
pub struct AddressForm {
    address: Address,
    submitted: bool,
    confirmed: bool,
}

impl AddressForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn address(&self) -> &Address {
        &self.address
    }

    pub fn is_submitted(&self) -> bool {
        self.submitted
    }

    pub fn is_confirmed(&self) -> bool {
        self.confirmed
    }

    /// Sets one field. No validation happens here.
    pub fn update_field(&mut self, field: AddressField, value: impl Into<String>) {
        self.address.set(field, value.into());
    }

    pub fn submit(&mut self) -> SubmitOutcome {
        self.submitted = true;
        let errors = validate_address(&self.address);
        let ok = errors.is_empty();
        self.confirmed = ok;

        debug!(address = ?self.address, "submit called");
        info!(ok, failing = errors.len(), "Address submitted");
        SubmitOutcome { ok, errors }
    }

    /// Errors to display: none before the first submit, the current ones afterwards.
    pub fn visible_errors(&self) -> BTreeMap<AddressField, FieldError> {
        if self.submitted {
            validate_address(&self.address)
        } else {
            BTreeMap::new()
        }
    }

    pub fn field_error(&self, field: AddressField) -> Option<FieldError> {
        self.visible_errors().get(&field).copied()
    }

    /// "Order for {first} {last} at {street}." once the address is confirmed.
    pub fn confirmation(&self) -> Option<String> {
        self.confirmed.then(|| {
            format!(
                "Order for {} {} at {}.",
                self.address.first_name, self.address.last_name, self.address.street
            )
        })
    }
}
