//! # Address Client
//!
//! Provides a high-level API for driving the [`AddressForm`].
//! It wraps a `Dispatcher<AddressForm>` and exposes domain-specific methods.
use crate::address_form::{
    AddressAction, AddressActionResult, AddressForm, FieldError, FieldUpdate, SubmitOutcome,
};
use crate::model::{Address, AddressField};
use form_framework::{ComponentClient, Dispatcher};
use std::collections::BTreeMap;
use tracing::{debug, instrument};

/// Client for driving the address form.
pub struct AddressClient {
    inner: Dispatcher<AddressForm>,
}

impl AddressClient {
    pub fn new(inner: Dispatcher<AddressForm>) -> Self {
        Self { inner }
    }

    #[instrument(skip(self, value))]
    pub fn update_field(&mut self, field: AddressField, value: impl Into<String>) {
        self.input(FieldUpdate {
            field,
            value: value.into(),
        });
    }

    #[instrument(skip(self))]
    pub fn submit(&mut self) -> SubmitOutcome {
        debug!("Sending submit");
        match self.inner.perform_action(AddressAction::Submit) {
            Ok(AddressActionResult::Submitted(outcome)) => outcome,
            Err(never) => match never {},
        }
    }

    pub fn address(&self) -> &Address {
        self.state().address()
    }

    pub fn is_submitted(&self) -> bool {
        self.state().is_submitted()
    }

    pub fn is_confirmed(&self) -> bool {
        self.state().is_confirmed()
    }

    pub fn visible_errors(&self) -> BTreeMap<AddressField, FieldError> {
        self.state().visible_errors()
    }

    pub fn confirmation(&self) -> Option<String> {
        self.state().confirmation()
    }

    pub fn into_form(self) -> AddressForm {
        self.inner.into_inner()
    }
}

impl ComponentClient<AddressForm> for AddressClient {
    fn inner(&self) -> &Dispatcher<AddressForm> {
        &self.inner
    }

    fn inner_mut(&mut self) -> &mut Dispatcher<AddressForm> {
        &mut self.inner
    }
}
