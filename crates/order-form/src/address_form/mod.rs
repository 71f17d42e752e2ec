//! # Address Form
//!
//! This module implements the shipping address form: three required text fields, a
//! one-way "submitted" latch that turns on error display, and a "confirmed" flag set by
//! each submit.
//!
//! ## Structure
//!
//! - [`form`] - [`AddressForm`] state and its operations
//! - [`validation`] - field rules
//! - [`error`] - [`FieldError`] kinds and their messages
//! - [`actions`] - [`AddressAction`], [`AddressActionResult`] and the [`FieldUpdate`] input
//! - [`entity`] - [`Component`](form_framework::Component) implementation
//! - [`new()`] - Factory function that creates the client
//!
//! ## Usage
//!
//! ```rust
//! use order_form::address_form;
//! use order_form::model::AddressField;
//!
//! let mut client = address_form::new();
//! client.update_field(AddressField::FirstName, "John1");
//! client.update_field(AddressField::LastName, "Smith");
//! client.update_field(AddressField::Street, "1 Main St");
//!
//! let outcome = client.submit();
//! assert!(!outcome.ok);
//! assert!(client.confirmation().is_none());
//! ```

pub mod actions;
pub mod entity;
pub mod error;
pub mod form;
pub mod validation;

pub use actions::*;
pub use error::*;
pub use form::*;

use crate::clients::AddressClient;
use form_framework::Dispatcher;

/// Creates an empty address form behind its client.
pub fn new() -> AddressClient {
    AddressClient::new(Dispatcher::new(AddressForm::new()))
}
