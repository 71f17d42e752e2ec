//! Field rules for the shipping address.
//!
//! - first and last name: required, ASCII letters and apostrophes only
//! - street: required, any content
//!
//! An empty field reports only [`FieldError::Required`]; the pattern is checked on
//! non-empty values.

use super::FieldError;
use crate::model::{Address, AddressField};
use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::BTreeMap;
use strum::IntoEnumIterator;

static NAME_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Za-z']+$").expect("Invalid regex"));

/// Checks one value against the rule for `field`.
pub fn validate_field(field: AddressField, value: &str) -> Result<(), FieldError> {
    if value.is_empty() {
        return Err(FieldError::Required);
    }
    match field {
        AddressField::FirstName | AddressField::LastName if !NAME_PATTERN.is_match(value) => {
            Err(FieldError::Pattern)
        }
        _ => Ok(()),
    }
}

/// Every failing field of `address`, keyed by field. Empty when the address is valid.
pub fn validate_address(address: &Address) -> BTreeMap<AddressField, FieldError> {
    AddressField::iter()
        .filter_map(|field| {
            validate_field(field, address.get(field))
                .err()
                .map(|e| (field, e))
        })
        .collect()
}
