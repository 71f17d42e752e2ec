use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter};

/// Shipping address collected by the address form.
///
/// Values are stored exactly as typed; validity is only evaluated when the form is
/// submitted (see [`AddressForm::submit`](crate::address_form::AddressForm::submit)).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Address {
    pub first_name: String,
    pub last_name: String,
    pub street: String,
}

/// Names one of the three address fields.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Display, EnumIter,
)]
#[serde(rename_all = "camelCase")]
#[strum(serialize_all = "camelCase")]
pub enum AddressField {
    FirstName,
    LastName,
    Street,
}

impl Address {
    pub fn new(
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        street: impl Into<String>,
    ) -> Self {
        Self {
            first_name: first_name.into(),
            last_name: last_name.into(),
            street: street.into(),
        }
    }

    pub fn get(&self, field: AddressField) -> &str {
        match field {
            AddressField::FirstName => &self.first_name,
            AddressField::LastName => &self.last_name,
            AddressField::Street => &self.street,
        }
    }

    pub fn set(&mut self, field: AddressField, value: String) {
        match field {
            AddressField::FirstName => self.first_name = value,
            AddressField::LastName => self.last_name = value,
            AddressField::Street => self.street = value,
        }
    }
}
