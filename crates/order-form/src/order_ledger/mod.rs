//! # Order Ledger
//!
//! This module implements the item-entry half of the order form: a fixed catalog, the
//! ordered list of line items, and the derived subtotal, tax and total.
//!
//! ## Structure
//!
//! - [`ledger`] - [`OrderLedger`] state and its operations
//! - [`totals`] - [`OrderTotals`] snapshot and the default tax rate
//! - [`error`] - [`LedgerError`] rejection kinds
//! - [`actions`] - [`LedgerInput`], [`LedgerAction`] and [`LedgerActionResult`]
//! - [`entity`] - [`Component`](form_framework::Component) implementation
//! - [`new()`] - Factory function that creates the client
//!
//! ## Usage
//!
//! ```rust
//! use order_form::model::CatalogItem;
//! use order_form::order_ledger::{self, LedgerError};
//!
//! let mut client = order_ledger::new();
//!
//! // Nothing selected yet
//! assert_eq!(client.add_item().unwrap_err(), LedgerError::NoSelection);
//!
//! client.select_item(Some(CatalogItem::Apples));
//! client.set_quantity(Some(3));
//! let item = client.add_item().unwrap();
//! assert_eq!(item.amount.to_string(), "$3.69");
//! assert_eq!(client.total().to_string(), "$3.95");
//! ```
//!
//! ## Key Features
//!
//! - **Exact arithmetic**: all amounts are decimal [`Money`](crate::model::Money)
//! - **Derived totals**: recomputed from the list, never cached
//! - **Single pending error**: the latest rejection, cleared by the next successful add

pub mod actions;
pub mod entity;
pub mod error;
pub mod ledger;
pub mod totals;

pub use actions::*;
pub use error::*;
pub use ledger::*;
pub use totals::*;

use crate::clients::LedgerClient;
use form_framework::Dispatcher;

/// Creates an empty ledger with the default catalog and tax rate, behind its client.
pub fn new() -> LedgerClient {
    LedgerClient::new(Dispatcher::new(OrderLedger::default()))
}
