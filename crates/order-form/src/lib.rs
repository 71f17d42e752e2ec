//! # Order Form
//!
//! A two-part order entry form built on [`form_framework`]:
//!
//! - **[address_form]**: Validated shipping address with a one-line confirmation.
//! - **[order_ledger]**: Catalog-priced line items with exact subtotal, tax and total.
//! - **[clients]**: Typed wrappers that drive each component through its dispatcher.
//! - **[lifecycle]**: [`OrderSession`](lifecycle::OrderSession), which wires both components
//!   and builds the display snapshot.
//! - **[config]**: Tax rate and price overrides loaded from TOML.
//! - **[model]**: Plain data types ([`Money`](model::Money), [`CatalogItem`](model::CatalogItem), ...).

pub mod address_form;
pub mod clients;
pub mod config;
pub mod lifecycle;
pub mod model;
pub mod order_ledger;
