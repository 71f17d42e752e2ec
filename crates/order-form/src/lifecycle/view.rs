//! Display snapshot of a session.
//!
//! [`OrderView`] is everything a presentation layer renders: field values, flags, visible
//! error messages, the confirmation line, the selectable catalog, formatted item rows and
//! formatted totals. Money is pre-formatted as `$x.yy`.

use crate::address_form::AddressForm;
use crate::model::{Address, AddressField, CatalogItem, LineItem};
use crate::order_ledger::{EntryState, OrderLedger};
use rust_decimal::Decimal;
use serde::Serialize;
use std::collections::BTreeMap;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OrderView {
    pub address: Address,
    pub submitted: bool,
    pub confirmed: bool,
    /// Message per failing field; empty before the first submit.
    pub field_errors: BTreeMap<AddressField, String>,
    pub confirmation: Option<String>,
    pub catalog: Vec<CatalogOption>,
    pub entry: EntryState,
    pub items: Vec<LineItemRow>,
    pub error: Option<String>,
    pub subtotal: String,
    pub tax_label: String,
    pub tax: String,
    pub total: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CatalogOption {
    pub item: CatalogItem,
    pub unit_price: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LineItemRow {
    pub name: CatalogItem,
    pub qty: u32,
    pub unit_price: String,
    pub amount: String,
}

impl From<&LineItem> for LineItemRow {
    fn from(item: &LineItem) -> Self {
        Self {
            name: item.name,
            qty: item.qty,
            unit_price: item.unit_price.to_string(),
            amount: item.amount.to_string(),
        }
    }
}

impl OrderView {
    pub fn build(form: &AddressForm, ledger: &OrderLedger) -> Self {
        let totals = ledger.totals();
        Self {
            address: form.address().clone(),
            submitted: form.is_submitted(),
            confirmed: form.is_confirmed(),
            field_errors: form
                .visible_errors()
                .into_iter()
                .map(|(field, e)| (field, e.message(field).to_string()))
                .collect(),
            confirmation: form.confirmation(),
            catalog: ledger
                .catalog()
                .entries()
                .map(|(item, price)| CatalogOption {
                    item,
                    unit_price: price.to_string(),
                })
                .collect(),
            entry: ledger.entry(),
            items: ledger.items().iter().map(LineItemRow::from).collect(),
            error: ledger.pending_error().map(|e| e.to_string()),
            subtotal: totals.subtotal.to_string(),
            tax_label: tax_label(ledger.tax_rate()),
            tax: totals.tax.to_string(),
            total: totals.total.to_string(),
        }
    }
}

/// "Taxes 7%" for a rate of 0.07.
fn tax_label(rate: Decimal) -> String {
    format!("Taxes {}%", (rate * Decimal::ONE_HUNDRED).normalize())
}
