use super::{CatalogItem, Money};
use serde::{Deserialize, Serialize};

/// One catalog item entry on the order.
///
/// The unit price is copied from the catalog when the item is added and the amount is
/// fixed at `qty × unit_price`. Line items are never edited; the ledger removes and
/// re-adds instead.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineItem {
    pub name: CatalogItem,
    pub qty: u32,
    pub unit_price: Money,
    pub amount: Money,
}

impl LineItem {
    /// Creates a line item priced at `unit_price`, or `None` when the amount overflows.
    ///
    /// # Notes
    /// Quantity validation (`qty ≥ 1`) belongs to the ledger; this constructor only
    /// computes the amount.
    pub fn new(name: CatalogItem, qty: u32, unit_price: Money) -> Option<Self> {
        Some(Self {
            name,
            qty,
            unit_price,
            amount: unit_price.checked_times(qty)?,
        })
    }
}
