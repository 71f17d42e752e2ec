//! # Ledger Client
//!
//! Provides a high-level API for driving the [`OrderLedger`].
//! It wraps a `Dispatcher<OrderLedger>` and exposes domain-specific methods.
use crate::model::{CatalogItem, LineItem, Money};
use crate::order_ledger::{
    LedgerAction, LedgerActionResult, LedgerError, LedgerInput, OrderLedger, OrderTotals,
};
use form_framework::{ComponentClient, Dispatcher};
use tracing::{debug, instrument};

/// Client for driving the order ledger.
pub struct LedgerClient {
    inner: Dispatcher<OrderLedger>,
}

impl LedgerClient {
    pub fn new(inner: Dispatcher<OrderLedger>) -> Self {
        Self { inner }
    }

    pub fn select_item(&mut self, item: Option<CatalogItem>) {
        self.input(LedgerInput::SelectItem(item));
    }

    pub fn set_quantity(&mut self, qty: Option<i64>) {
        self.input(LedgerInput::SetQuantity(qty));
    }

    /// Adds the pending selection and quantity as a new line.
    #[instrument(skip(self))]
    pub fn add_item(&mut self) -> Result<LineItem, LedgerError> {
        debug!("Sending add_item");
        match self.inner.perform_action(LedgerAction::AddItem)? {
            LedgerActionResult::ItemAdded(item) => Ok(item),
            LedgerActionResult::ItemRemoved(_) => {
                unreachable!("AddItem action must return ItemAdded result")
            }
        }
    }

    /// Removes the line at `index`; `None` when the index is out of range.
    #[instrument(skip(self))]
    pub fn remove_item(&mut self, index: usize) -> Option<LineItem> {
        debug!("Sending remove_item");
        match self.inner.perform_action(LedgerAction::RemoveItem(index)) {
            Ok(LedgerActionResult::ItemRemoved(removed)) => removed,
            Ok(LedgerActionResult::ItemAdded(_)) => {
                unreachable!("RemoveItem action must return ItemRemoved result")
            }
            Err(_) => None,
        }
    }

    pub fn items(&self) -> &[LineItem] {
        self.state().items()
    }

    pub fn pending_error(&self) -> Option<LedgerError> {
        self.state().pending_error()
    }

    pub fn subtotal(&self) -> Money {
        self.state().subtotal()
    }

    pub fn tax(&self) -> Money {
        self.state().tax()
    }

    pub fn total(&self) -> Money {
        self.state().total()
    }

    pub fn totals(&self) -> OrderTotals {
        self.state().totals()
    }

    pub fn into_ledger(self) -> OrderLedger {
        self.inner.into_inner()
    }
}

impl ComponentClient<OrderLedger> for LedgerClient {
    fn inner(&self) -> &Dispatcher<OrderLedger> {
        &self.inner
    }

    fn inner_mut(&mut self) -> &mut Dispatcher<OrderLedger> {
        &mut self.inner
    }
}
