//! Inputs and custom actions for the order ledger.
//!
//! Inputs move the entry controls (selected item, quantity); actions add the pending entry
//! or remove a line by position. Actions are handled by
//! [`Component::handle_action`](form_framework::Component::handle_action).

use crate::model::{CatalogItem, LineItem};

/// Edits to the item-entry controls.
#[derive(Debug, Clone)]
pub enum LedgerInput {
    /// The selection control changed; `None` is the "-- Select an item --" placeholder.
    SelectItem(Option<CatalogItem>),
    /// The quantity box changed; `None` is an empty box.
    SetQuantity(Option<i64>),
}

/// Custom actions for the order ledger.
#[derive(Debug, Clone)]
pub enum LedgerAction {
    /// Adds the pending selection and quantity as a new line.
    ///
    /// # Errors
    /// Fails with `NoSelection` or `InvalidQuantity`; the list is left unchanged.
    AddItem,
    /// Removes the line at the given position. Out-of-range positions are ignored.
    RemoveItem(usize),
}

/// Results from LedgerActions - variants match 1:1 with LedgerAction
#[derive(Debug, Clone)]
pub enum LedgerActionResult {
    ItemAdded(LineItem),
    /// The removed line, or `None` when the position was out of range.
    ItemRemoved(Option<LineItem>),
}
