//! Error types for the order ledger.

use serde::Serialize;
use thiserror::Error;

/// Why an add-item attempt was rejected.
///
/// The `Display` text is the message shown to the user. Only the most recent rejection is
/// kept by the ledger; a successful add clears it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error, Serialize)]
pub enum LedgerError {
    /// No catalog item was selected.
    #[error("Please select an item from the list.")]
    NoSelection,

    /// The quantity was missing, zero or negative.
    #[error("Quantity is required and must be at least 1.")]
    InvalidQuantity,
}
