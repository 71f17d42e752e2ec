//! Type-safe client wrappers around the generic [`Dispatcher`](form_framework::Dispatcher).

pub mod address_client;
pub mod ledger_client;

pub use address_client::*;
pub use ledger_client::*;
