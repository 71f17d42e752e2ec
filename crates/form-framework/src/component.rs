//! # Component Trait
//!
//! The `Component` trait defines the contract that every form component (an address form,
//! an order ledger, …) must implement to be driven by the generic [`Dispatcher`].
//!
//! By defining a contract that all components satisfy, the dispatch loop, the tracing and
//! the client plumbing are written *once* and reused everywhere.
//!
//! Associated types keep each component's events apart: an address form only accepts
//! address inputs, and the compiler rejects a ledger input sent to it.
//!
//! [`Dispatcher`]: crate::Dispatcher

use std::fmt::Debug;

/// Trait that any component must implement to be managed by a [`Dispatcher`](crate::Dispatcher).
pub trait Component {
    /// Edits to the component's editable state (field changes, selections).
    type Input: Debug;

    /// Discrete user intents (submit, add, remove).
    type Action: Debug;

    /// The value returned by a successful action.
    type ActionResult: Debug;

    /// The error returned by a rejected action.
    ///
    /// Use [`std::convert::Infallible`] when every action succeeds and reports its
    /// findings through `ActionResult` instead.
    type Error: std::error::Error + 'static;

    /// Apply an input. Inputs never fail and carry no validation side effect.
    fn on_input(&mut self, input: Self::Input);

    /// Handle a discrete action.
    fn handle_action(&mut self, action: Self::Action) -> Result<Self::ActionResult, Self::Error>;
}
