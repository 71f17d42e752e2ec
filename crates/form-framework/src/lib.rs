//! # Form Framework
//!
//! This crate provides the building blocks for driving stateful form components from a
//! presentation layer. A presentation layer (widgets, DOM bindings, a terminal UI) turns
//! user activity into events; the framework applies those events to a component one at a
//! time and hands back typed results.
//!
//! ## Architecture Overview
//!
//! The framework separates concerns into three layers:
//!
//! 1. **Component Layer** ([`Component`]) - Your business logic and state
//! 2. **Dispatch Layer** ([`Dispatcher`]) - Sequential event processing and tracing
//! 3. **Interface Layer** ([`ComponentClient`]) - Type-safe façades over a dispatcher
//!
//! You write your business logic **once** in the component, and the framework handles
//! event routing, ordering and observability.
//!
//! ## Inputs vs Actions
//!
//! Every component distinguishes two kinds of events:
//!
//! - **Inputs** mutate editable state (a text field changed, a dropdown moved). They never
//!   fail and never validate.
//! - **Actions** are discrete user intents (submit, add, remove). They return a typed
//!   result or a typed error.
//!
//! ```rust
//! use form_framework::{Component, ComponentEvent, Dispatcher};
//!
//! #[derive(Debug, Default)]
//! struct Counter {
//!     step: u32,
//!     value: u32,
//! }
//!
//! #[derive(Debug)] struct SetStep(u32);
//! #[derive(Debug)] enum CounterAction { Bump }
//! #[derive(Debug)] struct CounterError;
//!
//! impl std::fmt::Display for CounterError {
//!     fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result { write!(f, "step is zero") }
//! }
//! impl std::error::Error for CounterError {}
//!
//! impl Component for Counter {
//!     type Input = SetStep;
//!     type Action = CounterAction;
//!     type ActionResult = u32;
//!     type Error = CounterError;
//!
//!     fn on_input(&mut self, input: SetStep) {
//!         self.step = input.0;
//!     }
//!
//!     fn handle_action(&mut self, action: CounterAction) -> Result<u32, CounterError> {
//!         match action {
//!             CounterAction::Bump if self.step == 0 => Err(CounterError),
//!             CounterAction::Bump => {
//!                 self.value += self.step;
//!                 Ok(self.value)
//!             }
//!         }
//!     }
//! }
//!
//! let mut dispatcher = Dispatcher::new(Counter::default());
//! assert!(dispatcher.perform_action(CounterAction::Bump).is_err());
//!
//! dispatcher.dispatch(ComponentEvent::Input(SetStep(2))).unwrap();
//! assert_eq!(dispatcher.perform_action(CounterAction::Bump).unwrap(), 2);
//! assert_eq!(dispatcher.state().value, 2);
//! ```
//!
//! ## Execution Model
//!
//! - Every event runs to completion before the next one is accepted
//! - Events are applied strictly in the order the caller sends them
//! - The dispatcher owns its component exclusively (`&mut self` access only)
//! - No background tasks, timers or locks
//!
//! ## Observability
//!
//! The dispatcher logs every event with `tracing`: payloads at `debug`, successful actions
//! at `info`, rejected actions at `warn`. Binaries install a subscriber with
//! [`tracing::setup_tracing`].

pub mod client_trait;
pub mod component;
pub mod dispatcher;
pub mod message;
pub mod tracing;

// Re-export core types for convenience
pub use client_trait::ComponentClient;
pub use component::Component;
pub use dispatcher::Dispatcher;
pub use message::{ComponentEvent, Outcome};
