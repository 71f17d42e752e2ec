//! # Generic Dispatcher
//!
//! This module defines the `Dispatcher`, which owns a component and applies events to it
//! sequentially. Each event runs to completion before the next is accepted, so the
//! component never observes interleaved edits.

use crate::component::Component;
use crate::message::{ComponentEvent, Outcome};
use tracing::{debug, info, warn};

/// Owns a component and applies events to it in call order.
///
/// # Usage Pattern
///
/// 1.  **Create**: wrap a component with `Dispatcher::new()`.
/// 2.  **Drive**: send inputs and actions (`input`, `perform_action`, or `dispatch`).
/// 3.  **Read**: inspect the component through `state()` between events.
///
/// ## Operations
///
/// * **Input**: calls `on_input`, bumps the event counter. Cannot fail.
/// * **Action**: calls `handle_action`, bumps the event counter, logs the outcome.
/// * **Replay**: applies a whole sequence of events and collects every outcome in order.
pub struct Dispatcher<T: Component> {
    component: T,
    dispatched: u64,
}

impl<T: Component> Dispatcher<T> {
    pub fn new(component: T) -> Self {
        Self {
            component,
            dispatched: 0,
        }
    }

    /// Read-only access to the component between events.
    pub fn state(&self) -> &T {
        &self.component
    }

    /// Number of events applied so far.
    pub fn dispatched(&self) -> u64 {
        self.dispatched
    }

    pub fn input(&mut self, input: T::Input) {
        debug!(component = component_name::<T>(), ?input, "Input");
        self.component.on_input(input);
        self.dispatched += 1;
    }

    pub fn perform_action(&mut self, action: T::Action) -> Result<T::ActionResult, T::Error> {
        let component = component_name::<T>();
        debug!(component, ?action, "Action");
        let result = self.component.handle_action(action);
        self.dispatched += 1;
        match &result {
            Ok(_) => info!(component, seq = self.dispatched, "Action ok"),
            Err(e) => warn!(component, seq = self.dispatched, error = %e, "Action rejected"),
        }
        result
    }

    pub fn dispatch(&mut self, event: ComponentEvent<T>) -> Outcome<T> {
        match event {
            ComponentEvent::Input(input) => {
                self.input(input);
                Ok(None)
            }
            ComponentEvent::Action(action) => self.perform_action(action).map(Some),
        }
    }

    /// Applies every event in order. A rejected action does not stop the replay.
    pub fn replay<I>(&mut self, events: I) -> Vec<Outcome<T>>
    where
        I: IntoIterator<Item = ComponentEvent<T>>,
    {
        let component = component_name::<T>();
        info!(component, "Replay started");
        let outcomes: Vec<_> = events.into_iter().map(|e| self.dispatch(e)).collect();
        let rejected = outcomes.iter().filter(|o| o.is_err()).count();
        info!(
            component,
            events = outcomes.len(),
            rejected,
            "Replay finished"
        );
        outcomes
    }

    pub fn into_inner(self) -> T {
        info!(
            component = component_name::<T>(),
            dispatched = self.dispatched,
            "Dispatcher closed"
        );
        self.component
    }
}

// Extract just the type name (e.g., "OrderLedger" instead of "order_form::order_ledger::OrderLedger")
fn component_name<T>() -> &'static str {
    std::any::type_name::<T>()
        .split("::")
        .last()
        .unwrap_or("Unknown")
}
