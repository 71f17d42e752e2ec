//! # Generic Events
//!
//! This module defines the event type a presentation layer sends to a [`Dispatcher`].
//!
//! [`Dispatcher`]: crate::Dispatcher

use crate::component::Component;

/// Result of dispatching one event.
///
/// Inputs yield `Ok(None)`; actions yield `Ok(Some(result))` or `Err(error)`.
pub type Outcome<T> = Result<Option<<T as Component>::ActionResult>, <T as Component>::Error>;

/// A single event destined for a component.
///
/// The two variants mirror the two hooks of [`Component`]: an `Input` edits state and
/// cannot fail, an `Action` is a discrete intent with a typed result.
#[derive(Debug)]
pub enum ComponentEvent<T: Component> {
    Input(T::Input),
    Action(T::Action),
}
