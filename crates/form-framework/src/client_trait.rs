//! # ComponentClient Trait
//!
//! Provides a common interface for component-specific clients, adding default `state` and
//! `input` methods built on top of a generic [`Dispatcher`].
use crate::{Component, Dispatcher};

/// Trait for component-specific clients to inherit the standard operations.
///
/// Implementors only expose their dispatcher; reading state and forwarding raw inputs come
/// for free. Domain-specific actions (submit, add item, …) stay on the client itself, where
/// they can unwrap the matching `ActionResult` variant.
///
/// # Example
///
/// ```rust
/// use form_framework::{Component, ComponentClient, Dispatcher};
///
/// #[derive(Debug, Default)]
/// struct Note { text: String }
///
/// impl Component for Note {
///     type Input = String;
///     type Action = ();
///     type ActionResult = usize;
///     type Error = std::convert::Infallible;
///
///     fn on_input(&mut self, input: String) { self.text = input; }
///     fn handle_action(&mut self, _: ()) -> Result<usize, Self::Error> { Ok(self.text.len()) }
/// }
///
/// struct NoteClient { inner: Dispatcher<Note> }
///
/// impl ComponentClient<Note> for NoteClient {
///     fn inner(&self) -> &Dispatcher<Note> { &self.inner }
///     fn inner_mut(&mut self) -> &mut Dispatcher<Note> { &mut self.inner }
/// }
///
/// let mut client = NoteClient { inner: Dispatcher::new(Note::default()) };
/// client.input("hello".to_string());
/// assert_eq!(client.state().text, "hello");
/// ```
pub trait ComponentClient<T: Component> {
    /// Access the inner generic dispatcher.
    fn inner(&self) -> &Dispatcher<T>;

    /// Mutable access to the inner generic dispatcher.
    fn inner_mut(&mut self) -> &mut Dispatcher<T>;

    /// Current component state.
    fn state(&self) -> &T {
        self.inner().state()
    }

    /// Forward a raw input event.
    #[tracing::instrument(skip(self))]
    fn input(&mut self, input: T::Input) {
        tracing::debug!("Forwarding input");
        self.inner_mut().input(input)
    }
}
