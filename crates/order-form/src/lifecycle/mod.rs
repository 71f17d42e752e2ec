//! # Session Lifecycle & Orchestration
//!
//! This module wires the two components of the order form together and gives the
//! presentation layer a single entry point.
//!
//! **Key Responsibilities:**
//! 1. **Component Creation** - Build the address form and the ledger from one config
//! 2. **Event Routing** - Send each [`SessionEvent`] to the component that owns it
//! 3. **Presentation** - Assemble the [`OrderView`] snapshot with formatted money
//! 4. **Shutdown** - Log the final state in [`OrderSession::close`]
//!
//! ```rust
//! use order_form::lifecycle::{OrderSession, SessionEvent, SessionOutcome};
//! use order_form::model::AddressField;
//!
//! let mut session = OrderSession::new();
//! session.apply(SessionEvent::UpdateField { field: AddressField::FirstName, value: "John1".into() });
//!
//! match session.apply(SessionEvent::SubmitAddress) {
//!     SessionOutcome::AddressSubmitted(outcome) => assert!(!outcome.ok),
//!     other => panic!("unexpected outcome {other:?}"),
//! }
//! assert_eq!(session.view().field_errors.len(), 3);
//! ```

pub mod order_session;
pub mod view;

pub use order_session::*;
pub use view::*;
