use crate::address_form::{self, FieldError, SubmitOutcome};
use crate::clients::{AddressClient, LedgerClient};
use crate::config::{ConfigError, OrderConfig};
use crate::model::{AddressField, CatalogItem, LineItem};
use crate::order_ledger::{self, LedgerError};
use form_framework::{ComponentClient, Dispatcher};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use super::OrderView;

/// One user action, as reported by the presentation layer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum SessionEvent {
    UpdateField { field: AddressField, value: String },
    SubmitAddress,
    SelectItem { item: Option<CatalogItem> },
    SetQuantity { qty: Option<i64> },
    AddItem,
    RemoveItem { index: usize },
}

/// What applying a [`SessionEvent`] did.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", content = "data", rename_all = "camelCase")]
pub enum SessionOutcome {
    Updated,
    AddressSubmitted(SubmitOutcome),
    ItemAdded(LineItem),
    ItemRejected(LedgerError),
    ItemRemoved(Option<LineItem>),
}

/// Orchestrates the address form and the order ledger for one order.
///
/// `OrderSession` is responsible for:
/// - **Wiring**: building both components from one [`OrderConfig`]
/// - **Routing**: sending each [`SessionEvent`] to the component that owns it
/// - **Presentation**: assembling the [`OrderView`] snapshot
///
/// The two components are independent: an unconfirmed address never blocks item entry.
///
/// # Example
///
/// ```rust
/// use order_form::lifecycle::{OrderSession, SessionEvent};
/// use order_form::model::CatalogItem;
///
/// let mut session = OrderSession::new();
/// session.apply(SessionEvent::SelectItem { item: Some(CatalogItem::Apples) });
/// session.apply(SessionEvent::SetQuantity { qty: Some(3) });
/// session.apply(SessionEvent::AddItem);
///
/// let view = session.close();
/// assert_eq!(view.total, "$3.95");
/// ```
pub struct OrderSession {
    pub address: AddressClient,
    pub ledger: LedgerClient,
}

impl Default for OrderSession {
    fn default() -> Self {
        Self::new()
    }
}

impl OrderSession {
    /// Creates a session with the default catalog and tax rate.
    pub fn new() -> Self {
        let session = Self {
            address: address_form::new(),
            ledger: order_ledger::new(),
        };
        info!(tax_rate = %session.ledger.state().tax_rate(), "Session started");
        session
    }

    /// Creates a session priced by `config`.
    pub fn with_config(config: &OrderConfig) -> Result<Self, ConfigError> {
        let ledger = config.ledger()?;
        info!(tax_rate = %ledger.tax_rate(), "Session started");
        Ok(Self {
            address: address_form::new(),
            ledger: LedgerClient::new(Dispatcher::new(ledger)),
        })
    }

    pub fn apply(&mut self, event: SessionEvent) -> SessionOutcome {
        debug!(?event, "apply called");
        match event {
            SessionEvent::UpdateField { field, value } => {
                self.address.update_field(field, value);
                SessionOutcome::Updated
            }
            SessionEvent::SubmitAddress => SessionOutcome::AddressSubmitted(self.address.submit()),
            SessionEvent::SelectItem { item } => {
                self.ledger.select_item(item);
                SessionOutcome::Updated
            }
            SessionEvent::SetQuantity { qty } => {
                self.ledger.set_quantity(qty);
                SessionOutcome::Updated
            }
            SessionEvent::AddItem => match self.ledger.add_item() {
                Ok(item) => SessionOutcome::ItemAdded(item),
                Err(e) => SessionOutcome::ItemRejected(e),
            },
            SessionEvent::RemoveItem { index } => {
                SessionOutcome::ItemRemoved(self.ledger.remove_item(index))
            }
        }
    }

    /// Applies events in order; rejected adds do not stop the replay.
    pub fn replay<I>(&mut self, events: I) -> Vec<SessionOutcome>
    where
        I: IntoIterator<Item = SessionEvent>,
    {
        events.into_iter().map(|e| self.apply(e)).collect()
    }

    /// The visible error for `field`, if the form has been submitted.
    pub fn field_error(&self, field: AddressField) -> Option<FieldError> {
        self.address.state().field_error(field)
    }

    pub fn view(&self) -> OrderView {
        OrderView::build(self.address.state(), self.ledger.state())
    }

    /// Ends the session, logging the final state, and returns the last view.
    pub fn close(self) -> OrderView {
        let view = self.view();
        let form = self.address.into_form();
        let ledger = self.ledger.into_ledger();
        info!(
            confirmed = form.is_confirmed(),
            items = ledger.items().len(),
            total = %view.total,
            "Session closed"
        );
        view
    }
}
