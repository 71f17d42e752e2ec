//! Component trait implementation for the [`OrderLedger`].
//!
//! Inputs drive the entry controls; `AddItem` adds from those controls and `RemoveItem`
//! deletes by position.

use super::{LedgerAction, LedgerActionResult, LedgerError, LedgerInput, OrderLedger};
use form_framework::Component;

impl Component for OrderLedger {
    type Input = LedgerInput;
    type Action = LedgerAction;
    type ActionResult = LedgerActionResult;
    type Error = LedgerError;

    fn on_input(&mut self, input: LedgerInput) {
        match input {
            LedgerInput::SelectItem(item) => self.select_item(item),
            LedgerInput::SetQuantity(qty) => self.set_quantity(qty),
        }
    }

    fn handle_action(&mut self, action: LedgerAction) -> Result<LedgerActionResult, LedgerError> {
        match action {
            LedgerAction::AddItem => self.add_pending_item().map(LedgerActionResult::ItemAdded),
            LedgerAction::RemoveItem(index) => {
                Ok(LedgerActionResult::ItemRemoved(self.remove_item(index)))
            }
        }
    }
}
