//! Component trait implementation for the [`AddressForm`].
//!
//! Field updates are plain inputs; submit is the only action, and it never fails: an
//! invalid address is reported through the [`SubmitOutcome`](super::SubmitOutcome).

use super::{AddressAction, AddressActionResult, AddressForm, FieldUpdate};
use form_framework::Component;
use std::convert::Infallible;

impl Component for AddressForm {
    type Input = FieldUpdate;
    type Action = AddressAction;
    type ActionResult = AddressActionResult;
    type Error = Infallible;

    fn on_input(&mut self, input: FieldUpdate) {
        self.update_field(input.field, input.value);
    }

    fn handle_action(&mut self, action: AddressAction) -> Result<AddressActionResult, Infallible> {
        match action {
            AddressAction::Submit => Ok(AddressActionResult::Submitted(self.submit())),
        }
    }
}
