use order_form::address_form::FieldError;
use order_form::config::OrderConfig;
use order_form::lifecycle::{OrderSession, SessionEvent, SessionOutcome};
use order_form::model::{AddressField, CatalogItem, Money};
use order_form::order_ledger::LedgerError;

fn add(session: &mut OrderSession, item: Option<CatalogItem>, qty: Option<i64>) -> SessionOutcome {
    session.apply(SessionEvent::SelectItem { item });
    session.apply(SessionEvent::SetQuantity { qty });
    session.apply(SessionEvent::AddItem)
}

fn fill(session: &mut OrderSession, first: &str, last: &str, street: &str) {
    for (field, value) in [
        (AddressField::FirstName, first),
        (AddressField::LastName, last),
        (AddressField::Street, street),
    ] {
        session.apply(SessionEvent::UpdateField {
            field,
            value: value.to_string(),
        });
    }
}

#[test]
fn test_single_item_totals() {
    let mut session = OrderSession::new();

    let outcome = add(&mut session, Some(CatalogItem::Apples), Some(3));
    let SessionOutcome::ItemAdded(item) = outcome else {
        panic!("expected ItemAdded, got {outcome:?}");
    };
    assert_eq!(item.amount, Money::from_parts(369, 2));

    let totals = session.ledger.totals();
    assert_eq!(totals.subtotal, Money::from_parts(369, 2));
    assert_eq!(totals.tax, Money::from_parts(2583, 4));
    assert_eq!(totals.total, Money::from_parts(39483, 4));

    let view = session.view();
    assert_eq!(view.subtotal, "$3.69");
    assert_eq!(view.tax, "$0.26");
    assert_eq!(view.total, "$3.95");
}

#[test]
fn test_add_without_selection_is_rejected() {
    let mut session = OrderSession::new();

    let outcome = add(&mut session, None, Some(2));
    assert_eq!(outcome, SessionOutcome::ItemRejected(LedgerError::NoSelection));
    assert!(session.ledger.items().is_empty());
    assert_eq!(
        session.view().error.as_deref(),
        Some("Please select an item from the list.")
    );
}

#[test]
fn test_zero_quantity_is_rejected() {
    let mut session = OrderSession::new();

    let outcome = add(&mut session, Some(CatalogItem::Plums), Some(0));
    assert_eq!(outcome, SessionOutcome::ItemRejected(LedgerError::InvalidQuantity));
    assert!(session.ledger.items().is_empty());

    // The next successful add clears the message
    add(&mut session, Some(CatalogItem::Plums), Some(1));
    assert_eq!(session.view().error, None);
}

#[test]
fn test_invalid_first_name_blocks_confirmation() {
    let mut session = OrderSession::new();
    fill(&mut session, "John1", "Smith", "1 Elm St");

    let SessionOutcome::AddressSubmitted(result) = session.apply(SessionEvent::SubmitAddress) else {
        panic!("expected AddressSubmitted");
    };
    assert!(!result.ok);
    assert_eq!(result.errors.get(&AddressField::FirstName), Some(&FieldError::Pattern));
    assert_eq!(result.errors.len(), 1);
    assert_eq!(session.view().confirmation, None);
    assert_eq!(
        session.field_error(AddressField::FirstName),
        Some(FieldError::Pattern)
    );
}

#[test]
fn test_remove_first_of_two_items() {
    let mut session = OrderSession::new();
    add(&mut session, Some(CatalogItem::Apples), Some(1));
    add(&mut session, Some(CatalogItem::Peaches), Some(2));

    let outcome = session.apply(SessionEvent::RemoveItem { index: 0 });
    let SessionOutcome::ItemRemoved(Some(removed)) = outcome else {
        panic!("expected a removed item, got {outcome:?}");
    };
    assert_eq!(removed.name, CatalogItem::Apples);

    let names: Vec<_> = session.ledger.items().iter().map(|i| i.name).collect();
    assert_eq!(names, vec![CatalogItem::Peaches]);
    assert_eq!(session.ledger.subtotal(), Money::from_parts(278, 2));
}

#[test]
fn test_valid_address_confirms() {
    let mut session = OrderSession::new();
    fill(&mut session, "Mary", "O'Brien", "42 Harbor Way");

    let SessionOutcome::AddressSubmitted(result) = session.apply(SessionEvent::SubmitAddress) else {
        panic!("expected AddressSubmitted");
    };
    assert!(result.ok);
    assert!(result.errors.is_empty());

    let view = session.view();
    assert!(view.confirmed);
    assert_eq!(
        view.confirmation.as_deref(),
        Some("Order for Mary O'Brien at 42 Harbor Way.")
    );
}

#[test]
fn test_errors_hidden_until_first_submit_then_tracked_live() {
    let mut session = OrderSession::new();
    assert!(session.view().field_errors.is_empty());

    session.apply(SessionEvent::SubmitAddress);
    let view = session.view();
    assert_eq!(view.field_errors.len(), 3);
    assert_eq!(view.field_errors[&AddressField::FirstName], "Value required.");
    assert_eq!(view.field_errors[&AddressField::Street], "Street address is required.");

    // Fixing a field clears its error without resubmitting
    session.apply(SessionEvent::UpdateField {
        field: AddressField::Street,
        value: "5 Pine Ct".to_string(),
    });
    let view = session.view();
    assert!(!view.field_errors.contains_key(&AddressField::Street));
    assert!(view.submitted);
    assert!(!view.confirmed);
}

#[test]
fn test_item_entry_does_not_depend_on_address() {
    let mut session = OrderSession::new();
    session.apply(SessionEvent::SubmitAddress);

    let outcome = add(&mut session, Some(CatalogItem::Pears), Some(2));
    assert!(matches!(outcome, SessionOutcome::ItemAdded(_)));
    assert!(!session.address.is_confirmed());
}

#[test]
fn test_replay_keeps_going_after_rejection() {
    let mut session = OrderSession::new();

    let outcomes = session.replay([
        SessionEvent::AddItem,
        SessionEvent::SelectItem {
            item: Some(CatalogItem::Apples),
        },
        SessionEvent::SetQuantity { qty: Some(2) },
        SessionEvent::AddItem,
        SessionEvent::RemoveItem { index: 5 },
    ]);

    assert_eq!(outcomes.len(), 5);
    assert_eq!(outcomes[0], SessionOutcome::ItemRejected(LedgerError::NoSelection));
    assert!(matches!(outcomes[3], SessionOutcome::ItemAdded(_)));
    assert_eq!(outcomes[4], SessionOutcome::ItemRemoved(None));
    assert_eq!(session.ledger.items().len(), 1);
}

#[test]
fn test_configured_maximum_price_rejects_overflowing_quantity() {
    let config =
        OrderConfig::from_toml_str("[prices]\nApples = \"79228162514264337593543950335\"").unwrap();
    let mut session = OrderSession::with_config(&config).unwrap();

    let outcome = add(&mut session, Some(CatalogItem::Apples), Some(2));
    assert_eq!(outcome, SessionOutcome::ItemRejected(LedgerError::InvalidQuantity));
    assert!(session.ledger.items().is_empty());
    assert_eq!(session.view().total, "$0.00");
}
