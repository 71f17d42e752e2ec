//! Demo binary: replays a scripted order session and prints the final view as JSON.
//!
//! Set `ORDER_FORM_CONFIG` to a TOML file to override the tax rate or prices, and
//! `RUST_LOG=debug` to see every dispatched event.

use form_framework::tracing::setup_tracing;
use order_form::config::OrderConfig;
use order_form::lifecycle::{OrderSession, SessionEvent, SessionOutcome};
use order_form::model::{AddressField, CatalogItem};
use tracing::{error, info, warn};

fn main() -> Result<(), String> {
    setup_tracing();

    info!("Starting order form demo");

    let config = OrderConfig::from_env().map_err(|e| e.to_string())?;
    let mut session = OrderSession::with_config(&config).map_err(|e| e.to_string())?;

    // First submit fails validation, the corrected one confirms
    info_span_scope("address_entry", || {
        session.apply(SessionEvent::UpdateField {
            field: AddressField::FirstName,
            value: "John1".to_string(),
        });
        report(session.apply(SessionEvent::SubmitAddress));

        for (field, value) in [
            (AddressField::FirstName, "John"),
            (AddressField::LastName, "O'Neil"),
            (AddressField::Street, "123 Main St"),
        ] {
            session.apply(SessionEvent::UpdateField {
                field,
                value: value.to_string(),
            });
        }
        report(session.apply(SessionEvent::SubmitAddress));
    });

    info_span_scope("item_entry", || {
        let outcomes = session.replay([
            SessionEvent::AddItem,
            SessionEvent::SelectItem {
                item: Some(CatalogItem::Apples),
            },
            SessionEvent::SetQuantity { qty: Some(3) },
            SessionEvent::AddItem,
            SessionEvent::SelectItem {
                item: Some(CatalogItem::Pears),
            },
            SessionEvent::SetQuantity { qty: Some(2) },
            SessionEvent::AddItem,
            SessionEvent::RemoveItem { index: 1 },
        ]);
        outcomes.into_iter().for_each(report);
    });

    let view = session.close();
    let json = serde_json::to_string_pretty(&view).map_err(|e| e.to_string())?;
    println!("{json}");

    info!("Demo completed successfully");
    Ok(())
}

fn info_span_scope(name: &'static str, f: impl FnOnce()) {
    let span = tracing::info_span!("phase", name);
    let _guard = span.enter();
    f();
}

fn report(outcome: SessionOutcome) {
    match outcome {
        SessionOutcome::AddressSubmitted(result) if result.ok => info!("Address confirmed"),
        SessionOutcome::AddressSubmitted(result) => {
            warn!(errors = result.errors.len(), "Address rejected")
        }
        SessionOutcome::ItemAdded(item) => info!(item = %item.name, amount = %item.amount, "Added"),
        SessionOutcome::ItemRejected(e) => error!(error = %e, "Add rejected"),
        SessionOutcome::ItemRemoved(Some(item)) => info!(item = %item.name, "Removed"),
        SessionOutcome::ItemRemoved(None) => warn!("Nothing removed"),
        SessionOutcome::Updated => {}
    }
}
