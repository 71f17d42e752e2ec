use super::{LedgerError, OrderTotals, DEFAULT_TAX_RATE};
use crate::model::{Catalog, CatalogItem, LineItem, Money};
use rust_decimal::Decimal;
use serde::Serialize;
use tracing::{debug, info, warn};

/// Current state of the item-entry controls.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct EntryState {
    pub selected: Option<CatalogItem>,
    pub quantity: Option<i64>,
}

/// Catalog-priced line items plus the derived subtotal, tax and total.
///
/// The ledger owns:
/// - the catalog and tax rate, fixed at construction
/// - the ordered list of line items
/// - the entry controls, reset after every successful add
/// - at most one pending error, from the most recent rejected add
///
/// Totals are recomputed from the list on every call and never stored.
#[derive(Debug, Clone)]
pub struct OrderLedger {
    catalog: Catalog,
    tax_rate: Decimal,
    items: Vec<LineItem>,
    entry: EntryState,
    pending_error: Option<LedgerError>,
}

impl Default for OrderLedger {
    fn default() -> Self {
        Self::new(Catalog::default(), DEFAULT_TAX_RATE)
    }
}

impl OrderLedger {
    pub fn new(catalog: Catalog, tax_rate: Decimal) -> Self {
        Self {
            catalog,
            tax_rate,
            items: Vec::new(),
            entry: EntryState::default(),
            pending_error: None,
        }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn tax_rate(&self) -> Decimal {
        self.tax_rate
    }

    pub fn items(&self) -> &[LineItem] {
        &self.items
    }

    pub fn entry(&self) -> EntryState {
        self.entry
    }

    pub fn pending_error(&self) -> Option<LedgerError> {
        self.pending_error
    }

    pub fn select_item(&mut self, item: Option<CatalogItem>) {
        self.entry.selected = item;
    }

    pub fn set_quantity(&mut self, qty: Option<i64>) {
        self.entry.quantity = qty;
    }

    /// Prices `qty` units of `selected` and appends the line.
    ///
    /// Selection is checked before quantity. A quantity whose amount, or the resulting
    /// totals, would exceed the decimal range is rejected as `InvalidQuantity`. On success the entry controls and the pending
    /// error are cleared; on failure the error replaces any pending one and the list is
    /// untouched.
    pub fn add_item(
        &mut self,
        selected: Option<CatalogItem>,
        qty: Option<i64>,
    ) -> Result<LineItem, LedgerError> {
        match self.price_entry(selected, qty) {
            Ok(item) => {
                self.items.push(item.clone());
                self.entry = EntryState::default();
                self.pending_error = None;
                info!(
                    item = %item.name,
                    qty = item.qty,
                    amount = %item.amount,
                    size = self.items.len(),
                    "Item added"
                );
                Ok(item)
            }
            Err(e) => {
                debug!(?selected, ?qty, error = %e, "add_item rejected");
                self.pending_error = Some(e);
                Err(e)
            }
        }
    }

    /// [`add_item`](Self::add_item) fed from the entry controls.
    pub fn add_pending_item(&mut self) -> Result<LineItem, LedgerError> {
        let EntryState { selected, quantity } = self.entry;
        self.add_item(selected, quantity)
    }

    /// Removes the line at `index`, keeping the others in order.
    ///
    /// An out-of-range index leaves the list alone and returns `None`.
    pub fn remove_item(&mut self, index: usize) -> Option<LineItem> {
        if index >= self.items.len() {
            warn!(index, size = self.items.len(), "Remove ignored: index out of range");
            return None;
        }
        let removed = self.items.remove(index);
        info!(
            index,
            item = %removed.name,
            size = self.items.len(),
            "Item removed"
        );
        Some(removed)
    }

    pub fn subtotal(&self) -> Money {
        self.items.iter().map(|item| item.amount).sum()
    }

    pub fn tax(&self) -> Money {
        self.subtotal() * self.tax_rate
    }

    pub fn total(&self) -> Money {
        self.subtotal() + self.tax()
    }

    pub fn totals(&self) -> OrderTotals {
        OrderTotals::from_subtotal(self.subtotal(), self.tax_rate)
    }

    fn price_entry(
        &self,
        selected: Option<CatalogItem>,
        qty: Option<i64>,
    ) -> Result<LineItem, LedgerError> {
        let name = selected.ok_or(LedgerError::NoSelection)?;
        let qty = qty
            .filter(|q| *q >= 1)
            .and_then(|q| u32::try_from(q).ok())
            .ok_or(LedgerError::InvalidQuantity)?;
        LineItem::new(name, qty, self.catalog.price(name))
            .filter(|item| self.totals_fit_with(item.amount))
            .ok_or(LedgerError::InvalidQuantity)
    }

    // Totals stay representable after every accepted add, so the unchecked
    // arithmetic in `subtotal`, `tax` and `total` cannot overflow.
    fn totals_fit_with(&self, amount: Money) -> bool {
        self.subtotal()
            .checked_add(amount)
            .and_then(|subtotal| {
                let tax = subtotal.checked_scale(self.tax_rate)?;
                subtotal.checked_add(tax)
            })
            .is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;
    use strum::IntoEnumIterator;

    fn money(num: i64, scale: u32) -> Money {
        Money::from_parts(num, scale)
    }

    #[test]
    fn apples_times_three() {
        let mut ledger = OrderLedger::default();
        let item = ledger.add_item(Some(CatalogItem::Apples), Some(3)).unwrap();

        assert_eq!(item.unit_price, money(123, 2));
        assert_eq!(item.amount, money(369, 2));
        assert_eq!(ledger.subtotal(), money(369, 2));
        assert_eq!(ledger.tax(), money(2583, 4));
        assert_eq!(ledger.total(), money(39483, 4));
    }

    #[test]
    fn amount_is_exact_for_every_item_and_quantity() {
        let catalog = Catalog::default();
        for item in CatalogItem::iter() {
            for qty in [1_i64, 2, 7, 99, 1000] {
                let mut ledger = OrderLedger::default();
                let line = ledger.add_item(Some(item), Some(qty)).unwrap();
                let expected = catalog.price(item).amount() * Decimal::from(qty);
                assert_eq!(line.amount.amount(), expected, "{item} x {qty}");
            }
        }
    }

    #[test]
    fn missing_selection_is_rejected_before_quantity() {
        let mut ledger = OrderLedger::default();
        let err = ledger.add_item(None, None).unwrap_err();

        assert_eq!(err, LedgerError::NoSelection);
        assert!(ledger.items().is_empty());
        assert_eq!(ledger.pending_error(), Some(LedgerError::NoSelection));
        assert_eq!(err.to_string(), "Please select an item from the list.");
    }

    #[test]
    fn non_positive_or_missing_quantity_is_rejected() {
        let mut ledger = OrderLedger::default();
        for qty in [None, Some(0), Some(-1), Some(i64::MIN), Some(i64::from(u32::MAX) + 1)] {
            let err = ledger.add_item(Some(CatalogItem::Pears), qty).unwrap_err();
            assert_eq!(err, LedgerError::InvalidQuantity, "qty {qty:?}");
        }
        assert!(ledger.items().is_empty());
    }

    #[test]
    fn quantity_that_overflows_the_amount_is_rejected() {
        let mut overrides = BTreeMap::new();
        overrides.insert(CatalogItem::Apples, Money::new(Decimal::MAX));
        let mut ledger = OrderLedger::new(Catalog::with_overrides(&overrides), DEFAULT_TAX_RATE);

        let err = ledger.add_item(Some(CatalogItem::Apples), Some(2)).unwrap_err();
        assert_eq!(err, LedgerError::InvalidQuantity);
        assert!(ledger.items().is_empty());
        assert_eq!(ledger.subtotal(), Money::ZERO);
    }

    #[test]
    fn add_that_would_overflow_the_total_is_rejected() {
        let mut overrides = BTreeMap::new();
        let huge = Money::new(Decimal::from_i128_with_scale(10_i128.pow(27), 0));
        overrides.insert(CatalogItem::Pears, huge);
        let mut ledger = OrderLedger::new(Catalog::with_overrides(&overrides), DEFAULT_TAX_RATE);

        ledger.add_item(Some(CatalogItem::Pears), Some(1)).unwrap();
        // 74e27 fits on its own, but the total with 7% tax does not
        let err = ledger.add_item(Some(CatalogItem::Pears), Some(74)).unwrap_err();
        assert_eq!(err, LedgerError::InvalidQuantity);
        assert_eq!(ledger.items().len(), 1);

        ledger.add_item(Some(CatalogItem::Pears), Some(70)).unwrap();
        assert_eq!(ledger.total(), ledger.subtotal() + ledger.tax());
    }

    #[test]
    fn latest_failure_replaces_pending_error_and_success_clears_it() {
        let mut ledger = OrderLedger::default();
        ledger.add_item(None, Some(1)).unwrap_err();
        ledger.add_item(Some(CatalogItem::Plums), Some(0)).unwrap_err();
        assert_eq!(ledger.pending_error(), Some(LedgerError::InvalidQuantity));

        ledger.add_item(Some(CatalogItem::Plums), Some(1)).unwrap();
        assert_eq!(ledger.pending_error(), None);
    }

    #[test]
    fn successful_add_resets_entry_controls() {
        let mut ledger = OrderLedger::default();
        ledger.select_item(Some(CatalogItem::Peaches));
        ledger.set_quantity(Some(2));
        let item = ledger.add_pending_item().unwrap();

        assert_eq!(item.name, CatalogItem::Peaches);
        assert_eq!(item.amount, money(278, 2));
        assert_eq!(ledger.entry(), EntryState::default());
    }

    #[test]
    fn failed_add_keeps_entry_controls() {
        let mut ledger = OrderLedger::default();
        ledger.select_item(Some(CatalogItem::Peaches));
        ledger.set_quantity(Some(0));
        ledger.add_pending_item().unwrap_err();

        assert_eq!(ledger.entry().selected, Some(CatalogItem::Peaches));
        assert_eq!(ledger.entry().quantity, Some(0));
    }

    #[test]
    fn remove_keeps_relative_order() {
        let mut ledger = OrderLedger::default();
        ledger.add_item(Some(CatalogItem::Apples), Some(1)).unwrap();
        ledger.add_item(Some(CatalogItem::Pears), Some(2)).unwrap();
        ledger.add_item(Some(CatalogItem::Plums), Some(3)).unwrap();

        let removed = ledger.remove_item(1).unwrap();
        assert_eq!(removed.name, CatalogItem::Pears);

        let names: Vec<_> = ledger.items().iter().map(|i| i.name).collect();
        assert_eq!(names, vec![CatalogItem::Apples, CatalogItem::Plums]);
    }

    #[test]
    fn remove_out_of_range_is_a_no_op() {
        let mut ledger = OrderLedger::default();
        ledger.add_item(Some(CatalogItem::Apples), Some(1)).unwrap();
        let before = ledger.items().to_vec();

        assert_eq!(ledger.remove_item(1), None);
        assert_eq!(ledger.remove_item(usize::MAX), None);
        assert_eq!(ledger.items(), before.as_slice());
    }

    #[test]
    fn removing_decreases_subtotal_by_the_line_amount() {
        let mut ledger = OrderLedger::default();
        ledger.add_item(Some(CatalogItem::Apples), Some(4)).unwrap();
        ledger.add_item(Some(CatalogItem::Peaches), Some(5)).unwrap();

        let before = ledger.subtotal();
        let removed = ledger.remove_item(0).unwrap();
        assert_eq!(ledger.subtotal() + removed.amount, before);
        assert!(ledger.subtotal() < before);
    }

    #[test]
    fn totals_are_consistent_and_stable() {
        let mut ledger = OrderLedger::default();
        assert_eq!(ledger.subtotal(), Money::ZERO);

        ledger.add_item(Some(CatalogItem::Pears), Some(3)).unwrap();
        ledger.add_item(Some(CatalogItem::Plums), Some(11)).unwrap();

        let subtotal = ledger.subtotal();
        assert_eq!(ledger.tax(), subtotal * Decimal::new(7, 2));
        assert_eq!(ledger.total(), subtotal + ledger.tax());

        let first = ledger.totals();
        let second = ledger.totals();
        assert_eq!(first, second);
        assert_eq!(first.total, ledger.total());
    }

    #[test]
    fn custom_tax_rate_is_applied() {
        let mut ledger = OrderLedger::new(Catalog::default(), Decimal::new(10, 2));
        ledger.add_item(Some(CatalogItem::Apples), Some(10)).unwrap();
        assert_eq!(ledger.tax(), money(123, 2));
        assert_eq!(ledger.total().to_string(), "$13.53");
    }
}
