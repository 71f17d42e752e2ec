use crate::model::Money;
use rust_decimal::Decimal;
use serde::Serialize;

/// Sales tax applied to the subtotal: 7%.
pub const DEFAULT_TAX_RATE: Decimal = Decimal::from_parts(7, 0, 0, false, 2);

/// Snapshot of the three derived amounts, for display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct OrderTotals {
    pub subtotal: Money,
    pub tax: Money,
    pub total: Money,
}

impl OrderTotals {
    /// Derives tax and total from a subtotal.
    pub fn from_subtotal(subtotal: Money, tax_rate: Decimal) -> Self {
        let tax = subtotal * tax_rate;
        Self {
            subtotal,
            tax,
            total: subtotal + tax,
        }
    }
}
