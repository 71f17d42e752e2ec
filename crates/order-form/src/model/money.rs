//! Exact decimal money type.
//!
//! Every monetary value in the order form (unit prices, line amounts, subtotal, tax and
//! total) is a [`Money`]. The wrapped [`Decimal`] keeps arithmetic exact: `3 × 1.23` is
//! `3.69`, and 7% of that is `0.2583`, with no binary floating-point drift.
//!
//! Rounding happens only when formatting for display.

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, Mul};

/// A monetary amount in the single supported currency (USD).
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Money(Decimal);

impl Money {
    pub const ZERO: Money = Money(Decimal::ZERO);

    pub const fn new(amount: Decimal) -> Self {
        Money(amount)
    }

    /// Builds an amount from an integer number of minor units at `scale` decimal places,
    /// e.g. `Money::from_parts(123, 2)` is `1.23`.
    pub fn from_parts(num: i64, scale: u32) -> Self {
        Money(Decimal::new(num, scale))
    }

    pub const fn amount(self) -> Decimal {
        self.0
    }

    pub fn is_negative(self) -> bool {
        self.0.is_sign_negative() && !self.0.is_zero()
    }

    /// Unit price times a whole quantity; `None` when the product does not fit.
    pub fn checked_times(self, qty: u32) -> Option<Money> {
        self.0.checked_mul(Decimal::from(qty)).map(Money)
    }

    /// Scales by a rate (e.g. a tax rate); `None` on overflow.
    pub fn checked_scale(self, rate: Decimal) -> Option<Money> {
        self.0.checked_mul(rate).map(Money)
    }

    pub fn checked_add(self, rhs: Money) -> Option<Money> {
        self.0.checked_add(rhs.0).map(Money)
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rounded = Money(
            self.0
                .round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero),
        );
        let sign = if rounded.is_negative() { "-" } else { "" };
        write!(f, "{sign}${:.2}", rounded.0.abs())
    }
}

impl Add for Money {
    type Output = Money;

    fn add(self, rhs: Money) -> Money {
        Money(self.0 + rhs.0)
    }
}

/// Scales an amount by a rate (e.g. a tax rate).
impl Mul<Decimal> for Money {
    type Output = Money;

    fn mul(self, rate: Decimal) -> Money {
        Money(self.0 * rate)
    }
}

impl Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Money {
        iter.fold(Money::ZERO, Add::add)
    }
}

impl<'a> Sum<&'a Money> for Money {
    fn sum<I: Iterator<Item = &'a Money>>(iter: I) -> Money {
        iter.copied().sum()
    }
}
