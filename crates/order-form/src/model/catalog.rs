//! The fixed set of purchasable items and their unit prices.
//!
//! [`CatalogItem`] is a closed enumeration: the selection control can only ever offer these
//! items, in declaration order. [`Catalog`] pairs every item with a unit price; it is built
//! once when a session starts and never changes afterwards.
use super::Money;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use strum::{AsRefStr, Display, EnumIter, EnumString, IntoEnumIterator};

/// An item the user can add to the order.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    EnumIter,
    AsRefStr,
)]
pub enum CatalogItem {
    Apples,
    Peaches,
    Pears,
    Plums,
}

impl CatalogItem {
    /// Unit price of the item in the default catalog.
    pub fn default_price(self) -> Money {
        match self {
            CatalogItem::Apples => Money::from_parts(123, 2),
            CatalogItem::Peaches => Money::from_parts(139, 2),
            CatalogItem::Pears => Money::from_parts(149, 2),
            CatalogItem::Plums => Money::from_parts(119, 2),
        }
    }
}

/// Immutable item → unit price lookup table. Every [`CatalogItem`] has a price.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Catalog {
    prices: BTreeMap<CatalogItem, Money>,
}

impl Catalog {
    /// Builds a catalog from the default prices with `overrides` applied on top.
    ///
    /// Callers validate the override prices (see [`OrderConfig`](crate::config::OrderConfig)).
    pub fn with_overrides(overrides: &BTreeMap<CatalogItem, Money>) -> Self {
        let prices = CatalogItem::iter()
            .map(|item| {
                let price = overrides
                    .get(&item)
                    .copied()
                    .unwrap_or_else(|| item.default_price());
                (item, price)
            })
            .collect();
        Self { prices }
    }

    pub fn price(&self, item: CatalogItem) -> Money {
        self.prices
            .get(&item)
            .copied()
            .unwrap_or_else(|| item.default_price())
    }

    /// Items in the order they are offered for selection.
    pub fn items(&self) -> impl Iterator<Item = CatalogItem> + '_ {
        self.prices.keys().copied()
    }

    /// `(item, unit price)` pairs in selection order.
    pub fn entries(&self) -> impl Iterator<Item = (CatalogItem, Money)> + '_ {
        self.prices.iter().map(|(item, price)| (*item, *price))
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::with_overrides(&BTreeMap::new())
    }
}
