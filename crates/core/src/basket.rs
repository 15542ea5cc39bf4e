//! Basket
//!
//! The outcome of one selection attempt: the chosen items plus whatever part
//! of the target the selector could not close.

use rusty_money::{Money, iso::Currency};

use crate::catalog::CatalogItem;

/// The items produced by one selection attempt.
///
/// An empty basket is a valid outcome (the target may sit below the cheapest
/// item), as is a remainder above the selector's stop threshold (the catalog
/// may have nothing cheap enough to close the gap).
#[derive(Debug, Clone)]
pub struct Basket<'a> {
    items: Vec<CatalogItem<'a>>,
    remainder: Money<'a, Currency>,
}

impl<'a> Basket<'a> {
    /// Create a basket from selected items and the unspent part of the target.
    #[must_use]
    pub fn new(items: Vec<CatalogItem<'a>>, remainder: Money<'a, Currency>) -> Self {
        Self { items, remainder }
    }

    /// The selected items, in the order they were drawn.
    #[must_use]
    pub fn items(&self) -> &[CatalogItem<'a>] {
        &self.items
    }

    /// The unspent part of the target total.
    #[must_use]
    pub fn remainder(&self) -> Money<'a, Currency> {
        self.remainder
    }

    /// Sum of the tax-inclusive prices of all selected items.
    #[must_use]
    pub fn total(&self) -> Money<'a, Currency> {
        let minor = self
            .items
            .iter()
            .map(|item| item.full_price().to_minor_units())
            .sum();

        Money::from_minor(minor, self.remainder.currency())
    }

    /// Iterate over the selected items.
    pub fn iter(&self) -> impl Iterator<Item = &CatalogItem<'a>> {
        self.items.iter()
    }

    /// Number of selected items.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Check whether the attempt selected anything at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
