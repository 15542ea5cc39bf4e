//! Catalog
//!
//! The catalog item model: a named, priced product with a SKU, a taxability
//! flag, and a precomputed tax-inclusive price.

use std::{fmt, str::FromStr};

use rusty_money::{Money, iso::Currency};
use thiserror::Error;

use crate::pricing::{self, PricingError};

pub mod records;

/// Archive category an item belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    /// Over-the-counter products.
    Otc,

    /// Food products.
    Food,
}

impl Category {
    /// Every known category, in archive order.
    pub const ALL: [Category; 2] = [Category::Otc, Category::Food];

    /// The category's archive name, as used for file names and report titles.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Category::Otc => "otc",
            Category::Food => "food",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when parsing an unrecognised category name.
#[derive(Debug, Error)]
#[error("unknown category {0:?}, expected \"otc\" or \"food\"")]
pub struct UnknownCategory(String);

impl FromStr for Category {
    type Err = UnknownCategory;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "otc" => Ok(Category::Otc),
            "food" => Ok(Category::Food),
            other => Err(UnknownCategory(other.to_string())),
        }
    }
}

/// A priced catalog entry.
///
/// The tax-inclusive [`full_price`](CatalogItem::full_price) is computed once
/// at construction and kept alongside the shelf price, so selection and
/// rendering never repeat tax arithmetic.
#[derive(Debug, Clone, PartialEq)]
pub struct CatalogItem<'a> {
    name: String,
    sku: String,
    price: Money<'a, Currency>,
    taxable: bool,
    full_price: Money<'a, Currency>,
}

impl<'a> CatalogItem<'a> {
    /// Create a new catalog item, computing its tax-inclusive price.
    ///
    /// # Errors
    ///
    /// Returns a [`PricingError`] if the tax calculation overflows.
    pub fn new(
        name: impl Into<String>,
        sku: impl Into<String>,
        price: Money<'a, Currency>,
        taxable: bool,
    ) -> Result<Self, PricingError> {
        let full_price = pricing::full_price(&price, taxable)?;

        Ok(Self {
            name: name.into(),
            sku: sku.into(),
            price,
            taxable,
            full_price,
        })
    }

    /// Reassemble an item from stored values, trusting the stored full price.
    pub(crate) fn from_parts(
        name: String,
        sku: String,
        price: Money<'a, Currency>,
        taxable: bool,
        full_price: Money<'a, Currency>,
    ) -> Self {
        Self {
            name,
            sku,
            price,
            taxable,
            full_price,
        }
    }

    /// Returns the item's display name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the item's SKU.
    pub fn sku(&self) -> &str {
        &self.sku
    }

    /// Returns the shelf price, before tax.
    pub fn price(&self) -> &Money<'a, Currency> {
        &self.price
    }

    /// Returns whether sales tax applies to this item.
    pub fn taxable(&self) -> bool {
        self.taxable
    }

    /// Returns the tax-inclusive price.
    pub fn full_price(&self) -> &Money<'a, Currency> {
        &self.full_price
    }

    /// Rename the item.
    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    /// Reprice the item, recomputing the tax-inclusive price.
    ///
    /// # Errors
    ///
    /// Returns a [`PricingError`] if the tax calculation overflows.
    pub fn set_price(&mut self, price: Money<'a, Currency>) -> Result<(), PricingError> {
        self.full_price = pricing::full_price(&price, self.taxable)?;
        self.price = price;

        Ok(())
    }

    /// Flip the item's taxability, recomputing the tax-inclusive price.
    ///
    /// # Errors
    ///
    /// Returns a [`PricingError`] if the tax calculation overflows.
    pub fn toggle_taxable(&mut self) -> Result<(), PricingError> {
        self.taxable = !self.taxable;
        self.full_price = pricing::full_price(&self.price, self.taxable)?;

        Ok(())
    }
}
