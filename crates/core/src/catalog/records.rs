//! Archive Records
//!
//! The on-disk JSON shape of a catalog item. Monetary fields are stored as
//! 2-decimal strings so archive files never depend on float formatting.

use rust_decimal::{Decimal, prelude::ToPrimitive};
use rusty_money::{Money, iso::USD};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::catalog::CatalogItem;

/// Errors converting an archive record into a catalog item.
#[derive(Debug, Error)]
pub enum RecordError {
    /// A monetary field could not be parsed as a decimal amount.
    #[error("invalid monetary amount: {0:?}")]
    InvalidAmount(String),

    /// A monetary field was negative.
    #[error("negative monetary amount: {0:?}")]
    NegativeAmount(String),
}

/// One catalog item as stored in a category archive file.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemRecord {
    /// Item display name.
    pub name: String,

    /// 11 or 12 digit SKU.
    pub sku_num: String,

    /// Shelf price as a 2-decimal string (e.g., "1.99").
    pub price: String,

    /// Whether sales tax applies.
    pub taxable: bool,

    /// Tax-inclusive price as a 2-decimal string.
    pub full_price: String,
}

/// Parse a decimal amount string (e.g., "1.99" or "1,234.50") into minor units.
///
/// # Errors
///
/// Returns an error if the string is not a decimal amount, is negative, or
/// does not fit in minor units.
pub fn parse_amount(value: &str) -> Result<i64, RecordError> {
    let amount = value
        .trim()
        .replace(',', "")
        .parse::<Decimal>()
        .map_err(|_err| RecordError::InvalidAmount(value.to_string()))?;

    if amount.is_sign_negative() {
        return Err(RecordError::NegativeAmount(value.to_string()));
    }

    amount
        .checked_mul(Decimal::new(100, 0))
        .and_then(|minor| minor.round_dp(0).to_i64())
        .ok_or_else(|| RecordError::InvalidAmount(value.to_string()))
}

/// Format minor units as a 2-decimal amount string.
#[must_use]
pub fn format_amount(minor: i64) -> String {
    Decimal::new(minor, 2).to_string()
}

impl TryFrom<ItemRecord> for CatalogItem<'static> {
    type Error = RecordError;

    fn try_from(record: ItemRecord) -> Result<Self, Self::Error> {
        let price = Money::from_minor(parse_amount(&record.price)?, USD);
        let full_price = Money::from_minor(parse_amount(&record.full_price)?, USD);

        Ok(CatalogItem::from_parts(
            record.name,
            record.sku_num,
            price,
            record.taxable,
            full_price,
        ))
    }
}

impl From<&CatalogItem<'_>> for ItemRecord {
    fn from(item: &CatalogItem<'_>) -> Self {
        ItemRecord {
            name: item.name().to_string(),
            sku_num: item.sku().to_string(),
            price: format_amount(item.price().to_minor_units()),
            taxable: item.taxable(),
            full_price: format_amount(item.full_price().to_minor_units()),
        }
    }
}
