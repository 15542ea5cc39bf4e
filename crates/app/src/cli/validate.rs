//! CLI input validation.

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub(crate) enum InvalidInput {
    #[error("item names must be 1 to 34 characters, got {0}")]
    NameLength(usize),

    #[error("SKUs must be 11 or 12 digits")]
    Sku,

    #[error("SKU searches need the first 10 to 12 digits")]
    SkuPrefix,
}

pub(crate) fn item_name(name: &str) -> Result<(), InvalidInput> {
    let length = name.chars().count();

    if (1..=34).contains(&length) {
        Ok(())
    } else {
        Err(InvalidInput::NameLength(length))
    }
}

pub(crate) fn sku(sku: &str) -> Result<(), InvalidInput> {
    if matches!(sku.len(), 11 | 12) && sku.chars().all(|c| c.is_ascii_digit()) {
        Ok(())
    } else {
        Err(InvalidInput::Sku)
    }
}

pub(crate) fn sku_prefix(prefix: &str) -> Result<(), InvalidInput> {
    if (10..=12).contains(&prefix.len()) && prefix.chars().all(|c| c.is_ascii_digit()) {
        Ok(())
    } else {
        Err(InvalidInput::SkuPrefix)
    }
}
