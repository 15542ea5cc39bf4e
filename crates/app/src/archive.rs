//! Catalog archive store
//!
//! One JSON file per category under a base directory (`otc.json`,
//! `food.json`), each holding an array of item records. Every operation
//! reads the file fresh, mutates in memory, and writes the whole file back;
//! the archives are small enough that nothing fancier is warranted.

use std::{fs, io, path::PathBuf};

use bodega::{
    catalog::{
        CatalogItem, Category,
        records::{ItemRecord, RecordError},
    },
    pricing::PricingError,
};
use rusty_money::{Money, iso::Currency};
use thiserror::Error;

/// Errors raised by archive operations.
#[derive(Debug, Error)]
pub(crate) enum ArchiveError {
    #[error("failed to read archive file {path}")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to write archive file {path}")]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to decode archive file {path}")]
    Decode {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error(transparent)]
    Record(#[from] RecordError),

    #[error(transparent)]
    Pricing(#[from] PricingError),

    #[error("no item with a SKU starting {0} in any category")]
    NotFound(String),
}

/// Changes to apply to a stored item.
#[derive(Debug, Default)]
pub(crate) struct ItemPatch {
    pub name: Option<String>,
    pub price: Option<Money<'static, Currency>>,
    pub toggle_tax: bool,
}

impl ItemPatch {
    pub(crate) fn is_empty(&self) -> bool {
        self.name.is_none() && self.price.is_none() && !self.toggle_tax
    }
}

/// File-backed catalog store.
#[derive(Debug, Clone)]
pub(crate) struct Archive {
    base_dir: PathBuf,
}

impl Archive {
    pub(crate) fn new(base_dir: impl Into<PathBuf>) -> Self {
        Self {
            base_dir: base_dir.into(),
        }
    }

    pub(crate) fn path(&self, category: Category) -> PathBuf {
        self.base_dir.join(format!("{category}.json"))
    }

    /// Load all items of a category, in their stored order.
    pub(crate) fn load(&self, category: Category) -> Result<Vec<CatalogItem<'static>>, ArchiveError> {
        let path = self.path(category);

        let contents = fs::read_to_string(&path).map_err(|source| ArchiveError::Read {
            path: path.clone(),
            source,
        })?;

        let records: Vec<ItemRecord> =
            serde_json::from_str(&contents).map_err(|source| ArchiveError::Decode { path, source })?;

        records
            .into_iter()
            .map(|record| CatalogItem::try_from(record).map_err(ArchiveError::from))
            .collect()
    }

    /// Write all items of a category back to its archive file.
    pub(crate) fn save(
        &self,
        category: Category,
        items: &[CatalogItem<'_>],
    ) -> Result<(), ArchiveError> {
        let path = self.path(category);
        let records: Vec<ItemRecord> = items.iter().map(ItemRecord::from).collect();

        let mut json = serde_json::to_string_pretty(&records)
            .map_err(|source| ArchiveError::Decode {
                path: path.clone(),
                source,
            })?;
        json.push('\n');

        fs::create_dir_all(&self.base_dir).map_err(|source| ArchiveError::Write {
            path: path.clone(),
            source,
        })?;

        fs::write(&path, json).map_err(|source| ArchiveError::Write { path, source })
    }

    /// Append an item to a category archive.
    pub(crate) fn add(
        &self,
        category: Category,
        item: &CatalogItem<'static>,
    ) -> Result<(), ArchiveError> {
        let mut items = self.load(category)?;

        items.push(item.clone());

        self.save(category, &items)
    }

    /// Find the first item whose SKU starts with the given prefix, searching
    /// every category in archive order.
    pub(crate) fn find(
        &self,
        sku_prefix: &str,
    ) -> Result<(Category, CatalogItem<'static>), ArchiveError> {
        for category in Category::ALL {
            let items = self.load(category)?;

            if let Some(item) = items.iter().find(|item| item.sku().starts_with(sku_prefix)) {
                return Ok((category, item.clone()));
            }
        }

        Err(ArchiveError::NotFound(sku_prefix.to_string()))
    }

    /// Apply a patch to the first item matching the SKU prefix and persist the
    /// containing archive. Returns the category and the updated item.
    pub(crate) fn update(
        &self,
        sku_prefix: &str,
        patch: &ItemPatch,
    ) -> Result<(Category, CatalogItem<'static>), ArchiveError> {
        for category in Category::ALL {
            let mut items = self.load(category)?;

            let Some(index) = items
                .iter()
                .position(|item| item.sku().starts_with(sku_prefix))
            else {
                continue;
            };

            let Some(item) = items.get_mut(index) else {
                continue;
            };

            if let Some(name) = &patch.name {
                item.set_name(name.clone());
            }

            if let Some(price) = patch.price {
                item.set_price(price)?;
            }

            if patch.toggle_tax {
                item.toggle_taxable()?;
            }

            let updated = item.clone();

            self.save(category, &items)?;

            return Ok((category, updated));
        }

        Err(ArchiveError::NotFound(sku_prefix.to_string()))
    }

    /// Remove the first item matching the SKU prefix and persist the
    /// containing archive. Returns the category and the removed item.
    pub(crate) fn remove(
        &self,
        sku_prefix: &str,
    ) -> Result<(Category, CatalogItem<'static>), ArchiveError> {
        for category in Category::ALL {
            let mut items = self.load(category)?;

            let Some(index) = items
                .iter()
                .position(|item| item.sku().starts_with(sku_prefix))
            else {
                continue;
            };

            let removed = items.remove(index);

            self.save(category, &items)?;

            return Ok((category, removed));
        }

        Err(ArchiveError::NotFound(sku_prefix.to_string()))
    }

    /// Rewrite a category archive ordered by full price, highest first, and
    /// return the sorted items. This is the ordering the master list and
    /// barcode refresh have always used.
    pub(crate) fn sort_descending(
        &self,
        category: Category,
    ) -> Result<Vec<CatalogItem<'static>>, ArchiveError> {
        let mut items = self.load(category)?;

        items.sort_by_key(|item| std::cmp::Reverse(item.full_price().to_minor_units()));

        self.save(category, &items)?;

        Ok(items)
    }
}
