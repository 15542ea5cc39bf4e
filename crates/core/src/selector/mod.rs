//! Basket Selector
//!
//! Weighted random selection of catalog items under a budget. A single pass
//! draws one affordable item with probability proportional to its
//! tax-inclusive price; the build loop repeats passes until the remaining
//! budget drops below a stop threshold; the outer wrapper keeps the best of
//! several independent attempts.
//!
//! The random source is a caller-supplied [`rand::Rng`] so selections are
//! reproducible under a seeded generator.

use rand::Rng;
use rusty_money::{Money, iso::Currency};
use thiserror::Error;

use crate::{basket::Basket, catalog::CatalogItem};

/// Tunables for basket selection.
///
/// Monetary fields are minor units (cents). The defaults are carried over
/// from the behaviour the store settled on in production use; none of them
/// encode a deeper rationale.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SelectorConfig {
    /// Stop building once the remaining budget is at or below this amount.
    pub minimum_threshold: i64,

    /// Retry only while the best remainder exceeds this amount.
    pub retry_threshold: i64,

    /// Stop retrying early once the best remainder drops below this amount.
    pub good_enough: i64,

    /// Number of additional attempts after the first.
    pub retries: u32,
}

impl SelectorConfig {
    /// Default stop threshold for the build loop (98 cents).
    pub const DEFAULT_MINIMUM_THRESHOLD: i64 = 98;

    /// Default retry threshold (15 cents).
    pub const DEFAULT_RETRY_THRESHOLD: i64 = 15;

    /// Default "good enough" remainder (8 cents).
    pub const DEFAULT_GOOD_ENOUGH: i64 = 8;

    /// Default number of additional attempts.
    pub const DEFAULT_RETRIES: u32 = 4;
}

impl Default for SelectorConfig {
    fn default() -> Self {
        Self {
            minimum_threshold: Self::DEFAULT_MINIMUM_THRESHOLD,
            retry_threshold: Self::DEFAULT_RETRY_THRESHOLD,
            good_enough: Self::DEFAULT_GOOD_ENOUGH,
            retries: Self::DEFAULT_RETRIES,
        }
    }
}

/// Signal raised by a sampling pass when no catalog item fits the remaining
/// budget. The build loop recovers from it by stopping early; it never
/// reaches callers of [`select_basket`].
#[derive(Debug, Error, PartialEq, Eq)]
#[error("no catalog item fits the remaining budget")]
pub struct NoAffordableItem;

/// Errors surfaced by [`select_basket`].
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SelectorError {
    /// The catalog handed to the selector had no items at all.
    #[error("catalog is empty, nothing to select from")]
    EmptyCatalog,
}

/// Draw one item from the eligible prefix of a sorted catalog, weighted by
/// tax-inclusive price.
///
/// `items` must be sorted ascending by full price; the eligible set is then
/// the contiguous prefix of items strictly cheaper than `budget` (minor
/// units). Zero-priced items are never eligible, which keeps the build loop
/// finite even for degenerate catalogs. An item's selection probability is
/// its full price divided by the eligible total.
///
/// # Errors
///
/// Returns [`NoAffordableItem`] when the eligible set is empty.
pub fn sample_once<'a, 'b, R>(
    rng: &mut R,
    items: &'b [CatalogItem<'a>],
    budget: i64,
) -> Result<&'b CatalogItem<'a>, NoAffordableItem>
where
    R: Rng + ?Sized,
{
    debug_assert!(
        is_sorted_by_full_price(items),
        "items must be sorted ascending by full price"
    );

    let start = items.partition_point(|item| item.full_price().to_minor_units() <= 0);
    let end = items.partition_point(|item| item.full_price().to_minor_units() < budget);
    let eligible = items.get(start..end).unwrap_or_default();

    if eligible.is_empty() {
        return Err(NoAffordableItem);
    }

    let sum: i64 = eligible
        .iter()
        .map(|item| item.full_price().to_minor_units())
        .sum();

    // Every eligible item has a positive full price, so `sum > 0` and the
    // walk below always lands on an item before the prefix runs out.
    let mut roll = rng.gen_range(0..sum);

    for item in eligible {
        let full_price = item.full_price().to_minor_units();

        if roll < full_price {
            return Ok(item);
        }

        roll -= full_price;
    }

    Err(NoAffordableItem)
}

/// Build one basket by repeatedly sampling affordable items until the
/// remaining budget falls to `config.minimum_threshold` or below, or until
/// nothing affordable is left.
///
/// `items` must be sorted ascending by full price. A remainder above the
/// threshold is a valid outcome, not an error: it means the catalog had no
/// item cheap enough to close the gap.
pub fn build_basket<'a, R>(
    rng: &mut R,
    items: &[CatalogItem<'a>],
    target: Money<'a, Currency>,
    config: &SelectorConfig,
) -> Basket<'a>
where
    R: Rng + ?Sized,
{
    let currency = target.currency();
    let mut remaining = target.to_minor_units();
    let mut selected = Vec::new();

    while remaining > config.minimum_threshold {
        match sample_once(rng, items, remaining) {
            Ok(item) => {
                remaining -= item.full_price().to_minor_units();
                selected.push(item.clone());
            }
            Err(NoAffordableItem) => break,
        }
    }

    Basket::new(selected, Money::from_minor(remaining, currency))
}

/// Select a basket of catalog items whose tax-inclusive prices sum close to
/// `target` without exceeding it.
///
/// Runs [`build_basket`] once and then up to `config.retries` more times
/// while the best remainder exceeds `config.retry_threshold`, stopping early
/// once it drops below `config.good_enough`. Attempts reduce through
/// [`better_of`], so the kept remainder never increases. This is a local
/// search heuristic: it improves across attempts but does not guarantee the
/// minimum achievable remainder.
///
/// # Errors
///
/// Returns [`SelectorError::EmptyCatalog`] when `catalog` has no items.
pub fn select_basket<'a, R>(
    rng: &mut R,
    catalog: &[CatalogItem<'a>],
    target: Money<'a, Currency>,
    config: &SelectorConfig,
) -> Result<Basket<'a>, SelectorError>
where
    R: Rng + ?Sized,
{
    if catalog.is_empty() {
        return Err(SelectorError::EmptyCatalog);
    }

    let mut sorted = catalog.to_vec();
    sorted.sort_by_key(|item| item.full_price().to_minor_units());

    let mut best = build_basket(rng, &sorted, target, config);

    for _ in 0..config.retries {
        let remainder = best.remainder().to_minor_units();

        if remainder < config.good_enough || remainder <= config.retry_threshold {
            break;
        }

        let attempt = build_basket(rng, &sorted, target, config);

        best = better_of(best, attempt);
    }

    Ok(best)
}

/// Keep the attempt with the strictly smaller remainder, preferring the
/// incumbent on ties.
fn better_of<'a>(best: Basket<'a>, attempt: Basket<'a>) -> Basket<'a> {
    if attempt.remainder().to_minor_units() < best.remainder().to_minor_units() {
        attempt
    } else {
        best
    }
}

fn is_sorted_by_full_price(items: &[CatalogItem<'_>]) -> bool {
    items
        .iter()
        .zip(items.iter().skip(1))
        .all(|(a, b)| a.full_price().to_minor_units() <= b.full_price().to_minor_units())
}
