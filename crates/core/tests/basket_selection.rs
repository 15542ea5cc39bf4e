//! End-to-end behaviour of the basket selector.

use bodega::{
    catalog::CatalogItem,
    selector::{SelectorConfig, SelectorError, build_basket, select_basket},
};
use rand::{SeedableRng, rngs::StdRng};
use rusty_money::{Money, iso::USD};
use testresult::TestResult;

fn corner_store_catalog() -> Vec<CatalogItem<'static>> {
    [
        ("Cough Drops Honey", "31254742735", 219, false),
        ("Hand Sanitizer 8oz", "81002700113", 349, true),
        ("Chocolate Bar", "034000002405", 159, true),
        ("Whole Milk Quart", "041900045203", 189, false),
        ("Sparkling Water 1L", "012000161155", 100, true),
        ("Allergy Relief 24ct", "41100810034", 1149, false),
        ("White Bread Loaf", "072250007645", 249, false),
    ]
    .into_iter()
    .map(|(name, sku, price_minor, taxable)| {
        CatalogItem::new(name, sku, Money::from_minor(price_minor, USD), taxable)
            .expect("item should build")
    })
    .collect()
}

#[test]
fn selected_items_never_exceed_the_target() -> TestResult {
    let catalog = corner_store_catalog();

    for seed in 0..50 {
        let mut rng = StdRng::seed_from_u64(seed);
        let target = Money::from_minor(2500, USD);

        let basket = select_basket(&mut rng, &catalog, target, &SelectorConfig::default())?;

        let total = basket.total().to_minor_units();
        let remainder = basket.remainder().to_minor_units();

        assert!(total <= 2500, "seed {seed}: total {total} exceeded target");
        assert!(remainder >= 0, "seed {seed}: negative remainder {remainder}");
        assert_eq!(total + remainder, 2500, "seed {seed}: total and remainder must partition the target");
    }

    Ok(())
}

#[test]
fn single_cheap_item_terminates_below_stop_threshold() {
    let catalog = vec![
        CatalogItem::new("Half Dollar Gum", "00000000050", Money::from_minor(50, USD), false)
            .expect("item should build"),
    ];

    let mut rng = StdRng::seed_from_u64(123);

    let basket = build_basket(
        &mut rng,
        &catalog,
        Money::from_minor(500, USD),
        &SelectorConfig::default(),
    );

    // Nine fifty-cent draws take the budget from 5.00 down to 0.50, at which
    // point the build loop is done.
    assert_eq!(basket.len(), 9);
    assert_eq!(basket.remainder().to_minor_units(), 50);
    assert!(basket.remainder().to_minor_units() <= SelectorConfig::DEFAULT_MINIMUM_THRESHOLD);
}

#[test]
fn empty_catalog_fails_fast() {
    let mut rng = StdRng::seed_from_u64(1);

    let result = select_basket(
        &mut rng,
        &[],
        Money::from_minor(1000, USD),
        &SelectorConfig::default(),
    );

    assert!(matches!(result, Err(SelectorError::EmptyCatalog)));
}

#[test]
fn target_below_cheapest_item_yields_empty_basket() -> TestResult {
    let catalog = vec![
        CatalogItem::new("Allergy Relief 24ct", "41100810034", Money::from_minor(500, USD), false)?,
    ];

    let mut rng = StdRng::seed_from_u64(9);

    let basket = select_basket(
        &mut rng,
        &catalog,
        Money::from_minor(200, USD),
        &SelectorConfig::default(),
    )?;

    assert!(basket.is_empty());
    assert_eq!(basket.remainder().to_minor_units(), 200);

    Ok(())
}

#[test]
fn retries_never_worsen_the_kept_remainder() -> TestResult {
    let catalog = corner_store_catalog();

    for seed in 0..50 {
        // `select_basket` consumes the generator exactly as a lone
        // `build_basket` does for its first attempt, so re-seeding lets us
        // observe that attempt directly.
        let mut first_rng = StdRng::seed_from_u64(seed);
        let mut sorted = catalog.clone();
        sorted.sort_by_key(|item| item.full_price().to_minor_units());

        let first_attempt = build_basket(
            &mut first_rng,
            &sorted,
            Money::from_minor(3000, USD),
            &SelectorConfig::default(),
        );

        let mut rng = StdRng::seed_from_u64(seed);
        let best = select_basket(
            &mut rng,
            &catalog,
            Money::from_minor(3000, USD),
            &SelectorConfig::default(),
        )?;

        assert!(
            best.remainder().to_minor_units() <= first_attempt.remainder().to_minor_units(),
            "seed {seed}: retries worsened the remainder"
        );
    }

    Ok(())
}

#[test]
fn seeded_selection_is_reproducible() -> TestResult {
    let catalog = corner_store_catalog();
    let config = SelectorConfig::default();

    let mut first = StdRng::seed_from_u64(77);
    let mut second = StdRng::seed_from_u64(77);

    let a = select_basket(&mut first, &catalog, Money::from_minor(2000, USD), &config)?;
    let b = select_basket(&mut second, &catalog, Money::from_minor(2000, USD), &config)?;

    let a_skus: Vec<&str> = a.iter().map(CatalogItem::sku).collect();
    let b_skus: Vec<&str> = b.iter().map(CatalogItem::sku).collect();

    assert_eq!(a_skus, b_skus);
    assert_eq!(a.remainder(), b.remainder());

    Ok(())
}

#[test]
fn thresholds_are_overridable() -> TestResult {
    let catalog = corner_store_catalog();

    // With an enormous stop threshold the build loop never runs.
    let config = SelectorConfig {
        minimum_threshold: 10_000,
        ..SelectorConfig::default()
    };

    let mut rng = StdRng::seed_from_u64(5);
    let basket = select_basket(&mut rng, &catalog, Money::from_minor(2500, USD), &config)?;

    assert!(basket.is_empty());
    assert_eq!(basket.remainder().to_minor_units(), 2500);

    Ok(())
}
