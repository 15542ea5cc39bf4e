use std::{fs, io, path::PathBuf};

use anyhow::Context;
use bodega::{
    catalog::{Category, records},
    selector::{SelectorConfig, select_basket},
};
use clap::Args;
use rand::{SeedableRng, rngs::StdRng};
use rusty_money::{Money, iso::USD};

use crate::{archive::Archive, report};

#[derive(Debug, Args)]
pub(crate) struct RandomizeArgs {
    /// Archive category to draw from
    #[arg(long)]
    category: Category,

    /// Transaction total to approximate, e.g. "25.00"
    #[arg(long)]
    total: String,

    /// Output path for the HTML transaction report
    #[arg(long, default_value = "selectedItems.html")]
    out: PathBuf,

    /// Seed the random source for a reproducible selection
    #[arg(long)]
    seed: Option<u64>,
}

pub(crate) fn run(args: RandomizeArgs, archive: &Archive) -> anyhow::Result<()> {
    let catalog = archive.load(args.category)?;

    let target_minor = records::parse_amount(&args.total)?;
    anyhow::ensure!(target_minor > 0, "transaction total must be positive");

    let target = Money::from_minor(target_minor, USD);

    let mut rng = match args.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let basket = select_basket(&mut rng, &catalog, target, &SelectorConfig::default())?;

    tracing::info!(
        items = basket.len(),
        remainder = %basket.remainder(),
        "basket selected"
    );

    let stdout = io::stdout();
    report::receipt::write_receipt(stdout.lock(), &basket, target)?;

    let html = report::html::transaction_report(args.category, target, &basket);

    fs::write(&args.out, html)
        .with_context(|| format!("failed to write {}", args.out.display()))?;

    println!("transaction report written to {}", args.out.display());

    Ok(())
}
