use bodega::catalog::records;
use clap::Args;
use rusty_money::{Money, iso::USD};

use crate::{
    archive::{Archive, ItemPatch},
    cli::validate,
};

#[derive(Debug, Args)]
pub(crate) struct UpdateItemArgs {
    /// First 10 or more digits of the item's SKU
    sku_prefix: String,

    /// New display name
    #[arg(long)]
    name: Option<String>,

    /// New shelf price, e.g. "2.49"
    #[arg(long)]
    price: Option<String>,

    /// Flip the item's taxability
    #[arg(long)]
    toggle_tax: bool,
}

pub(crate) fn run(args: UpdateItemArgs, archive: &Archive) -> anyhow::Result<()> {
    validate::sku_prefix(&args.sku_prefix)?;

    if let Some(name) = &args.name {
        validate::item_name(name)?;
    }

    let price = args
        .price
        .as_deref()
        .map(records::parse_amount)
        .transpose()?
        .map(|minor| Money::from_minor(minor, USD));

    let patch = ItemPatch {
        name: args.name,
        price,
        toggle_tax: args.toggle_tax,
    };

    anyhow::ensure!(!patch.is_empty(), "nothing to update; pass --name, --price, or --toggle-tax");

    let (category, item) = archive.update(&args.sku_prefix, &patch)?;

    tracing::info!(sku = item.sku(), category = %category, "item updated");

    println!(
        "updated {} ({}) in the {} archive: {} -> {}{}",
        item.name(),
        item.sku(),
        category,
        item.price(),
        item.full_price(),
        if item.taxable() { " (taxed)" } else { "" },
    );

    Ok(())
}
