use bodega::catalog::{CatalogItem, Category, records};
use clap::Args;
use rusty_money::{Money, iso::USD};

use crate::{archive::Archive, cli::validate};

#[derive(Debug, Args)]
pub(crate) struct AddItemArgs {
    /// Item display name (1 to 34 characters)
    #[arg(long)]
    name: String,

    /// 11 or 12 digit SKU
    #[arg(long)]
    sku: String,

    /// Shelf price, e.g. "1.99"
    #[arg(long)]
    price: String,

    /// Apply sales tax to this item
    #[arg(long)]
    taxable: bool,

    /// Archive category the item belongs to
    #[arg(long)]
    category: Category,
}

pub(crate) fn run(args: AddItemArgs, archive: &Archive) -> anyhow::Result<()> {
    validate::item_name(&args.name)?;
    validate::sku(&args.sku)?;

    let price_minor = records::parse_amount(&args.price)?;
    let item = CatalogItem::new(
        args.name,
        args.sku,
        Money::from_minor(price_minor, USD),
        args.taxable,
    )?;

    archive.add(args.category, &item)?;

    tracing::info!(sku = item.sku(), category = %args.category, "item added");

    println!(
        "added {} ({}) to the {} archive at {}",
        item.name(),
        item.sku(),
        args.category,
        item.full_price(),
    );

    Ok(())
}
