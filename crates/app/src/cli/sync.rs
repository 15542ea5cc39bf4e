use std::path::PathBuf;

use bodega::catalog::Category;
use clap::Args;

use crate::{archive::Archive, barcode};

#[derive(Debug, Args)]
pub(crate) struct SyncArgs {
    /// Archive category to refresh
    #[arg(long)]
    category: Category,

    /// Directory barcode images are stored under
    #[arg(long, default_value = "images")]
    images_dir: PathBuf,
}

pub(crate) async fn run(args: SyncArgs, archive: &Archive) -> anyhow::Result<()> {
    let items = archive.sort_descending(args.category)?;

    tracing::info!(
        count = items.len(),
        category = %args.category,
        "archive sorted, fetching barcodes"
    );

    barcode::sync_barcodes(&items, args.category, &args.images_dir).await?;

    println!(
        "synced {} barcode images for the {} archive",
        items.len(),
        args.category,
    );

    Ok(())
}
