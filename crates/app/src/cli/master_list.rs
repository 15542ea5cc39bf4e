use std::{fs, path::PathBuf};

use anyhow::Context;
use bodega::catalog::Category;
use clap::Args;

use crate::{archive::Archive, report};

#[derive(Debug, Args)]
pub(crate) struct MasterListArgs {
    /// Archive category to list
    #[arg(long)]
    category: Category,

    /// Output path for the HTML master list
    #[arg(long, default_value = "masterList.html")]
    out: PathBuf,
}

pub(crate) fn run(args: MasterListArgs, archive: &Archive) -> anyhow::Result<()> {
    let items = archive.load(args.category)?;

    let html = report::html::master_list(args.category, &items);

    fs::write(&args.out, html)
        .with_context(|| format!("failed to write {}", args.out.display()))?;

    println!(
        "master list of {} {} items written to {}",
        items.len(),
        args.category,
        args.out.display(),
    );

    Ok(())
}
