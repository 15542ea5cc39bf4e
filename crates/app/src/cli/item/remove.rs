use std::io::{self, BufRead, Write};

use clap::Args;

use crate::{archive::Archive, cli::validate};

#[derive(Debug, Args)]
pub(crate) struct RemoveItemArgs {
    /// First 10 or more digits of the item's SKU
    sku_prefix: String,

    /// Skip the confirmation prompt
    #[arg(long)]
    yes: bool,
}

pub(crate) fn run(args: RemoveItemArgs, archive: &Archive) -> anyhow::Result<()> {
    validate::sku_prefix(&args.sku_prefix)?;

    if !args.yes {
        let (category, item) = archive.find(&args.sku_prefix)?;

        println!(
            "found {} ({}) at {} in the {} archive",
            item.name(),
            item.sku(),
            item.full_price(),
            category,
        );

        if !confirm("delete this item? [y/N] ")? {
            println!("item left in place");
            return Ok(());
        }
    }

    let (category, item) = archive.remove(&args.sku_prefix)?;

    tracing::info!(sku = item.sku(), category = %category, "item removed");

    println!("removed {} ({}) from the {} archive", item.name(), item.sku(), category);

    Ok(())
}

fn confirm(prompt: &str) -> anyhow::Result<bool> {
    print!("{prompt}");
    io::stdout().flush()?;

    let mut answer = String::new();
    io::stdin().lock().read_line(&mut answer)?;

    Ok(answer.trim().eq_ignore_ascii_case("y"))
}
