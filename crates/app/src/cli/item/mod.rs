use clap::{Args, Subcommand};

use crate::archive::Archive;

mod add;
mod remove;
mod update;

#[derive(Debug, Args)]
pub(crate) struct ItemCommand {
    #[command(subcommand)]
    command: ItemSubcommand,
}

#[derive(Debug, Subcommand)]
enum ItemSubcommand {
    /// Register a new item in a category archive
    Add(add::AddItemArgs),

    /// Update an existing item found by SKU prefix
    Update(update::UpdateItemArgs),

    /// Remove an existing item found by SKU prefix
    Remove(remove::RemoveItemArgs),
}

pub(crate) fn run(command: ItemCommand, archive: &Archive) -> anyhow::Result<()> {
    match command.command {
        ItemSubcommand::Add(args) => add::run(args, archive),
        ItemSubcommand::Update(args) => update::run(args, archive),
        ItemSubcommand::Remove(args) => remove::run(args, archive),
    }
}
