use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::archive::Archive;

mod item;
mod master_list;
mod randomize;
mod sync;
mod validate;

#[derive(Debug, Parser)]
#[command(name = "bodega", about = "Catalog manager and transaction randomizer", long_about = None)]
pub(crate) struct Cli {
    /// Directory holding the category archive files
    #[arg(long, env = "BODEGA_ARCHIVE_DIR", default_value = "itemArchive", global = true)]
    archive_dir: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Add, update, or remove catalog items
    Item(item::ItemCommand),

    /// Build a randomized basket approximating a transaction total
    Randomize(randomize::RandomizeArgs),

    /// Re-sort an archive and refresh its barcode images
    Sync(sync::SyncArgs),

    /// Write an HTML master list of every item in a category
    MasterList(master_list::MasterListArgs),
}

impl Cli {
    pub(crate) async fn run(self) -> anyhow::Result<()> {
        let archive = Archive::new(self.archive_dir);

        match self.command {
            Commands::Item(command) => item::run(command, &archive),
            Commands::Randomize(args) => randomize::run(args, &archive),
            Commands::Sync(args) => sync::run(args, &archive).await,
            Commands::MasterList(args) => master_list::run(args, &archive),
        }
    }
}
