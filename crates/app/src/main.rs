//! Bodega CLI
//!
//! Catalog management and transaction randomization for a small corner-store
//! archive: add, update, and remove items, refresh barcode images, and build
//! randomized baskets that approach a target total.

use std::process;

use clap::Parser;
use tracing_subscriber::EnvFilter;

mod archive;
mod barcode;
mod cli;
mod report;

#[tokio::main]
async fn main() {
    init_tracing();

    let cli = cli::Cli::parse();

    if let Err(error) = cli.run().await {
        eprintln!("{error:#}");
        process::exit(1);
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .compact()
        .init();
}
