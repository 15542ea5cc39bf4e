//! Barcode image sync
//!
//! Fetches Code 128 barcode PNGs from barcodeapi.org for every item of a
//! category and stores them under `<images_dir>/<category>/<sku>.png`.
//! Individual fetch failures are logged and skipped so one flaky SKU cannot
//! abort a whole refresh.

use std::{
    fs, io,
    path::{Path, PathBuf},
    time::Duration,
};

use bodega::catalog::{CatalogItem, Category};
use indicatif::{ProgressBar, ProgressStyle};
use thiserror::Error;
use tokio::task::JoinSet;
use tracing::warn;

const BARCODE_API_URL: &str = "https://barcodeapi.org/api/code128";

const REQUEST_TIMEOUT: Duration = Duration::from_secs(5);

#[derive(Debug, Error)]
pub(crate) enum BarcodeError {
    #[error("failed to build http client")]
    Client(#[source] reqwest::Error),

    #[error("request for {sku} failed")]
    Request {
        sku: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("barcode service answered {status} for {sku}")]
    Status {
        sku: String,
        status: reqwest::StatusCode,
    },

    #[error("failed to store barcode image {path}")]
    Store {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

pub(crate) async fn sync_barcodes(
    items: &[CatalogItem<'_>],
    category: Category,
    images_dir: &Path,
) -> Result<(), BarcodeError> {
    let target_dir = images_dir.join(category.as_str());

    fs::create_dir_all(&target_dir).map_err(|source| BarcodeError::Store {
        path: target_dir.clone(),
        source,
    })?;

    let client = reqwest::Client::builder()
        .timeout(REQUEST_TIMEOUT)
        .build()
        .map_err(BarcodeError::Client)?;

    let progress = ProgressBar::new(items.len() as u64);

    if let Ok(style) = ProgressStyle::with_template("  [{bar:50}] {percent:>3}%") {
        progress.set_style(style.progress_chars("#-"));
    }

    let mut tasks = JoinSet::new();

    for item in items {
        let client = client.clone();
        let sku = item.sku().to_string();
        let path = target_dir.join(format!("{sku}.png"));

        tasks.spawn(async move { fetch_one(&client, &sku, &path).await });
    }

    while let Some(joined) = tasks.join_next().await {
        match joined {
            Ok(Ok(())) => {}
            Ok(Err(error)) => warn!(%error, "barcode fetch skipped"),
            Err(error) => warn!(%error, "barcode task failed"),
        }

        progress.inc(1);
    }

    progress.finish();

    Ok(())
}

async fn fetch_one(client: &reqwest::Client, sku: &str, path: &Path) -> Result<(), BarcodeError> {
    let response = client
        .get(format!("{BARCODE_API_URL}/{sku}"))
        .send()
        .await
        .map_err(|source| BarcodeError::Request {
            sku: sku.to_string(),
            source,
        })?;

    let status = response.status();

    if !status.is_success() {
        return Err(BarcodeError::Status {
            sku: sku.to_string(),
            status,
        });
    }

    let bytes = response
        .bytes()
        .await
        .map_err(|source| BarcodeError::Request {
            sku: sku.to_string(),
            source,
        })?;

    fs::write(path, &bytes).map_err(|source| BarcodeError::Store {
        path: path.to_path_buf(),
        source,
    })
}
