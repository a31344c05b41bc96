//! Static generation of the catalog and product pages.
//!
//! Everything is fetched before anything is written, so a backend failure
//! leaves the output directory untouched and the command exits non-zero.

use std::path::Path;

use anyhow::Context;
use futures::stream::{self, StreamExt, TryStreamExt};
use serde::Serialize;
use storefront_catalog::CatalogClient;
use storefront_core::{ProductDetail, ProductPaths};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct BuildSummary {
    pub product_pages: usize,
}

/// Fetches catalog props, every product path and every product, then
/// writes `index.json`, `paths.json` and `product/{id}.json` under `out`.
///
/// # Errors
///
/// Fails on the first backend error, on a product id that cannot be used
/// as a file name, or on any filesystem error.
pub(crate) async fn run_build(
    client: &CatalogClient,
    out: &Path,
    concurrency: usize,
) -> anyhow::Result<BuildSummary> {
    let catalog = client
        .fetch_catalog_page_props()
        .await
        .context("failed to fetch catalog page props")?;

    let ids = client
        .enumerate_product_ids()
        .await
        .context("failed to enumerate product paths")?;
    for id in &ids {
        check_file_name(id)?;
    }

    let products: Vec<(&str, ProductDetail)> = stream::iter(ids.iter())
        .map(|id| async move {
            let product = client
                .fetch_product(id)
                .await
                .with_context(|| format!("failed to fetch product {id}"))?;
            if product.id != *id {
                tracing::warn!(
                    requested = %id,
                    returned = %product.id,
                    "product id differs from enumerated id"
                );
            }
            anyhow::Ok((id.as_str(), product))
        })
        .buffer_unordered(concurrency.max(1))
        .try_collect()
        .await?;

    let product_dir = out.join("product");
    tokio::fs::create_dir_all(&product_dir)
        .await
        .with_context(|| format!("failed to create {}", product_dir.display()))?;

    write_json(&out.join("index.json"), &catalog).await?;
    write_json(&out.join("paths.json"), &ProductPaths::from_ids(&ids)).await?;
    // Named by the enumerated id, already checked and listed in paths.json.
    for (id, product) in &products {
        write_json(&product_dir.join(format!("{id}.json")), product).await?;
    }

    tracing::info!(
        products = products.len(),
        categories = catalog.categories.len(),
        out = %out.display(),
        "static build finished"
    );
    Ok(BuildSummary {
        product_pages: products.len(),
    })
}

fn check_file_name(id: &str) -> anyhow::Result<()> {
    if id.is_empty() || id == "." || id == ".." || id.contains(['/', '\\']) {
        anyhow::bail!("product id {id:?} cannot be used as a page file name");
    }
    Ok(())
}

async fn write_json<T: Serialize>(path: &Path, value: &T) -> anyhow::Result<()> {
    let bytes = serde_json::to_vec_pretty(value)?;
    tokio::fs::write(path, bytes)
        .await
        .with_context(|| format!("failed to write {}", path.display()))
}

#[cfg(test)]
#[path = "build_test.rs"]
mod tests;
