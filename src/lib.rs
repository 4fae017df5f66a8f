//! Crawls the Noon search API and archives product listings as CSV rows.
//!
//! One call performs one fetch, one normalization pass, and at most one
//! file write. The row schema is shared with crawlers for other retail
//! platforms that feed the same CSV sink.

pub mod fetcher;
pub mod models;
pub mod normalize;
pub mod writer;

use std::path::PathBuf;

use anyhow::Result;
use log::{info, warn};

pub use crate::models::ProductRow;

pub struct CrawlOptions {
    pub output_path: PathBuf,
    pub page: u32,
    pub limit: u32,
    pub append: bool,
}

impl Default for CrawlOptions {
    fn default() -> Self {
        Self {
            output_path: PathBuf::from("noon_products.csv"),
            page: 1,
            limit: 20,
            append: false,
        }
    }
}

/// Searches Noon for `query` and saves the results to a CSV file.
///
/// Returns the number of rows written. An empty result set is not an error:
/// the output file is left untouched and 0 is returned. Network, HTTP
/// status, decode, and filesystem failures all abort the call before or
/// without modifying the file.
pub fn crawl_noon_to_csv(query: &str, options: &CrawlOptions) -> Result<usize> {
    info!("Noon API search: '{query}'");

    let response = fetcher::search(query, options.page, options.limit)?;

    let rows: Vec<ProductRow> = response
        .products
        .iter()
        .map(|item| normalize::to_row(item, query))
        .collect();

    if rows.is_empty() {
        warn!("no products returned from Noon API");
        return Ok(0);
    }

    let written = writer::write_rows(&rows, &options.output_path, options.append)?;
    info!("saved {written} Noon products to {}", options.output_path.display());
    Ok(written)
}
