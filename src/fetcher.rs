use std::time::Duration;

use anyhow::{Context, Result};

use crate::models::SearchResponse;

const BASE_API: &str = "https://www.noon.com/_svc/catalog/api/v3/search";

pub const BASE_SITE: &str = "https://www.noon.com/egypt-en";

const USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) \
     AppleWebKit/537.36 (KHTML, like Gecko) \
     Chrome/120.0.0.0 Safari/537.36";

const TIMEOUT: Duration = Duration::from_secs(15);

/// Runs one search against the Noon catalog API and decodes the body.
///
/// Any transport failure, non-2xx status, or undecodable body is fatal for
/// the call; there is no retry.
pub fn search(query: &str, page: u32, limit: u32) -> Result<SearchResponse> {
    let client = reqwest::blocking::Client::builder()
        .timeout(TIMEOUT)
        .build()?;

    let response = client
        .get(BASE_API)
        .header("User-Agent", USER_AGENT)
        .header("Accept", "application/json")
        .header("Referer", BASE_SITE)
        .query(&[
            ("q", query),
            ("country", "eg"),
            ("page", &page.to_string()),
            ("limit", &limit.to_string()),
        ])
        .send()
        .with_context(|| format!("Noon API request failed for query '{query}'"))?
        .error_for_status()
        .context("Noon API returned an error status")?;

    let body = response.text().context("failed to read Noon API response body")?;
    serde_json::from_str(&body).with_context(|| {
        format!(
            "failed to parse Noon API response as JSON (first 200 chars): {}",
            body.chars().take(200).collect::<String>()
        )
    })
}
