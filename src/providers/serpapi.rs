use reqwest::Client;
use serde::Deserialize;

use crate::core::{
    AnkipixError,
    ImageHit,
};

const SEARCH_URL: &str = "https://serpapi.com/search";

#[derive(Debug, Deserialize)]
pub struct SearchResponse {
    #[serde(default)]
    images_results: Vec<ImageResult>,
}

#[derive(Debug, Default, Deserialize)]
struct ImageResult {
    original: Option<String>,
    source: Option<String>,
    thumbnail: Option<String>,
}

/// First image of a Google Images result set. Results carry several URL
/// variants; prefer the full-size one. SerpAPI reports no attribution we can
/// credit, so hits are bare.
pub fn first_hit(response: SearchResponse) -> Option<ImageHit> {
    let image = response.images_results.into_iter().next()?;
    let url = [image.original, image.source, image.thumbnail]
        .into_iter()
        .flatten()
        .find(|url| !url.is_empty())?;
    Some(ImageHit::bare(url))
}

pub async fn search(
    http: &Client,
    api_key: &str,
    query: &str,
) -> Result<Option<ImageHit>, AnkipixError> {
    let response = http
        .get(SEARCH_URL)
        .query(&[("q", query), ("api_key", api_key), ("engine", "google_images")])
        .send()
        .await?;

    if !response.status().is_success() {
        tracing::warn!("SerpAPI returned {} for '{}'", response.status(), query);
        return Ok(None);
    }

    Ok(first_hit(response.json().await?))
}
