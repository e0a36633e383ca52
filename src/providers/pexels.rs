use reqwest::Client;
use serde::Deserialize;

use crate::core::{
    AnkipixError,
    ImageHit,
};

const SEARCH_URL: &str = "https://api.pexels.com/v1/search";

#[derive(Debug, Deserialize)]
pub struct SearchResponse {
    #[serde(default)]
    photos: Vec<Photo>,
}

#[derive(Debug, Deserialize)]
struct Photo {
    src: PhotoSrc,
    photographer: String,
    url: String, // Photo page on pexels.com, used as the attribution link
}

#[derive(Debug, Deserialize)]
struct PhotoSrc {
    medium: String,
}

/// First photo of a search response, medium rendition, photographer credited.
pub fn first_hit(response: SearchResponse) -> Option<ImageHit> {
    response.photos.into_iter().next().map(|photo| ImageHit {
        url: photo.src.medium,
        credit_name: Some(photo.photographer),
        credit_link: Some(photo.url),
    })
}

pub async fn search(
    http: &Client,
    api_key: &str,
    query: &str,
) -> Result<Option<ImageHit>, AnkipixError> {
    let response = http
        .get(SEARCH_URL)
        .header("Authorization", api_key)
        .query(&[("query", query), ("per_page", "1")])
        .send()
        .await?;

    if !response.status().is_success() {
        tracing::warn!("Pexels returned {} for '{}'", response.status(), query);
        return Ok(None);
    }

    Ok(first_hit(response.json().await?))
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"{
        "total_results": 10000,
        "page": 1,
        "per_page": 1,
        "photos": [{
            "id": 3573351,
            "width": 3066,
            "height": 3968,
            "photographer": "Lukas Rodriguez",
            "url": "https://www.pexels.com/photo/two-brown-spotted-dogs-3573351/",
            "src": {
                "original": "https://images.pexels.com/photos/3573351/original.png",
                "large": "https://images.pexels.com/photos/3573351/large.png",
                "medium": "https://images.pexels.com/photos/3573351/medium.png"
            }
        }]
    }"#;

    #[test]
    fn first_hit_uses_medium_rendition_and_credits_photographer() {
        let response: SearchResponse = serde_json::from_str(SAMPLE).unwrap();
        let hit = first_hit(response).unwrap();

        assert_eq!(hit.url, "https://images.pexels.com/photos/3573351/medium.png");
        assert_eq!(hit.credit_name.as_deref(), Some("Lukas Rodriguez"));
        assert_eq!(
            hit.credit_link.as_deref(),
            Some("https://www.pexels.com/photo/two-brown-spotted-dogs-3573351/")
        );
    }

    #[test]
    fn empty_photo_list_yields_no_hit() {
        let response: SearchResponse =
            serde_json::from_str(r#"{"total_results": 0, "photos": []}"#).unwrap();
        assert!(first_hit(response).is_none());
    }
}
