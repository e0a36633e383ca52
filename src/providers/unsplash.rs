use reqwest::Client;
use serde::Deserialize;

use crate::core::{
    AnkipixError,
    ImageHit,
};

const SEARCH_URL: &str = "https://api.unsplash.com/search/photos";

#[derive(Debug, Deserialize)]
pub struct SearchResponse {
    #[serde(default)]
    results: Vec<Photo>,
}

#[derive(Debug, Deserialize)]
struct Photo {
    urls: Urls,
    user: User,
}

#[derive(Debug, Deserialize)]
struct Urls {
    regular: String,
}

#[derive(Debug, Deserialize)]
struct User {
    name: String,
    links: UserLinks,
}

#[derive(Debug, Deserialize)]
struct UserLinks {
    html: String, // Photographer profile page, used as the attribution link
}

/// First photo of a search response, regular rendition, photographer credited.
pub fn first_hit(response: SearchResponse) -> Option<ImageHit> {
    response.results.into_iter().next().map(|photo| ImageHit {
        url: photo.urls.regular,
        credit_name: Some(photo.user.name),
        credit_link: Some(photo.user.links.html),
    })
}

pub async fn search(
    http: &Client,
    api_key: &str,
    query: &str,
) -> Result<Option<ImageHit>, AnkipixError> {
    let response = http
        .get(SEARCH_URL)
        .header("Accept-Version", "v1")
        .header("Authorization", format!("Client-ID {}", api_key))
        .query(&[("query", query), ("per_page", "1")])
        .send()
        .await?;

    if !response.status().is_success() {
        tracing::warn!("Unsplash returned {} for '{}'", response.status(), query);
        return Ok(None);
    }

    Ok(first_hit(response.json().await?))
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"{
        "total": 133,
        "total_pages": 133,
        "results": [{
            "id": "eOLpJytrbsQ",
            "description": "A man drinking a coffee.",
            "urls": {
                "raw": "https://images.unsplash.com/photo-1416339306562-f3d12fefd36f?raw",
                "full": "https://images.unsplash.com/photo-1416339306562-f3d12fefd36f?full",
                "regular": "https://images.unsplash.com/photo-1416339306562-f3d12fefd36f?regular"
            },
            "user": {
                "id": "Ul0QVz12Goo",
                "username": "ugmonk",
                "name": "Jeff Sheldon",
                "links": {
                    "self": "https://api.unsplash.com/users/ugmonk",
                    "html": "https://unsplash.com/@ugmonk"
                }
            }
        }]
    }"#;

    #[test]
    fn first_hit_uses_regular_rendition_and_credits_user() {
        let response: SearchResponse = serde_json::from_str(SAMPLE).unwrap();
        let hit = first_hit(response).unwrap();

        assert_eq!(
            hit.url,
            "https://images.unsplash.com/photo-1416339306562-f3d12fefd36f?regular"
        );
        assert_eq!(hit.credit_name.as_deref(), Some("Jeff Sheldon"));
        assert_eq!(hit.credit_link.as_deref(), Some("https://unsplash.com/@ugmonk"));
    }

    #[test]
    fn empty_result_list_yields_no_hit() {
        let response: SearchResponse =
            serde_json::from_str(r#"{"total": 0, "results": []}"#).unwrap();
        assert!(first_hit(response).is_none());
    }

    #[test]
    fn missing_results_key_yields_no_hit() {
        let response: SearchResponse = serde_json::from_str(r#"{"total": 0}"#).unwrap();
        assert!(first_hit(response).is_none());
    }
}
