use std::time::Duration;

use tokio::time::sleep;

use crate::core::{
    AnkipixError,
    ImageHit,
};

pub mod api;

pub use api::{
    AnkiClient,
    Deck,
    Note,
};

/// Search term matching every note in `deck`. Deck names may contain quotes,
/// which AnkiConnect expects backslash-escaped.
pub fn deck_query(deck: &str) -> String {
    format!("deck:\"{}\"", deck.replace('"', "\\\""))
}

/// Search query matching notes in `deck` whose `picture_field` is empty.
pub fn empty_picture_query(deck: &str, picture_field: &str) -> String {
    format!("{} {}:", deck_query(deck), picture_field)
}

pub async fn find_candidates(
    client: &AnkiClient,
    deck: &str,
    picture_field: &str,
) -> Result<Vec<u64>, AnkipixError> {
    client.find_notes(&empty_picture_query(deck, picture_field)).await
}

pub async fn write_picture(
    client: &AnkiClient,
    note_id: u64,
    picture_field: &str,
    hit: &ImageHit,
) -> Result<(), AnkipixError> {
    client.update_note_field(note_id, picture_field, &hit.html()).await
}

/// Poll the version endpoint until AnkiConnect answers, bounded by `max_attempts`.
/// Returns false if it never came up.
pub async fn wait_awake(client: &AnkiClient, wait_time: u64, max_attempts: u32) -> bool {
    for attempt in 1..=max_attempts {
        match client.version().await {
            Ok(version) => {
                tracing::debug!("AnkiConnect is online. Version: {}", version);
                return true;
            }
            Err(err) => {
                tracing::warn!(
                    "AnkiConnect attempt {} of {} failed: {}",
                    attempt,
                    max_attempts,
                    err
                );
                if attempt < max_attempts {
                    sleep(Duration::from_secs(wait_time)).await;
                }
            }
        }
    }
    false
}
