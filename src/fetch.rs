use reqwest::Client;

use crate::{
    anki::{
        self,
        AnkiClient,
        Note,
    },
    config::Config,
    core::{
        AnkipixError,
        FetchSummary,
        SearchFields,
    },
    providers::Provider,
};

const WAIT_SECS: u64 = 2;
const WAIT_ATTEMPTS: u32 = 3;

/// One fetch run: which deck, which fields to search with, which provider.
#[derive(Debug, Clone)]
pub struct FetchRequest {
    pub deck: String,
    pub fields: SearchFields,
    pub provider: Provider,
}

/// Fill the picture field of every note in the deck that is missing one.
/// Notes are processed one at a time; a failure on one note is logged and the
/// run moves on.
pub async fn run(config: &Config, request: &FetchRequest) -> Result<FetchSummary, AnkipixError> {
    // Fail before touching the network when the provider has no key.
    if request.provider.api_key(config).is_none() {
        return Err(AnkipixError::MissingApiKey(request.provider.name().to_string()));
    }

    let client = AnkiClient::new(&config.anki_connect_url);
    if !anki::wait_awake(&client, WAIT_SECS, WAIT_ATTEMPTS).await {
        return Err(AnkipixError::Custom(format!(
            "AnkiConnect is not reachable at {}. Is Anki running?",
            config.anki_connect_url
        )));
    }

    let picture_field = config.picture_field.as_str();
    let note_ids = anki::find_candidates(&client, &request.deck, picture_field).await?;
    tracing::info!(
        "{} notes with an empty {} field in deck '{}'",
        note_ids.len(),
        picture_field,
        request.deck
    );

    let mut summary = FetchSummary { candidates: note_ids.len(), ..Default::default() };
    if note_ids.is_empty() {
        return Ok(summary);
    }

    let notes = client.notes_info(&note_ids).await?;
    let http = Client::new();

    for note in &notes {
        match fill_note(&client, &http, config, request, note).await {
            Ok(true) => summary.updated += 1,
            Ok(false) => {
                summary.skipped += 1;
                tracing::info!("note {}: no image found for any search field", note.note_id);
            }
            Err(err) => {
                summary.skipped += 1;
                tracing::warn!("note {}: {}", note.note_id, err);
            }
        }
    }

    tracing::info!(
        "done: {}/{} notes updated, {} skipped",
        summary.updated,
        summary.candidates,
        summary.skipped
    );
    Ok(summary)
}

/// Try each search field in order; the first field whose value yields a hit is
/// written back. Returns whether the note was updated.
async fn fill_note(
    client: &AnkiClient,
    http: &Client,
    config: &Config,
    request: &FetchRequest,
    note: &Note,
) -> Result<bool, AnkipixError> {
    for field_name in request.fields.names() {
        let query = match note.fields.get(field_name) {
            Some(field) => field.value.trim(),
            None => continue,
        };
        if query.is_empty() {
            continue;
        }

        tracing::debug!(
            "note {}: searching '{}' from field '{}'",
            note.note_id,
            query,
            field_name
        );

        match request.provider.search(http, config, query).await {
            Ok(Some(hit)) => {
                anki::write_picture(client, note.note_id, &config.picture_field, &hit).await?;
                tracing::debug!("note {}: wrote {}", note.note_id, hit.url);
                return Ok(true);
            }
            Ok(None) => continue,
            Err(err) => {
                // A provider error only skips this field; the rest still get tried.
                tracing::warn!("note {}: search '{}' failed: {}", note.note_id, query, err);
                continue;
            }
        }
    }

    Ok(false)
}
