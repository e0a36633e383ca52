use std::collections::HashMap;

use reqwest::Client;
use serde::{
    Deserialize,
    Serialize,
};

use crate::core::AnkipixError;

pub const DEFAULT_URL: &str = "http://localhost:8765";

#[derive(Debug, Clone)]
pub struct Deck {
    pub name: String,
    pub id: u64,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Field {
    pub value: String,
    pub order: u32,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct Note {
    pub note_id: u64,
    #[serde(default)]
    pub tags: Vec<String>,
    pub fields: HashMap<String, Field>,
    pub model_name: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    pub result: Option<T>,
    pub error: Option<String>,
}

impl<T> ApiResponse<T> {
    pub fn into_result(self) -> Result<Option<T>, AnkipixError> {
        match self.error {
            Some(error) => Err(AnkipixError::AnkiConnect(error)),
            None => Ok(self.result),
        }
    }
}

/// Client for the AnkiConnect HTTP API: action/version/params envelope, version 6.
#[derive(Debug, Clone)]
pub struct AnkiClient {
    http: Client,
    url: String,
}

impl AnkiClient {
    pub fn new(url: &str) -> Self {
        AnkiClient { http: Client::new(), url: url.trim_end_matches('/').to_string() }
    }

    async fn request<T: for<'de> Deserialize<'de>>(
        &self,
        action: &str,
        params: Option<serde_json::Value>,
    ) -> Result<Option<T>, AnkipixError> {
        let mut body = serde_json::Map::new();
        body.insert("action".to_string(), serde_json::Value::String(action.to_string()));
        body.insert("version".to_string(), serde_json::Value::Number((6).into()));

        if let Some(params) = params {
            body.insert("params".to_string(), params);
        }

        let response: ApiResponse<T> =
            self.http.post(&self.url).json(&body).send().await?.json().await?;
        response.into_result()
    }

    // Used to check whether AnkiConnect is online.
    pub async fn version(&self) -> Result<u32, AnkipixError> {
        Ok(self.request("version", None).await?.unwrap_or_default())
    }

    pub async fn deck_names_and_ids(&self) -> Result<Vec<Deck>, AnkipixError> {
        let decks: HashMap<String, u64> =
            self.request("deckNamesAndIds", None).await?.unwrap_or_default();

        let mut decks: Vec<Deck> = decks.into_iter().map(|(name, id)| Deck { name, id }).collect();
        decks.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(decks)
    }

    pub async fn find_notes(&self, query: &str) -> Result<Vec<u64>, AnkipixError> {
        let params = serde_json::json!({ "query": query });
        Ok(self.request("findNotes", Some(params)).await?.unwrap_or_default())
    }

    pub async fn notes_info(&self, note_ids: &[u64]) -> Result<Vec<Note>, AnkipixError> {
        let params = serde_json::json!({ "notes": note_ids });
        Ok(self.request("notesInfo", Some(params)).await?.unwrap_or_default())
    }

    pub async fn update_note_field(
        &self,
        note_id: u64,
        field: &str,
        html: &str,
    ) -> Result<(), AnkipixError> {
        let params = serde_json::json!({
            "note": {
                "id": note_id,
                "fields": { field: html }
            }
        });

        // updateNoteFields returns null on success, so only the error side matters.
        self.request::<serde_json::Value>("updateNoteFields", Some(params)).await?;
        Ok(())
    }
}
