use serde::{
    Deserialize,
    Serialize,
};

use crate::{
    anki::api,
    core::AnkipixError,
    persistence,
};

pub const CONFIG_FILE: &str = "config.json";

fn default_anki_connect_url() -> String {
    api::DEFAULT_URL.to_string()
}

fn default_picture_field() -> String {
    "Picture".to_string()
}

/// Settings and API keys, stored as `config.json` in the app config dir.
/// The upper-case key names are the ones the provider docs hand out, so a
/// pasted key lands next to the name the user saw.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(rename = "PEXELS_API_KEY", default)]
    pub pexels_api_key: Option<String>,

    #[serde(rename = "UNSPLASH_ACCESS_KEY", default)]
    pub unsplash_access_key: Option<String>,

    #[serde(rename = "SERPAPI_KEY", default)]
    pub serpapi_key: Option<String>,

    #[serde(default = "default_anki_connect_url")]
    pub anki_connect_url: String,

    #[serde(default = "default_picture_field")]
    pub picture_field: String,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            pexels_api_key: None,
            unsplash_access_key: None,
            serpapi_key: None,
            anki_connect_url: default_anki_connect_url(),
            picture_field: default_picture_field(),
        }
    }
}

impl Config {
    /// Load the config, writing a default file on first run so the user has
    /// somewhere to paste API keys.
    pub fn load_or_init() -> Result<Config, AnkipixError> {
        let path = persistence::config_file_path(CONFIG_FILE);
        if !path.exists() {
            let config = Config::default();
            persistence::save_json_to(&config, &path)?;
            tracing::info!("created default config at {}", path.display());
            return Ok(config);
        }

        persistence::load_json_from(&path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_object_falls_back_to_defaults() {
        let config: Config = serde_json::from_str("{}").unwrap();
        assert_eq!(config.anki_connect_url, "http://localhost:8765");
        assert_eq!(config.picture_field, "Picture");
        assert!(config.pexels_api_key.is_none());
        assert!(config.unsplash_access_key.is_none());
        assert!(config.serpapi_key.is_none());
    }

    #[test]
    fn reads_upper_case_key_names() {
        let config: Config = serde_json::from_str(
            r#"{
                "PEXELS_API_KEY": "pex-key",
                "UNSPLASH_ACCESS_KEY": "uns-key",
                "SERPAPI_KEY": "serp-key"
            }"#,
        )
        .unwrap();

        assert_eq!(config.pexels_api_key.as_deref(), Some("pex-key"));
        assert_eq!(config.unsplash_access_key.as_deref(), Some("uns-key"));
        assert_eq!(config.serpapi_key.as_deref(), Some("serp-key"));
    }

    #[test]
    fn settings_can_be_overridden() {
        let config: Config = serde_json::from_str(
            r#"{
                "anki_connect_url": "http://localhost:8899",
                "picture_field": "Image"
            }"#,
        )
        .unwrap();

        assert_eq!(config.anki_connect_url, "http://localhost:8899");
        assert_eq!(config.picture_field, "Image");
    }

    #[test]
    fn serialized_default_includes_key_slots() {
        // The first-run file should show where keys go.
        let json = serde_json::to_string_pretty(&Config::default()).unwrap();
        assert!(json.contains("PEXELS_API_KEY"));
        assert!(json.contains("UNSPLASH_ACCESS_KEY"));
        assert!(json.contains("SERPAPI_KEY"));
    }
}
