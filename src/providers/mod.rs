use clap::ValueEnum;
use reqwest::Client;

use crate::{
    config::Config,
    core::{
        AnkipixError,
        ImageHit,
    },
};

pub mod pexels;
pub mod serpapi;
pub mod unsplash;

/// Supported image search backends.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Provider {
    Pexels,
    Unsplash,
    Serpapi,
}

impl Provider {
    pub const ALL: [Provider; 3] = [Provider::Pexels, Provider::Unsplash, Provider::Serpapi];

    pub fn name(&self) -> &'static str {
        match self {
            Provider::Pexels => "Pexels",
            Provider::Unsplash => "Unsplash",
            Provider::Serpapi => "SerpAPI",
        }
    }

    /// config.json key this provider authenticates with.
    pub fn key_name(&self) -> &'static str {
        match self {
            Provider::Pexels => "PEXELS_API_KEY",
            Provider::Unsplash => "UNSPLASH_ACCESS_KEY",
            Provider::Serpapi => "SERPAPI_KEY",
        }
    }

    pub fn api_key<'a>(&self, config: &'a Config) -> Option<&'a str> {
        let key = match self {
            Provider::Pexels => config.pexels_api_key.as_deref(),
            Provider::Unsplash => config.unsplash_access_key.as_deref(),
            Provider::Serpapi => config.serpapi_key.as_deref(),
        };
        key.map(str::trim).filter(|key| !key.is_empty())
    }

    /// Providers with an API key present in `config`.
    pub fn available(config: &Config) -> Vec<Provider> {
        Provider::ALL.into_iter().filter(|provider| provider.api_key(config).is_some()).collect()
    }

    pub async fn search(
        &self,
        http: &Client,
        config: &Config,
        query: &str,
    ) -> Result<Option<ImageHit>, AnkipixError> {
        let key = self
            .api_key(config)
            .ok_or_else(|| AnkipixError::MissingApiKey(self.name().to_string()))?;

        match self {
            Provider::Pexels => pexels::search(http, key, query).await,
            Provider::Unsplash => unsplash::search(http, key, query).await,
            Provider::Serpapi => serpapi::search(http, key, query).await,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn available_follows_configured_keys() {
        let mut config = Config::default();
        assert!(Provider::available(&config).is_empty());

        config.pexels_api_key = Some("pex-key".to_string());
        config.serpapi_key = Some("serp-key".to_string());
        assert_eq!(Provider::available(&config), vec![Provider::Pexels, Provider::Serpapi]);
    }

    #[test]
    fn blank_key_does_not_count_as_configured() {
        let mut config = Config::default();
        config.unsplash_access_key = Some("   ".to_string());
        assert!(Provider::Unsplash.api_key(&config).is_none());
        assert!(Provider::available(&config).is_empty());
    }

    #[test]
    fn key_names_match_config_entries() {
        assert_eq!(Provider::Pexels.key_name(), "PEXELS_API_KEY");
        assert_eq!(Provider::Unsplash.key_name(), "UNSPLASH_ACCESS_KEY");
        assert_eq!(Provider::Serpapi.key_name(), "SERPAPI_KEY");
    }
}
