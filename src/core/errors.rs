use thiserror::Error;

#[derive(Error, Debug)]
pub enum AnkipixError {
    #[error("I/O error: {0}")]
    Io(Box<std::io::Error>),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Reqwest error: {0}")]
    Reqwest(Box<reqwest::Error>),

    #[error("AnkiConnect error: {0}")]
    AnkiConnect(String),

    #[error("Missing {0} API key in config.json")]
    MissingApiKey(String),

    #[error("Expected 1 to 3 search fields, got {0}")]
    InvalidFieldCount(usize),

    #[error("AnkipixError: {0}")]
    Custom(String),
}

impl From<std::io::Error> for AnkipixError {
    fn from(error: std::io::Error) -> Self {
        AnkipixError::Io(Box::new(error))
    }
}

impl From<reqwest::Error> for AnkipixError {
    fn from(error: reqwest::Error) -> Self {
        AnkipixError::Reqwest(Box::new(error))
    }
}
