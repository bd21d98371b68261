use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("HTTP request failed: {0}")]
    RequestFailed(#[from] reqwest::Error),

    #[error("JSON parsing failed: {0}")]
    JsonParsing(#[from] serde_json::Error),

    #[error("API error: {status} - {message}")]
    ApiError { status: u16, message: String },

    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),

    #[error("Configuration missing: {0}")]
    ConfigurationMissing(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Malformed history: {0}")]
    MalformedHistory(String),

    #[error("Invalid time unit: {0}")]
    InvalidUnit(String),

    #[error("Timeline has no status transitions")]
    EmptyTimeline,
}

pub type Result<T> = std::result::Result<T, Error>;
