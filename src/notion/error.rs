use thiserror::Error;

#[derive(Error, Debug)]
pub enum NotionError {
    #[error("Failed to reach the Notion API")]
    Request(#[from] reqwest::Error),

    #[error("Notion API returned {status} ({code}): {message}")]
    Api {
        status: u16,
        code: String,
        message: String,
    },

    #[error("Invalid Notion API base URL: {0}")]
    InvalidBaseUrl(String),

    #[error("Failed to decode Notion API response")]
    Decode(#[source] serde_json::Error),
}
