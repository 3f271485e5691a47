use thiserror::Error;

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("Invalid search URL {url}: {source}")]
    InvalidUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },

    #[error("Request error: {0}")]
    Request(#[from] reqwest::Error),

    #[error("Unexpected HTTP status {status}")]
    Status {
        status: reqwest::StatusCode,
        body: String,
    },

    #[error("JSON deserialization error: {source}")]
    Deserialize {
        #[source]
        source: serde_json::Error,
        body: String,
    },
}
