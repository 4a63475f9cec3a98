use thiserror::Error;

#[derive(Debug, Error)]
pub enum HousingError {
    #[error("invalid configuration: {0}")]
    Config(String),
    #[error("request to {url} failed: {source}")]
    Request {
        url: String,
        #[source]
        source: reqwest::Error,
    },
    #[error("malformed JSON from {url}: {source}")]
    Decode {
        url: String,
        #[source]
        source: serde_json::Error,
    },
    #[error("unexpected payload from {url}: {reason}")]
    UnexpectedPayload { url: String, reason: String },
}
