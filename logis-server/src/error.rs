use logis_housing::HousingError;
use logis_retrieval::RetrievalError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{field} is not a valid URL: {reason}")]
    InvalidUrl { field: &'static str, reason: String },
    #[error("{0} cannot be empty")]
    Empty(&'static str),
    #[error("{field} is out of range: {reason}")]
    OutOfRange { field: &'static str, reason: String },
    #[error("allowed origin '{0}' is not a valid header value")]
    InvalidOrigin(String),
}

/// Any failure that prevents the service from starting.
#[derive(Debug, Error)]
pub enum StartupError {
    #[error("invalid configuration: {0}")]
    Config(#[from] ConfigError),
    #[error("failed to load housing data: {0}")]
    Housing(#[from] HousingError),
    #[error("no housing documents were loaded")]
    EmptyCorpus,
    #[error("failed to build the vector index: {0}")]
    Index(#[from] RetrievalError),
}
