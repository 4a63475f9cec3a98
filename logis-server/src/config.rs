use std::convert::Infallible;
use std::net::SocketAddr;
use std::path::PathBuf;
use std::time::Duration;

use axum::http::HeaderValue;
use clap::{Args, Parser, Subcommand};
use logis_llm::GEMINI_BASE_URL;
use secrecy::{ExposeSecret, SecretString};

use crate::ConfigError;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(flatten)]
    pub config: AppConfig,

    #[command(subcommand)]
    pub mode: Option<Mode>,
}

#[derive(Subcommand, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    /// Serve the HTTP API (default)
    #[default]
    Serve,
    /// Run the example questions, then answer questions typed on stdin
    Terminal,
}

#[derive(Args, Debug, Clone)]
pub struct AppConfig {
    /// Address to serve the API on
    #[arg(long, env = "LOGIS_ADDRESS", default_value = "0.0.0.0:8000")]
    pub address: SocketAddr,

    /// Base URL of the housing occupancy API
    #[arg(long, env = "HOUSING_API_URL", default_value = "http://localhost:3000/api/v1")]
    pub housing_api_url: String,

    /// Timeout of each housing API call, in seconds
    #[arg(long, env = "HOUSING_FETCH_TIMEOUT_SECS", default_value_t = 10)]
    pub fetch_timeout_secs: u64,

    /// Abort startup on housing payloads without status 200 or data
    #[arg(long, env = "HOUSING_STRICT_PAYLOADS")]
    pub strict_payloads: bool,

    /// Ollama server computing embeddings
    #[arg(long, env = "OLLAMA_URL", default_value = logis_embeddings::DEFAULT_OLLAMA_URL)]
    pub ollama_url: String,

    #[arg(long, env = "EMBEDDING_MODEL", default_value = "nomic-embed-text")]
    pub embedding_model: String,

    #[arg(long, env = "EMBEDDING_DIMENSION", default_value_t = 768)]
    pub embedding_dimension: usize,

    #[arg(long, env = "GEMINI_API_KEY", hide_env_values = true, value_parser = parse_secret)]
    pub gemini_api_key: SecretString,

    #[arg(long, env = "GEMINI_MODEL", default_value = "gemini-2.5-flash")]
    pub gemini_model: String,

    #[arg(long, env = "GEMINI_BASE_URL", default_value = GEMINI_BASE_URL)]
    pub gemini_base_url: String,

    /// Sampling temperature of the generation model
    #[arg(long, env = "GEMINI_TEMPERATURE", default_value_t = 0.2)]
    pub temperature: f32,

    /// Number of documents retrieved per question
    #[arg(long, env = "RETRIEVAL_TOP_K", default_value_t = 70)]
    pub top_k: usize,

    /// Directory the vector index is written to at startup
    #[arg(long, env = "INDEX_DIR", default_value = "./index_logements")]
    pub index_dir: PathBuf,

    /// Origins allowed to call the API from a browser
    #[arg(
        long,
        env = "ALLOWED_ORIGINS",
        value_delimiter = ',',
        default_values_t = [
            "http://localhost:5173".to_string(),
            "http://localhost:3000".to_string(),
        ]
    )]
    pub allowed_origins: Vec<String>,

    /// Largest accepted request body, in bytes
    #[arg(long, env = "MAX_BODY_BYTES", default_value_t = 64 * 1024)]
    pub max_body_bytes: usize,
}

fn parse_secret(value: &str) -> Result<SecretString, Infallible> {
    Ok(SecretString::new(value.to_string()))
}

impl AppConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        check_url("housing_api_url", &self.housing_api_url)?;
        check_url("ollama_url", &self.ollama_url)?;
        check_url("gemini_base_url", &self.gemini_base_url)?;
        check_not_empty("embedding_model", &self.embedding_model)?;
        check_not_empty("gemini_model", &self.gemini_model)?;
        check_not_empty("gemini_api_key", self.gemini_api_key.expose_secret())?;

        if self.fetch_timeout_secs == 0 {
            return Err(out_of_range("fetch_timeout_secs", "must be at least 1"));
        }
        if self.embedding_dimension == 0 {
            return Err(out_of_range("embedding_dimension", "must be at least 1"));
        }
        if self.top_k == 0 {
            return Err(out_of_range("top_k", "must be at least 1"));
        }
        if self.max_body_bytes == 0 {
            return Err(out_of_range("max_body_bytes", "must be at least 1"));
        }
        if !(0.0..=2.0).contains(&self.temperature) {
            return Err(out_of_range(
                "temperature",
                &format!("{} is not within [0, 2]", self.temperature),
            ));
        }

        self.origin_headers()?;
        Ok(())
    }

    pub fn fetch_timeout(&self) -> Duration {
        Duration::from_secs(self.fetch_timeout_secs)
    }

    pub fn origin_headers(&self) -> Result<Vec<HeaderValue>, ConfigError> {
        self.allowed_origins
            .iter()
            .map(|origin| origin.trim())
            .filter(|origin| !origin.is_empty())
            .map(|origin| {
                HeaderValue::from_str(origin)
                    .map_err(|_| ConfigError::InvalidOrigin(origin.to_string()))
            })
            .collect()
    }
}

fn check_url(field: &'static str, value: &str) -> Result<(), ConfigError> {
    check_not_empty(field, value)?;
    url::Url::parse(value)
        .map(|_| ())
        .map_err(|err| ConfigError::InvalidUrl {
            field,
            reason: err.to_string(),
        })
}

fn check_not_empty(field: &'static str, value: &str) -> Result<(), ConfigError> {
    if value.trim().is_empty() {
        return Err(ConfigError::Empty(field));
    }
    Ok(())
}

fn out_of_range(field: &'static str, reason: &str) -> ConfigError {
    ConfigError::OutOfRange {
        field,
        reason: reason.to_string(),
    }
}
