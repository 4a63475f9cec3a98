use std::time::Duration;

use reqwest::Client;

use crate::{HousingClient, HousingError};

pub const DEFAULT_FETCH_TIMEOUT: Duration = Duration::from_secs(10);

#[derive(Debug, Clone)]
pub struct HousingClientBuilder {
    base_url: Option<String>,
    timeout: Duration,
    strict_payloads: bool,
}

impl Default for HousingClientBuilder {
    fn default() -> Self {
        Self {
            base_url: None,
            timeout: DEFAULT_FETCH_TIMEOUT,
            strict_payloads: false,
        }
    }
}

impl HousingClientBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn base_url(mut self, value: impl Into<String>) -> Self {
        self.base_url = Some(value.into());
        self
    }

    pub fn timeout(mut self, value: Duration) -> Self {
        self.timeout = value;
        self
    }

    /// Reject payloads whose status is not 200 or that carry no `data`,
    /// instead of skipping them with a warning.
    pub fn strict_payloads(mut self, value: bool) -> Self {
        self.strict_payloads = value;
        self
    }

    pub fn build(self) -> Result<HousingClient, HousingError> {
        let base_url = self
            .base_url
            .ok_or_else(|| HousingError::Config("base_url is required".to_string()))?;
        if base_url.trim().is_empty() {
            return Err(HousingError::Config("base_url cannot be empty".to_string()));
        }
        reqwest::Url::parse(&base_url)
            .map_err(|err| HousingError::Config(format!("invalid base_url: {err}")))?;
        if self.timeout.is_zero() {
            return Err(HousingError::Config("timeout must be positive".to_string()));
        }

        let http = Client::builder()
            .timeout(self.timeout)
            .build()
            .map_err(|err| HousingError::Config(err.to_string()))?;

        Ok(HousingClient::new(
            http,
            base_url.trim_end_matches('/').to_string(),
            self.strict_payloads,
        ))
    }
}
