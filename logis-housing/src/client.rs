use logis_core::Document;
use reqwest::Client;
use serde::de::DeserializeOwned;

use crate::mapper::{room_document, statistics_document, OccupancyStatistics};
use crate::types::{ApiEnvelope, OccupancyCounts, RoomRecord};
use crate::{HousingClientBuilder, HousingError};

pub const STATISTICS_PATH: &str = "/logement";
pub const ROOMS_PATH: &str = "/logement/detail_chambre";

#[derive(Clone, Debug)]
pub struct HousingClient {
    http: Client,
    base_url: String,
    strict_payloads: bool,
}

impl HousingClient {
    pub fn builder() -> HousingClientBuilder {
        HousingClientBuilder::new()
    }

    pub(crate) fn new(http: Client, base_url: String, strict_payloads: bool) -> Self {
        Self {
            http,
            base_url,
            strict_payloads,
        }
    }

    /// Fetches the aggregated counts and returns the single statistics
    /// document, or nothing when the payload is not usable.
    pub async fn fetch_statistics(&self) -> Result<Vec<Document>, HousingError> {
        let url = self.url(STATISTICS_PATH);
        let envelope: ApiEnvelope<OccupancyCounts> = self.get_envelope(&url).await?;
        let Some(counts) = self.accept(&url, envelope)? else {
            return Ok(Vec::new());
        };

        let stats = OccupancyStatistics::from_counts(&counts);
        tracing::info!(
            url = %url,
            occupied = stats.occupied,
            available = stats.available,
            "fetched occupancy statistics"
        );
        Ok(vec![statistics_document(&stats)])
    }

    /// Fetches the room listing, one document per room in response order.
    pub async fn fetch_rooms(&self) -> Result<Vec<Document>, HousingError> {
        let url = self.url(ROOMS_PATH);
        let envelope: ApiEnvelope<Vec<RoomRecord>> = self.get_envelope(&url).await?;
        let Some(rooms) = self.accept(&url, envelope)? else {
            return Ok(Vec::new());
        };

        tracing::info!(url = %url, rooms = rooms.len(), "fetched room details");
        Ok(rooms
            .iter()
            .enumerate()
            .map(|(position, room)| room_document(position, room))
            .collect())
    }

    /// Statistics first, then rooms.
    pub async fn fetch_all(&self) -> Result<Vec<Document>, HousingError> {
        let mut documents = self.fetch_statistics().await?;
        documents.extend(self.fetch_rooms().await?);
        Ok(documents)
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    async fn get_envelope<T>(&self, url: &str) -> Result<ApiEnvelope<T>, HousingError>
    where
        T: DeserializeOwned,
    {
        let request_error = |source| HousingError::Request {
            url: url.to_string(),
            source,
        };
        let body = self
            .http
            .get(url)
            .send()
            .await
            .map_err(request_error)?
            .error_for_status()
            .map_err(request_error)?
            .bytes()
            .await
            .map_err(request_error)?;

        serde_json::from_slice(&body).map_err(|source| HousingError::Decode {
            url: url.to_string(),
            source,
        })
    }

    fn accept<T>(&self, url: &str, envelope: ApiEnvelope<T>) -> Result<Option<T>, HousingError> {
        let reason = match (envelope.is_ok(), envelope.data) {
            (true, Some(data)) => return Ok(Some(data)),
            (false, _) => format!("status {:?} is not 200", envelope.status),
            (true, None) => "missing 'data' field".to_string(),
        };

        if self.strict_payloads {
            return Err(HousingError::UnexpectedPayload {
                url: url.to_string(),
                reason,
            });
        }
        tracing::warn!(url = %url, reason = %reason, "skipping unusable housing payload");
        Ok(None)
    }
}
