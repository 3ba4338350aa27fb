use reqwest::header::USER_AGENT;
use urlencoding::encode;

use super::types::{
    nominatim_response::{NominatimReverseResponse, NominatimSearchResponseItem},
    nominatim_service_error::NominatimServiceError,
};

#[derive(Clone)]
pub struct NominatimServiceConfig {
    pub host: String,
    pub user_agent: String,
}

#[derive(Clone)]
pub struct NominatimService {
    config: NominatimServiceConfig,
    client: reqwest::Client,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BoundingBox {
    pub south: f64,
    pub north: f64,
    pub west: f64,
    pub east: f64,
}

impl BoundingBox {
    fn from_strings(raw: &[String]) -> Result<Self, NominatimServiceError> {
        let parsed = raw
            .iter()
            .map(|s| s.trim().parse::<f64>())
            .collect::<Result<Vec<_>, _>>()
            .map_err(|e| {
                NominatimServiceError::Internal(format!("Invalid bounding box {:?}: {}", raw, e))
            })?;

        match parsed.as_slice() {
            [south, north, west, east] => Ok(BoundingBox {
                south: *south,
                north: *north,
                west: *west,
                east: *east,
            }),
            _ => Err(NominatimServiceError::Internal(format!(
                "Bounding box must have 4 values, got {:?}",
                raw
            ))),
        }
    }
}

impl NominatimService {
    pub fn new(config: NominatimServiceConfig) -> Self {
        Self {
            config,
            client: reqwest::Client::new(),
        }
    }

    /// Bounding box of the best match for `query`, or `None` if nothing matched.
    pub async fn search_bounding_box(
        &self,
        query: &str,
    ) -> Result<Option<BoundingBox>, NominatimServiceError> {
        let url = format!(
            "{}/search?format=json&q={}&limit=1",
            self.config.host,
            encode(query)
        );

        let body = self
            .client
            .get(&url)
            .header(USER_AGENT, &self.config.user_agent)
            .send()
            .await
            .and_then(|r| r.error_for_status())
            .map_err(|e| NominatimServiceError::Internal(format!("Failed to send request: {}", e)))?
            .json::<Vec<NominatimSearchResponseItem>>()
            .await
            .map_err(|e| {
                NominatimServiceError::Internal(format!("Failed to get response body: {}", e))
            })?;

        match body.first() {
            Some(item) => BoundingBox::from_strings(&item.boundingbox).map(Some),
            None => Ok(None),
        }
    }

    pub async fn reverse(&self, lat: f64, lon: f64) -> Result<String, NominatimServiceError> {
        let url = format!(
            "{}/reverse?format=json&lat={}&lon={}",
            self.config.host, lat, lon
        );

        let body = self
            .client
            .get(&url)
            .header(USER_AGENT, &self.config.user_agent)
            .send()
            .await
            .and_then(|r| r.error_for_status())
            .map_err(|e| NominatimServiceError::Internal(format!("Failed to send request: {}", e)))?
            .json::<NominatimReverseResponse>()
            .await
            .map_err(|e| {
                NominatimServiceError::Internal(format!("Failed to get response body: {}", e))
            })?;

        Ok(body.display_name)
    }
}
