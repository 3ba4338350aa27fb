use reqwest::header::USER_AGENT;
use urlencoding::encode;

use crate::services::nominatim_client::nominatim_service::BoundingBox;

use super::types::{
    overpass_response::{OverpassElement, OverpassResponse},
    overpass_service_error::OverpassServiceError,
};

#[derive(Clone)]
pub struct OverpassServiceConfig {
    pub host: String,
    pub user_agent: String,
}

#[derive(Clone)]
pub struct OverpassService {
    config: OverpassServiceConfig,
    client: reqwest::Client,
}

/// Overpass QL selecting nodes tagged with any of `amenities` inside `bbox`.
pub fn build_amenity_query(bbox: &BoundingBox, amenities: &[&str]) -> String {
    let bounds = format!("{},{},{},{}", bbox.south, bbox.west, bbox.north, bbox.east);

    let selectors: String = amenities
        .iter()
        .map(|a| format!("  node[\"amenity\"=\"{}\"]({});\n", a, bounds))
        .collect();

    format!("[out:json];\n(\n{});\nout body;\n", selectors)
}

impl OverpassService {
    pub fn new(config: OverpassServiceConfig) -> Self {
        Self {
            config,
            client: reqwest::Client::new(),
        }
    }

    pub async fn find_amenities(
        &self,
        bbox: &BoundingBox,
        amenities: &[&str],
    ) -> Result<Vec<OverpassElement>, OverpassServiceError> {
        let url = format!(
            "{}/api/interpreter?data={}",
            self.config.host,
            encode(&build_amenity_query(bbox, amenities))
        );

        let body = self
            .client
            .get(&url)
            .header(USER_AGENT, &self.config.user_agent)
            .send()
            .await
            .and_then(|r| r.error_for_status())
            .map_err(|e| OverpassServiceError::Internal(format!("Failed to send request: {}", e)))?
            .json::<OverpassResponse>()
            .await
            .map_err(|e| {
                OverpassServiceError::Internal(format!("Failed to get response body: {}", e))
            })?;

        Ok(body.elements)
    }
}
