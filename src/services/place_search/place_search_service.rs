use futures::future::join_all;
use tracing::{info, warn};

use crate::{
    services::{
        nominatim_client::nominatim_service::NominatimService,
        overpass_client::{
            overpass_service::OverpassService, types::overpass_response::OverpassElement,
        },
    },
    types::lat_long_location::LatLongLocation,
    utils::distance::distance_km,
};

use super::types::{
    place_search_error::PlaceSearchError,
    search_filter::SearchFilter,
    search_result::{SearchResult, UNKNOWN_ADDRESS, UNNAMED_PLACE},
};

/// Amenity kinds looked up around the searched place.
pub const SEARCHED_AMENITIES: [&str; 2] = ["hospital", "doctors"];

pub struct PlaceSearchInput {
    pub place_name: String,
    pub user_location: Option<LatLongLocation>,
    pub filter: SearchFilter,
}

#[derive(Clone)]
pub struct PlaceSearchService {
    nominatim_service: NominatimService,
    overpass_service: OverpassService,
}

impl PlaceSearchService {
    pub fn new(nominatim_service: NominatimService, overpass_service: OverpassService) -> Self {
        Self {
            nominatim_service,
            overpass_service,
        }
    }

    pub async fn search(
        &self,
        input: PlaceSearchInput,
    ) -> Result<Vec<SearchResult>, PlaceSearchError> {
        let bbox = self
            .nominatim_service
            .search_bounding_box(&input.place_name)
            .await
            .map_err(PlaceSearchError::Geocoding)?
            .ok_or_else(|| PlaceSearchError::LocationNotFound(input.place_name.clone()))?;

        let elements = self
            .overpass_service
            .find_amenities(&bbox, &SEARCHED_AMENITIES)
            .await
            .map_err(PlaceSearchError::Amenities)?;

        info!(
            "Found {} amenities around {:?}, resolving addresses",
            elements.len(),
            input.place_name
        );

        let results = join_all(
            elements
                .into_iter()
                .map(|el| self.annotate(el, input.user_location)),
        )
        .await;

        Ok(input.filter.apply(results))
    }

    async fn annotate(
        &self,
        element: OverpassElement,
        user_location: Option<LatLongLocation>,
    ) -> SearchResult {
        let address = match self.nominatim_service.reverse(element.lat, element.lon).await {
            Ok(address) => address,
            Err(e) => {
                warn!(
                    "Failed to resolve address of element {}: {}",
                    element.id, e
                );
                UNKNOWN_ADDRESS.to_string()
            }
        };

        let distance_km = user_location
            .map(|me| distance_km(me.latitude, me.longitude, element.lat, element.lon));

        SearchResult {
            id: element.id,
            name: element
                .tags
                .name
                .unwrap_or_else(|| UNNAMED_PLACE.to_string()),
            category: element.tags.amenity.unwrap_or_default(),
            lat: element.lat,
            lon: element.lon,
            address,
            distance_km,
        }
    }
}
