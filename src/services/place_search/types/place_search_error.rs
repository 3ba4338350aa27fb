use crate::services::{
    nominatim_client::types::nominatim_service_error::NominatimServiceError,
    overpass_client::types::overpass_service_error::OverpassServiceError,
};

#[derive(Debug)]
pub enum PlaceSearchError {
    LocationNotFound(String),
    Geocoding(NominatimServiceError),
    Amenities(OverpassServiceError),
}

impl std::fmt::Display for PlaceSearchError {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            PlaceSearchError::LocationNotFound(q) => write!(f, "No location found for {:?}", q),
            PlaceSearchError::Geocoding(e) => write!(f, "Geocoding failed: {}", e),
            PlaceSearchError::Amenities(e) => write!(f, "Amenity search failed: {}", e),
        }
    }
}
