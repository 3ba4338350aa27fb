use serde::{Deserialize, Serialize};

/// One hit of `/search?format=json`. Nominatim sends the bounding box as
/// strings in `[south, north, west, east]` order.
#[derive(Serialize, Deserialize)]
pub struct NominatimSearchResponseItem {
    pub boundingbox: Vec<String>,
}

#[derive(Serialize, Deserialize)]
pub struct NominatimReverseResponse {
    pub display_name: String,
}
