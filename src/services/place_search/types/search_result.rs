pub const UNNAMED_PLACE: &str = "Unnamed";
pub const UNKNOWN_ADDRESS: &str = "Unknown";

/// An amenity found around the searched place, annotated for display.
#[derive(Clone, Debug, PartialEq)]
pub struct SearchResult {
    pub id: i64,
    pub name: String,
    pub category: String,
    pub lat: f64,
    pub lon: f64,
    pub address: String,
    pub distance_km: Option<f64>,
}
