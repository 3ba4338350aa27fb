use std::path::Path;

use crate::types::place::Place;

use super::types::place_store_error::PlaceStoreError;

/// Demo data set loaded when no seed file is configured.
pub fn default_places() -> Vec<Place> {
    vec![
        Place::new("City Hospital", "Hospital", 85.3333, 23.3555),
        Place::new("Dr. Shweta Clinic", "Doctor", 85.3345, 23.3565),
    ]
}

/// Reads a JSON array of place documents.
pub async fn load_seed_file(path: &Path) -> Result<Vec<Place>, PlaceStoreError> {
    let raw = tokio::fs::read_to_string(path).await.map_err(|e| {
        PlaceStoreError::InvalidDocument(format!("Failed to read {}: {}", path.display(), e))
    })?;

    serde_json::from_str::<Vec<Place>>(&raw).map_err(|e| {
        PlaceStoreError::InvalidDocument(format!("Failed to parse {}: {}", path.display(), e))
    })
}
