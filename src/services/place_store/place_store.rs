use async_trait::async_trait;

use crate::types::place::{Place, PointLocation};

use super::types::place_store_error::PlaceStoreError;

/// Storage backend for places. Implementations evaluate the spherical-cap
/// predicate themselves, the way a 2dsphere index would.
#[async_trait]
pub trait PlaceStore: Send + Sync {
    /// Every place whose location lies within `radius_radians` of `center`.
    async fn find_within_sphere(
        &self,
        center: &PointLocation,
        radius_radians: f64,
    ) -> Result<Vec<Place>, PlaceStoreError>;

    /// Inserts all places, returning how many were stored. Nothing is stored if
    /// any document is invalid.
    async fn insert_many(&self, places: Vec<Place>) -> Result<usize, PlaceStoreError>;
}
