use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::{
    types::place::{Place, PointLocation},
    utils::distance::central_angle,
};

use super::{place_store::PlaceStore, types::place_store_error::PlaceStoreError};

#[derive(Default)]
pub struct MemoryPlaceStore {
    places: RwLock<Vec<Place>>,
}

impl MemoryPlaceStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl PlaceStore for MemoryPlaceStore {
    async fn find_within_sphere(
        &self,
        center: &PointLocation,
        radius_radians: f64,
    ) -> Result<Vec<Place>, PlaceStoreError> {
        if !center.is_in_range() || !radius_radians.is_finite() || radius_radians < 0.0 {
            return Err(PlaceStoreError::Query(format!(
                "bad $centerSphere: [[{}, {}], {}]",
                center.longitude(),
                center.latitude(),
                radius_radians
            )));
        }

        let places = self.places.read().await;

        Ok(places
            .iter()
            .filter(|p| {
                central_angle(
                    center.latitude(),
                    center.longitude(),
                    p.location.latitude(),
                    p.location.longitude(),
                ) <= radius_radians
            })
            .cloned()
            .collect())
    }

    async fn insert_many(&self, places: Vec<Place>) -> Result<usize, PlaceStoreError> {
        if let Some(bad) = places.iter().find(|p| !p.location.is_in_range()) {
            return Err(PlaceStoreError::InvalidDocument(format!(
                "coordinates out of range: {:?}",
                bad.location.coordinates
            )));
        }

        let count = places.len();
        self.places.write().await.extend(places);

        Ok(count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn seeded_store() -> MemoryPlaceStore {
        let store = MemoryPlaceStore::new();
        store
            .insert_many(vec![
                Place::new("City Hospital", "Hospital", 85.3333, 23.3555),
                Place::new("Dr. Shweta Clinic", "Doctor", 85.3345, 23.3565),
                Place::new("Far Away Clinic", "Doctor", -74.0060, 40.7128),
            ])
            .await
            .unwrap();
        store
    }

    #[tokio::test]
    async fn finds_points_inside_cap_only() {
        let store = seeded_store().await;

        let found = store
            .find_within_sphere(&PointLocation::new(85.334, 23.356), 1.0 / 6378.1)
            .await
            .unwrap();

        let names: Vec<_> = found.iter().filter_map(|p| p.name.as_deref()).collect();
        assert_eq!(names, vec!["City Hospital", "Dr. Shweta Clinic"]);
    }

    #[tokio::test]
    async fn point_at_center_is_always_included() {
        let store = seeded_store().await;

        let found = store
            .find_within_sphere(&PointLocation::new(-74.0060, 40.7128), 1e-12)
            .await
            .unwrap();

        assert_eq!(found.len(), 1);
        assert_eq!(found[0].name.as_deref(), Some("Far Away Clinic"));
    }

    #[tokio::test]
    async fn whole_sphere_returns_everything() {
        let store = seeded_store().await;

        let found = store
            .find_within_sphere(&PointLocation::new(0.0, 0.0), std::f64::consts::PI)
            .await
            .unwrap();

        assert_eq!(found.len(), 3);
    }

    #[tokio::test]
    async fn rejects_out_of_range_documents() {
        let store = MemoryPlaceStore::new();

        let result = store
            .insert_many(vec![
                Place::new("Ok", "hospital", 10.0, 10.0),
                Place::new("Bad", "hospital", 200.0, 10.0),
            ])
            .await;

        assert!(matches!(result, Err(PlaceStoreError::InvalidDocument(_))));

        let found = store
            .find_within_sphere(&PointLocation::new(10.0, 10.0), 1.0)
            .await
            .unwrap();
        assert!(found.is_empty());
    }

    #[tokio::test]
    async fn malformed_query_is_an_error() {
        let store = seeded_store().await;

        let result = store
            .find_within_sphere(&PointLocation::new(f64::NAN, 0.0), 1.0)
            .await;

        assert!(matches!(result, Err(PlaceStoreError::Query(_))));
    }
}
