use std::sync::Arc;

use tracing::debug;

use crate::{
    services::place_store::place_store::PlaceStore, types::place::Place,
    utils::distance::NEARBY_EARTH_RADIUS_KM,
};

use super::types::{nearby_error::NearbyError, nearby_request::NearbyRequest};

#[derive(Clone)]
pub struct PlaceQueryService {
    store: Arc<dyn PlaceStore>,
}

impl PlaceQueryService {
    pub fn new(store: Arc<dyn PlaceStore>) -> Self {
        Self { store }
    }

    pub async fn find_nearby(&self, request: NearbyRequest) -> Result<Vec<Place>, NearbyError> {
        let radius_radians = request.radius_km / NEARBY_EARTH_RADIUS_KM;

        debug!(
            "Finding places within {} km ({} rad) of {:?}",
            request.radius_km, radius_radians, request.center.coordinates
        );

        self.store
            .find_within_sphere(&request.center, radius_radians)
            .await
            .map_err(|e| NearbyError::Internal(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use async_trait::async_trait;

    use super::*;
    use crate::{
        services::place_store::{
            memory_place_store::MemoryPlaceStore, seed::default_places,
            types::place_store_error::PlaceStoreError,
        },
        types::place::PointLocation,
    };

    struct RecordingStore {
        radius: std::sync::Mutex<Option<f64>>,
    }

    #[async_trait]
    impl PlaceStore for RecordingStore {
        async fn find_within_sphere(
            &self,
            _center: &PointLocation,
            radius_radians: f64,
        ) -> Result<Vec<Place>, PlaceStoreError> {
            *self.radius.lock().unwrap() = Some(radius_radians);
            Ok(vec![])
        }

        async fn insert_many(&self, _places: Vec<Place>) -> Result<usize, PlaceStoreError> {
            Ok(0)
        }
    }

    struct BrokenStore;

    #[async_trait]
    impl PlaceStore for BrokenStore {
        async fn find_within_sphere(
            &self,
            _center: &PointLocation,
            _radius_radians: f64,
        ) -> Result<Vec<Place>, PlaceStoreError> {
            Err(PlaceStoreError::Query("connection reset".to_string()))
        }

        async fn insert_many(&self, _places: Vec<Place>) -> Result<usize, PlaceStoreError> {
            Err(PlaceStoreError::Query("connection reset".to_string()))
        }
    }

    async fn seeded_service() -> PlaceQueryService {
        let store = MemoryPlaceStore::new();
        store.insert_many(default_places()).await.unwrap();
        PlaceQueryService::new(Arc::new(store))
    }

    #[tokio::test]
    async fn both_seeded_places_are_within_one_km() {
        let service = seeded_service().await;

        let places = service
            .find_nearby(NearbyRequest::new(85.334, 23.356, Some(1.0)).unwrap())
            .await
            .unwrap();

        assert_eq!(places, default_places());
    }

    #[tokio::test]
    async fn small_radius_excludes_the_farther_place() {
        let service = seeded_service().await;

        let places = service
            .find_nearby(NearbyRequest::new(85.3333, 23.3555, Some(0.05)).unwrap())
            .await
            .unwrap();

        assert_eq!(places.len(), 1);
        assert_eq!(places[0].name.as_deref(), Some("City Hospital"));
    }

    #[tokio::test]
    async fn far_center_finds_nothing() {
        let service = seeded_service().await;

        let places = service
            .find_nearby(NearbyRequest::new(-74.0060, 40.7128, Some(50.0)).unwrap())
            .await
            .unwrap();

        assert!(places.is_empty());
    }

    #[tokio::test]
    async fn converts_radius_with_equatorial_radius() {
        let store = Arc::new(RecordingStore {
            radius: std::sync::Mutex::new(None),
        });
        let service = PlaceQueryService::new(store.clone());

        service
            .find_nearby(NearbyRequest::new(0.0, 0.0, Some(6378.1)).unwrap())
            .await
            .unwrap();

        let radius = (*store.radius.lock().unwrap()).unwrap();
        assert!((radius - 1.0).abs() < 1e-12);
    }

    #[tokio::test]
    async fn store_failure_is_internal_with_message() {
        let service = PlaceQueryService::new(Arc::new(BrokenStore));

        let err = service
            .find_nearby(NearbyRequest::new(0.0, 0.0, None).unwrap())
            .await
            .unwrap_err();

        match err {
            NearbyError::Internal(message) => assert!(message.contains("connection reset")),
            other => panic!("unexpected error: {}", other),
        }
    }
}
