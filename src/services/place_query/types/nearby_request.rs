use crate::types::place::PointLocation;

use super::nearby_error::NearbyError;

pub const DEFAULT_RADIUS_KM: f64 = 1.0;

/// A validated "places near a point" request.
#[derive(Clone, Debug, PartialEq)]
pub struct NearbyRequest {
    pub center: PointLocation,
    pub radius_km: f64,
}

impl NearbyRequest {
    pub fn new(lng: f64, lat: f64, radius_km: Option<f64>) -> Result<Self, NearbyError> {
        if !lng.is_finite() || !(-180.0..=180.0).contains(&lng) {
            return Err(NearbyError::InvalidArgument(format!(
                "lng must be a finite number in [-180, 180], got {}",
                lng
            )));
        }

        if !lat.is_finite() || !(-90.0..=90.0).contains(&lat) {
            return Err(NearbyError::InvalidArgument(format!(
                "lat must be a finite number in [-90, 90], got {}",
                lat
            )));
        }

        let radius_km = radius_km.unwrap_or(DEFAULT_RADIUS_KM);
        if !radius_km.is_finite() || radius_km <= 0.0 {
            return Err(NearbyError::InvalidArgument(format!(
                "distance must be a finite number greater than 0, got {}",
                radius_km
            )));
        }

        Ok(NearbyRequest {
            center: PointLocation::new(lng, lat),
            radius_km,
        })
    }
}
