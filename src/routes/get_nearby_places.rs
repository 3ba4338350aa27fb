use crate::{
    services::place_query::types::{nearby_error::NearbyError, nearby_request::NearbyRequest},
    types::app_state::AppState,
    utils::{app_error::AppError, validated_query::ValidatedQuery},
};
use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Deserialize;
use tracing::error;
use validator::Validate;

#[derive(Validate, Deserialize)]
pub struct GetNearbyPlacesPayload {
    #[validate(range(min = -180.0, max = 180.0, message = "Must be between -180 and 180"))]
    pub lng: f64,

    #[validate(range(min = -90.0, max = 90.0, message = "Must be between -90 and 90"))]
    pub lat: f64,

    pub distance: Option<f64>,
}

pub async fn get_nearby_places(
    State(state): State<AppState>,
    ValidatedQuery(GetNearbyPlacesPayload { lng, lat, distance }): ValidatedQuery<
        GetNearbyPlacesPayload,
    >,
) -> Result<Response, AppError> {
    let request = NearbyRequest::new(lng, lat, distance)
        .map_err(|e| AppError::new(StatusCode::BAD_REQUEST, e.to_string().as_str()))?;

    let places = state
        .place_query_service
        .find_nearby(request)
        .await
        .map_err(|e| match e {
            NearbyError::InvalidArgument(message) => {
                AppError::new(StatusCode::BAD_REQUEST, message.as_str())
            }
            NearbyError::Internal(message) => {
                error!("Failed to find nearby places: {}", message);
                AppError::new(StatusCode::INTERNAL_SERVER_ERROR, message.as_str())
            }
        })?;

    Ok((StatusCode::OK, Json(places)).into_response())
}
