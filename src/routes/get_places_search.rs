use crate::{
    services::place_search::{
        place_search_service::PlaceSearchInput,
        types::{
            place_search_error::PlaceSearchError,
            search_filter::{CategoryFilter, SearchFilter},
            search_result::SearchResult,
        },
    },
    types::{app_state::AppState, lat_long_location::LatLongLocation},
    utils::{app_error::AppError, validated_query::ValidatedQuery},
};
use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use tracing::error;
use validator::Validate;

#[derive(Validate, Deserialize)]
pub struct GetPlacesSearchPayload {
    #[validate(length(min = 1, message = "Must be at least 1 character"))]
    pub place: String,

    #[validate(range(min = -90.0, max = 90.0, message = "Must be between -90 and 90"))]
    pub lat: Option<f64>,

    #[validate(range(min = -180.0, max = 180.0, message = "Must be between -180 and 180"))]
    pub lon: Option<f64>,

    #[serde(rename = "type")]
    pub category: Option<String>,

    pub search: Option<String>,
}

#[derive(Serialize, Deserialize)]
pub struct GetPlacesSearchResponseDataPlace {
    pub id: i64,
    pub name: String,
    #[serde(rename = "type")]
    pub category: String,
    pub lat: f64,
    pub lon: f64,
    pub address: String,
    pub distance_km: Option<f64>,
}

#[derive(Serialize, Deserialize)]
pub struct GetPlacesSearchResponseData {
    pub places: Vec<GetPlacesSearchResponseDataPlace>,
}

#[derive(Serialize, Deserialize)]
pub struct GetPlacesSearchResponse {
    pub data: GetPlacesSearchResponseData,
}

impl From<SearchResult> for GetPlacesSearchResponseDataPlace {
    fn from(r: SearchResult) -> Self {
        GetPlacesSearchResponseDataPlace {
            id: r.id,
            name: r.name,
            category: r.category,
            lat: r.lat,
            lon: r.lon,
            address: r.address,
            distance_km: r.distance_km.map(|d| (d * 100.0).round() / 100.0),
        }
    }
}

pub async fn get_places_search(
    State(state): State<AppState>,
    ValidatedQuery(payload): ValidatedQuery<GetPlacesSearchPayload>,
) -> Result<Response, AppError> {
    let user_location = match (payload.lat, payload.lon) {
        (Some(latitude), Some(longitude)) if latitude.is_finite() && longitude.is_finite() => {
            Some(LatLongLocation {
                latitude,
                longitude,
            })
        }
        (None, None) => None,
        _ => {
            return Err(AppError::new(
                StatusCode::BAD_REQUEST,
                "Invalid query: lat and lon must be finite numbers and given together",
            ))
        }
    };

    let results = state
        .place_search_service
        .search(PlaceSearchInput {
            place_name: payload.place,
            user_location,
            filter: SearchFilter {
                category: payload
                    .category
                    .as_deref()
                    .map(CategoryFilter::parse)
                    .unwrap_or_default(),
                name_contains: payload.search.unwrap_or_default(),
            },
        })
        .await
        .map_err(|e| match e {
            PlaceSearchError::LocationNotFound(_) => {
                AppError::new(StatusCode::NOT_FOUND, "No location found")
            }
            other => {
                error!("Failed to search places: {}", other);
                AppError::new(StatusCode::INTERNAL_SERVER_ERROR, "Something went wrong")
            }
        })?;

    Ok(Json(GetPlacesSearchResponse {
        data: GetPlacesSearchResponseData {
            places: results.into_iter().map(Into::into).collect(),
        },
    })
    .into_response())
}
