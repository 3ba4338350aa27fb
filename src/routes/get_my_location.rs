use crate::{
    types::app_state::AppState,
    utils::{app_error::AppError, validated_query::ValidatedQuery},
};
use axum::{
    extract::State,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use tracing::error;
use validator::Validate;

/// Shown until the user's address is known.
pub const ADDRESS_PLACEHOLDER: &str = "Fetching your address...";

#[derive(Validate, Deserialize)]
pub struct GetMyLocationPayload {
    #[validate(range(min = -90.0, max = 90.0, message = "Must be between -90 and 90"))]
    pub lat: f64,

    #[validate(range(min = -180.0, max = 180.0, message = "Must be between -180 and 180"))]
    pub lon: f64,
}

#[derive(Serialize, Deserialize)]
pub struct GetMyLocationResponseData {
    pub lat: f64,
    pub lon: f64,
    pub address: String,
}

#[derive(Serialize, Deserialize)]
pub struct GetMyLocationResponse {
    pub data: GetMyLocationResponseData,
}

pub async fn get_my_location(
    State(state): State<AppState>,
    ValidatedQuery(GetMyLocationPayload { lat, lon }): ValidatedQuery<GetMyLocationPayload>,
) -> Result<Response, AppError> {
    let address = state
        .nominatim_service
        .reverse(lat, lon)
        .await
        .unwrap_or_else(|e| {
            error!("Failed to get your address: {}", e);
            ADDRESS_PLACEHOLDER.to_string()
        });

    Ok(Json(GetMyLocationResponse {
        data: GetMyLocationResponseData { lat, lon, address },
    })
    .into_response())
}

#[cfg(test)]
mod tests {
    use axum::{
        body::{to_bytes, Body},
        http::{Request, StatusCode},
    };
    use tower::ServiceExt;
    use tracing_test::traced_test;

    use super::*;
    use crate::app::gen_mock_app;

    #[tokio::test]
    async fn test_get_my_location() {
        let mut mock_app = gen_mock_app().await;

        let mock_server = mock_app
            .nominatim_server
            .mock("GET", "/reverse")
            .match_query(mockito::Matcher::AllOf(vec![
                mockito::Matcher::UrlEncoded("format".to_string(), "json".to_string()),
                mockito::Matcher::UrlEncoded("lat".to_string(), "23.356".to_string()),
                mockito::Matcher::UrlEncoded("lon".to_string(), "85.334".to_string()),
            ]))
            .with_header("content-type", "application/json")
            .with_body(r#"{"display_name":"Kutchery Road, Ranchi"}"#)
            .create_async()
            .await;

        let response = mock_app
            .app
            .oneshot(
                Request::builder()
                    .uri("/my-location?lat=23.356&lon=85.334")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        mock_server.assert_async().await;

        assert_eq!(response.status(), StatusCode::OK);

        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let body: GetMyLocationResponse = serde_json::from_slice(&body).unwrap();

        assert_eq!(body.data.address, "Kutchery Road, Ranchi");
        assert_eq!(body.data.lat, 23.356);
    }

    #[tokio::test]
    #[traced_test]
    async fn lookup_failure_keeps_placeholder() {
        let mut mock_app = gen_mock_app().await;

        mock_app
            .nominatim_server
            .mock("GET", "/reverse")
            .match_query(mockito::Matcher::Any)
            .with_status(500)
            .create_async()
            .await;

        let response = mock_app
            .app
            .oneshot(
                Request::builder()
                    .uri("/my-location?lat=1&lon=2")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);

        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let body: GetMyLocationResponse = serde_json::from_slice(&body).unwrap();

        assert_eq!(body.data.address, ADDRESS_PLACEHOLDER);
        assert!(logs_contain("Failed to get your address"));
    }
}
