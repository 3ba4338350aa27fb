use std::sync::Arc;

use crate::{
    routes::apply_routes,
    services::{
        nominatim_client::nominatim_service::{NominatimService, NominatimServiceConfig},
        overpass_client::overpass_service::{OverpassService, OverpassServiceConfig},
        place_query::place_query_service::PlaceQueryService,
        place_search::place_search_service::PlaceSearchService,
        place_store::place_store::PlaceStore,
    },
    types::{app_config::AppConfig, app_state::AppState},
};
use axum::{routing::get, Router};
use tower_http::cors::CorsLayer;

pub fn gen_app(config: &AppConfig, store: Arc<dyn PlaceStore>) -> Router {
    let cors_middleware = CorsLayer::permissive();

    let nominatim_service = NominatimService::new(NominatimServiceConfig {
        host: config.nominatim_host.clone(),
        user_agent: config.user_agent.clone(),
    });
    let overpass_service = OverpassService::new(OverpassServiceConfig {
        host: config.overpass_host.clone(),
        user_agent: config.user_agent.clone(),
    });

    let state = AppState {
        place_query_service: PlaceQueryService::new(store),
        place_search_service: PlaceSearchService::new(nominatim_service.clone(), overpass_service),
        nominatim_service,
    };

    apply_routes(Router::new())
        .route("/", get(root))
        .layer(cors_middleware)
        .with_state(state)
}

async fn root() -> &'static str {
    "OK"
}

#[cfg(test)]
pub struct MockApp {
    pub app: Router,
    pub nominatim_server: mockito::ServerGuard,
    pub overpass_server: mockito::ServerGuard,
}

/// App backed by the demo places and mock Nominatim/Overpass servers.
#[cfg(test)]
pub async fn gen_mock_app() -> MockApp {
    use crate::services::place_store::{
        memory_place_store::MemoryPlaceStore, seed::default_places,
    };

    let nominatim_server = mockito::Server::new_async().await;
    let overpass_server = mockito::Server::new_async().await;

    let config = AppConfig {
        nominatim_host: nominatim_server.url(),
        overpass_host: overpass_server.url(),
        ..AppConfig::from_lookup(|_| None).unwrap()
    };

    let store = MemoryPlaceStore::new();
    store.insert_many(default_places()).await.unwrap();

    MockApp {
        app: gen_app(&config, Arc::new(store)),
        nominatim_server,
        overpass_server,
    }
}
