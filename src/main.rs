mod app;
mod routes;
mod services;
mod types;
mod utils;

use std::sync::Arc;

use tracing::info;

use crate::{
    services::place_store::{
        memory_place_store::MemoryPlaceStore,
        place_store::PlaceStore,
        seed::{default_places, load_seed_file},
    },
    types::app_config::AppConfig,
};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt::init();
    info!("Starting app...");

    let config = AppConfig::from_env()?;
    info!(
        "Using nominatim at {} and overpass at {}",
        config.nominatim_host, config.overpass_host
    );

    let places = match &config.places_seed_path {
        Some(path) => {
            info!("Seeding places from {}", path.display());
            load_seed_file(path).await?
        }
        None => {
            info!("No PLACES_SEED_PATH set, seeding demo places");
            default_places()
        }
    };

    let store = MemoryPlaceStore::new();
    let seeded = store.insert_many(places).await?;
    info!("Seeded {} places", seeded);

    let app = app::gen_app(&config, Arc::new(store));

    let listener = tokio::net::TcpListener::bind(config.bind_addr).await?;
    info!("Listening on {}", config.bind_addr);
    axum::serve(listener, app).await?;

    Ok(())
}
