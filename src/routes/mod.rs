use axum::{routing::get, Router};

use crate::types::app_state::AppState;

mod get_my_location;
mod get_nearby_places;
mod get_places_search;

pub fn apply_routes(app: Router<AppState>) -> Router<AppState> {
    app.route("/nearby", get(get_nearby_places::get_nearby_places))
        .route("/places-search", get(get_places_search::get_places_search))
        .route("/my-location", get(get_my_location::get_my_location))
}
