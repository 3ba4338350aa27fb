use crate::services::{
    nominatim_client::nominatim_service::NominatimService,
    place_query::place_query_service::PlaceQueryService,
    place_search::place_search_service::PlaceSearchService,
};

#[derive(Clone)]
pub struct AppState {
    pub place_query_service: PlaceQueryService,
    pub place_search_service: PlaceSearchService,
    pub nominatim_service: NominatimService,
}
