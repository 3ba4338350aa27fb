pub mod nominatim_client;
pub mod overpass_client;
pub mod place_query;
pub mod place_search;
pub mod place_store;
