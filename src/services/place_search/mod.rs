pub mod place_search_service;
pub mod types;
