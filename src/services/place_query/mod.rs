pub mod place_query_service;
pub mod types;
