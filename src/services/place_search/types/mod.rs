pub mod place_search_error;
pub mod search_filter;
pub mod search_result;
