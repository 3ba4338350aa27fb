pub mod place_store_error;
