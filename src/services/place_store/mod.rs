pub mod memory_place_store;
pub mod place_store;
pub mod seed;
pub mod types;
