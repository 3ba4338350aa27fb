pub mod app_config;
pub mod app_state;
pub mod lat_long_location;
pub mod place;
