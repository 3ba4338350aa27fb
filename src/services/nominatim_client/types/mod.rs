pub mod nominatim_response;
pub mod nominatim_service_error;
