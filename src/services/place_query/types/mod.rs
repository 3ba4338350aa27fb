pub mod nearby_error;
pub mod nearby_request;
