#[derive(Debug)]
pub enum NominatimServiceError {
    Internal(String),
}

impl std::fmt::Display for NominatimServiceError {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            NominatimServiceError::Internal(e) => write!(f, "Internal error: {}", e),
        }
    }
}
