#[derive(Debug)]
pub enum NearbyError {
    InvalidArgument(String),
    Internal(String),
}

impl std::fmt::Display for NearbyError {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            NearbyError::InvalidArgument(e) => write!(f, "Invalid argument: {}", e),
            NearbyError::Internal(e) => write!(f, "Internal error: {}", e),
        }
    }
}
