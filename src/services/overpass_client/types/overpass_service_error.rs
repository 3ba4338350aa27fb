#[derive(Debug)]
pub enum OverpassServiceError {
    Internal(String),
}

impl std::fmt::Display for OverpassServiceError {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            OverpassServiceError::Internal(e) => write!(f, "Internal error: {}", e),
        }
    }
}
