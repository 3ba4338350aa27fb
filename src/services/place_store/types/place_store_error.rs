#[derive(Debug)]
pub enum PlaceStoreError {
    InvalidDocument(String),
    Query(String),
}

impl std::fmt::Display for PlaceStoreError {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            PlaceStoreError::InvalidDocument(e) => write!(f, "Invalid place document: {}", e),
            PlaceStoreError::Query(e) => write!(f, "Place query failed: {}", e),
        }
    }
}

impl std::error::Error for PlaceStoreError {}
