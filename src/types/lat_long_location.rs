use serde::{Deserialize, Serialize};

/// A user's position as reported by their device.
#[derive(Clone, Copy, Debug, PartialEq, Deserialize, Serialize)]
pub struct LatLongLocation {
    pub latitude: f64,
    pub longitude: f64,
}
