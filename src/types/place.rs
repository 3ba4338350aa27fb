use serde::{Deserialize, Serialize};

fn point_kind() -> String {
    "Point".to_string()
}

/// GeoJSON point. Coordinates are `[longitude, latitude]` in degrees.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PointLocation {
    #[serde(rename = "type", default = "point_kind")]
    pub kind: String,
    pub coordinates: [f64; 2],
}

impl PointLocation {
    pub fn new(longitude: f64, latitude: f64) -> Self {
        PointLocation {
            kind: point_kind(),
            coordinates: [longitude, latitude],
        }
    }

    pub fn longitude(&self) -> f64 {
        self.coordinates[0]
    }

    pub fn latitude(&self) -> f64 {
        self.coordinates[1]
    }

    pub fn is_in_range(&self) -> bool {
        (-180.0..=180.0).contains(&self.longitude()) && (-90.0..=90.0).contains(&self.latitude())
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Place {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(rename = "type", alias = "category")]
    pub category: String,
    pub location: PointLocation,
}

impl Place {
    pub fn new(name: &str, category: &str, longitude: f64, latitude: f64) -> Self {
        Place {
            name: Some(name.to_string()),
            category: category.to_string(),
            location: PointLocation::new(longitude, latitude),
        }
    }
}
