use serde::{Deserialize, Serialize};

use super::Coordinates;

/// Resultado de `/search?format=json` (Nominatim devuelve lat/lon como texto)
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GeocodeHit {
    pub lat: String,
    pub lon: String,
    #[serde(default)]
    pub display_name: Option<String>,
}

impl GeocodeHit {
    pub fn coordinates(&self) -> Option<Coordinates> {
        let latitude = self.lat.trim().parse::<f64>().ok()?;
        let longitude = self.lon.trim().parse::<f64>().ok()?;
        if !latitude.is_finite() || !longitude.is_finite() {
            return None;
        }
        Some(Coordinates { latitude, longitude })
    }
}
