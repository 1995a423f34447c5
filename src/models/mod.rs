pub mod review;
pub mod session;
pub mod geocoding;

pub use review::{Review, ReviewDraft};
pub use session::UserSession;
pub use geocoding::GeocodeHit;

use serde::{Deserialize, Serialize};

/// Punto geográfico (grados decimales)
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub latitude: f64,
    pub longitude: f64,
}
