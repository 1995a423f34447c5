// ============================================================================
// GEOCODING SERVICE - Búsqueda de direcciones (Nominatim), sin pasar por backend
// ============================================================================

use crate::models::GeocodeHit;
use super::error::ApiError;

#[allow(async_fn_in_trait)]
pub trait Geocoder {
    /// `GET /search?format=json&q=<query>`; lista vacía si no hay resultados
    async fn search(&self, query: &str) -> Result<Vec<GeocodeHit>, ApiError>;
}

#[cfg(target_arch = "wasm32")]
pub use web::NominatimClient;

#[cfg(target_arch = "wasm32")]
mod web {
    use gloo_net::http::Request;

    use crate::config::CONFIG;
    use crate::models::GeocodeHit;
    use crate::services::error::ApiError;
    use crate::services::http::RequestGuard;
    use super::Geocoder;

    #[derive(Clone)]
    pub struct NominatimClient {
        search_url: String,
        timeout_millis: u32,
    }

    impl NominatimClient {
        pub fn new() -> Self {
            Self {
                search_url: CONFIG.geocoding_search_url(),
                timeout_millis: CONFIG.network_timeout_millis(),
            }
        }
    }

    impl Default for NominatimClient {
        fn default() -> Self {
            Self::new()
        }
    }

    impl Geocoder for NominatimClient {
        async fn search(&self, query: &str) -> Result<Vec<GeocodeHit>, ApiError> {
            log::info!("🔍 [GEOCODING] Buscando: {}", query);

            let guard = RequestGuard::arm(self.timeout_millis)?;
            let signal = guard.signal();
            let response = Request::get(&self.search_url)
                .query([("format", "json"), ("q", query)])
                .abort_signal(Some(&signal))
                .send()
                .await
                .map_err(|e| guard.send_error(e))?;

            if !response.ok() {
                return Err(ApiError::Http {
                    status: response.status(),
                    status_text: response.status_text(),
                });
            }

            response
                .json::<Vec<GeocodeHit>>()
                .await
                .map_err(|e| guard.body_error(e))
        }
    }
}
