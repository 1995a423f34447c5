// ============================================================================
// API CLIENT - SOLO COMUNICACIÓN HTTP (Stateless)
// ============================================================================
// NO tiene lógica de negocio, solo hace requests HTTP contra /reviews
// ============================================================================

use crate::models::{Review, ReviewDraft};
use super::error::ApiError;

/// Contrato del backend de reseñas
#[allow(async_fn_in_trait)]
pub trait ReviewsApi {
    /// Tipo de fichero adjunto de la plataforma
    type Upload;

    /// `GET /reviews` con `Authorization: Bearer <token>`
    async fn list_reviews(&self, token: &str) -> Result<Vec<Review>, ApiError>;

    /// `POST /reviews` multipart (establishment, address, rating, files*)
    async fn create_review(
        &self,
        token: &str,
        draft: &ReviewDraft<Self::Upload>,
    ) -> Result<(), ApiError>;
}

#[cfg(target_arch = "wasm32")]
pub use web::ApiClient;

#[cfg(target_arch = "wasm32")]
mod web {
    use gloo_net::http::Request;
    use web_sys::{File, FormData};

    use crate::config::CONFIG;
    use crate::models::session::bearer;
    use crate::models::{Review, ReviewDraft};
    use crate::services::error::ApiError;
    use crate::services::http::RequestGuard;
    use super::ReviewsApi;

    /// Cliente API - SOLO comunicación HTTP (stateless)
    #[derive(Clone)]
    pub struct ApiClient {
        reviews_url: String,
        timeout_millis: u32,
    }

    impl ApiClient {
        pub fn new() -> Self {
            Self {
                reviews_url: CONFIG.endpoint("reviews"),
                timeout_millis: CONFIG.network_timeout_millis(),
            }
        }

        fn multipart(draft: &ReviewDraft<File>) -> Result<FormData, ApiError> {
            let js_err = |e: wasm_bindgen::JsValue| ApiError::Request(format!("FormData: {:?}", e));

            let form = FormData::new().map_err(js_err)?;
            form.append_with_str("establishment", &draft.establishment).map_err(js_err)?;
            form.append_with_str("address", &draft.address).map_err(js_err)?;
            form.append_with_str("rating", &draft.rating).map_err(js_err)?;
            for file in &draft.files {
                form.append_with_blob_and_filename("files", file, &file.name())
                    .map_err(js_err)?;
            }
            Ok(form)
        }
    }

    impl Default for ApiClient {
        fn default() -> Self {
            Self::new()
        }
    }

    impl ReviewsApi for ApiClient {
        type Upload = File;

        async fn list_reviews(&self, token: &str) -> Result<Vec<Review>, ApiError> {
            log::info!("📋 [API] GET {}", self.reviews_url);

            let guard = RequestGuard::arm(self.timeout_millis)?;
            let signal = guard.signal();
            let response = Request::get(&self.reviews_url)
                .header("Authorization", &bearer(token))
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

            let reviews = response
                .json::<Vec<Review>>()
                .await
                .map_err(|e| guard.body_error(e))?;

            log::info!("✅ [API] {} reseñas recibidas", reviews.len());
            Ok(reviews)
        }

        async fn create_review(
            &self,
            token: &str,
            draft: &ReviewDraft<File>,
        ) -> Result<(), ApiError> {
            log::info!(
                "📝 [API] POST {} ({}, {} ficheros)",
                self.reviews_url,
                draft.establishment,
                draft.files.len()
            );

            let form = Self::multipart(draft)?;
            let guard = RequestGuard::arm(self.timeout_millis)?;
            let signal = guard.signal();

            // Sin Content-Type explícito: el navegador pone el boundary del multipart
            let request = Request::post(&self.reviews_url)
                .header("Authorization", &bearer(token))
                .abort_signal(Some(&signal))
                .body(form)
                .map_err(|e| ApiError::Request(e.to_string()))?;

            let response = request.send().await.map_err(|e| guard.send_error(e))?;

            if response.ok() {
                Ok(())
            } else {
                Err(ApiError::Http {
                    status: response.status(),
                    status_text: response.status_text(),
                })
            }
        }
    }
}
