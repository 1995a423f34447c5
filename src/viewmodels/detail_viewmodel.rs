// ============================================================================
// DETAIL VIEWMODEL - Panel de detalles de una reseña
// ============================================================================

use crate::models::Review;
use crate::state::AppState;
use crate::utils::{format_timestamp, rating_stars, NO_IMAGES_PLACEHOLDER};
use crate::views::{ReviewsView, ViewError};

/// Contenido ya formateado del panel de detalles
#[derive(Clone, Debug, PartialEq)]
pub struct ReviewDetail {
    pub name: String,
    pub address: String,
    /// `★★★★☆`
    pub rating: String,
    /// En el orden recibido; vacío => placeholder
    pub images: Vec<String>,
    /// `Nombre (email)`
    pub author: String,
    pub issued_at: String,
    pub expires_at: String,
    pub raw_token: String,
}

impl ReviewDetail {
    pub fn from_review(review: &Review) -> Self {
        Self {
            name: review.establishment.clone(),
            address: review.address.clone(),
            rating: rating_stars(review.rating),
            images: review.image_urls.clone(),
            author: format!("{} ({})", review.author_name, review.author_email),
            issued_at: format_timestamp(review.token_issued_at),
            expires_at: format_timestamp(review.token_expires_at),
            raw_token: review.raw_token.clone(),
        }
    }

    /// Texto a mostrar cuando no hay fotos
    pub fn placeholder(&self) -> Option<&'static str> {
        if self.images.is_empty() {
            Some(NO_IMAGES_PLACEHOLDER)
        } else {
            None
        }
    }
}

/// ViewModel del panel - SOLO lógica de preparación
pub struct DetailViewModel;

impl DetailViewModel {
    /// Abrir el panel con una reseña (sobrescribe el contenido anterior)
    pub fn open(view: &dyn ReviewsView, state: &AppState, review: &Review) -> Result<(), ViewError> {
        log::info!("🔎 [DETAIL] Mostrando detalles de {}", review.establishment);
        let detail = ReviewDetail::from_review(review);
        state.set_selected(Some(review.clone()));
        view.show_detail(&detail)
    }

    /// Ocultar el panel; el contenido se queda hasta la próxima apertura
    pub fn close(view: &dyn ReviewsView, state: &AppState) -> Result<(), ViewError> {
        state.set_selected(None);
        view.hide_detail()
    }
}
