// ============================================================================
// REVIEWS VIEWMODEL - Carga de la lista + marcadores, y alta de reseñas
// ============================================================================
// Sin DOM: habla con ReviewsView / ReviewFormView / MapSurface / ReviewsApi
// ============================================================================

use std::rc::Rc;

use crate::maps::MapSurface;
use crate::models::Review;
use crate::services::{ApiError, ReviewsApi};
use crate::state::AppState;
use crate::utils::{rating_badge, MSG_REVIEW_CREATED, MSG_REVIEW_FAILED};
use crate::views::{ReviewFormView, ReviewsView};
use super::detail_viewmodel::DetailViewModel;

/// Entrada de la lista: nombre, `★ n` y dirección
#[derive(Clone, Debug, PartialEq)]
pub struct ReviewListItem {
    pub title: String,
    pub badge: String,
    pub address: String,
}

impl ReviewListItem {
    pub fn from_review(review: &Review) -> Self {
        Self {
            title: review.establishment.clone(),
            badge: rating_badge(review.rating),
            address: review.address.clone(),
        }
    }
}

/// Resultado de una recarga de la lista
#[derive(Debug, Clone, PartialEq)]
pub enum LoadOutcome {
    /// Lista y mapa reconstruidos con `n` reseñas
    Loaded(usize),
    /// Error registrado en el log; la lista queda vacía
    Failed(ApiError),
    /// Otra recarga posterior ya estaba en marcha; respuesta descartada
    Superseded,
    NoSession,
}

/// Resultado del envío del formulario
#[derive(Debug, Clone, PartialEq)]
pub enum SubmitOutcome {
    Created,
    Failed(ApiError),
    NoSession,
}

/// ViewModel de reseñas
pub struct ReviewsViewModel<A: ReviewsApi> {
    api: A,
    state: AppState,
    view: Rc<dyn ReviewsView>,
    form: Rc<dyn ReviewFormView<Upload = A::Upload>>,
    map: Rc<dyn MapSurface>,
    marker_zoom: f64,
}

impl<A: ReviewsApi> ReviewsViewModel<A> {
    pub fn new(
        api: A,
        state: AppState,
        view: Rc<dyn ReviewsView>,
        form: Rc<dyn ReviewFormView<Upload = A::Upload>>,
        map: Rc<dyn MapSurface>,
        marker_zoom: f64,
    ) -> Self {
        Self {
            api,
            state,
            view,
            form,
            map,
            marker_zoom,
        }
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    /// Pide todas las reseñas y reconstruye lista + marcadores.
    /// Solo pinta la respuesta de la recarga más reciente.
    pub async fn load_reviews(&self) -> LoadOutcome {
        let generation = self.state.begin_load();
        self.clear_rendered();

        let Some(token) = self.state.session.get_token() else {
            log::warn!("⚠️ [REVIEWS] Sin token, no se cargan reseñas");
            self.state.finish_load(generation);
            return LoadOutcome::NoSession;
        };

        log::info!("📋 [REVIEWS] Cargando reseñas (recarga #{})", generation);
        let result = self.api.list_reviews(&token).await;

        if !self.state.is_current_load(generation) {
            log::info!("⏭️ [REVIEWS] Respuesta de la recarga #{} descartada (hay una más reciente)", generation);
            return LoadOutcome::Superseded;
        }
        self.state.finish_load(generation);

        match result {
            Ok(reviews) => {
                self.render_reviews(&reviews);
                let count = reviews.len();
                self.state.set_error(None);
                self.state.set_reviews(reviews);
                log::info!("✅ [REVIEWS] {} reseñas, {} marcadores", count, self.map.marker_count());
                LoadOutcome::Loaded(count)
            }
            Err(err) => {
                // Degradación silenciosa: solo consola, sin mensaje al usuario
                log::error!("❌ [REVIEWS] Error cargando datos: {}", err);
                self.state.set_error(Some(err.to_string()));
                self.state.set_reviews(Vec::new());
                LoadOutcome::Failed(err)
            }
        }
    }

    /// Limpia y vuelve a pintar lista + marcadores en el orden recibido
    pub fn render_reviews(&self, reviews: &[Review]) {
        self.clear_rendered();

        for review in reviews {
            let item = ReviewListItem::from_review(review);
            let on_select = {
                let view = self.view.clone();
                let state = self.state.clone();
                let review = review.clone();
                Rc::new(move || {
                    if let Err(e) = DetailViewModel::open(view.as_ref(), &state, &review) {
                        log::error!("❌ [DETAIL] {}", e);
                    }
                })
            };
            if let Err(e) = self.view.append_review_item(&item, on_select) {
                log::error!("❌ [REVIEWS] No se pudo pintar {}: {}", review.establishment, e);
            }

            let Some(position) = review.coordinates() else {
                log::debug!("📍 [REVIEWS] {} sin coordenadas, sin marcador", review.establishment);
                continue;
            };

            let on_click = {
                let view = self.view.clone();
                let map = self.map.clone();
                let state = self.state.clone();
                let review = review.clone();
                let zoom = self.marker_zoom;
                Rc::new(move || {
                    if let Err(e) = DetailViewModel::open(view.as_ref(), &state, &review) {
                        log::error!("❌ [DETAIL] {}", e);
                    }
                    if let Err(e) = map.set_view(position, zoom) {
                        log::error!("❌ [MAP] {}", e);
                    }
                })
            };
            if let Err(e) = self.map.add_marker(position, on_click) {
                log::error!("❌ [MAP] No se pudo colocar el marcador de {}: {}", review.establishment, e);
            }
        }
    }

    fn clear_rendered(&self) {
        if let Err(e) = self.map.clear_markers() {
            log::error!("❌ [MAP] {}", e);
        }
        if let Err(e) = self.view.clear_review_list() {
            log::error!("❌ [REVIEWS] {}", e);
        }
    }

    /// Envía el formulario como multipart; si va bien, resetea y recarga
    pub async fn submit_review(&self) -> SubmitOutcome {
        let Some(token) = self.state.session.get_token() else {
            log::warn!("⚠️ [SUBMIT] Sin token, envío cancelado");
            return SubmitOutcome::NoSession;
        };

        let draft = match self.form.read_review_form() {
            Ok(draft) => draft,
            Err(e) => {
                log::error!("❌ [SUBMIT] No se pudo leer el formulario: {}", e);
                self.notify(MSG_REVIEW_FAILED);
                return SubmitOutcome::Failed(ApiError::Request(e.to_string()));
            }
        };

        match self.api.create_review(&token, &draft).await {
            Ok(()) => {
                log::info!("✅ [SUBMIT] Reseña creada: {}", draft.establishment);
                self.notify(MSG_REVIEW_CREATED);
                if let Err(e) = self.form.reset_review_form() {
                    log::error!("❌ [SUBMIT] {}", e);
                }
                self.load_reviews().await;
                SubmitOutcome::Created
            }
            Err(err) => {
                // Mismo mensaje para validación, auth y error de servidor
                log::error!("❌ [SUBMIT] Error creando reseña: {}", err);
                self.notify(MSG_REVIEW_FAILED);
                SubmitOutcome::Failed(err)
            }
        }
    }

    fn notify(&self, message: &str) {
        if let Err(e) = self.view.alert(message) {
            log::error!("❌ [VIEW] {}", e);
        }
    }
}
