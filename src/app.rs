// ============================================================================
// APP - Cableado de la página principal
// ============================================================================
// Guardia de sesión -> mapa -> viewmodels -> listeners -> primera carga
// ============================================================================

use std::rc::Rc;

use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;

use crate::config::CONFIG;
use crate::dom::{get_element_by_id, on_click_by_id, on_submit};
use crate::maps::{LeafletMapRenderer, MapSurface};
use crate::services::{ApiClient, NominatimClient};
use crate::state::AppState;
use crate::utils::{ids, BrowserStorage};
use crate::viewmodels::{DetailViewModel, MapViewModel, ReviewsViewModel, SessionViewModel};
use crate::views::DomReviewsView;

/// Aplicación principal
pub struct App {
    state: AppState,
    view: Rc<DomReviewsView>,
    session: Rc<SessionViewModel>,
    reviews: Rc<ReviewsViewModel<ApiClient>>,
    search: Rc<MapViewModel<NominatimClient>>,
}

impl App {
    /// Arranca la página. `Ok(None)` si no hay sesión: ya se redirigió a login
    /// y no se toca nada más.
    pub fn start() -> Result<Option<Self>, JsValue> {
        let state = AppState::new();
        let view = Rc::new(DomReviewsView::new());

        let session = Rc::new(SessionViewModel::new(
            Rc::new(BrowserStorage),
            view.clone(),
            state.clone(),
            CONFIG.login_page.clone(),
        ));
        if session.guard().is_none() {
            return Ok(None);
        }

        let map: Rc<dyn MapSurface> = Rc::new(
            LeafletMapRenderer::initialize(ids::MAP, &CONFIG)
                .map_err(|e| JsValue::from_str(&e.to_string()))?,
        );

        let reviews = Rc::new(ReviewsViewModel::new(
            ApiClient::new(),
            state.clone(),
            view.clone(),
            view.clone(),
            map.clone(),
            CONFIG.map_config.marker_zoom,
        ));
        let search = Rc::new(MapViewModel::new(
            NominatimClient::new(),
            view.clone(),
            map,
            CONFIG.map_config.search_zoom,
        ));

        let app = Self {
            state,
            view,
            session,
            reviews,
            search,
        };
        app.bind_events()?;
        app.reload_reviews();

        log::info!("✅ [APP] Página de reseñas lista");
        Ok(Some(app))
    }

    fn bind_events(&self) -> Result<(), JsValue> {
        let form = get_element_by_id(ids::REVIEW_FORM)?;
        let reviews = self.reviews.clone();
        on_submit(&form, move || {
            let reviews = reviews.clone();
            spawn_local(async move {
                reviews.submit_review().await;
            });
        })?;

        let search = self.search.clone();
        on_click_by_id(ids::MAP_SEARCH_BUTTON, move |_e| {
            let search = search.clone();
            spawn_local(async move {
                search.search_location().await;
            });
        })?;

        let view = self.view.clone();
        let state = self.state.clone();
        on_click_by_id(ids::CLOSE_DETAILS, move |_e| {
            if let Err(e) = DetailViewModel::close(view.as_ref(), &state) {
                log::error!("❌ [DETAIL] {}", e);
            }
        })?;

        let session = self.session.clone();
        on_click_by_id(ids::LOGOUT_BUTTON, move |_e| session.logout())?;

        Ok(())
    }

    /// Recarga completa de lista + marcadores
    pub fn reload_reviews(&self) {
        let reviews = self.reviews.clone();
        spawn_local(async move {
            reviews.load_reviews().await;
        });
    }

    pub fn search_location(&self) {
        let search = self.search.clone();
        spawn_local(async move {
            search.search_location().await;
        });
    }

    pub fn close_details(&self) {
        if let Err(e) = DetailViewModel::close(self.view.as_ref(), &self.state) {
            log::error!("❌ [DETAIL] {}", e);
        }
    }

    pub fn logout(&self) {
        self.session.logout();
    }
}
