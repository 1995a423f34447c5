// ============================================================================
// MAP VIEWMODEL - Búsqueda de direcciones y centrado del mapa
// ============================================================================
// No persiste nada: geocodifica y mueve el mapa
// ============================================================================

use std::rc::Rc;

use crate::maps::MapSurface;
use crate::models::Coordinates;
use crate::services::Geocoder;
use crate::utils::MSG_ADDRESS_NOT_FOUND;
use crate::views::ReviewsView;

#[derive(Debug, Clone, PartialEq)]
pub enum SearchOutcome {
    Centered(Coordinates),
    NotFound,
    /// Campo vacío: no se hace nada
    Skipped,
    /// Error de red: solo consola
    Failed,
}

/// ViewModel del mapa
pub struct MapViewModel<G: Geocoder> {
    geocoder: G,
    view: Rc<dyn ReviewsView>,
    map: Rc<dyn MapSurface>,
    search_zoom: f64,
}

impl<G: Geocoder> MapViewModel<G> {
    pub fn new(geocoder: G, view: Rc<dyn ReviewsView>, map: Rc<dyn MapSurface>, search_zoom: f64) -> Self {
        Self {
            geocoder,
            view,
            map,
            search_zoom,
        }
    }

    /// Buscar la dirección del campo de búsqueda y centrar el mapa
    pub async fn search_location(&self) -> SearchOutcome {
        let query = match self.view.read_search_query() {
            Ok(query) => query,
            Err(e) => {
                log::error!("❌ [SEARCH] {}", e);
                return SearchOutcome::Failed;
            }
        };
        let query = query.trim();
        if query.is_empty() {
            return SearchOutcome::Skipped;
        }

        let hits = match self.geocoder.search(query).await {
            Ok(hits) => hits,
            Err(err) => {
                log::error!("❌ [SEARCH] Error geocodificando '{}': {}", query, err);
                return SearchOutcome::Failed;
            }
        };

        match hits.first().and_then(|hit| hit.coordinates()) {
            Some(center) => {
                if let Err(e) = self.map.set_view(center, self.search_zoom) {
                    log::error!("❌ [MAP] {}", e);
                }
                log::info!("🎯 [SEARCH] '{}' -> ({}, {})", query, center.latitude, center.longitude);
                SearchOutcome::Centered(center)
            }
            None => {
                log::info!("🔍 [SEARCH] Sin resultados para '{}'", query);
                if let Err(e) = self.view.alert(MSG_ADDRESS_NOT_FOUND) {
                    log::error!("❌ [VIEW] {}", e);
                }
                SearchOutcome::NotFound
            }
        }
    }
}
