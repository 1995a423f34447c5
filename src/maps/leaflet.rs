use std::cell::RefCell;

use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsValue;

use crate::config::AppConfig;
use crate::models::Coordinates;
use crate::utils::leaflet_ffi::*;
use super::{MapError, MapSurface, MarkerClick};

/// Marcador colocado + su closure de click (se libera al limpiar)
struct PlacedMarker {
    marker: LeafletMarker,
    _on_click: Closure<dyn FnMut()>,
}

/// Renderizador de mapas para web usando Leaflet + teselas OSM
pub struct LeafletMapRenderer {
    map: LeafletMap,
    markers: RefCell<Vec<PlacedMarker>>,
}

impl LeafletMapRenderer {
    /// Inicializar el mapa en el contenedor indicado
    pub fn initialize(container_id: &str, config: &AppConfig) -> Result<Self, MapError> {
        if !leaflet_available() {
            return Err(MapError::NotReady);
        }

        log::info!("🗺️ [MAP] Inicializando Leaflet en #{}", container_id);

        let map = create_map(container_id).map_err(js_error)?;
        let center = &config.map_config;
        map.set_view(
            &lat_lng(center.default_center_lat, center.default_center_lng),
            center.default_zoom,
        );

        let options = js_sys::Object::new();
        js_sys::Reflect::set(
            &options,
            &JsValue::from_str("attribution"),
            &JsValue::from_str("&copy; OpenStreetMap contributors"),
        )
        .map_err(js_error)?;
        create_tile_layer(&config.tile_url, &options).add_tile_layer_to(&map);

        log::info!("✅ [MAP] Mapa inicializado correctamente");
        Ok(Self {
            map,
            markers: RefCell::new(Vec::new()),
        })
    }
}

impl MapSurface for LeafletMapRenderer {
    fn set_view(&self, center: Coordinates, zoom: f64) -> Result<(), MapError> {
        log::info!(
            "🎯 [MAP] Centrando mapa en ({}, {}) con zoom {}",
            center.latitude, center.longitude, zoom
        );
        self.map.set_view(&lat_lng(center.latitude, center.longitude), zoom);
        Ok(())
    }

    fn clear_markers(&self) -> Result<(), MapError> {
        let removed: Vec<PlacedMarker> = self.markers.borrow_mut().drain(..).collect();
        for placed in &removed {
            self.map.remove_layer(&placed.marker);
        }
        log::debug!("🧹 [MAP] {} marcadores eliminados", removed.len());
        Ok(())
    }

    fn add_marker(&self, position: Coordinates, on_click: MarkerClick) -> Result<(), MapError> {
        let marker = create_marker(&lat_lng(position.latitude, position.longitude));
        let closure = Closure::wrap(Box::new(move || on_click()) as Box<dyn FnMut()>);
        marker.on_event("click", &closure);
        marker.add_marker_to(&self.map);

        self.markers.borrow_mut().push(PlacedMarker {
            marker,
            _on_click: closure,
        });
        Ok(())
    }

    fn marker_count(&self) -> usize {
        self.markers.borrow().len()
    }
}

fn js_error(err: JsValue) -> MapError {
    MapError::Js(format!("{:?}", err))
}
