// ============================================================================
// LEAFLET FFI - Foreign Function Interface para Leaflet (global `L`)
// ============================================================================
// Solo bindings - Sin estado, sin lógica
// ============================================================================

use wasm_bindgen::prelude::*;

#[wasm_bindgen]
extern "C" {
    /// `L.Map`
    #[derive(Clone, Debug)]
    pub type LeafletMap;

    #[wasm_bindgen(catch, js_namespace = L, js_name = map)]
    pub fn create_map(container_id: &str) -> Result<LeafletMap, JsValue>;

    #[wasm_bindgen(method, js_name = setView)]
    pub fn set_view(this: &LeafletMap, center: &JsValue, zoom: f64) -> LeafletMap;

    #[wasm_bindgen(method, js_name = removeLayer)]
    pub fn remove_layer(this: &LeafletMap, layer: &LeafletMarker) -> LeafletMap;

    /// `L.TileLayer`
    pub type LeafletTileLayer;

    #[wasm_bindgen(js_namespace = L, js_name = tileLayer)]
    pub fn create_tile_layer(url_template: &str, options: &JsValue) -> LeafletTileLayer;

    #[wasm_bindgen(method, js_name = addTo)]
    pub fn add_tile_layer_to(this: &LeafletTileLayer, map: &LeafletMap) -> LeafletTileLayer;

    /// `L.Marker`
    #[derive(Clone, Debug)]
    pub type LeafletMarker;

    #[wasm_bindgen(js_namespace = L, js_name = marker)]
    pub fn create_marker(lat_lng: &JsValue) -> LeafletMarker;

    #[wasm_bindgen(method, js_name = addTo)]
    pub fn add_marker_to(this: &LeafletMarker, map: &LeafletMap) -> LeafletMarker;

    #[wasm_bindgen(method, js_name = on)]
    pub fn on_event(this: &LeafletMarker, event: &str, handler: &Closure<dyn FnMut()>) -> LeafletMarker;
}

/// Helper: `[lat, lng]` como array JS
pub fn lat_lng(latitude: f64, longitude: f64) -> JsValue {
    js_sys::Array::of2(&JsValue::from_f64(latitude), &JsValue::from_f64(longitude)).into()
}

/// Helper: ¿está cargado Leaflet en la página?
pub fn leaflet_available() -> bool {
    web_sys::window()
        .and_then(|w| js_sys::Reflect::get(&w, &JsValue::from_str("L")).ok())
        .map(|l| !l.is_undefined() && !l.is_null())
        .unwrap_or(false)
}
