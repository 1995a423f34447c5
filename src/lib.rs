// ============================================================================
// RESEÑAS MAP - FRONTEND MVVM ESTRICTO (RUST PURO)
// ============================================================================
// Arquitectura MVVM estricta:
// - Views: Funciones que renderizan DOM (sin lógica)
// - ViewModels: Estado + Lógica UI
// - Services: SOLO comunicación HTTP (backend de reseñas + Nominatim)
// - State: State Management con Rc<RefCell>
// - Models: Estructuras compartidas con backend
// ============================================================================

pub mod config;
pub mod models;
pub mod services;
pub mod viewmodels;
pub mod state;
pub mod views;
pub mod maps;
pub mod utils;
#[cfg(target_arch = "wasm32")]
mod dom;
#[cfg(target_arch = "wasm32")]
mod app;
#[cfg(test)]
mod testing;

#[cfg(target_arch = "wasm32")]
pub use wasm_entry::*;

#[cfg(target_arch = "wasm32")]
mod wasm_entry {
    use std::cell::RefCell;

    use wasm_bindgen::prelude::*;
    use wasm_logger::Config;

    use crate::app::App;
    use crate::config::CONFIG;

    // Instancia única de la página
    thread_local! {
        static APP: RefCell<Option<App>> = RefCell::new(None);
    }

    #[wasm_bindgen(start)]
    pub fn main() -> Result<(), JsValue> {
        // Inicializar panic hook para mejor debugging
        console_error_panic_hook::set_once();

        let level = if CONFIG.is_logging_enabled() {
            log::Level::Debug
        } else {
            log::Level::Warn
        };
        wasm_logger::init(Config::new(level));
        log::info!("🚀 Reseñas Map - Rust Puro + MVVM (backend: {})", CONFIG.backend_url);

        match App::start()? {
            Some(app) => APP.with(|cell| *cell.borrow_mut() = Some(app)),
            None => log::info!("🔒 [MAIN] Sin sesión, página detenida"),
        }
        Ok(())
    }

    fn with_app(action: impl FnOnce(&App)) {
        APP.with(|cell| match cell.borrow().as_ref() {
            Some(app) => action(app),
            None => log::warn!("⚠️ [MAIN] App no está inicializada"),
        });
    }

    /// Recargar lista y marcadores (llamable desde JavaScript)
    #[wasm_bindgen]
    pub fn reload_reviews() {
        with_app(App::reload_reviews);
    }

    /// Buscar la dirección escrita en el campo de búsqueda y centrar el mapa
    #[wasm_bindgen]
    pub fn search_map_location() {
        with_app(App::search_location);
    }

    #[wasm_bindgen]
    pub fn close_details() {
        with_app(App::close_details);
    }

    #[wasm_bindgen]
    pub fn logout() {
        with_app(App::logout);
    }
}
