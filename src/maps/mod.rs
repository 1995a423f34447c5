// Módulo de mapas: trait común + implementación Leaflet para web

#[cfg(target_arch = "wasm32")]
pub mod leaflet;

pub mod traits;

pub use traits::{MapError, MapSurface, MarkerClick};

#[cfg(target_arch = "wasm32")]
pub use leaflet::LeafletMapRenderer;
