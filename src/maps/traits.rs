use std::rc::Rc;

use crate::models::Coordinates;

/// Callback de click sobre un marcador
pub type MarkerClick = Rc<dyn Fn()>;

/// Superficie de mapa usada por los viewmodels.
/// La implementación guarda los marcadores colocados para poder limpiarlos.
pub trait MapSurface {
    /// Centrar el mapa en una ubicación con un zoom dado
    fn set_view(&self, center: Coordinates, zoom: f64) -> Result<(), MapError>;

    /// Quitar todos los marcadores colocados y vaciar la lista
    fn clear_markers(&self) -> Result<(), MapError>;

    /// Colocar un marcador con su handler de click
    fn add_marker(&self, position: Coordinates, on_click: MarkerClick) -> Result<(), MapError>;

    /// Número de marcadores actualmente en el mapa
    fn marker_count(&self) -> usize;
}

/// Error del mapa
#[derive(Debug, Clone, PartialEq)]
pub enum MapError {
    NotReady,
    Js(String),
}

impl std::fmt::Display for MapError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MapError::NotReady => write!(f, "Map is not ready"),
            MapError::Js(msg) => write!(f, "Leaflet error: {}", msg),
        }
    }
}

impl std::error::Error for MapError {}
