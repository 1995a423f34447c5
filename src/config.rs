use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    pub backend_url: String,
    pub geocoding_url: String,
    pub tile_url: String,
    pub login_page: String,
    pub enable_logging: bool,
    pub network_timeout_seconds: u32,
    pub map_config: MapConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            backend_url: "https://exameningenieriaweb.onrender.com".to_string(),
            geocoding_url: "https://nominatim.openstreetmap.org".to_string(),
            tile_url: "https://{s}.tile.openstreetmap.org/{z}/{x}/{y}.png".to_string(),
            login_page: "login.html".to_string(),
            enable_logging: true,
            network_timeout_seconds: 30,
            map_config: MapConfig::default(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MapConfig {
    pub default_center_lat: f64,
    pub default_center_lng: f64,
    pub default_zoom: f64,
    /// Zoom al hacer click en un marcador
    pub marker_zoom: f64,
    /// Zoom tras una búsqueda de dirección
    pub search_zoom: f64,
}

impl Default for MapConfig {
    fn default() -> Self {
        Self {
            // Centro de la península
            default_center_lat: 40.416,
            default_center_lng: -3.703,
            default_zoom: 5.0,
            marker_zoom: 15.0,
            search_zoom: 14.0,
        }
    }
}

impl AppConfig {
    /// Carga la configuración desde variables de entorno en tiempo de compilación
    pub fn from_env() -> Self {
        let defaults = Self::default();
        let map_defaults = MapConfig::default();

        Self {
            backend_url: option_env!("BACKEND_URL")
                .map(str::to_string)
                .unwrap_or(defaults.backend_url),
            geocoding_url: option_env!("GEOCODING_URL")
                .map(str::to_string)
                .unwrap_or(defaults.geocoding_url),
            tile_url: option_env!("TILE_URL")
                .map(str::to_string)
                .unwrap_or(defaults.tile_url),
            login_page: option_env!("LOGIN_PAGE")
                .map(str::to_string)
                .unwrap_or(defaults.login_page),
            enable_logging: option_env!("ENABLE_LOGGING")
                .unwrap_or("true").parse().unwrap_or(true),
            network_timeout_seconds: option_env!("NETWORK_TIMEOUT_SECONDS")
                .unwrap_or("30").parse().unwrap_or(30),
            map_config: MapConfig {
                default_center_lat: option_env!("DEFAULT_MAP_CENTER_LAT")
                    .and_then(|v| v.parse().ok())
                    .unwrap_or(map_defaults.default_center_lat),
                default_center_lng: option_env!("DEFAULT_MAP_CENTER_LNG")
                    .and_then(|v| v.parse().ok())
                    .unwrap_or(map_defaults.default_center_lng),
                default_zoom: option_env!("DEFAULT_MAP_ZOOM")
                    .and_then(|v| v.parse().ok())
                    .unwrap_or(map_defaults.default_zoom),
                ..map_defaults
            },
        }
    }

    /// URL completa de un endpoint del backend (tolera la barra final en la base)
    pub fn endpoint(&self, path: &str) -> String {
        join_url(&self.backend_url, path)
    }

    /// URL del endpoint de búsqueda del geocodificador
    pub fn geocoding_search_url(&self) -> String {
        join_url(&self.geocoding_url, "search")
    }

    /// Timeout de red en milisegundos
    pub fn network_timeout_millis(&self) -> u32 {
        self.network_timeout_seconds.saturating_mul(1000)
    }

    /// Verifica si el modo de logging está habilitado
    pub fn is_logging_enabled(&self) -> bool {
        self.enable_logging
    }
}

fn join_url(base: &str, path: &str) -> String {
    format!("{}/{}", base.trim_end_matches('/'), path.trim_start_matches('/'))
}

// Configuración global estática
lazy_static::lazy_static! {
    pub static ref CONFIG: AppConfig = AppConfig::from_env();
}
