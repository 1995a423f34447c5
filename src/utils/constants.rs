/// Claves de localStorage escritas por la página de login
pub const TOKEN_KEY: &str = "token";
pub const USERNAME_KEY: &str = "username";

/// Estrellas de la valoración
pub const STAR_FILLED: char = '★';
pub const STAR_EMPTY: char = '☆';
pub const MAX_RATING: usize = 5;

/// Textos visibles para el usuario
pub const MSG_REVIEW_CREATED: &str = "¡Reseña creada y firmada con tu token!";
pub const MSG_REVIEW_FAILED: &str = "Error creando reseña";
pub const MSG_ADDRESS_NOT_FOUND: &str = "Dirección no encontrada";
pub const NO_IMAGES_PLACEHOLDER: &str = "Sin imágenes";
pub const IMAGE_ALT: &str = "Foto reseña";

/// IDs de elementos de index.html
pub mod ids {
    pub const MAP: &str = "map";
    pub const USER_INFO: &str = "userInfo";
    pub const REVIEWS_LIST: &str = "reviewsList";
    pub const DETAILS_PANEL: &str = "detailsPanel";
    pub const DET_NAME: &str = "detName";
    pub const DET_ADDRESS: &str = "detAddress";
    pub const DET_RATING: &str = "detRating";
    pub const DET_IMAGES: &str = "detImagesContainer";
    pub const DET_AUTHOR: &str = "detAuthor";
    pub const DET_IAT: &str = "detIat";
    pub const DET_EXP: &str = "detExp";
    pub const DET_TOKEN: &str = "detToken";
    pub const CLOSE_DETAILS: &str = "closeDetailsBtn";
    pub const REVIEW_FORM: &str = "reviewForm";
    pub const REV_NAME: &str = "revName";
    pub const REV_ADDRESS: &str = "revAddress";
    pub const REV_RATING: &str = "revRating";
    pub const REV_FILES: &str = "revFiles";
    pub const MAP_SEARCH_ADDRESS: &str = "mapSearchAddress";
    pub const MAP_SEARCH_BUTTON: &str = "mapSearchBtn";
    pub const LOGOUT_BUTTON: &str = "logoutBtn";
}
