/// Almacén clave-valor de la sesión (localStorage en el navegador)
pub trait SessionStore {
    fn get_item(&self, key: &str) -> Option<String>;

    /// Borra todo el estado persistido del cliente
    fn clear(&self) -> Result<(), StorageError>;
}

#[derive(Debug, Clone, PartialEq)]
pub enum StorageError {
    Unavailable,
    Js(String),
}

impl std::fmt::Display for StorageError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StorageError::Unavailable => write!(f, "localStorage no disponible"),
            StorageError::Js(msg) => write!(f, "Error de localStorage: {}", msg),
        }
    }
}

impl std::error::Error for StorageError {}

#[cfg(target_arch = "wasm32")]
pub use web::BrowserStorage;

#[cfg(target_arch = "wasm32")]
mod web {
    use web_sys::{window, Storage};

    use super::{SessionStore, StorageError};

    pub fn get_local_storage() -> Option<Storage> {
        window()?.local_storage().ok()?
    }

    /// localStorage del navegador (valores en texto plano, no JSON)
    #[derive(Clone, Copy, Default)]
    pub struct BrowserStorage;

    impl SessionStore for BrowserStorage {
        fn get_item(&self, key: &str) -> Option<String> {
            get_local_storage()?.get_item(key).ok()?
        }

        fn clear(&self) -> Result<(), StorageError> {
            let storage = get_local_storage().ok_or(StorageError::Unavailable)?;
            storage
                .clear()
                .map_err(|e| StorageError::Js(format!("{:?}", e)))
        }
    }
}
