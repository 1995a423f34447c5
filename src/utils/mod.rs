// Utils compartidos

pub mod constants;
pub mod format;
pub mod storage;
#[cfg(target_arch = "wasm32")]
pub mod leaflet_ffi;

pub use constants::*;
pub use format::*;
pub use storage::{SessionStore, StorageError};
#[cfg(target_arch = "wasm32")]
pub use storage::BrowserStorage;
