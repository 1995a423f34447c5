pub mod error;
pub mod api_client;
pub mod geocoding_service;
#[cfg(target_arch = "wasm32")]
pub(crate) mod http;

pub use error::ApiError;
pub use api_client::ReviewsApi;
pub use geocoding_service::Geocoder;

#[cfg(target_arch = "wasm32")]
pub use api_client::ApiClient;
#[cfg(target_arch = "wasm32")]
pub use geocoding_service::NominatimClient;
