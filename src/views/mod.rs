pub mod traits;
#[cfg(target_arch = "wasm32")]
pub mod review_list;
#[cfg(target_arch = "wasm32")]
pub mod details_panel;
#[cfg(target_arch = "wasm32")]
pub mod dom_view;

pub use traits::{ReviewFormView, ReviewsView, SelectHandler, ViewError};
#[cfg(target_arch = "wasm32")]
pub use dom_view::DomReviewsView;
