pub mod session_viewmodel;
pub mod reviews_viewmodel;
pub mod detail_viewmodel;
pub mod map_viewmodel;

pub use session_viewmodel::SessionViewModel;
pub use reviews_viewmodel::{LoadOutcome, ReviewListItem, ReviewsViewModel, SubmitOutcome};
pub use detail_viewmodel::{DetailViewModel, ReviewDetail};
pub use map_viewmodel::{MapViewModel, SearchOutcome};
