// Dobles de prueba en memoria para los viewmodels (sin DOM ni red)

use std::cell::RefCell;
use std::collections::{HashMap, VecDeque};
use std::rc::Rc;

use crate::maps::{MapError, MapSurface, MarkerClick};
use crate::models::{Coordinates, GeocodeHit, Review, ReviewDraft};
use crate::services::{ApiError, Geocoder, ReviewsApi};
use crate::utils::{SessionStore, StorageError};
use crate::viewmodels::{ReviewDetail, ReviewListItem};
use crate::views::{ReviewFormView, ReviewsView, SelectHandler, ViewError};

pub fn sample_review() -> Review {
    Review {
        establishment: "Cafe X".to_string(),
        address: "Calle Mayor 1".to_string(),
        rating: 4,
        latitude: Some(40.4),
        longitude: Some(-3.7),
        image_urls: vec!["a.jpg".to_string(), "b.jpg".to_string()],
        author_name: "Ana".to_string(),
        author_email: "a@x.com".to_string(),
        token_issued_at: 1_700_000_000,
        token_expires_at: 1_700_003_600,
        raw_token: "tok123".to_string(),
    }
}

pub fn review_at(name: &str, latitude: Option<f64>, longitude: Option<f64>) -> Review {
    Review {
        establishment: name.to_string(),
        latitude,
        longitude,
        ..sample_review()
    }
}

// ---------------------------------------------------------------------------
// View
// ---------------------------------------------------------------------------

#[derive(Default)]
pub struct RecordingView {
    label: RefCell<Option<String>>,
    items: RefCell<Vec<(ReviewListItem, SelectHandler)>>,
    detail: RefCell<Option<ReviewDetail>>,
    detail_visible: RefCell<bool>,
    alerts: RefCell<Vec<String>>,
    navigations: RefCell<Vec<String>>,
    search_query: RefCell<String>,
    form: RefCell<ReviewDraft<String>>,
    form_resets: RefCell<usize>,
}

impl RecordingView {
    pub fn items(&self) -> Vec<ReviewListItem> {
        self.items.borrow().iter().map(|(item, _)| item.clone()).collect()
    }

    /// Simula el click en la entrada `index` de la lista
    pub fn select(&self, index: usize) {
        let handler = self.items.borrow()[index].1.clone();
        handler();
    }

    pub fn last_detail(&self) -> Option<ReviewDetail> {
        self.detail.borrow().clone()
    }

    pub fn detail_visible(&self) -> bool {
        *self.detail_visible.borrow()
    }

    pub fn alerts(&self) -> Vec<String> {
        self.alerts.borrow().clone()
    }

    pub fn navigations(&self) -> Vec<String> {
        self.navigations.borrow().clone()
    }

    pub fn user_label(&self) -> Option<String> {
        self.label.borrow().clone()
    }

    pub fn set_search_query(&self, query: &str) {
        *self.search_query.borrow_mut() = query.to_string();
    }

    pub fn fill_form(&self, establishment: &str, address: &str, rating: &str, files: Vec<&str>) {
        *self.form.borrow_mut() = ReviewDraft {
            establishment: establishment.to_string(),
            address: address.to_string(),
            rating: rating.to_string(),
            files: files.into_iter().map(str::to_string).collect(),
        };
    }

    pub fn form_resets(&self) -> usize {
        *self.form_resets.borrow()
    }
}

impl ReviewsView for RecordingView {
    fn show_user_label(&self, label: &str) -> Result<(), ViewError> {
        *self.label.borrow_mut() = Some(label.to_string());
        Ok(())
    }

    fn clear_review_list(&self) -> Result<(), ViewError> {
        self.items.borrow_mut().clear();
        Ok(())
    }

    fn append_review_item(&self, item: &ReviewListItem, on_select: SelectHandler) -> Result<(), ViewError> {
        self.items.borrow_mut().push((item.clone(), on_select));
        Ok(())
    }

    fn show_detail(&self, detail: &ReviewDetail) -> Result<(), ViewError> {
        *self.detail.borrow_mut() = Some(detail.clone());
        *self.detail_visible.borrow_mut() = true;
        Ok(())
    }

    fn hide_detail(&self) -> Result<(), ViewError> {
        *self.detail_visible.borrow_mut() = false;
        Ok(())
    }

    fn read_search_query(&self) -> Result<String, ViewError> {
        Ok(self.search_query.borrow().clone())
    }

    fn alert(&self, message: &str) -> Result<(), ViewError> {
        self.alerts.borrow_mut().push(message.to_string());
        Ok(())
    }

    fn navigate(&self, url: &str) -> Result<(), ViewError> {
        self.navigations.borrow_mut().push(url.to_string());
        Ok(())
    }
}

impl ReviewFormView for RecordingView {
    type Upload = String;

    fn read_review_form(&self) -> Result<ReviewDraft<String>, ViewError> {
        Ok(self.form.borrow().clone())
    }

    fn reset_review_form(&self) -> Result<(), ViewError> {
        *self.form_resets.borrow_mut() += 1;
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Map
// ---------------------------------------------------------------------------

#[derive(Default)]
pub struct RecordingMap {
    markers: RefCell<Vec<(Coordinates, MarkerClick)>>,
    views: RefCell<Vec<(Coordinates, f64)>>,
}

impl RecordingMap {
    pub fn positions(&self) -> Vec<Coordinates> {
        self.markers.borrow().iter().map(|(pos, _)| *pos).collect()
    }

    pub fn views(&self) -> Vec<(Coordinates, f64)> {
        self.views.borrow().clone()
    }

    pub fn click(&self, index: usize) {
        let handler = self.markers.borrow()[index].1.clone();
        handler();
    }
}

impl MapSurface for RecordingMap {
    fn set_view(&self, center: Coordinates, zoom: f64) -> Result<(), MapError> {
        self.views.borrow_mut().push((center, zoom));
        Ok(())
    }

    fn clear_markers(&self) -> Result<(), MapError> {
        self.markers.borrow_mut().clear();
        Ok(())
    }

    fn add_marker(&self, position: Coordinates, on_click: MarkerClick) -> Result<(), MapError> {
        self.markers.borrow_mut().push((position, on_click));
        Ok(())
    }

    fn marker_count(&self) -> usize {
        self.markers.borrow().len()
    }
}

// ---------------------------------------------------------------------------
// Backend
// ---------------------------------------------------------------------------

type ListResponse = Result<Vec<Review>, ApiError>;

#[derive(Default)]
struct FakeApiInner {
    list_queue: VecDeque<(ListResponse, usize)>,
    list_calls: usize,
    tokens: Vec<String>,
    create_error: Option<ApiError>,
    created: Vec<ReviewDraft<String>>,
}

/// Backend falso: respuestas en cola, cada una con un número de `yield` de retardo
#[derive(Clone, Default)]
pub struct FakeApi {
    inner: Rc<RefCell<FakeApiInner>>,
}

impl FakeApi {
    pub fn push_list(&self, response: ListResponse) {
        self.push_list_delayed(response, 0);
    }

    pub fn push_list_delayed(&self, response: ListResponse, yields: usize) {
        self.inner.borrow_mut().list_queue.push_back((response, yields));
    }

    pub fn fail_create(&self, error: ApiError) {
        self.inner.borrow_mut().create_error = Some(error);
    }

    pub fn list_calls(&self) -> usize {
        self.inner.borrow().list_calls
    }

    pub fn seen_tokens(&self) -> Vec<String> {
        self.inner.borrow().tokens.clone()
    }

    pub fn created(&self) -> Vec<ReviewDraft<String>> {
        self.inner.borrow().created.clone()
    }
}

impl ReviewsApi for FakeApi {
    type Upload = String;

    async fn list_reviews(&self, token: &str) -> Result<Vec<Review>, ApiError> {
        let (response, yields) = {
            let mut inner = self.inner.borrow_mut();
            inner.list_calls += 1;
            inner.tokens.push(token.to_string());
            inner.list_queue.pop_front().unwrap_or((Ok(Vec::new()), 0))
        };
        for _ in 0..yields {
            tokio::task::yield_now().await;
        }
        response
    }

    async fn create_review(&self, token: &str, draft: &ReviewDraft<String>) -> Result<(), ApiError> {
        let mut inner = self.inner.borrow_mut();
        inner.tokens.push(token.to_string());
        inner.created.push(draft.clone());
        match inner.create_error.clone() {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }
}

// ---------------------------------------------------------------------------
// Geocoder
// ---------------------------------------------------------------------------

#[derive(Clone)]
pub struct FakeGeocoder {
    response: Rc<Result<Vec<GeocodeHit>, ApiError>>,
    queries: Rc<RefCell<Vec<String>>>,
}

impl FakeGeocoder {
    pub fn returning(response: Result<Vec<GeocodeHit>, ApiError>) -> Self {
        Self {
            response: Rc::new(response),
            queries: Rc::new(RefCell::new(Vec::new())),
        }
    }

    pub fn queries(&self) -> Vec<String> {
        self.queries.borrow().clone()
    }
}

impl Geocoder for FakeGeocoder {
    async fn search(&self, query: &str) -> Result<Vec<GeocodeHit>, ApiError> {
        self.queries.borrow_mut().push(query.to_string());
        (*self.response).clone()
    }
}

// ---------------------------------------------------------------------------
// Storage
// ---------------------------------------------------------------------------

#[derive(Default)]
pub struct MemoryStore {
    items: RefCell<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn with(entries: &[(&str, &str)]) -> Self {
        let items = entries
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Self {
            items: RefCell::new(items),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.items.borrow().is_empty()
    }
}

impl SessionStore for MemoryStore {
    fn get_item(&self, key: &str) -> Option<String> {
        self.items.borrow().get(key).cloned()
    }

    fn clear(&self) -> Result<(), StorageError> {
        self.items.borrow_mut().clear();
        Ok(())
    }
}
