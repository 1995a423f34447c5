// ============================================================================
// APP STATE - Contexto compartido de la página (Rc<RefCell>)
// ============================================================================

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use crate::models::Review;
use super::session_state::SessionState;

/// Estado global de la página. Se clona barato (todo es `Rc`).
#[derive(Clone, Default)]
pub struct AppState {
    pub session: SessionState,
    /// Reseñas de la última carga correcta
    pub reviews: Rc<RefCell<Vec<Review>>>,
    /// Reseña abierta en el panel de detalles
    pub selected: Rc<RefCell<Option<Review>>>,
    /// Último error de carga de la lista (no se muestra al usuario)
    pub last_error: Rc<RefCell<Option<String>>>,
    /// Generación de la última recarga emitida
    load_generation: Rc<Cell<u64>>,
    loading: Rc<Cell<bool>>,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reserva una nueva generación de recarga; las anteriores quedan obsoletas
    pub fn begin_load(&self) -> u64 {
        let generation = self.load_generation.get() + 1;
        self.load_generation.set(generation);
        self.loading.set(true);
        generation
    }

    /// ¿Sigue siendo `generation` la última recarga emitida?
    pub fn is_current_load(&self, generation: u64) -> bool {
        self.load_generation.get() == generation
    }

    /// Cierra la recarga si es la vigente
    pub fn finish_load(&self, generation: u64) {
        if self.is_current_load(generation) {
            self.loading.set(false);
        }
    }

    pub fn is_loading(&self) -> bool {
        self.loading.get()
    }

    pub fn set_reviews(&self, reviews: Vec<Review>) {
        *self.reviews.borrow_mut() = reviews;
    }

    pub fn get_reviews(&self) -> Vec<Review> {
        self.reviews.borrow().clone()
    }

    pub fn set_error(&self, error: Option<String>) {
        *self.last_error.borrow_mut() = error;
    }

    pub fn get_error(&self) -> Option<String> {
        self.last_error.borrow().clone()
    }

    pub fn set_selected(&self, review: Option<Review>) {
        *self.selected.borrow_mut() = review;
    }

    pub fn get_selected(&self) -> Option<Review> {
        self.selected.borrow().clone()
    }
}
