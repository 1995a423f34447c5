// ============================================================================
// SESSION STATE - Token + etiqueta de usuario de la página actual
// ============================================================================

use std::cell::RefCell;
use std::rc::Rc;

use crate::models::UserSession;

/// Estado de autenticación (vive desde la carga de la página hasta el logout)
#[derive(Clone, Default)]
pub struct SessionState {
    pub session: Rc<RefCell<Option<UserSession>>>,
}

impl SessionState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Establecer sesión
    pub fn set_session(&self, session: Option<UserSession>) {
        *self.session.borrow_mut() = session;
    }

    /// Obtener token
    pub fn get_token(&self) -> Option<String> {
        self.session.borrow().as_ref().map(|s| s.token.clone())
    }

    pub fn is_logged_in(&self) -> bool {
        self.session.borrow().is_some()
    }

    /// Logout - limpiar todo
    pub fn logout(&self) {
        self.set_session(None);
    }
}
