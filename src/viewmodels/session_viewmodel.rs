// ============================================================================
// SESSION VIEWMODEL - Guardia de sesión y logout
// ============================================================================

use std::rc::Rc;

use crate::models::UserSession;
use crate::state::AppState;
use crate::utils::{SessionStore, TOKEN_KEY, USERNAME_KEY};
use crate::views::ReviewsView;

/// ViewModel de sesión - SOLO lógica de negocio
pub struct SessionViewModel {
    store: Rc<dyn SessionStore>,
    view: Rc<dyn ReviewsView>,
    state: AppState,
    login_page: String,
}

impl SessionViewModel {
    pub fn new(
        store: Rc<dyn SessionStore>,
        view: Rc<dyn ReviewsView>,
        state: AppState,
        login_page: impl Into<String>,
    ) -> Self {
        Self {
            store,
            view,
            state,
            login_page: login_page.into(),
        }
    }

    /// Lee la sesión persistida. Sin token redirige a login y devuelve `None`:
    /// no debe ejecutarse nada más en la página.
    pub fn guard(&self) -> Option<UserSession> {
        let token = self
            .store
            .get_item(TOKEN_KEY)
            .filter(|token| !token.is_empty());

        let Some(token) = token else {
            log::info!("🔒 [SESSION] Sin token, redirigiendo a {}", self.login_page);
            self.redirect_to_login();
            return None;
        };

        let session = UserSession {
            token,
            username: self.store.get_item(USERNAME_KEY),
        };

        if let Err(e) = self.view.show_user_label(&session.user_label()) {
            log::error!("❌ [SESSION] {}", e);
        }
        self.state.session.set_session(Some(session.clone()));
        log::info!("✅ [SESSION] Sesión activa para {:?}", session.username);
        Some(session)
    }

    /// Borra todo lo persistido y vuelve a login, sin confirmación
    pub fn logout(&self) {
        log::info!("🗑️ [SESSION] Cerrando sesión");
        if let Err(e) = self.store.clear() {
            log::error!("❌ [SESSION] {}", e);
        }
        self.state.session.logout();
        self.redirect_to_login();
    }

    fn redirect_to_login(&self) {
        if let Err(e) = self.view.navigate(&self.login_page) {
            log::error!("❌ [SESSION] No se pudo navegar a {}: {}", self.login_page, e);
        }
    }
}
