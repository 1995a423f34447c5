use std::rc::Rc;

use crate::models::ReviewDraft;
use crate::viewmodels::detail_viewmodel::ReviewDetail;
use crate::viewmodels::reviews_viewmodel::ReviewListItem;

/// Callback de selección de un elemento de la lista
pub type SelectHandler = Rc<dyn Fn()>;

/// Interfaz de renderizado de la página principal.
/// Los viewmodels solo hablan con esto, nunca con el DOM.
pub trait ReviewsView {
    fn show_user_label(&self, label: &str) -> Result<(), ViewError>;

    fn clear_review_list(&self) -> Result<(), ViewError>;

    fn append_review_item(&self, item: &ReviewListItem, on_select: SelectHandler) -> Result<(), ViewError>;

    /// Sobrescribe todo el contenido del panel y lo muestra
    fn show_detail(&self, detail: &ReviewDetail) -> Result<(), ViewError>;

    fn hide_detail(&self) -> Result<(), ViewError>;

    fn read_search_query(&self) -> Result<String, ViewError>;

    fn alert(&self, message: &str) -> Result<(), ViewError>;

    fn navigate(&self, url: &str) -> Result<(), ViewError>;
}

/// Formulario de nueva reseña
pub trait ReviewFormView {
    /// Tipo de fichero seleccionado (web_sys::File en el navegador)
    type Upload;

    fn read_review_form(&self) -> Result<ReviewDraft<Self::Upload>, ViewError>;

    fn reset_review_form(&self) -> Result<(), ViewError>;
}

/// Error de renderizado (elemento ausente, excepción JS...)
#[derive(Debug, Clone, PartialEq)]
pub struct ViewError(pub String);

impl std::fmt::Display for ViewError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "View error: {}", self.0)
    }
}

impl std::error::Error for ViewError {}

#[cfg(target_arch = "wasm32")]
impl From<wasm_bindgen::JsValue> for ViewError {
    fn from(value: wasm_bindgen::JsValue) -> Self {
        ViewError(format!("{:?}", value))
    }
}
