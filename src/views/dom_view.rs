// ============================================================================
// DOM VIEW - Implementación de ReviewsView / ReviewFormView sobre la página
// ============================================================================

use std::cell::RefCell;

use wasm_bindgen::closure::Closure;
use web_sys::{File, HtmlFormElement, HtmlInputElement, MouseEvent};

use crate::dom::{append_child, clear_children, field_value, get_element_by_id, get_typed_by_id, set_text_by_id, window};
use crate::models::ReviewDraft;
use crate::utils::ids;
use crate::viewmodels::{ReviewDetail, ReviewListItem};
use super::details_panel::{hide_details_panel, render_details_panel};
use super::review_list::render_review_item;
use super::traits::{ReviewFormView, ReviewsView, SelectHandler, ViewError};

/// Vista real: localiza los elementos por ID en cada llamada.
/// Guarda los listeners de la lista actual; se sueltan al vaciarla.
#[derive(Default)]
pub struct DomReviewsView {
    list_listeners: RefCell<Vec<Closure<dyn FnMut(MouseEvent)>>>,
}

impl DomReviewsView {
    pub fn new() -> Self {
        Self::default()
    }

    /// Listeners vivos de la lista (uno por <li>)
    pub fn list_listener_count(&self) -> usize {
        self.list_listeners.borrow().len()
    }

    fn selected_files(&self) -> Result<Vec<File>, ViewError> {
        let input: HtmlInputElement = get_typed_by_id(ids::REV_FILES)?;
        let Some(list) = input.files() else {
            return Ok(Vec::new());
        };
        Ok((0..list.length()).filter_map(|i| list.get(i)).collect())
    }
}

impl ReviewsView for DomReviewsView {
    fn show_user_label(&self, label: &str) -> Result<(), ViewError> {
        set_text_by_id(ids::USER_INFO, label)?;
        Ok(())
    }

    fn clear_review_list(&self) -> Result<(), ViewError> {
        clear_children(&get_element_by_id(ids::REVIEWS_LIST)?);
        self.list_listeners.borrow_mut().clear();
        Ok(())
    }

    fn append_review_item(&self, item: &ReviewListItem, on_select: SelectHandler) -> Result<(), ViewError> {
        let list = get_element_by_id(ids::REVIEWS_LIST)?;
        let rendered = render_review_item(item, on_select)?;
        append_child(&list, &rendered.element)?;
        self.list_listeners.borrow_mut().push(rendered.listener);
        Ok(())
    }

    fn show_detail(&self, detail: &ReviewDetail) -> Result<(), ViewError> {
        render_details_panel(detail)?;
        Ok(())
    }

    fn hide_detail(&self) -> Result<(), ViewError> {
        hide_details_panel()?;
        Ok(())
    }

    fn read_search_query(&self) -> Result<String, ViewError> {
        Ok(field_value(ids::MAP_SEARCH_ADDRESS)?)
    }

    fn alert(&self, message: &str) -> Result<(), ViewError> {
        window()?.alert_with_message(message)?;
        Ok(())
    }

    fn navigate(&self, url: &str) -> Result<(), ViewError> {
        window()?.location().set_href(url)?;
        Ok(())
    }
}

impl ReviewFormView for DomReviewsView {
    type Upload = File;

    fn read_review_form(&self) -> Result<ReviewDraft<File>, ViewError> {
        Ok(ReviewDraft {
            establishment: field_value(ids::REV_NAME)?,
            address: field_value(ids::REV_ADDRESS)?,
            rating: field_value(ids::REV_RATING)?,
            files: self.selected_files()?,
        })
    }

    fn reset_review_form(&self) -> Result<(), ViewError> {
        let form: HtmlFormElement = get_typed_by_id(ids::REVIEW_FORM)?;
        form.reset();
        Ok(())
    }
}
