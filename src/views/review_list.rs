// ============================================================================
// REVIEW LIST VIEW - <li> de una reseña
// ============================================================================

use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::*;
use web_sys::{Element, MouseEvent};
use crate::dom::{listen_click, ElementBuilder};
use crate::viewmodels::ReviewListItem;
use crate::views::SelectHandler;

/// Entrada ya montada + su listener de click (hay que conservarlo mientras exista el <li>)
pub struct RenderedItem {
    pub element: Element,
    pub listener: Closure<dyn FnMut(MouseEvent)>,
}

/// Renderizar una entrada de la lista.
/// Todo va como texto: nombre y dirección vienen del backend sin escapar.
pub fn render_review_item(item: &ReviewListItem, on_select: SelectHandler) -> Result<RenderedItem, JsValue> {
    let element = ElementBuilder::new("li")?
        .class("review-item")
        .child(ElementBuilder::new("strong")?.text(&item.title).build())?
        .child(ElementBuilder::new("span")?.class("stars").text(&item.badge).build())?
        .child(ElementBuilder::new("br")?.build())?
        .child(ElementBuilder::new("small")?.text(&item.address).build())?
        .build();

    let listener = listen_click(&element, move |_e| on_select())?;

    Ok(RenderedItem { element, listener })
}
