// ============================================================================
// DETAILS PANEL VIEW - Panel lateral con la reseña seleccionada
// ============================================================================
// Orden: vaciar imágenes -> rellenar todo -> mostrar. Así nunca se ven
// fotos de la reseña anterior.
// ============================================================================

use wasm_bindgen::prelude::*;
use web_sys::Element;
use crate::dom::{append_child, clear_children, get_element_by_id, set_display, set_text_by_id, ElementBuilder};
use crate::utils::{ids, IMAGE_ALT};
use crate::viewmodels::ReviewDetail;

/// Sobrescribir el panel completo y hacerlo visible
pub fn render_details_panel(detail: &ReviewDetail) -> Result<(), JsValue> {
    let container = get_element_by_id(ids::DET_IMAGES)?;
    clear_children(&container);

    set_text_by_id(ids::DET_NAME, &detail.name)?;
    set_text_by_id(ids::DET_ADDRESS, &detail.address)?;
    set_text_by_id(ids::DET_RATING, &detail.rating)?;
    render_images(&container, detail)?;
    set_text_by_id(ids::DET_AUTHOR, &detail.author)?;
    set_text_by_id(ids::DET_IAT, &detail.issued_at)?;
    set_text_by_id(ids::DET_EXP, &detail.expires_at)?;
    set_text_by_id(ids::DET_TOKEN, &detail.raw_token)?;

    set_display(&get_element_by_id(ids::DETAILS_PANEL)?, true)
}

/// Ocultar sin borrar nada
pub fn hide_details_panel() -> Result<(), JsValue> {
    set_display(&get_element_by_id(ids::DETAILS_PANEL)?, false)
}

fn render_images(container: &Element, detail: &ReviewDetail) -> Result<(), JsValue> {
    if let Some(placeholder) = detail.placeholder() {
        let p = ElementBuilder::new("p")?.text(placeholder).build();
        return append_child(container, &p);
    }

    for url in &detail.images {
        let img = ElementBuilder::new("img")?
            .attr("src", url)?
            .attr("alt", IMAGE_ALT)?
            .build();
        append_child(container, &img)?;
    }
    Ok(())
}
