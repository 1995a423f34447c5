// ============================================================================
// EVENT HANDLING - Listeners sobre elementos de la página
// ============================================================================
// on_click / on_submit hacen closure.forget(): solo para elementos fijos de la
// página. Para elementos que se recrean, listen_click devuelve el Closure y
// quien lo guarda decide cuándo soltarlo.
// ============================================================================

use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Element, Event, MouseEvent};

/// Registra un click y devuelve el Closure: el listener vive mientras se conserve
pub fn listen_click<F>(element: &Element, handler: F) -> Result<Closure<dyn FnMut(MouseEvent)>, JsValue>
where
    F: FnMut(MouseEvent) + 'static,
{
    let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(MouseEvent)>);
    element.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref())?;
    Ok(closure)
}

/// Click permanente (elementos que viven tanto como la página)
pub fn on_click<F>(element: &Element, handler: F) -> Result<(), JsValue>
where
    F: FnMut(MouseEvent) + 'static,
{
    listen_click(element, handler)?.forget();
    Ok(())
}

/// Submit de formulario: cancela siempre la navegación por defecto
pub fn on_submit<F>(element: &Element, mut handler: F) -> Result<(), JsValue>
where
    F: FnMut() + 'static,
{
    let closure = Closure::wrap(Box::new(move |event: Event| {
        event.prevent_default();
        handler();
    }) as Box<dyn FnMut(Event)>);
    element.add_event_listener_with_callback("submit", closure.as_ref().unchecked_ref())?;
    closure.forget();
    Ok(())
}

/// Click en el elemento con ese ID (si existe)
pub fn on_click_by_id<F>(id: &str, handler: F) -> Result<(), JsValue>
where
    F: FnMut(MouseEvent) + 'static,
{
    let element = crate::dom::get_element_by_id(id)?;
    on_click(&element, handler)
}
