// ============================================================================
// ELEMENT HELPERS - Funciones básicas para manipular DOM
// ============================================================================

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlElement, HtmlInputElement, Window};

/// Obtener window global
pub fn window() -> Result<Window, JsValue> {
    web_sys::window().ok_or_else(|| JsValue::from_str("No window"))
}

/// Obtener document
pub fn document() -> Result<Document, JsValue> {
    window()?
        .document()
        .ok_or_else(|| JsValue::from_str("No document"))
}

/// Obtener elemento por ID (error si la página no lo tiene)
pub fn get_element_by_id(id: &str) -> Result<Element, JsValue> {
    document()?
        .get_element_by_id(id)
        .ok_or_else(|| JsValue::from_str(&format!("Elemento #{} no encontrado", id)))
}

/// Elemento por ID con cast al tipo concreto
pub fn get_typed_by_id<T: JsCast>(id: &str) -> Result<T, JsValue> {
    get_element_by_id(id)?
        .dyn_into::<T>()
        .map_err(|_| JsValue::from_str(&format!("Elemento #{} de tipo inesperado", id)))
}

/// Crear elemento
pub fn create_element(tag: &str) -> Result<Element, JsValue> {
    document()?.create_element(tag)
}

/// Establecer text content
pub fn set_text_content(element: &Element, text: &str) {
    element.set_text_content(Some(text));
}

/// Texto de un elemento por ID
pub fn set_text_by_id(id: &str, text: &str) -> Result<(), JsValue> {
    set_text_content(&get_element_by_id(id)?, text);
    Ok(())
}

/// Vaciar hijos
pub fn clear_children(element: &Element) {
    element.set_inner_html("");
}

/// Agregar hijo
pub fn append_child(parent: &Element, child: &Element) -> Result<(), JsValue> {
    parent.append_child(child).map(|_| ())
}

/// Establecer atributo
pub fn set_attribute(element: &Element, name: &str, value: &str) -> Result<(), JsValue> {
    element.set_attribute(name, value)
}

/// Mostrar u ocultar vía `style.display`
pub fn set_display(element: &Element, visible: bool) -> Result<(), JsValue> {
    let html = element
        .dyn_ref::<HtmlElement>()
        .ok_or_else(|| JsValue::from_str("Element is not an HtmlElement"))?;
    html.style()
        .set_property("display", if visible { "block" } else { "none" })
}

/// Valor de un `<input>` por ID
pub fn field_value(id: &str) -> Result<String, JsValue> {
    get_typed_by_id::<HtmlInputElement>(id).map(|input| input.value())
}
