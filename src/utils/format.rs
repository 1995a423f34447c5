use super::constants::{MAX_RATING, STAR_EMPTY, STAR_FILLED};

/// Nota normalizada al rango 0..=5
pub fn clamp_rating(rating: i64) -> usize {
    rating.clamp(0, MAX_RATING as i64) as usize
}

/// `r` estrellas llenas seguidas de `5 - r` vacías (siempre 5 símbolos)
pub fn rating_stars(rating: i64) -> String {
    let filled = clamp_rating(rating);
    std::iter::repeat(STAR_FILLED)
        .take(filled)
        .chain(std::iter::repeat(STAR_EMPTY).take(MAX_RATING - filled))
        .collect()
}

/// Etiqueta corta de la lista: `★ 4`
pub fn rating_badge(rating: i64) -> String {
    format!("{} {}", STAR_FILLED, rating)
}

/// Timestamp Unix (segundos) a fecha-hora en formato local del navegador
#[cfg(target_arch = "wasm32")]
pub fn format_timestamp(seconds: i64) -> String {
    let date = js_sys::Date::new(&wasm_bindgen::JsValue::from_f64(seconds as f64 * 1000.0));
    date.to_locale_string("default", &wasm_bindgen::JsValue::UNDEFINED)
        .as_string()
        .unwrap_or_default()
}

/// Timestamp Unix (segundos) a fecha-hora local (fuera del navegador)
#[cfg(not(target_arch = "wasm32"))]
pub fn format_timestamp(seconds: i64) -> String {
    use chrono::{Local, TimeZone};

    match Local.timestamp_opt(seconds, 0).single() {
        Some(date) => date.format("%d/%m/%Y, %H:%M:%S").to_string(),
        None => String::from("Invalid Date"),
    }
}
