use serde::{Deserialize, Serialize};

use super::Coordinates;

/// Reseña tal como la devuelve `GET /reviews` (solo lectura en el cliente)
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(from = "ReviewWire")]
pub struct Review {
    pub establishment: String,
    pub address: String,
    pub rating: i64,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub image_urls: Vec<String>,
    pub author_name: String,
    pub author_email: String,
    pub token_issued_at: i64,
    pub token_expires_at: i64,
    pub raw_token: String,
}

impl Review {
    /// Coordenadas del marcador, solo si vienen las dos.
    /// El backend guarda `0.0` cuando no pudo geocodificar: cuenta como ausente.
    pub fn coordinates(&self) -> Option<Coordinates> {
        let known = |value: Option<f64>| value.filter(|v| *v != 0.0);
        match (known(self.latitude), known(self.longitude)) {
            (Some(latitude), Some(longitude)) => Some(Coordinates { latitude, longitude }),
            _ => None,
        }
    }
}

/// Forma en el cable: tolera campos ausentes o `null` y el antiguo `image_url` único
#[derive(Deserialize)]
struct ReviewWire {
    #[serde(default)]
    establishment: Option<String>,
    #[serde(default)]
    address: Option<String>,
    #[serde(default)]
    rating: Option<RatingWire>,
    #[serde(default)]
    latitude: Option<f64>,
    #[serde(default)]
    longitude: Option<f64>,
    #[serde(default)]
    image_urls: Option<Vec<String>>,
    #[serde(default)]
    image_url: Option<String>,
    #[serde(default)]
    author_name: Option<String>,
    #[serde(default)]
    author_email: Option<String>,
    #[serde(default)]
    token_issued_at: Option<i64>,
    #[serde(default)]
    token_expires_at: Option<i64>,
    #[serde(default)]
    raw_token: Option<String>,
}

/// El formulario envía la nota como texto; según el backend puede volver como número o cadena
#[derive(Deserialize)]
#[serde(untagged)]
enum RatingWire {
    Int(i64),
    Float(f64),
    Text(String),
}

impl RatingWire {
    fn value(self) -> i64 {
        match self {
            RatingWire::Int(value) => value,
            RatingWire::Float(value) => value.round() as i64,
            RatingWire::Text(text) => text.trim().parse().unwrap_or(0),
        }
    }
}

impl From<ReviewWire> for Review {
    fn from(wire: ReviewWire) -> Self {
        let image_urls = match (wire.image_urls, wire.image_url) {
            (Some(urls), _) => urls,
            (None, Some(url)) if !url.is_empty() => vec![url],
            _ => Vec::new(),
        };

        Self {
            establishment: wire.establishment.unwrap_or_default(),
            address: wire.address.unwrap_or_default(),
            rating: wire.rating.map(RatingWire::value).unwrap_or(0),
            latitude: wire.latitude,
            longitude: wire.longitude,
            image_urls,
            author_name: wire.author_name.unwrap_or_default(),
            author_email: wire.author_email.unwrap_or_default(),
            token_issued_at: wire.token_issued_at.unwrap_or_default(),
            token_expires_at: wire.token_expires_at.unwrap_or_default(),
            raw_token: wire.raw_token.unwrap_or_default(),
        }
    }
}

/// Datos del formulario de nueva reseña; `U` es el tipo de fichero de la plataforma
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ReviewDraft<U> {
    pub establishment: String,
    pub address: String,
    /// Tal cual se envía, sin re-validar
    pub rating: String,
    pub files: Vec<U>,
}
