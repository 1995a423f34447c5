/// Error de comunicación con el backend o el geocodificador
#[derive(Debug, Clone, PartialEq)]
pub enum ApiError {
    /// Fallo de red (CORS, DNS, conexión cortada...)
    Network(String),
    /// Abortado por el timeout de red configurado
    Timeout,
    /// Respuesta no-2xx
    Http { status: u16, status_text: String },
    /// Cuerpo JSON inesperado
    Parse(String),
    /// No se pudo construir la petición
    Request(String),
}

impl ApiError {
    /// Si el timeout ya disparó, cualquier fallo posterior de la petición es un timeout
    pub fn or_timeout(self, timed_out: bool) -> ApiError {
        if timed_out {
            ApiError::Timeout
        } else {
            self
        }
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ApiError::Network(msg) => write!(f, "Network error: {}", msg),
            ApiError::Timeout => write!(f, "Request timed out"),
            ApiError::Http { status, status_text } => write!(f, "HTTP {}: {}", status, status_text),
            ApiError::Parse(msg) => write!(f, "Parse error: {}", msg),
            ApiError::Request(msg) => write!(f, "Request build error: {}", msg),
        }
    }
}

impl std::error::Error for ApiError {}
