use serde::{Deserialize, Serialize};

/// Identidad persistida por la página de login
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct UserSession {
    pub token: String,
    pub username: Option<String>,
}

impl UserSession {
    /// Texto del indicador de usuario (vacío si no hay etiqueta)
    pub fn user_label(&self) -> String {
        format!("Usuario: {}", self.username.as_deref().unwrap_or(""))
    }
}

/// Cabecera `Authorization` para el backend
pub fn bearer(token: &str) -> String {
    format!("Bearer {}", token)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bearer_header() {
        let session = UserSession {
            token: "abc".to_string(),
            username: Some("ana@x.com".to_string()),
        };
        assert_eq!(bearer(&session.token), "Bearer abc");
        assert_eq!(session.user_label(), "Usuario: ana@x.com");
    }

    #[test]
    fn missing_label_renders_empty() {
        let session = UserSession {
            token: "abc".to_string(),
            username: None,
        };
        assert_eq!(session.user_label(), "Usuario: ");
    }
}
