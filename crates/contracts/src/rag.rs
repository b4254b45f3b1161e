use serde::{Deserialize, Serialize};

/// Request body of `POST /rag`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AskRequest {
    pub pregunta: String,
}

impl AskRequest {
    pub fn new(pregunta: impl Into<String>) -> Self {
        Self {
            pregunta: pregunta.into(),
        }
    }
}

/// Response body of `POST /rag`.
///
/// The endpoint answers `{"pregunta", "respuesta"}` on success and
/// `{"error"}` on failure (with a non-2xx status). Both fields are kept
/// optional so one type covers every body the endpoint produces.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AskReply {
    #[serde(default)]
    pub respuesta: Option<String>,
    #[serde(default)]
    pub error: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_serialises_with_field_name() {
        let body = serde_json::to_string(&AskRequest::new("¿Qué es un PDF?")).unwrap();
        assert_eq!(body, r#"{"pregunta":"¿Qué es un PDF?"}"#);
    }

    #[test]
    fn reply_with_answer() {
        let reply: AskReply =
            serde_json::from_str(r#"{"pregunta": "hola", "respuesta": "Hola, ¿en qué ayudo?"}"#)
                .unwrap();
        assert_eq!(reply.respuesta.as_deref(), Some("Hola, ¿en qué ayudo?"));
        assert_eq!(reply.error, None);
    }

    #[test]
    fn reply_with_error() {
        let reply: AskReply =
            serde_json::from_str(r#"{"error": "Se requiere 'pregunta'"}"#).unwrap();
        assert_eq!(reply.respuesta, None);
        assert_eq!(reply.error.as_deref(), Some("Se requiere 'pregunta'"));
    }

    #[test]
    fn reply_with_neither_field() {
        let reply: AskReply = serde_json::from_str("{}").unwrap();
        assert_eq!(reply.respuesta, None);
        assert_eq!(reply.error, None);
    }
}
