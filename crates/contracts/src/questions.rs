use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One entry of the question log, as returned by `GET /api/prompts`.
///
/// The backend stores every question asked through the assistant and
/// returns the most recent ones first.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuestionEntry {
    pub id: i64,
    /// The question text as the user typed it.
    pub texto: String,
    pub fecha_creacion: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn entry_parses_with_timestamp() {
        let entry: QuestionEntry = serde_json::from_str(
            r#"{"id": 7, "texto": "¿Cuántos documentos hay?", "fecha_creacion": "2025-11-02T09:15:00Z"}"#,
        )
        .unwrap();
        assert_eq!(entry.id, 7);
        assert_eq!(entry.texto, "¿Cuántos documentos hay?");
        assert_eq!(entry.fecha_creacion.to_rfc3339(), "2025-11-02T09:15:00+00:00");
    }
}
