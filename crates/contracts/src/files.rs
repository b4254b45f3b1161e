use serde::{Deserialize, Serialize};

/// Response of `POST /upload` (multipart, field `file`).
///
/// The backend answers with a non-2xx status on failure but still sends
/// this JSON body, so `ok` is the only reliable success signal.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UploadAck {
    pub ok: bool,
    /// Stored filename, present when `ok` is true. May differ from the
    /// submitted name (the backend sanitises it).
    #[serde(default)]
    pub filename: Option<String>,
    /// Human-readable failure reason, present when `ok` is false.
    #[serde(default)]
    pub msg: Option<String>,
}

/// Response of `DELETE /delete/<name>` and `POST /rebuild`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Ack {
    pub ok: bool,
    #[serde(default)]
    pub msg: Option<String>,
}

/// Response of `GET /api/files`: the currently stored document set.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FilesIndex {
    /// Stored filenames, in the backend's listing order.
    pub files: Vec<String>,
    /// Combined size of all stored documents, in bytes.
    pub total_size: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn upload_ack_success() {
        let ack: UploadAck =
            serde_json::from_str(r#"{"ok": true, "filename": "informe.pdf"}"#).unwrap();
        assert!(ack.ok);
        assert_eq!(ack.filename.as_deref(), Some("informe.pdf"));
        assert_eq!(ack.msg, None);
    }

    #[test]
    fn upload_ack_failure_without_msg() {
        let ack: UploadAck = serde_json::from_str(r#"{"ok": false}"#).unwrap();
        assert!(!ack.ok);
        assert_eq!(ack.filename, None);
        assert_eq!(ack.msg, None);
    }

    #[test]
    fn ack_with_msg() {
        let ack: Ack =
            serde_json::from_str(r#"{"ok": false, "msg": "Archivo no encontrado"}"#).unwrap();
        assert!(!ack.ok);
        assert_eq!(ack.msg.as_deref(), Some("Archivo no encontrado"));
    }

    #[test]
    fn files_index_roundtrip() {
        let index: FilesIndex =
            serde_json::from_str(r#"{"files": ["a.pdf", "b.pdf"], "total_size": 2048}"#).unwrap();
        assert_eq!(index.files.len(), 2);
        assert_eq!(index.total_size, 2048);
    }
}
