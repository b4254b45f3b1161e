//! Assistant Chat - transcript state.
//!
//! Append-only for the lifetime of the page, except for typing
//! placeholders: every send creates one and removes exactly that one when
//! its request settles, so overlapping requests never touch each other's
//! placeholder.

use contracts::rag::AskReply;
use uuid::Uuid;

/// Bot message shown when the reply carries neither an answer nor an error.
pub const NO_REPLY: &str = "No se recibió respuesta del servidor.";
/// Bot message shown when the request itself fails.
pub const NETWORK_ERROR: &str = "Error de red al contactar con el servidor.";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Author {
    User,
    Bot,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Entry {
    pub id: Uuid,
    pub author: Author,
    pub body: String,
    /// Typing placeholders render animated dots instead of `body`.
    pub typing: bool,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct ChatTranscript {
    pub entries: Vec<Entry>,
}

impl ChatTranscript {
    pub fn push_user(&mut self, body: impl Into<String>) -> Uuid {
        self.push(Author::User, body.into(), false)
    }

    pub fn push_bot(&mut self, body: impl Into<String>) -> Uuid {
        self.push(Author::Bot, body.into(), false)
    }

    /// Append a typing placeholder and return its id.
    pub fn begin_typing(&mut self) -> Uuid {
        self.push(Author::Bot, String::new(), true)
    }

    /// Remove the typing placeholder with this id, and nothing else.
    /// Returns whether it was still present.
    pub fn end_typing(&mut self, id: Uuid) -> bool {
        let before = self.entries.len();
        self.entries.retain(|e| !(e.typing && e.id == id));
        self.entries.len() != before
    }

    fn push(&mut self, author: Author, body: String, typing: bool) -> Uuid {
        let id = Uuid::new_v4();
        self.entries.push(Entry {
            id,
            author,
            body,
            typing,
        });
        id
    }
}

/// Trim the raw input; an empty result means "send nothing".
pub fn clean_question(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

/// Map a `/rag` reply to the bot message to display. Empty strings count
/// as absent, so a blank `respuesta` falls through to `error` and a blank
/// `error` to the fixed fallback.
pub fn reply_text(reply: &AskReply) -> String {
    if let Some(respuesta) = reply.respuesta.as_deref().filter(|r| !r.is_empty()) {
        respuesta.to_string()
    } else if let Some(error) = reply.error.as_deref().filter(|e| !e.is_empty()) {
        format!("Ocurrió un error: {}", error)
    } else {
        NO_REPLY.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reply(respuesta: Option<&str>, error: Option<&str>) -> AskReply {
        AskReply {
            respuesta: respuesta.map(str::to_string),
            error: error.map(str::to_string),
        }
    }

    #[test]
    fn send_then_resolve_keeps_order() {
        let mut t = ChatTranscript::default();
        t.push_user("hello");
        let typing = t.begin_typing();
        assert!(t.end_typing(typing));
        t.push_bot("hi there");

        let authors: Vec<_> = t.entries.iter().map(|e| e.author).collect();
        assert_eq!(authors, [Author::User, Author::Bot]);
        assert_eq!(t.entries[1].body, "hi there");
    }

    #[test]
    fn overlapping_typing_placeholders_are_independent() {
        let mut t = ChatTranscript::default();
        let first = t.begin_typing();
        let second = t.begin_typing();

        assert!(t.end_typing(first));
        assert_eq!(t.entries.len(), 1);
        assert_eq!(t.entries[0].id, second);

        // a second settle of the same request finds nothing to remove
        assert!(!t.end_typing(first));
    }

    #[test]
    fn end_typing_never_removes_real_messages() {
        let mut t = ChatTranscript::default();
        let id = t.push_bot("kept");
        assert!(!t.end_typing(id));
        assert_eq!(t.entries.len(), 1);
    }

    #[test]
    fn clean_question_trims_and_rejects_blank() {
        assert_eq!(clean_question("  hola  ").as_deref(), Some("hola"));
        assert_eq!(clean_question(""), None);
        assert_eq!(clean_question("   \n "), None);
    }

    #[test]
    fn reply_text_prefers_answer() {
        assert_eq!(reply_text(&reply(Some("hi there"), None)), "hi there");
        assert_eq!(
            reply_text(&reply(Some("hi"), Some("ignored"))),
            "hi"
        );
    }

    #[test]
    fn reply_text_reports_error() {
        assert_eq!(
            reply_text(&reply(None, Some("sin contexto"))),
            "Ocurrió un error: sin contexto"
        );
        // blank answer falls through to the error
        assert_eq!(
            reply_text(&reply(Some(""), Some("sin contexto"))),
            "Ocurrió un error: sin contexto"
        );
    }

    #[test]
    fn reply_text_falls_back_when_both_absent_or_blank() {
        assert_eq!(reply_text(&reply(None, None)), NO_REPLY);
        assert_eq!(reply_text(&reply(Some(""), Some(""))), NO_REPLY);
    }
}
