//! Registry of dashboard sections.
//!
//! The sidebar renders this table and the shell shows exactly one section
//! at a time. Selection goes through [`selectable`], so disabled entries
//! and unknown ids (a stale URL, for example) can never become active.

use once_cell::sync::Lazy;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SectionDef {
    pub id: &'static str,
    pub label: &'static str,
    pub icon: &'static str,
    /// Shown in the sidebar but not clickable.
    pub disabled: bool,
    /// Marks the section shown at startup.
    pub initial: bool,
}

pub const DOCUMENTS: &str = "documentos";
pub const ASSISTANT: &str = "asistente";
pub const QUESTIONS: &str = "preguntas";
pub const ACCOUNTS: &str = "usuarios";
pub const SETTINGS: &str = "ajustes";

static SECTIONS: Lazy<Vec<SectionDef>> = Lazy::new(|| {
    vec![
        SectionDef {
            id: DOCUMENTS,
            label: "Documentos",
            icon: "folder",
            disabled: false,
            initial: true,
        },
        SectionDef {
            id: ASSISTANT,
            label: "Asistente",
            icon: "message-square",
            disabled: false,
            initial: false,
        },
        SectionDef {
            id: QUESTIONS,
            label: "Preguntas frecuentes",
            icon: "help-circle",
            disabled: false,
            initial: false,
        },
        SectionDef {
            id: ACCOUNTS,
            label: "Usuarios",
            icon: "users",
            disabled: false,
            initial: false,
        },
        SectionDef {
            id: SETTINGS,
            label: "Ajustes",
            icon: "settings",
            disabled: true,
            initial: false,
        },
    ]
});

pub fn sections() -> &'static [SectionDef] {
    &SECTIONS
}

/// Resolve a requested section id to its canonical registry id.
///
/// Returns `None` for unknown or disabled ids; callers treat that as a
/// no-op, leaving the current selection untouched.
pub fn selectable(id: &str) -> Option<&'static str> {
    SECTIONS
        .iter()
        .find(|s| s.id == id && !s.disabled)
        .map(|s| s.id)
}

/// The section marked active at startup, if any.
pub fn initial_section() -> Option<&'static str> {
    SECTIONS.iter().find(|s| s.initial).map(|s| s.id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_section_is_selectable() {
        assert_eq!(selectable("asistente"), Some(ASSISTANT));
    }

    #[test]
    fn unknown_section_is_not_selectable() {
        assert_eq!(selectable("inventario"), None);
        assert_eq!(selectable(""), None);
    }

    #[test]
    fn disabled_section_is_not_selectable() {
        assert_eq!(selectable(SETTINGS), None);
    }

    #[test]
    fn exactly_one_initial_section() {
        let initial: Vec<_> = sections().iter().filter(|s| s.initial).collect();
        assert_eq!(initial.len(), 1);
        assert_eq!(initial_section(), Some(DOCUMENTS));
    }
}
