use crate::layout::sections;
use leptos::prelude::*;
use std::collections::HashMap;
use web_sys::window;

/// URL query parameter mirroring the active section.
const SECTION_PARAM: &str = "seccion";

#[derive(Clone, Copy)]
pub struct AppGlobalContext {
    /// Id of the visible section. `None` renders no section at all.
    pub active_section: RwSignal<Option<&'static str>>,
    pub left_open: RwSignal<bool>,
}

impl AppGlobalContext {
    pub fn new() -> Self {
        Self {
            active_section: RwSignal::new(sections::initial_section()),
            left_open: RwSignal::new(true),
        }
    }

    /// Make `id` the single active section. Unknown and disabled ids leave
    /// the current selection untouched.
    pub fn activate(&self, id: &str) {
        if let Some(id) = sections::selectable(id) {
            self.active_section.set(Some(id));
        }
    }

    pub fn is_active(&self, id: &str) -> bool {
        self.active_section
            .get()
            .map(|active| active == id)
            .unwrap_or(false)
    }

    pub fn toggle_left(&self) {
        self.left_open.update(|open| *open = !*open);
    }

    pub fn init_url_integration(&self) {
        let search = window()
            .and_then(|w| w.location().search().ok())
            .unwrap_or_default();
        let params: HashMap<String, String> =
            serde_qs::from_str(search.trim_start_matches('?')).unwrap_or_default();
        if let Some(requested) = params.get(SECTION_PARAM) {
            self.activate(requested);
        }

        let this = *self;
        Effect::new(move |_| {
            if let Some(active) = this.active_section.get() {
                let query_string = serde_qs::to_string(&HashMap::from([(
                    SECTION_PARAM.to_string(),
                    active.to_string(),
                )]))
                .unwrap_or_default();

                let new_url = format!("?{}", query_string);

                // Use untracked reads so URL bookkeeping creates no
                // reactive dependencies of its own.
                let current_search = window()
                    .and_then(|w| w.location().search().ok())
                    .unwrap_or_default();

                if current_search != new_url {
                    if let Some(w) = window() {
                        if let Ok(history) = w.history() {
                            let _ = history.replace_state_with_url(
                                &wasm_bindgen::JsValue::NULL,
                                "",
                                Some(&new_url),
                            );
                        }
                    }
                }
            }
        });
    }
}
