//! Transient status banner.
//!
//! `ToastService` lives in context; `show` displays a banner for 2.5
//! seconds. The host renders nothing while no toast is set. No feature
//! currently calls `show` - the service is provided for parity with the
//! classic dashboard, where the helper existed unused.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

const TOAST_VISIBLE_MS: u32 = 2500;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToastKind {
    Ok,
    Error,
}

impl ToastKind {
    pub fn css_class(self) -> &'static str {
        match self {
            ToastKind::Ok => "toast toast--ok",
            ToastKind::Error => "toast toast--error",
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Toast {
    pub message: String,
    pub kind: ToastKind,
}

#[derive(Clone, Copy)]
pub struct ToastService {
    current: RwSignal<Option<Toast>>,
}

impl ToastService {
    pub fn new() -> Self {
        Self {
            current: RwSignal::new(None),
        }
    }

    /// Show `message` for 2.5 seconds. A later `show` replaces the banner;
    /// the earlier timer may then hide it ahead of schedule, matching the
    /// classic dashboard's behavior.
    pub fn show(&self, message: impl Into<String>, kind: ToastKind) {
        self.current.set(Some(Toast {
            message: message.into(),
            kind,
        }));
        let current = self.current;
        spawn_local(async move {
            TimeoutFuture::new(TOAST_VISIBLE_MS).await;
            current.set(None);
        });
    }

    pub fn show_ok(&self, message: impl Into<String>) {
        self.show(message, ToastKind::Ok);
    }

    pub fn current(&self) -> ReadSignal<Option<Toast>> {
        self.current.read_only()
    }
}

#[component]
pub fn ToastHost() -> impl IntoView {
    let service = use_context::<ToastService>().expect("ToastService not found");
    let current = service.current();

    view! {
        {move || {
            current
                .get()
                .map(|toast| {
                    view! { <div class=toast.kind.css_class()>{toast.message}</div> }
                })
        }}
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kind_maps_to_css_class() {
        assert_eq!(ToastKind::Ok.css_class(), "toast toast--ok");
        assert_eq!(ToastKind::Error.css_class(), "toast toast--error");
    }
}
