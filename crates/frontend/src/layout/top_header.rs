//! TopHeader component - application top bar.

use crate::layout::global_context::AppGlobalContext;
use crate::shared::icons::icon;
use leptos::prelude::*;

/// Top bar with the sidebar toggle and the application title.
#[component]
pub fn TopHeader() -> impl IntoView {
    let ctx =
        leptos::context::use_context::<AppGlobalContext>().expect("AppGlobalContext not found");

    let toggle_sidebar = move |_| {
        ctx.toggle_left();
    };

    let is_sidebar_visible = move || ctx.left_open.get();

    view! {
        <div class="top-header">
            <div class="top-header__brand">
                <button
                    class="top-header__icon-btn"
                    on:click=toggle_sidebar
                    title=move || {
                        if is_sidebar_visible() { "Ocultar navegación" } else { "Mostrar navegación" }
                    }
                >
                    {icon("menu")}
                </button>
                <span class="top-header__title">"Asistente documental"</span>
            </div>
        </div>
    }
}
