use crate::layout::global_context::AppGlobalContext;
use leptos::prelude::*;

#[component]
pub fn Center(children: Children) -> impl IntoView {
    view! {
        <div data-zone="center" class="center">
            {children()}
        </div>
    }
}

/// Wraps one section's content and shows it only while that section is the
/// active one. Unmounted sections keep no state; a revisit re-fetches.
#[component]
pub fn SectionPanel(id: &'static str, children: ChildrenFn) -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext not found");

    view! {
        <Show when=move || ctx.is_active(id)>
            <section class="section" id=format!("section-{}", id)>
                {children()}
            </section>
        </Show>
    }
}
