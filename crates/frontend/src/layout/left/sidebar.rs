//! Sidebar listing the dashboard sections.

use crate::layout::global_context::AppGlobalContext;
use crate::layout::sections::{sections, SectionDef};
use crate::shared::icons::icon;
use leptos::prelude::*;

#[component]
pub fn Sidebar() -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext not found");

    view! {
        <div class="app-sidebar__content">
            {sections()
                .iter()
                .map(|item: &SectionDef| {
                    let SectionDef { id, label, icon: icon_name, disabled, .. } = *item;
                    view! {
                        <div
                            class="app-sidebar__item"
                            class:app-sidebar__item--active=move || ctx.is_active(id)
                            class:app-sidebar__item--disabled=disabled
                            data-section=id
                            on:click=move |_| {
                                if disabled {
                                    return;
                                }
                                ctx.activate(id);
                            }
                        >
                            <div class="app-sidebar__item-content">
                                {icon(icon_name)}
                                <span>{label}</span>
                            </div>
                        </div>
                    }
                })
                .collect_view()}
        </div>
    }
}
