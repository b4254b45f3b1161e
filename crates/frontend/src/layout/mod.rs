pub mod center;
pub mod global_context;
pub mod left;
pub mod sections;
pub mod top_header;

use crate::shared::toast::ToastHost;
use left::sidebar::Sidebar;
use leptos::prelude::*;
use top_header::TopHeader;

/// Main application shell.
///
/// Layout structure:
/// ```text
/// +------------------------------------------+
/// |              TopHeader                    |
/// +------------------------------------------+
/// |  Sidebar  |          Content             |
/// |   (Left)  |         (Center)             |
/// +------------------------------------------+
/// ```
///
/// The toast host lives outside the zones so a toast overlays whichever
/// section is visible.
#[component]
pub fn Shell<C>(center: C) -> impl IntoView
where
    C: Fn() -> AnyView + 'static + Send,
{
    view! {
        <div class="app-layout">
            <TopHeader />

            <div class="app-body">
                // Left sidebar - uses ctx.left_open for visibility
                <left::Left>
                    <Sidebar />
                </left::Left>

                // Main content area
                <div class="app-main">
                    <center::Center>{center()}</center::Center>
                </div>
            </div>

            <ToastHost />
        </div>
    }
}
