use crate::domain::assistant::ui::AssistantSection;
use crate::domain::documents::ui::DocumentsSection;
use crate::domain::questions::ui::QuestionsSection;
use crate::domain::users::ui::AccountsSection;
use crate::layout::center::SectionPanel;
use crate::layout::global_context::AppGlobalContext;
use crate::layout::sections;
use crate::layout::Shell;
use crate::shared::toast::ToastService;
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    let ctx = AppGlobalContext::new();
    // Restore the active section from "?seccion=..." and keep the URL in
    // sync from then on. Runs once when the component is created.
    ctx.init_url_integration();

    provide_context(ctx);
    provide_context(ToastService::new());

    view! {
        <Shell center=|| {
            view! {
                <SectionPanel id=sections::DOCUMENTS>
                    <DocumentsSection />
                </SectionPanel>
                <SectionPanel id=sections::ASSISTANT>
                    <AssistantSection />
                </SectionPanel>
                <SectionPanel id=sections::QUESTIONS>
                    <QuestionsSection />
                </SectionPanel>
                <SectionPanel id=sections::ACCOUNTS>
                    <AccountsSection />
                </SectionPanel>
            }
                .into_any()
        } />
    }
}
