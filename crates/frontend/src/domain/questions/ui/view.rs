//! Question Log - View Component
//!
//! The deletion form is a native browser form: the handler only decides
//! whether the submission proceeds, the navigation itself stays with the
//! browser.

use super::model::fetch_questions;
use crate::shared::api_utils::api_base;
use crate::shared::dialogs::confirm;
use crate::shared::format::format_datetime;
use crate::shared::icons::icon;
use contracts::questions::QuestionEntry;
use leptos::prelude::*;
use thaw::*;
use wasm_bindgen_futures::spawn_local;

#[component]
#[allow(non_snake_case)]
pub fn QuestionsSection() -> impl IntoView {
    let (items, set_items) = signal::<Vec<QuestionEntry>>(Vec::new());
    let (error, set_error) = signal::<Option<String>>(None);

    let fetch = move || {
        spawn_local(async move {
            match fetch_questions().await {
                Ok(v) => {
                    set_items.set(v);
                    set_error.set(None);
                }
                Err(e) => set_error.set(Some(e)),
            }
        });
    };

    fetch();

    view! {
        <Flex justify=FlexJustify::SpaceBetween align=FlexAlign::Center>
            <h1 class="section__title">"Preguntas frecuentes"</h1>
            <Button appearance=ButtonAppearance::Secondary on_click=move |_| fetch()>
                {icon("refresh")}
                " Actualizar"
            </Button>
        </Flex>

        {move || {
            error
                .get()
                .map(|e| {
                    view! {
                        <div class="error-banner">
                            <span class="error-banner__mark">"⚠"</span>
                            <span>{e}</span>
                        </div>
                    }
                })
        }}

        <Table>
            <TableHeader>
                <TableRow>
                    <TableHeaderCell resizable=true min_width=300.0>"Pregunta"</TableHeaderCell>
                    <TableHeaderCell min_width=140.0>"Fecha"</TableHeaderCell>
                    <TableHeaderCell min_width=100.0>"Acciones"</TableHeaderCell>
                </TableRow>
            </TableHeader>
            <TableBody>
                {move || {
                    items
                        .get()
                        .into_iter()
                        .map(|entry| {
                            let action =
                                format!("{}/prompts/{}/delete", api_base(), entry.id);
                            view! {
                                <TableRow>
                                    <TableCell>
                                        <TableCellLayout>{entry.texto}</TableCellLayout>
                                    </TableCell>
                                    <TableCell>
                                        <TableCellLayout>
                                            {format_datetime(&entry.fecha_creacion)}
                                        </TableCellLayout>
                                    </TableCell>
                                    <TableCell>
                                        <form
                                            class="form-delete-prompt"
                                            method="post"
                                            action=action
                                            on:submit=move |ev: web_sys::SubmitEvent| {
                                                if !confirm(
                                                    "¿Seguro que deseas eliminar este prompt?",
                                                ) {
                                                    ev.prevent_default();
                                                }
                                            }
                                        >
                                            <button type="submit" class="btn-delete">
                                                {icon("trash")}
                                                " Eliminar"
                                            </button>
                                        </form>
                                    </TableCell>
                                </TableRow>
                            }
                        })
                        .collect_view()
                }}
            </TableBody>
        </Table>
    }
}
