//! Document Manager - View Component

use super::inventory::FileInventory;
use super::model::{delete_file, fetch_index, rebuild_index, upload_file};
use super::view_model::DocumentsVm;
use crate::shared::dialogs::{alert, confirm};
use crate::shared::format::format_bytes;
use crate::shared::icons::icon;
use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use thaw::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;

/// How long the fade-out animation of a deleted row runs before the row
/// is dropped from the list state.
const REMOVE_ANIMATION_MS: u32 = 250;

#[component]
#[allow(non_snake_case)]
pub fn DocumentsSection() -> impl IntoView {
    let vm = DocumentsVm::new();
    let file_input_ref = NodeRef::<leptos::html::Input>::new();

    // Load the stored document set
    Effect::new(move |_| {
        spawn_local(async move {
            match fetch_index().await {
                Ok(index) => {
                    vm.inventory.set(FileInventory::from_index(index));
                    vm.error.set(None);
                }
                Err(e) => vm.error.set(Some(e)),
            }
        });
    });

    let handle_upload = move |file: web_sys::File| {
        spawn_local(async move {
            match upload_file(file).await {
                Ok(ack) if ack.ok => {
                    if let Some(name) = ack.filename {
                        vm.inventory.update(|inv| {
                            inv.add(name);
                        });
                    }
                }
                Ok(ack) => alert(ack.msg.as_deref().unwrap_or("Error al subir")),
                Err(e) => {
                    log::error!("upload failed: {}", e);
                    alert("Error de red");
                }
            }
        });
    };

    let handle_delete = move |name: String| {
        if !confirm(&format!("¿Eliminar \"{}\"?", name)) {
            return;
        }
        spawn_local(async move {
            match delete_file(&name).await {
                Ok(ack) if ack.ok => {
                    vm.inventory.update(|inv| inv.mark_removing(&name));
                    TimeoutFuture::new(REMOVE_ANIMATION_MS).await;
                    vm.inventory.update(|inv| inv.remove(&name));
                }
                Ok(ack) => alert(ack.msg.as_deref().unwrap_or("No se pudo eliminar")),
                Err(e) => {
                    log::error!("delete failed: {}", e);
                    alert("Error de red");
                }
            }
        });
    };

    let handle_rebuild = move |_| {
        spawn_local(async move {
            // Rebuild failures are ignored, as in the classic dashboard.
            if let Ok(ack) = rebuild_index().await {
                if ack.ok {
                    alert("Reprocesado correctamente.");
                }
            }
        });
    };

    let browse = move |_| {
        if let Some(input) = file_input_ref.get() {
            input.click();
        }
    };

    view! {
        <Flex justify=FlexJustify::SpaceBetween align=FlexAlign::Center>
            <h1 class="section__title">"Documentos"</h1>
            <Button
                appearance=ButtonAppearance::Secondary
                attr:id="btnRebuild"
                on_click=handle_rebuild
            >
                {icon("refresh")}
                " Reprocesar documentos"
            </Button>
        </Flex>

        {move || {
            vm.error
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

        <div
            id="dropzone"
            class="dropzone"
            class:dragover=move || vm.dragover.get()
            on:dragover=move |ev: web_sys::DragEvent| {
                ev.prevent_default();
                vm.dragover.set(true);
            }
            on:dragleave=move |_| vm.dragover.set(false)
            on:drop=move |ev: web_sys::DragEvent| {
                ev.prevent_default();
                vm.dragover.set(false);
                // only the first dragged file is taken
                let file = ev
                    .data_transfer()
                    .and_then(|dt| dt.files())
                    .and_then(|files| files.get(0));
                if let Some(file) = file {
                    handle_upload(file);
                }
            }
        >
            {icon("upload")}
            <p>"Arrastra un PDF aquí, o"</p>
            <Button appearance=ButtonAppearance::Primary attr:id="btnSelect" on_click=browse>
                "Seleccionar archivo"
            </Button>
            <input
                node_ref=file_input_ref
                id="fileInput"
                type="file"
                accept=".pdf"
                style="display: none;"
                on:change=move |ev| {
                    let input = ev
                        .target()
                        .and_then(|t| t.dyn_into::<web_sys::HtmlInputElement>().ok());
                    if let Some(input) = input {
                        if let Some(file) = input.files().and_then(|files| files.get(0)) {
                            handle_upload(file);
                        }
                        // Clear input so re-selecting the same file fires again
                        input.set_value("");
                    }
                }
            />
        </div>

        <div class="file-list__summary">
            {move || {
                let inv = vm.inventory.get();
                format!("{} documentos · {}", inv.len(), format_bytes(inv.total_size))
            }}
        </div>

        <ul id="fileList" class="file-list">
            <For
                each=move || vm.inventory.get().rows
                key=|row| format!("{}#{}", row.name, row.removing)
                let:row
            >
                {{
                    let name = row.name.clone();
                    let name_for_delete = name.clone();
                    let href = format!("/files/{}", urlencoding::encode(&name));
                    view! {
                        <li
                            class="file-list__row"
                            class:file-list__row--removing=row.removing
                            data-name=name.clone()
                        >
                            <span class="file-list__icon">{icon("file-text")}</span>
                            <a href=href target="_blank">{name.clone()}</a>
                            <button
                                class="btn-delete"
                                data-name=name.clone()
                                on:click=move |_| handle_delete(name_for_delete.clone())
                            >
                                {icon("trash")}
                                " Eliminar"
                            </button>
                        </li>
                    }
                }}
            </For>
        </ul>
    }
}
