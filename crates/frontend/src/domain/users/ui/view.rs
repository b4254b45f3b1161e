//! Accounts - View Component
//!
//! Rejection works like the question-log deletion: a native form whose
//! submission is cancelled unless the confirmation is accepted.

use super::model::fetch_accounts;
use crate::shared::api_utils::api_base;
use crate::shared::dialogs::confirm;
use crate::shared::icons::icon;
use contracts::accounts::AccountEntry;
use leptos::prelude::*;
use thaw::*;
use wasm_bindgen_futures::spawn_local;

#[component]
#[allow(non_snake_case)]
pub fn AccountsSection() -> impl IntoView {
    let (items, set_items) = signal::<Vec<AccountEntry>>(Vec::new());
    let (error, set_error) = signal::<Option<String>>(None);

    let fetch = move || {
        spawn_local(async move {
            match fetch_accounts().await {
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
            <h1 class="section__title">"Usuarios"</h1>
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
                    <TableHeaderCell resizable=true min_width=160.0>"Usuario"</TableHeaderCell>
                    <TableHeaderCell resizable=true min_width=220.0>"Email"</TableHeaderCell>
                    <TableHeaderCell min_width=100.0>"Estado"</TableHeaderCell>
                    <TableHeaderCell min_width=100.0>"Acciones"</TableHeaderCell>
                </TableRow>
            </TableHeader>
            <TableBody>
                {move || {
                    items
                        .get()
                        .into_iter()
                        .map(|account| {
                            let action =
                                format!("{}/users/{}/reject", api_base(), account.id);
                            view! {
                                <TableRow>
                                    <TableCell>
                                        <TableCellLayout>{account.username}</TableCellLayout>
                                    </TableCell>
                                    <TableCell>
                                        <TableCellLayout>{account.email}</TableCellLayout>
                                    </TableCell>
                                    <TableCell>
                                        <TableCellLayout>
                                            {if account.activo {
                                                view! {
                                                    <span class="badge badge--ok">"Activo"</span>
                                                }
                                            } else {
                                                view! {
                                                    <span class="badge badge--pending">
                                                        "Inactivo"
                                                    </span>
                                                }
                                            }}
                                        </TableCellLayout>
                                    </TableCell>
                                    <TableCell>
                                        <form
                                            class="form-reject-user"
                                            method="post"
                                            action=action
                                            on:submit=move |ev: web_sys::SubmitEvent| {
                                                if !confirm(
                                                    "¿Seguro que deseas rechazar / eliminar esta cuenta?",
                                                ) {
                                                    ev.prevent_default();
                                                }
                                            }
                                        >
                                            <button type="submit" class="btn-delete">
                                                {icon("trash")}
                                                " Rechazar"
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
