//! Assistant Chat - View Component

use super::model::ask;
use super::transcript::{clean_question, reply_text, Author, NETWORK_ERROR};
use super::view_model::AssistantVm;
use crate::shared::icons::icon;
use leptos::prelude::*;
use thaw::*;
use wasm_bindgen_futures::spawn_local;

#[component]
#[allow(non_snake_case)]
pub fn AssistantSection() -> impl IntoView {
    let vm = AssistantVm::new();
    let messages_ref = NodeRef::<leptos::html::Div>::new();

    // Scroll to bottom helper
    let scroll_to_bottom = move || {
        if let Some(container) = messages_ref.get() {
            request_animation_frame(move || {
                container.set_scroll_top(container.scroll_height());
            });
        }
    };

    // Send handler - using Callback so the button and the keydown guard
    // share one code path
    let handle_send = Callback::new(move |_: ()| {
        let Some(text) = clean_question(&vm.input.get()) else {
            return;
        };
        vm.input.set(String::new());

        let mut transcript = vm.transcript.get();
        transcript.push_user(text.clone());
        let typing_id = transcript.begin_typing();
        vm.transcript.set(transcript);
        scroll_to_bottom();

        spawn_local(async move {
            match ask(&text).await {
                Ok(reply) => {
                    vm.transcript.update(|t| {
                        t.end_typing(typing_id);
                        t.push_bot(reply_text(&reply));
                    });
                }
                Err(e) => {
                    log::error!("ask failed: {}", e);
                    vm.transcript.update(|t| {
                        t.end_typing(typing_id);
                        t.push_bot(NETWORK_ERROR);
                    });
                }
            }
            scroll_to_bottom();
        });
    });

    view! {
        <h1 class="section__title">"Asistente"</h1>

        <div node_ref=messages_ref id="chatMessages" class="chat__messages">
            <For each=move || vm.transcript.get().entries key=|entry| entry.id let:entry>
                {{
                    let is_user = entry.author == Author::User;
                    view! {
                        <div class="msg" class:msg-user=is_user class:msg-bot=!is_user>
                            <div class="msg-avatar">
                                {if is_user { "🙋‍♂️" } else { "🤖" }}
                            </div>
                            <div class="msg-bubble">
                                {if entry.typing {
                                    view! {
                                        <div class="typing-dots">
                                            <span></span>
                                            <span></span>
                                            <span></span>
                                        </div>
                                    }
                                        .into_any()
                                } else {
                                    view! { <p>{entry.body.clone()}</p> }.into_any()
                                }}
                            </div>
                        </div>
                    }
                }}
            </For>
        </div>

        <div class="chat__composer">
            <Input
                value=vm.input
                placeholder="Escribe tu pregunta..."
                attr:id="chatInput"
                on:keydown=move |ev: web_sys::KeyboardEvent| {
                    if ev.key() == "Enter" {
                        if ev.shift_key() {
                            // Shift+Enter is reserved; plain input has no
                            // newline to insert, so nothing happens
                            return;
                        }
                        ev.prevent_default();
                        handle_send.run(());
                    }
                }
            />
            <Button
                appearance=ButtonAppearance::Primary
                attr:id="chatSendBtn"
                on_click=move |_| handle_send.run(())
            >
                {icon("send")}
                " Enviar"
            </Button>
        </div>
    }
}
