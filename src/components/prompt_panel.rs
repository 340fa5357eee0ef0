//! AI prompt panel - free-text prompt in, rendered markdown out

use crate::api;
use crate::markdown;
use crate::session::SessionStore;
use leptos::prelude::*;
use leptos::task::spawn_local;

const AI_ERROR_TEXT: &str = "Error fetching AI response";

/// Prompt form plus the sanitized-HTML response pane
#[component]
pub fn PromptPanel() -> impl IntoView {
    let store = expect_context::<SessionStore>();

    let prompt = RwSignal::new(String::new());
    let response_html = RwSignal::new(Option::<String>::None);
    let is_sending = RwSignal::new(false);

    let store_for_submit = store.clone();
    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();

        let prompt_val = prompt.get().trim().to_string();
        if prompt_val.is_empty() || is_sending.get() {
            return;
        }
        let store = store_for_submit.clone();

        spawn_local(async move {
            let Some(token) = store.token_untracked() else {
                return;
            };

            is_sending.set(true);

            let base_url = store.api_base.get_untracked();
            match api::send_prompt(&base_url, &token, &prompt_val).await {
                Ok(text) => {
                    if store.is_current_token(&token) {
                        response_html.set(Some(markdown::render(&text)));
                    }
                }
                Err(e) if e.is_auth_failure() => store.logout(),
                Err(e) => {
                    tracing::error!("AI request failed: {}", e);
                    // Fixed message; the prompt stays in the box for retry
                    if store.is_current_token(&token) {
                        response_html.set(Some(markdown::render(AI_ERROR_TEXT)));
                    }
                }
            }

            is_sending.set(false);
        });
    };

    view! {
        <section class="panel prompt-panel">
            <h3 class="panel-title">"Ask the AI"</h3>

            <form on:submit=on_submit class="prompt-form">
                <textarea
                    prop:value=move || prompt.get()
                    on:input=move |ev| prompt.set(event_target_value(&ev))
                    placeholder="Enter your prompt here..."
                    rows="5"
                    class="input prompt-input"
                ></textarea>
                <button
                    type="submit"
                    disabled=move || is_sending.get()
                    class="btn btn-primary btn-block"
                >
                    {move || if is_sending.get() { "Thinking..." } else { "Submit Prompt" }}
                </button>
            </form>

            <h4 class="response-title">"AI Response:"</h4>
            <div
                class="ai-response"
                inner_html=move || response_html.get().unwrap_or_default()
            ></div>
        </section>
    }
}
