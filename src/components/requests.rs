//! Requests view - deposit/withdrawal list plus creation form

use crate::api;
use crate::components::LoadingDots;
use crate::session::SessionStore;
use crate::types::{FinancialRequest, RequestKind};
use leptos::prelude::*;
use leptos::task::spawn_local;

/// Request list with a create form; creation refetches the list
#[component]
pub fn Requests() -> impl IntoView {
    let store = expect_context::<SessionStore>();

    // None until the first response arrives
    let requests = RwSignal::new(Option::<Vec<FinancialRequest>>::None);
    let error = RwSignal::new(Option::<String>::None);
    // Bumped after a successful create to retrigger the fetch effect
    let refresh = RwSignal::new(0u32);

    // Creation form state
    let kind = RwSignal::new(RequestKind::Deposit);
    let amount = RwSignal::new(String::new());
    let is_submitting = RwSignal::new(false);

    let store_for_load = store.clone();
    Effect::new(move |_| {
        refresh.track();
        let Some(token) = store_for_load.token() else {
            return;
        };

        let store = store_for_load.clone();
        spawn_local(async move {
            let base_url = store.api_base.get_untracked();
            match api::fetch_requests(&base_url, &token).await {
                Ok(data) => {
                    // The list is only trusted as the server returned it
                    if store.is_current_token(&token) {
                        requests.set(Some(data));
                        error.set(None);
                    }
                }
                Err(e) if e.is_auth_failure() => store.logout(),
                Err(e) => {
                    tracing::error!("requests fetch failed: {}", e);
                    if store.is_current_token(&token) {
                        error.set(Some(e.to_string()));
                    }
                }
            }
        });
    });

    let store_for_submit = store.clone();
    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();

        if is_submitting.get() {
            return;
        }

        let amount_val = match amount.get().trim().parse::<f64>() {
            Ok(a) if a > 0.0 => a,
            _ => {
                error.set(Some("Enter a positive amount".to_string()));
                return;
            }
        };
        let kind_val = kind.get();
        let store = store_for_submit.clone();

        spawn_local(async move {
            let Some(token) = store.token_untracked() else {
                return;
            };

            is_submitting.set(true);
            error.set(None);

            let base_url = store.api_base.get_untracked();
            // Refetch only after the create response is observed
            match api::create_request(&base_url, &token, kind_val, amount_val).await {
                Ok(_) => {
                    amount.set(String::new());
                    refresh.update(|n| *n += 1);
                }
                Err(e) if e.is_auth_failure() => store.logout(),
                Err(e) => {
                    tracing::error!("request create failed: {}", e);
                    error.set(Some(e.to_string()));
                }
            }

            is_submitting.set(false);
        });
    };

    view! {
        <section class="panel">
            <h3 class="panel-title">"Requests"</h3>

            <form on:submit=on_submit class="request-form">
                <select
                    on:change=move |ev| {
                        kind.set(match event_target_value(&ev).as_str() {
                            "withdrawal" => RequestKind::Withdrawal,
                            _ => RequestKind::Deposit,
                        });
                    }
                    prop:value=move || kind.get().as_str()
                    class="input select"
                >
                    <option value="deposit">"Deposit"</option>
                    <option value="withdrawal">"Withdrawal"</option>
                </select>
                <input
                    type="number"
                    min="0"
                    step="any"
                    prop:value=move || amount.get()
                    on:input=move |ev| amount.set(event_target_value(&ev))
                    placeholder="Amount"
                    required=true
                    class="input amount-input"
                />
                <button
                    type="submit"
                    disabled=move || is_submitting.get()
                    class="btn btn-primary"
                >
                    "Submit"
                </button>
            </form>

            <Show when=move || error.get().is_some()>
                <div class="form-error">{move || error.get().unwrap_or_default()}</div>
            </Show>

            {move || match requests.get() {
                None => view! { <LoadingDots /> }.into_any(),
                Some(list) if list.is_empty() => {
                    view! { <p class="empty-note">"No requests yet."</p> }.into_any()
                }
                Some(list) => view! {
                    <ul class="request-list">
                        {list.into_iter().map(|r| view! {
                            <li class="request-item">
                                <span class="request-kind">{r.kind.as_str()}</span>
                                <span class="request-amount">{format!("${:.2}", r.amount)}</span>
                                <span class=format!("request-status status-{}", r.status.as_str())>
                                    {r.status.as_str()}
                                </span>
                                <span class="request-time">
                                    {r.timestamp.format("%Y-%m-%d %H:%M").to_string()}
                                </span>
                            </li>
                        }).collect::<Vec<_>>()}
                    </ul>
                }.into_any(),
            }}
        </section>
    }
}
