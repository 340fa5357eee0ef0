//! Portfolio view - read-only holdings list

use crate::api;
use crate::components::LoadingDots;
use crate::session::SessionStore;
use crate::types::PortfolioItem;
use leptos::prelude::*;
use leptos::task::spawn_local;

/// Holdings table, refetched whenever the session token changes
#[component]
pub fn Portfolio() -> impl IntoView {
    let store = expect_context::<SessionStore>();

    // None until the first response arrives
    let items = RwSignal::new(Option::<Vec<PortfolioItem>>::None);
    let error = RwSignal::new(Option::<String>::None);

    let store_for_load = store.clone();
    Effect::new(move |_| {
        let Some(token) = store_for_load.token() else {
            return;
        };

        let store = store_for_load.clone();
        spawn_local(async move {
            let base_url = store.api_base.get_untracked();
            match api::fetch_portfolio(&base_url, &token).await {
                Ok(data) => {
                    // Discard stale responses after logout/re-login
                    if store.is_current_token(&token) {
                        items.set(Some(data));
                        error.set(None);
                    }
                }
                Err(e) if e.is_auth_failure() => store.logout(),
                Err(e) => {
                    tracing::error!("portfolio fetch failed: {}", e);
                    if store.is_current_token(&token) {
                        error.set(Some(e.to_string()));
                    }
                }
            }
        });
    });

    view! {
        <section class="panel">
            <h3 class="panel-title">"Portfolio"</h3>

            <Show when=move || error.get().is_some()>
                <div class="form-error">{move || error.get().unwrap_or_default()}</div>
            </Show>

            {move || match items.get() {
                None => view! { <LoadingDots /> }.into_any(),
                Some(holdings) if holdings.is_empty() => {
                    view! { <p class="empty-note">"No holdings yet."</p> }.into_any()
                }
                Some(holdings) => view! {
                    <table class="data-table">
                        <thead>
                            <tr>
                                <th>"Asset"</th>
                                <th class="num">"Quantity"</th>
                                <th class="num">"Value"</th>
                            </tr>
                        </thead>
                        <tbody>
                            {holdings.into_iter().map(|item| view! {
                                <tr>
                                    <td>{item.asset.clone()}</td>
                                    <td class="num">{format!("{}", item.quantity)}</td>
                                    <td class="num">{format!("${:.2}", item.value)}</td>
                                </tr>
                            }).collect::<Vec<_>>()}
                        </tbody>
                    </table>
                }.into_any(),
            }}
        </section>
    }
}
