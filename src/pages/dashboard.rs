//! Dashboard page - profile greeting, data views, AI prompt panel

use crate::api::{self, FetchError};
use crate::components::{Header, LoadingDots, Portfolio, PromptPanel, Requests};
use crate::session::SessionStore;
use crate::types::InvestorProfile;
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::use_navigate;

/// Inline text for a fetch failure; auth failures log out instead
fn visible_error(e: &FetchError) -> Option<String> {
    (!e.is_auth_failure()).then(|| e.to_string())
}

/// Greeting line: profile name once loaded, session display name until
/// then, nothing before either exists
fn greeting_text(profile: Option<&InvestorProfile>, display_name: Option<String>) -> Option<String> {
    profile
        .map(|p| p.name.clone())
        .or(display_name)
        .map(|name| format!("Welcome, {}", name))
}

/// Authenticated landing page
#[component]
pub fn DashboardPage() -> impl IntoView {
    let store = expect_context::<SessionStore>();
    let navigate = use_navigate();

    // Per-view fetch state
    let profile = RwSignal::new(Option::<InvestorProfile>::None);
    let insights = RwSignal::new(Option::<String>::None);
    let error = RwSignal::new(Option::<String>::None);

    // Redirect if not authenticated
    let navigate_clone = navigate.clone();
    let store_for_redirect = store.clone();
    Effect::new(move |_| {
        if store_for_redirect.token().is_none() {
            navigate_clone("/login", Default::default());
        }
    });

    // Fetch profile and insights on mount and whenever the token changes
    let store_for_load = store.clone();
    Effect::new(move |_| {
        let Some(token) = store_for_load.token() else {
            return;
        };

        let store = store_for_load.clone();
        let profile_token = token.clone();
        spawn_local(async move {
            let base_url = store.api_base.get_untracked();
            match api::fetch_profile(&base_url, &profile_token).await {
                Ok(data) => {
                    // Discard if the session moved on while we were in flight
                    if store.is_current_token(&profile_token) {
                        profile.set(Some(data));
                        error.set(None);
                    }
                }
                Err(e) if e.is_auth_failure() => store.logout(),
                Err(e) => {
                    tracing::error!("profile fetch failed: {}", e);
                    if store.is_current_token(&profile_token) {
                        error.set(visible_error(&e));
                    }
                }
            }
        });

        let store = store_for_load.clone();
        spawn_local(async move {
            let base_url = store.api_base.get_untracked();
            match api::fetch_insights(&base_url, &token).await {
                Ok(data) => {
                    if store.is_current_token(&token) {
                        insights.set(Some(data.message));
                    }
                }
                Err(e) if e.is_auth_failure() => store.logout(),
                Err(e) => {
                    tracing::error!("insights fetch failed: {}", e);
                    if store.is_current_token(&token) {
                        error.set(visible_error(&e));
                    }
                }
            }
        });
    });

    let store_for_greeting = store.clone();
    let greeting = Signal::derive(move || {
        profile.with(|p| greeting_text(p.as_ref(), store_for_greeting.display_name()))
    });

    view! {
        <div class="page">
            <Header />

            <main class="dashboard">
                <div class="dashboard-header">
                    <Show when=move || greeting.get().is_some()>
                        <h2 class="dashboard-title">{move || greeting.get().unwrap_or_default()}</h2>
                    </Show>
                    <Show when=move || profile.get().is_none() && error.get().is_none()>
                        <LoadingDots />
                    </Show>
                </div>

                <Show when=move || error.get().is_some()>
                    <div class="form-error">{move || error.get().unwrap_or_default()}</div>
                </Show>

                <div class="dashboard-grid">
                    <Portfolio />
                    <Requests />
                </div>

                <Show when=move || insights.get().is_some()>
                    <section class="panel insights-panel">
                        <h3 class="panel-title">"AI Insights"</h3>
                        <p class="insights-text">{move || insights.get().unwrap_or_default()}</p>
                    </section>
                </Show>

                <PromptPanel />
            </main>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn non_auth_failures_are_user_visible() {
        let err = FetchError::Network("offline".to_string());
        assert_eq!(
            visible_error(&err),
            Some("Network error: offline".to_string())
        );

        let err = FetchError::Server {
            status: 500,
            detail: "Internal error".to_string(),
        };
        assert_eq!(visible_error(&err), Some("Internal error".to_string()));
    }

    #[test]
    fn auth_failures_are_not_surfaced_inline() {
        assert_eq!(visible_error(&FetchError::Unauthorized), None);
    }

    #[test]
    fn greeting_waits_for_a_name() {
        assert_eq!(greeting_text(None, None), None);
    }

    #[test]
    fn greeting_falls_back_to_display_name() {
        assert_eq!(
            greeting_text(None, Some("a@b.com".to_string())),
            Some("Welcome, a@b.com".to_string())
        );
    }

    #[test]
    fn greeting_prefers_profile_name() {
        let profile = InvestorProfile {
            email: "a@b.com".to_string(),
            name: "Alice".to_string(),
        };
        assert_eq!(
            greeting_text(Some(&profile), Some("a@b.com".to_string())),
            Some("Welcome, Alice".to_string())
        );
    }
}
