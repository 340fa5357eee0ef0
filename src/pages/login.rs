//! Login page

use crate::api;
use crate::components::{Header, LoadingSpinner};
use crate::session::{derive_display_name, SessionStore};
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::use_navigate;

/// Login form: exchanges credentials for a bearer token
#[component]
pub fn LoginPage() -> impl IntoView {
    let store = expect_context::<SessionStore>();
    let navigate = use_navigate();

    // Form state
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let is_submitting = RwSignal::new(false);
    let error = RwSignal::new(Option::<String>::None);

    // Redirect if already logged in
    let navigate_for_redirect = navigate.clone();
    let store_for_redirect = store.clone();
    Effect::new(move |_| {
        if store_for_redirect.token().is_some() {
            navigate_for_redirect("/", Default::default());
        }
    });

    // Handle form submission
    let navigate_for_submit = navigate.clone();
    let store_for_submit = store.clone();
    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();

        if is_submitting.get() {
            return;
        }

        let email_val = email.get();
        let password_val = password.get();
        let store = store_for_submit.clone();
        let navigate = navigate_for_submit.clone();

        spawn_local(async move {
            is_submitting.set(true);
            error.set(None);

            let base_url = store.api_base.get_untracked();
            let result = api::login(&base_url, &email_val, &password_val).await;

            is_submitting.set(false);

            match result {
                Ok(auth) => {
                    let display_name = derive_display_name(auth.name.clone(), &email_val);
                    store.login(&auth.access_token, &display_name);
                    navigate("/", Default::default());
                }
                Err(e) => {
                    tracing::warn!("login failed: {}", e);
                    // Generic notice; credentials stay in the fields for retry
                    error.set(Some("Login failed".to_string()));
                }
            }
        });
    };

    view! {
        <div class="page">
            <Header />

            <main class="auth-container">
                <div class="auth-card">
                    <div class="auth-header">
                        <h1 class="auth-title">"Login"</h1>
                        <p class="auth-subtitle">"Sign in to your investor account"</p>
                    </div>

                    <Show when=move || error.get().is_some()>
                        <div class="form-error">
                            {move || error.get().unwrap_or_default()}
                        </div>
                    </Show>

                    <form on:submit=on_submit class="auth-form">
                        <div class="form-group">
                            <label class="form-label">"Email"</label>
                            <input
                                type="email"
                                prop:value=move || email.get()
                                on:input=move |ev| email.set(event_target_value(&ev))
                                placeholder="you@example.com"
                                required=true
                                class="input"
                            />
                        </div>

                        <div class="form-group">
                            <label class="form-label">"Password"</label>
                            <input
                                type="password"
                                prop:value=move || password.get()
                                on:input=move |ev| password.set(event_target_value(&ev))
                                placeholder="••••••••"
                                required=true
                                class="input"
                            />
                        </div>

                        <button
                            type="submit"
                            disabled=move || is_submitting.get()
                            class="btn btn-primary btn-block"
                        >
                            <Show when=move || is_submitting.get()>
                                <LoadingSpinner />
                            </Show>
                            {move || if is_submitting.get() { "Signing in..." } else { "Login" }}
                        </button>
                    </form>

                    <div class="auth-footer">
                        "Don't have an account? "
                        <a href="/signup" class="auth-link">"Signup"</a>
                    </div>
                </div>
            </main>
        </div>
    }
}
