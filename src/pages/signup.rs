//! Signup page

use crate::api;
use crate::components::{Header, LoadingSpinner};
use crate::session::SessionStore;
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::use_navigate;

/// Signup form: registers a new investor, then hands off to login
#[component]
pub fn SignupPage() -> impl IntoView {
    let store = expect_context::<SessionStore>();
    let navigate = use_navigate();

    // Form state
    let name = RwSignal::new(String::new());
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

        let name_val = name.get();
        let email_val = email.get();
        let password_val = password.get();
        let store = store_for_submit.clone();
        let navigate = navigate_for_submit.clone();

        spawn_local(async move {
            is_submitting.set(true);
            error.set(None);

            let base_url = store.api_base.get_untracked();
            let result = api::signup(&base_url, &email_val, &password_val, &name_val).await;

            is_submitting.set(false);

            match result {
                Ok(profile) => {
                    tracing::info!("signup succeeded for {}", profile.email);
                    navigate("/login", Default::default());
                }
                Err(e) => {
                    // Server detail ("Email already registered") or generic fallback
                    error.set(Some(e.to_string()));
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
                        <h1 class="auth-title">"Signup"</h1>
                        <p class="auth-subtitle">"Create your investor account"</p>
                    </div>

                    <Show when=move || error.get().is_some()>
                        <div class="form-error">
                            {move || error.get().unwrap_or_default()}
                        </div>
                    </Show>

                    <form on:submit=on_submit class="auth-form">
                        <div class="form-group">
                            <label class="form-label">"Name"</label>
                            <input
                                type="text"
                                prop:value=move || name.get()
                                on:input=move |ev| name.set(event_target_value(&ev))
                                placeholder="Your name"
                                required=true
                                class="input"
                            />
                        </div>

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
                            {move || if is_submitting.get() { "Creating account..." } else { "Signup" }}
                        </button>
                    </form>

                    <div class="auth-footer">
                        "Already have an account? "
                        <a href="/login" class="auth-link">"Login"</a>
                    </div>
                </div>
            </main>
        </div>
    }
}
