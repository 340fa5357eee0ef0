//! Header component

use crate::session::SessionStore;
use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

/// Main application header
#[component]
pub fn Header() -> impl IntoView {
    let store = expect_context::<SessionStore>();
    let navigate = use_navigate();

    let store_for_auth = store.clone();
    let is_auth = Signal::derive(move || store_for_auth.is_authenticated());

    view! {
        <header class="header">
            <div class="header-inner">
                <a href="/" class="brand">
                    <span class="brand-mark">"Au"</span>
                    <div>
                        <h1 class="brand-name">"Aurum"</h1>
                        <p class="brand-tagline">"Investor Portal"</p>
                    </div>
                </a>

                <nav class="header-nav">
                    {move || {
                        if is_auth.get() {
                            let store = store.clone();
                            let navigate = navigate.clone();
                            view! {
                                <button
                                    on:click=move |_| {
                                        store.logout();
                                        navigate("/login", Default::default());
                                    }
                                    class="btn btn-ghost"
                                >
                                    "Logout"
                                </button>
                            }.into_any()
                        } else {
                            view! {
                                <a href="/login" class="btn btn-primary">
                                    "Login"
                                </a>
                            }.into_any()
                        }
                    }}
                </nav>
            </div>
        </header>
    }
}
