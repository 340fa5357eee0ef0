//! Aurum Investor Portal - Leptos frontend
//!
//! Client-side app for the investor API: signup/login, portfolio and
//! request views, and an AI prompt panel rendering markdown responses.

pub mod api;
pub mod components;
pub mod markdown;
pub mod pages;
pub mod session;
pub mod types;

use leptos::prelude::*;
use leptos_router::{
    components::{Route, Router, Routes},
    path,
};

use pages::{dashboard::DashboardPage, login::LoginPage, signup::SignupPage};
use session::SessionStore;

/// Main application component
#[component]
pub fn App() -> impl IntoView {
    // Initialize the session store and make it available everywhere
    let store = SessionStore::new();
    provide_context(store);

    view! {
        <Router>
            <main class="app-shell">
                <Routes fallback=|| view! { <NotFound /> }>
                    <Route path=path!("/") view=DashboardPage />
                    <Route path=path!("/login") view=LoginPage />
                    <Route path=path!("/signup") view=SignupPage />
                </Routes>
            </main>
        </Router>
    }
}

/// 404 Not Found page
#[component]
fn NotFound() -> impl IntoView {
    view! {
        <div class="notfound">
            <h1 class="notfound-code">"404"</h1>
            <p class="notfound-text">"Page not found"</p>
            <a href="/" class="btn btn-primary">"Go Home"</a>
        </div>
    }
}
