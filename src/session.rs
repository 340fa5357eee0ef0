//! Session state shared across the app

use gloo_storage::{LocalStorage, Storage};
use leptos::prelude::*;

const STORAGE_KEY_TOKEN: &str = "aurum_token";
const DEFAULT_API_BASE: &str = "http://127.0.0.1:8000";

/// Session record: bearer token plus the derived display name.
///
/// Invariant: `display_name` is only meaningful while `token` is present.
/// Both fields are set together on login and cleared together on logout.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Session {
    pub token: Option<String>,
    pub display_name: Option<String>,
}

impl Session {
    pub fn login(&mut self, token: impl Into<String>, display_name: impl Into<String>) {
        self.token = Some(token.into());
        self.display_name = Some(display_name.into());
    }

    pub fn logout(&mut self) {
        self.token = None;
        self.display_name = None;
    }

    pub fn is_authenticated(&self) -> bool {
        self.token.is_some()
    }

    /// Stale-response guard: whether `token` is still the active token
    pub fn is_current_token(&self, token: &str) -> bool {
        self.token.as_deref() == Some(token)
    }
}

/// Display name for a fresh login: server-provided name, else the email
pub fn derive_display_name(name: Option<String>, email: &str) -> String {
    match name {
        Some(n) if !n.trim().is_empty() => n,
        _ => email.to_string(),
    }
}

/// Reactive session store, provided as context to every page
#[derive(Clone)]
pub struct SessionStore {
    session: RwSignal<Session>,
    /// API base URL
    pub api_base: RwSignal<String>,
}

impl SessionStore {
    pub fn new() -> Self {
        // Restore a persisted token; the display name is re-derived
        // later from the profile fetch
        let token: Option<String> = LocalStorage::get(STORAGE_KEY_TOKEN).ok();
        let session = Session {
            token,
            display_name: None,
        };

        Self {
            session: RwSignal::new(session),
            api_base: RwSignal::new(DEFAULT_API_BASE.to_string()),
        }
    }

    /// Transition to Authenticated and persist the token
    pub fn login(&self, token: &str, display_name: &str) {
        if let Err(e) = LocalStorage::set(STORAGE_KEY_TOKEN, token) {
            tracing::warn!("failed to persist token: {:?}", e);
        }
        self.session.update(|s| s.login(token, display_name));
    }

    /// Transition to Anonymous and remove the persisted token
    pub fn logout(&self) {
        LocalStorage::delete(STORAGE_KEY_TOKEN);
        self.session.update(|s| s.logout());
    }

    /// Current token (tracked read)
    pub fn token(&self) -> Option<String> {
        self.session.with(|s| s.token.clone())
    }

    /// Current token without subscribing the caller
    pub fn token_untracked(&self) -> Option<String> {
        self.session.with_untracked(|s| s.token.clone())
    }

    /// Current display name (tracked read)
    pub fn display_name(&self) -> Option<String> {
        self.session.with(|s| s.display_name.clone())
    }

    pub fn is_authenticated(&self) -> bool {
        self.session.with(|s| s.is_authenticated())
    }

    /// Stale-response guard: true when `token` still matches the session
    pub fn is_current_token(&self, token: &str) -> bool {
        self.session.with_untracked(|s| s.is_current_token(token))
    }
}

impl Default for SessionStore {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn login_sets_token_and_display_name() {
        let mut session = Session::default();
        session.login("T1", "Alice");
        assert!(session.is_authenticated());
        assert_eq!(session.token.as_deref(), Some("T1"));
        assert_eq!(session.display_name.as_deref(), Some("Alice"));
    }

    #[test]
    fn logout_clears_both_fields() {
        let mut session = Session::default();
        session.login("T1", "Alice");
        session.logout();
        assert!(!session.is_authenticated());
        assert!(session.token.is_none());
        assert!(session.display_name.is_none());
    }

    #[test]
    fn logout_is_idempotent() {
        let mut session = Session::default();
        session.logout();
        assert_eq!(session, Session::default());
    }

    #[test]
    fn responses_from_a_replaced_token_are_stale() {
        let mut session = Session::default();
        session.login("T1", "Alice");
        assert!(session.is_current_token("T1"));

        session.logout();
        assert!(!session.is_current_token("T1"));

        session.login("T2", "Alice");
        assert!(!session.is_current_token("T1"));
        assert!(session.is_current_token("T2"));
    }

    #[test]
    fn display_name_prefers_server_name() {
        assert_eq!(
            derive_display_name(Some("Alice".into()), "a@b.com"),
            "Alice"
        );
    }

    #[test]
    fn display_name_falls_back_to_email() {
        assert_eq!(derive_display_name(None, "a@b.com"), "a@b.com");
        assert_eq!(derive_display_name(Some("  ".into()), "a@b.com"), "a@b.com");
    }
}
