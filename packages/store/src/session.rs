//! # Session: the client-held identity
//!
//! A [`Session`] is what every protected page needs to talk to the API: the
//! bearer token, the username it was issued for, the account creation date
//! shown on the profile card, and the admin flag used to decide which panels
//! to render.
//!
//! ## Storage layout
//!
//! Sessions are persisted through the [`SessionStore`] trait as flat string
//! entries:
//!
//! | Key | Value |
//! |-----|-------|
//! | [`TOKEN_KEY`] (`"token"`) | raw bearer token |
//! | [`USERNAME_KEY`] (`"username"`) | username submitted at login/registration |
//! | [`CREATED_AT_KEY`] (`"created_at"`) | creation date as returned by the API, or `"Unknown"` |
//!
//! The admin flag is **never** persisted. It is read from the token's claims
//! (see [`crate::claims`]) every time a session is built or loaded, so the
//! login and registration paths cannot disagree about it. [`Session::persist`]
//! also drops the [`LEGACY_ADMIN_KEY`] entry that older builds wrote.

use crate::claims;

pub const TOKEN_KEY: &str = "token";
pub const USERNAME_KEY: &str = "username";
pub const CREATED_AT_KEY: &str = "created_at";
/// Only ever removed, never written.
pub const LEGACY_ADMIN_KEY: &str = "is_admin";

/// Placeholder shown when the API did not report a creation date.
pub const UNKNOWN_CREATED_AT: &str = "Unknown";

/// Key-value persistence for the session.
///
/// Browser storage is synchronous, so unlike the network layer this trait has
/// no async methods. Write failures are swallowed by implementations: a
/// session that could not be saved behaves like a logged-out one.
pub trait SessionStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str);
    fn remove(&self, key: &str);
    /// Drop every entry, not only the session keys.
    fn clear(&self);
}

impl<S: SessionStore + ?Sized> SessionStore for &S {
    fn get(&self, key: &str) -> Option<String> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) {
        (**self).set(key, value)
    }

    fn remove(&self, key: &str) {
        (**self).remove(key)
    }

    fn clear(&self) {
        (**self).clear()
    }
}

/// Authenticated identity of the current browser user.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Session {
    pub token: String,
    pub username: String,
    /// Derived from the token claims; display-only, the server enforces roles.
    pub is_admin: bool,
    pub created_at: String,
}

impl Session {
    /// Build a session from a freshly issued token.
    pub fn new(
        token: impl Into<String>,
        username: impl Into<String>,
        created_at: Option<String>,
    ) -> Self {
        let token = token.into();
        let is_admin = claims::is_admin(&token);
        Self {
            token,
            username: username.into(),
            is_admin,
            created_at: created_at
                .filter(|c| !c.is_empty())
                .unwrap_or_else(|| UNKNOWN_CREATED_AT.to_string()),
        }
    }

    /// Read the session back from storage.
    ///
    /// Returns `None` when either the token or the username is missing or
    /// empty, which callers treat as "not logged in".
    pub fn load(store: &impl SessionStore) -> Option<Self> {
        let token = store.get(TOKEN_KEY).filter(|t| !t.is_empty())?;
        let username = store.get(USERNAME_KEY).filter(|u| !u.is_empty())?;
        Some(Self::new(token, username, store.get(CREATED_AT_KEY)))
    }

    /// Write the session fields, replacing whatever was stored before.
    pub fn persist(&self, store: &impl SessionStore) {
        store.set(TOKEN_KEY, &self.token);
        store.set(USERNAME_KEY, &self.username);
        store.set(CREATED_AT_KEY, &self.created_at);
        store.remove(LEGACY_ADMIN_KEY);
        tracing::info!(username = %self.username, "session stored");
    }

    /// Wipe all persisted state.
    pub fn clear(store: &impl SessionStore) {
        store.clear();
        tracing::info!("session cleared");
    }

    pub fn role_label(&self) -> &'static str {
        if self.is_admin {
            "Admin"
        } else {
            "User"
        }
    }
}

/// Current UTC time as RFC 3339, used when the API omits a creation date.
pub fn now_rfc3339() -> String {
    chrono::Utc::now().to_rfc3339_opts(chrono::SecondsFormat::Millis, true)
}
