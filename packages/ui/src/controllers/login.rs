use api::{Credentials, TaskApi};
use store::{Session, SessionStore};

use super::paths;
use crate::browser::Browser;

/// Shown when the server gave no reason, or could not be reached.
pub const LOGIN_FAILED: &str = "Login failed. Try again.";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoginOutcome {
    /// Session stored and navigation to the dashboard started.
    SignedIn(Session),
    /// Text for the form's message line.
    Rejected(String),
}

/// Login form submission. No client-side validation: the server decides.
pub struct LoginController<A, S, B> {
    api: A,
    store: S,
    browser: B,
}

impl<A: TaskApi, S: SessionStore, B: Browser> LoginController<A, S, B> {
    pub fn new(api: A, store: S, browser: B) -> Self {
        Self {
            api,
            store,
            browser,
        }
    }

    pub async fn submit(&self, username: &str, password: &str) -> LoginOutcome {
        let credentials = Credentials::new(username, password);
        match self.api.login(&credentials).await {
            Ok(response) => {
                // Admin status comes from the token, never from `is_admin` here.
                let session = Session::new(response.access_token, username, response.created_at);
                session.persist(&self.store);
                self.browser.navigate(paths::DASHBOARD);
                LoginOutcome::SignedIn(session)
            }
            Err(err) => {
                tracing::warn!(%err, username, "login rejected");
                LoginOutcome::Rejected(err.detail_or(LOGIN_FAILED).to_string())
            }
        }
    }
}
