use std::time::Duration;

use api::{RegisterRequest, TaskApi};
use store::session::now_rfc3339;
use store::{ClientConfig, Session, SessionStore};

use super::paths;
use crate::browser::{self, Browser};
use crate::registration::RegistrationFailure;
use crate::validation::{PasswordPolicy, SignupForm, ValidSignup, ValidationError};

pub const CREATING_ACCOUNT: &str = "Creating account...";
pub const REGISTERED: &str = "Registration successful! Redirecting...";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SignupOutcome {
    /// Account created. `session` is set when the server also logged it in.
    Registered { session: Option<Session> },
    Failed(RegistrationFailure),
}

/// Signup form: validate, register, then leave for the dashboard.
pub struct SignupController<A, S, B> {
    api: A,
    store: S,
    browser: B,
    policy: PasswordPolicy,
    redirect_delay: Duration,
}

impl<A: TaskApi, S: SessionStore, B: Browser> SignupController<A, S, B> {
    pub fn new(api: A, store: S, browser: B, config: &ClientConfig) -> Self {
        Self {
            api,
            store,
            browser,
            policy: PasswordPolicy {
                require_special_character: config.signup.require_special_character,
            },
            redirect_delay: Duration::from_millis(u64::from(config.signup.redirect_delay_ms)),
        }
    }

    /// Run the rule chain. Nothing is sent when this fails.
    pub fn validate(&self, form: &SignupForm) -> Result<ValidSignup, ValidationError> {
        form.validate(self.policy)
    }

    /// Public signups never ask for the admin role.
    pub async fn register(&self, signup: &ValidSignup) -> SignupOutcome {
        let request = RegisterRequest {
            username: signup.username.clone(),
            password: signup.password.clone(),
            is_admin: false,
        };

        match self.api.register(&request, None).await {
            Ok(response) => {
                let session = response.token().map(|token| {
                    let created_at = response.created_at.clone().unwrap_or_else(now_rfc3339);
                    Session::new(token, signup.username.clone(), Some(created_at))
                });
                if let Some(session) = &session {
                    session.persist(&self.store);
                }
                SignupOutcome::Registered { session }
            }
            Err(err) => {
                tracing::error!(%err, username = %signup.username, "registration failed");
                SignupOutcome::Failed(RegistrationFailure::from_error(&err))
            }
        }
    }

    /// Validate and register in one step.
    pub async fn submit(&self, form: &SignupForm) -> Result<SignupOutcome, ValidationError> {
        let signup = self.validate(form)?;
        Ok(self.register(&signup).await)
    }

    /// Wait for the configured delay, then go to the dashboard.
    pub async fn redirect_to_dashboard(&self) {
        browser::sleep(self.redirect_delay).await;
        self.browser.navigate(paths::DASHBOARD);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::controllers::testing::{Call, RecordingBrowser, ScriptedApi};
    use api::{ApiError, ErrorBody, RegisterResponse};
    use store::session::{CREATED_AT_KEY, LEGACY_ADMIN_KEY, TOKEN_KEY, USERNAME_KEY};
    use store::MemoryStore;

    fn config() -> ClientConfig {
        ClientConfig::default().with_redirect_delay(0)
    }

    fn controller(
        api: &ScriptedApi,
        store: &MemoryStore,
        browser: &RecordingBrowser,
    ) -> SignupController<ScriptedApi, MemoryStore, RecordingBrowser> {
        SignupController::new(api.clone(), store.clone(), browser.clone(), &config())
    }

    fn form(username: &str, password: &str) -> SignupForm {
        SignupForm {
            username: username.to_string(),
            email: "new@example.com".to_string(),
            password: password.to_string(),
            confirm_password: password.to_string(),
        }
    }

    #[tokio::test]
    async fn test_invalid_form_sends_nothing() {
        let api = ScriptedApi::new();
        let store = MemoryStore::new();
        let browser = RecordingBrowser::new();
        let signup = controller(&api, &store, &browser);

        let short = signup.submit(&form("ab", "Password1")).await;
        assert_eq!(short, Err(ValidationError::UsernameTooShort));

        let weak = signup.submit(&form("valid_1", "alllowercase1")).await;
        assert_eq!(weak, Err(ValidationError::PasswordTooWeak));

        assert!(api.calls().is_empty());
    }

    #[tokio::test]
    async fn test_registration_with_token_logs_in() {
        let api = ScriptedApi::new();
        api.push_register(Ok(RegisterResponse {
            access_token: Some("T".to_string()),
            is_admin: Some(false),
            created_at: Some("2024-02-02T00:00:00Z".to_string()),
            msg: None,
        }));
        let store = MemoryStore::new();
        let browser = RecordingBrowser::new();

        let outcome = controller(&api, &store, &browser)
            .submit(&form("  valid_1 ", "Password1"))
            .await
            .unwrap();

        let SignupOutcome::Registered { session: Some(session) } = outcome else {
            panic!("expected a session, got {outcome:?}");
        };
        assert_eq!(session.username, "valid_1");
        assert_eq!(store.get(TOKEN_KEY).as_deref(), Some("T"));
        assert_eq!(store.get(USERNAME_KEY).as_deref(), Some("valid_1"));
        assert_eq!(
            store.get(CREATED_AT_KEY).as_deref(),
            Some("2024-02-02T00:00:00Z")
        );
        assert!(store.get(LEGACY_ADMIN_KEY).is_none());
        assert_eq!(
            api.calls(),
            vec![Call::Register {
                username: "valid_1".to_string(),
                is_admin: false,
                with_token: false,
            }]
        );
    }

    #[tokio::test]
    async fn test_registration_without_token_keeps_storage_empty() {
        let api = ScriptedApi::new();
        api.push_register(Ok(RegisterResponse {
            msg: Some("User created".to_string()),
            ..RegisterResponse::default()
        }));
        let store = MemoryStore::new();
        let browser = RecordingBrowser::new();

        let outcome = controller(&api, &store, &browser)
            .submit(&form("valid_1", "Password1"))
            .await
            .unwrap();

        assert_eq!(outcome, SignupOutcome::Registered { session: None });
        assert!(store.is_empty());
    }

    #[tokio::test]
    async fn test_created_at_defaults_to_now() {
        let api = ScriptedApi::new();
        api.push_register(Ok(RegisterResponse {
            access_token: Some("T".to_string()),
            ..RegisterResponse::default()
        }));
        let store = MemoryStore::new();
        let browser = RecordingBrowser::new();

        controller(&api, &store, &browser)
            .submit(&form("valid_1", "Password1"))
            .await
            .unwrap();

        let created_at = store.get(CREATED_AT_KEY).unwrap();
        assert_ne!(created_at, "Unknown");
        assert!(created_at.ends_with('Z'));
    }

    #[tokio::test]
    async fn test_failure_is_classified() {
        let api = ScriptedApi::new();
        api.push_register(Err(ApiError::status(
            400,
            ErrorBody::detail("Username already taken"),
        )));
        let store = MemoryStore::new();
        let browser = RecordingBrowser::new();

        let outcome = controller(&api, &store, &browser)
            .submit(&form("valid_1", "Password1"))
            .await
            .unwrap();

        assert_eq!(
            outcome,
            SignupOutcome::Failed(RegistrationFailure::UsernameTaken)
        );
        assert!(store.is_empty());
    }

    #[tokio::test]
    async fn test_redirect_goes_to_dashboard() {
        let api = ScriptedApi::new();
        let store = MemoryStore::new();
        let browser = RecordingBrowser::new();

        controller(&api, &store, &browser)
            .redirect_to_dashboard()
            .await;

        assert_eq!(browser.navigations(), vec!["/user"]);
    }
}
