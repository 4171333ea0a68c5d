//! # Account models
//!
//! Request and response bodies for the `/users` endpoints.
//!
//! - [`Credentials`] is sent form-encoded to `POST /users/login`; the reply is
//!   a [`LoginResponse`].
//! - [`RegisterRequest`] is sent as JSON to `POST /users/register`, both by the
//!   public signup page (no token, `is_admin: false`) and by the admin "add
//!   user" dialog (bearer token, any role). The reply is a
//!   [`RegisterResponse`], which carries a token only when the server chose to
//!   log the new account in.
//! - [`UserSummary`] is one entry of `GET /users/all`.
//! - [`PasswordUpdate`] is the JSON body of `PUT /users/{username}/password`.

use serde::{Deserialize, Serialize};

use super::flexible_bool;

/// Login form fields.
#[derive(Clone, PartialEq, Eq, Serialize)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

impl Credentials {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish()
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct LoginResponse {
    pub access_token: String,
    #[serde(default, deserialize_with = "flexible_bool")]
    pub is_admin: bool,
    #[serde(default)]
    pub created_at: Option<String>,
}

#[derive(Clone, PartialEq, Eq, Serialize)]
pub struct RegisterRequest {
    pub username: String,
    pub password: String,
    pub is_admin: bool,
}

impl std::fmt::Debug for RegisterRequest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RegisterRequest")
            .field("username", &self.username)
            .field("is_admin", &self.is_admin)
            .finish_non_exhaustive()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct RegisterResponse {
    #[serde(default)]
    pub access_token: Option<String>,
    #[serde(default)]
    pub is_admin: Option<bool>,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub msg: Option<String>,
}

impl RegisterResponse {
    /// The issued token, if the server logged the new account in.
    pub fn token(&self) -> Option<&str> {
        self.access_token.as_deref().filter(|t| !t.is_empty())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserSummary {
    #[serde(default)]
    pub id: Option<i64>,
    pub username: String,
    #[serde(default, deserialize_with = "flexible_bool")]
    pub is_admin: bool,
}

#[derive(Clone, PartialEq, Eq, Serialize)]
pub struct PasswordUpdate {
    pub new_password: String,
}
