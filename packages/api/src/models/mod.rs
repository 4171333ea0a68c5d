//! Wire models for the task API.

mod task;
mod user;

pub use task::{NewTask, TaskRecord};
pub use user::{
    Credentials, LoginResponse, PasswordUpdate, RegisterRequest, RegisterResponse, UserSummary,
};

use serde::{Deserialize, Deserializer, Serialize};

/// Acknowledgement returned by mutating endpoints.
///
/// Endpoints disagree on the field name (`msg` vs `message`), so both are
/// accepted and [`MessageResponse::text`] picks whichever is present.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MessageResponse {
    #[serde(default)]
    pub msg: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
}

impl MessageResponse {
    pub fn text(&self) -> Option<&str> {
        self.msg
            .as_deref()
            .or(self.message.as_deref())
            .filter(|m| !m.is_empty())
    }

    /// The server message, or `fallback` when it sent none.
    pub fn text_or<'a>(&'a self, fallback: &'a str) -> &'a str {
        self.text().unwrap_or(fallback)
    }
}

/// SQLite-backed endpoints sometimes return flags as `0`/`1`.
pub(crate) fn flexible_bool<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Flag {
        Bool(bool),
        Int(i64),
    }

    Ok(match Flag::deserialize(deserializer)? {
        Flag::Bool(b) => b,
        Flag::Int(i) => i != 0,
    })
}
