//! Mapping failed registrations to user-facing messages.
//!
//! The API only reports free text, so [`RegistrationFailure::classify`] still
//! matches substrings of `detail`. Callers only ever see the enum; when the
//! server grows structured error codes only `classify` changes.

use api::{ApiError, ErrorBody};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RegistrationFailure {
    UsernameTaken,
    EmailTaken,
    InvalidEmail,
    WeakPassword,
    InvalidInput,
    /// Server text passed through as-is.
    Server(String),
    BadRequest,
    Conflict,
    Unprocessable,
    InternalError,
    Status(u16),
    Network,
    Unexpected,
}

impl RegistrationFailure {
    pub fn from_error(err: &ApiError) -> Self {
        match err {
            ApiError::Status { status, body } => Self::classify(*status, body),
            ApiError::Network(_) => Self::Network,
            ApiError::Decode(_) | ApiError::InvalidUrl(_) => Self::Unexpected,
        }
    }

    /// Pick a failure from the response body, then let the status code
    /// refine it. A 500 always wins; other codes only replace a body that
    /// said nothing useful.
    pub fn classify(status: u16, body: &ErrorBody) -> Self {
        let from_body = Self::from_body(body);
        match (status, from_body) {
            (500, _) => Self::InternalError,
            (_, Some(failure)) => failure,
            (400, None) => Self::BadRequest,
            (409, None) => Self::Conflict,
            (422, None) => Self::Unprocessable,
            (other, None) => Self::Status(other),
        }
    }

    fn from_body(body: &ErrorBody) -> Option<Self> {
        if let Some(text) = body.text.as_deref().filter(|t| !t.trim().is_empty()) {
            return Some(Self::Server(text.to_string()));
        }

        if let Some(detail) = body.detail.as_deref().filter(|d| !d.is_empty()) {
            let lower = detail.to_lowercase();
            let duplicate = lower.contains("already exists") || lower.contains("taken");
            let failure = if lower.contains("username") && duplicate {
                Self::UsernameTaken
            } else if lower.contains("email") && duplicate {
                Self::EmailTaken
            } else if lower.contains("invalid email") {
                Self::InvalidEmail
            } else if lower.contains("password") {
                Self::WeakPassword
            } else if lower.contains("validation") {
                Self::InvalidInput
            } else {
                Self::Server(detail.to_string())
            };
            return Some(failure);
        }

        body.message
            .as_deref()
            .or(body.error.as_deref())
            .filter(|m| !m.is_empty())
            .map(|m| Self::Server(m.to_string()))
    }

    pub fn message(&self) -> String {
        match self {
            Self::UsernameTaken => {
                "This username is already taken. Please choose another.".to_string()
            }
            Self::EmailTaken => {
                "This email is already registered. Please use another email or try logging in."
                    .to_string()
            }
            Self::InvalidEmail => "Please enter a valid email address.".to_string(),
            Self::WeakPassword => "Password does not meet requirements.".to_string(),
            Self::InvalidInput => "Please check your input and try again.".to_string(),
            Self::Server(text) => text.clone(),
            Self::BadRequest => {
                "Invalid input. Please check your information and try again.".to_string()
            }
            Self::Conflict => "Username or email already exists.".to_string(),
            Self::Unprocessable => {
                "Please check that all fields are filled out correctly.".to_string()
            }
            Self::InternalError => "Server error. Please try again later.".to_string(),
            Self::Status(code) => format!("Registration failed (Error {code}). Please try again."),
            Self::Network => {
                "Network error. Please check your internet connection and try again.".to_string()
            }
            Self::Unexpected => "Registration failed. Please try again later.".to_string(),
        }
    }
}

impl std::fmt::Display for RegistrationFailure {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.message())
    }
}
