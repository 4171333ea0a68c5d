//! # Signup form validation
//!
//! Client-side checks run before a registration request is ever built. The
//! rules are evaluated in a fixed order (username, email, password, password
//! confirmation) and evaluation stops at the first failure, so the user sees
//! exactly one message at a time.
//!
//! | Field | Rules, in order |
//! |-------|-----------------|
//! | username | present, at least 3 chars, at most 20 chars, only `[a-zA-Z0-9_]` |
//! | email | present, `local@domain.tld` shape |
//! | password | present, 8..=128 chars, upper + lower + digit, optional special char |
//! | confirm | present, equal to password |
//!
//! Username and email are trimmed before checking; passwords are taken as
//! typed. Lengths count characters, not bytes.

use std::sync::LazyLock;

use regex::Regex;
use thiserror::Error;

pub const USERNAME_MIN: usize = 3;
pub const USERNAME_MAX: usize = 20;
pub const PASSWORD_MIN: usize = 8;
pub const PASSWORD_MAX: usize = 128;

const SPECIAL_CHARACTERS: &str = "!@#$%^&*(),.?\":{}|<>";

static USERNAME_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-zA-Z0-9_]+$").expect("username pattern"));
static EMAIL_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern"));

/// First failing rule. `Display` is the message shown under the form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Username is required.")]
    UsernameRequired,
    #[error("Username must be at least 3 characters long.")]
    UsernameTooShort,
    #[error("Username must be less than 20 characters.")]
    UsernameTooLong,
    #[error("Username can only contain letters, numbers, and underscores.")]
    UsernameInvalidCharacters,
    #[error("Email is required.")]
    EmailRequired,
    #[error("Please enter a valid email address.")]
    EmailInvalid,
    #[error("Password is required.")]
    PasswordRequired,
    #[error("Password must be at least 8 characters long.")]
    PasswordTooShort,
    #[error("Password must be less than 128 characters.")]
    PasswordTooLong,
    #[error("Password must contain at least one uppercase letter, one lowercase letter, and one number.")]
    PasswordTooWeak,
    #[error("Password must contain at least one special character.")]
    PasswordMissingSpecialCharacter,
    #[error("Please confirm your password.")]
    ConfirmationRequired,
    #[error("Passwords do not match.")]
    PasswordMismatch,
}

/// Raw signup form fields, as typed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SignupForm {
    pub username: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
}

/// A form that passed every rule, with username and email trimmed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidSignup {
    pub username: String,
    pub email: String,
    pub password: String,
}

/// Which optional rules are switched on.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PasswordPolicy {
    pub require_special_character: bool,
}

impl SignupForm {
    pub fn validate(&self, policy: PasswordPolicy) -> Result<ValidSignup, ValidationError> {
        let username = self.username.trim();
        let email = self.email.trim();

        validate_username(username)?;
        validate_email(email)?;
        validate_password(&self.password, policy)?;
        validate_confirmation(&self.password, &self.confirm_password)?;

        Ok(ValidSignup {
            username: username.to_string(),
            email: email.to_string(),
            password: self.password.clone(),
        })
    }
}

pub fn validate_username(username: &str) -> Result<(), ValidationError> {
    let len = username.chars().count();
    if username.is_empty() {
        return Err(ValidationError::UsernameRequired);
    }
    if len < USERNAME_MIN {
        return Err(ValidationError::UsernameTooShort);
    }
    if len > USERNAME_MAX {
        return Err(ValidationError::UsernameTooLong);
    }
    if !USERNAME_PATTERN.is_match(username) {
        return Err(ValidationError::UsernameInvalidCharacters);
    }
    Ok(())
}

pub fn validate_email(email: &str) -> Result<(), ValidationError> {
    if email.is_empty() {
        return Err(ValidationError::EmailRequired);
    }
    if !EMAIL_PATTERN.is_match(email) {
        return Err(ValidationError::EmailInvalid);
    }
    Ok(())
}

pub fn validate_password(password: &str, policy: PasswordPolicy) -> Result<(), ValidationError> {
    let len = password.chars().count();
    if password.is_empty() {
        return Err(ValidationError::PasswordRequired);
    }
    if len < PASSWORD_MIN {
        return Err(ValidationError::PasswordTooShort);
    }
    if len > PASSWORD_MAX {
        return Err(ValidationError::PasswordTooLong);
    }

    let has_upper = password.chars().any(|c| c.is_ascii_uppercase());
    let has_lower = password.chars().any(|c| c.is_ascii_lowercase());
    let has_digit = password.chars().any(|c| c.is_ascii_digit());
    if !(has_upper && has_lower && has_digit) {
        return Err(ValidationError::PasswordTooWeak);
    }

    if policy.require_special_character && !password.chars().any(|c| SPECIAL_CHARACTERS.contains(c)) {
        return Err(ValidationError::PasswordMissingSpecialCharacter);
    }
    Ok(())
}

pub fn validate_confirmation(password: &str, confirmation: &str) -> Result<(), ValidationError> {
    if confirmation.is_empty() {
        return Err(ValidationError::ConfirmationRequired);
    }
    if password != confirmation {
        return Err(ValidationError::PasswordMismatch);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form(username: &str, email: &str, password: &str, confirm: &str) -> SignupForm {
        SignupForm {
            username: username.to_string(),
            email: email.to_string(),
            password: password.to_string(),
            confirm_password: confirm.to_string(),
        }
    }

    fn valid() -> SignupForm {
        form("valid_1", "a@b.co", "Password1", "Password1")
    }

    #[test]
    fn test_username_rules() {
        assert_eq!(validate_username(""), Err(ValidationError::UsernameRequired));
        assert_eq!(validate_username("ab"), Err(ValidationError::UsernameTooShort));
        assert_eq!(
            validate_username("this_is_a_very_long_username_1"),
            Err(ValidationError::UsernameTooLong)
        );
        assert_eq!(
            validate_username("bad name"),
            Err(ValidationError::UsernameInvalidCharacters)
        );
        assert_eq!(
            validate_username("émile"),
            Err(ValidationError::UsernameInvalidCharacters)
        );
        assert_eq!(validate_username("valid_1"), Ok(()));
        assert_eq!(validate_username("abc"), Ok(()));
        assert_eq!(validate_username(&"a".repeat(20)), Ok(()));
        assert_eq!(
            validate_username(&"a".repeat(21)),
            Err(ValidationError::UsernameTooLong)
        );
    }

    #[test]
    fn test_email_rules() {
        assert_eq!(validate_email(""), Err(ValidationError::EmailRequired));
        assert_eq!(validate_email("nope"), Err(ValidationError::EmailInvalid));
        assert_eq!(validate_email("a@b"), Err(ValidationError::EmailInvalid));
        assert_eq!(validate_email("a b@c.de"), Err(ValidationError::EmailInvalid));
        assert_eq!(validate_email("a@@b.de"), Err(ValidationError::EmailInvalid));
        assert_eq!(validate_email("first.last@example.co.uk"), Ok(()));
    }

    #[test]
    fn test_password_strength() {
        let policy = PasswordPolicy::default();
        assert_eq!(validate_password("", policy), Err(ValidationError::PasswordRequired));
        assert_eq!(validate_password("Pass1", policy), Err(ValidationError::PasswordTooShort));
        assert_eq!(
            validate_password("alllowercase1", policy),
            Err(ValidationError::PasswordTooWeak)
        );
        assert_eq!(
            validate_password("ALLUPPERCASE1", policy),
            Err(ValidationError::PasswordTooWeak)
        );
        assert_eq!(
            validate_password("NoDigitsHere", policy),
            Err(ValidationError::PasswordTooWeak)
        );
        assert_eq!(validate_password("Password1", policy), Ok(()));

        let long = format!("Aa1{}", "x".repeat(126));
        assert_eq!(validate_password(&long, policy), Err(ValidationError::PasswordTooLong));
        let max = format!("Aa1{}", "x".repeat(125));
        assert_eq!(validate_password(&max, policy), Ok(()));
    }

    #[test]
    fn test_special_character_rule_is_opt_in() {
        let strict = PasswordPolicy {
            require_special_character: true,
        };
        assert_eq!(
            validate_password("Password1", strict),
            Err(ValidationError::PasswordMissingSpecialCharacter)
        );
        assert_eq!(validate_password("Password1!", strict), Ok(()));
        assert_eq!(validate_password("Password1", PasswordPolicy::default()), Ok(()));
    }

    #[test]
    fn test_confirmation() {
        assert_eq!(
            validate_confirmation("Password1", ""),
            Err(ValidationError::ConfirmationRequired)
        );
        assert_eq!(
            validate_confirmation("Password1", "Password2"),
            Err(ValidationError::PasswordMismatch)
        );
        assert_eq!(validate_confirmation("Password1", "Password1"), Ok(()));
    }

    #[test]
    fn test_first_failure_wins() {
        let policy = PasswordPolicy::default();

        // Every field is wrong; the username rule is reported.
        let all_bad = form("ab", "nope", "weak", "");
        assert_eq!(all_bad.validate(policy), Err(ValidationError::UsernameTooShort));

        // Username fine, everything after it wrong; the email rule is reported.
        let from_email = form("valid_1", "", "weak", "");
        assert_eq!(from_email.validate(policy), Err(ValidationError::EmailRequired));

        let from_password = form("valid_1", "a@b.co", "alllowercase1", "x");
        assert_eq!(from_password.validate(policy), Err(ValidationError::PasswordTooWeak));

        let mismatch = form("valid_1", "a@b.co", "Password1", "Password2");
        assert_eq!(mismatch.validate(policy), Err(ValidationError::PasswordMismatch));
    }

    #[test]
    fn test_valid_form_is_trimmed() {
        let mut padded = valid();
        padded.username = "  valid_1 ".to_string();
        padded.email = " a@b.co\t".to_string();

        let ok = padded.validate(PasswordPolicy::default()).unwrap();
        assert_eq!(ok.username, "valid_1");
        assert_eq!(ok.email, "a@b.co");
        assert_eq!(ok.password, "Password1");
    }

    #[test]
    fn test_whitespace_username_is_missing() {
        let mut blank = valid();
        blank.username = "   ".to_string();
        assert_eq!(
            blank.validate(PasswordPolicy::default()),
            Err(ValidationError::UsernameRequired)
        );
    }

    #[test]
    fn test_messages() {
        assert_eq!(
            ValidationError::UsernameTooShort.to_string(),
            "Username must be at least 3 characters long."
        );
        assert_eq!(ValidationError::PasswordMismatch.to_string(), "Passwords do not match.");
    }
}
