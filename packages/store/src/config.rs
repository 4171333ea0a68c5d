//! # Client configuration (`taskboard.toml`)
//!
//! Defines the TOML file the web binary embeds at build time (filename:
//! [`ClientConfig::filename`] = `"taskboard.toml"`). It tells the client where
//! the task API lives and tunes the signup flow.
//!
//! ## Structure
//!
//! ```toml
//! [api]
//! base_url = ""                      # empty = same origin as the page
//!
//! [signup]
//! redirect_delay_ms = 1500           # pause before leaving the signup page
//! require_special_character = false  # extra password rule, off by default
//! ```
//!
//! ## Types
//!
//! | Struct | Purpose |
//! |--------|---------|
//! | [`ClientConfig`] | Top-level config. Provides builder helpers, TOML (de)serialisation, and the canonical filename. |
//! | [`ApiConfig`] | Base URL of the remote API. |
//! | [`SignupConfig`] | Redirect delay and the optional special-character password rule. |
//!
//! All structs derive or implement `Default`, so a missing or empty file is
//! equivalent to the default configuration.

use serde::{Deserialize, Serialize};

/// Top-level configuration stored in `taskboard.toml`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ClientConfig {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub signup: SignupConfig,
}

/// API endpoint configuration.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Absolute base URL, e.g. `https://tasks.example.com`.
    /// Empty string means the origin the page was served from.
    #[serde(default)]
    pub base_url: String,
}

/// Signup page configuration.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SignupConfig {
    /// Delay before navigating to the dashboard after a successful signup.
    #[serde(default = "default_redirect_delay")]
    pub redirect_delay_ms: u32,
    #[serde(default)]
    pub require_special_character: bool,
}

fn default_redirect_delay() -> u32 {
    1500
}

impl Default for SignupConfig {
    fn default() -> Self {
        Self {
            redirect_delay_ms: default_redirect_delay(),
            require_special_character: false,
        }
    }
}

impl ClientConfig {
    /// Create a config pointing at the given API base URL.
    pub fn new(base_url: String) -> Self {
        Self {
            api: ApiConfig { base_url },
            signup: SignupConfig::default(),
        }
    }

    /// Builder method to set the post-signup redirect delay.
    pub fn with_redirect_delay(mut self, ms: u32) -> Self {
        self.signup.redirect_delay_ms = ms;
        self
    }

    /// The well-known filename for the config file.
    pub fn filename() -> &'static str {
        "taskboard.toml"
    }

    /// Parse from TOML string.
    pub fn from_toml(s: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(s)
    }

    /// Serialize to TOML string.
    pub fn to_toml(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }
}
