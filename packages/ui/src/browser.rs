//! Blocking browser dialogs and full-page navigation.
//!
//! Controllers talk to the user through [`Browser`] instead of calling
//! `window.alert` directly, so tests can script confirmations and record what
//! was shown.
//!
//! - **Web** (WASM): [`WebBrowser`] forwards to `window.alert`/`confirm`/
//!   `prompt` and sets `location.href`.
//! - **Native**: the same type logs instead; `confirm` answers `false` and
//!   `prompt` answers `None`, so no destructive action runs unattended.

use std::time::Duration;

pub trait Browser {
    fn alert(&self, message: &str);
    fn confirm(&self, message: &str) -> bool;
    /// `None` when the user cancelled.
    fn prompt(&self, message: &str) -> Option<String>;
    fn navigate(&self, path: &str);
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct WebBrowser;

impl Browser for WebBrowser {
    fn alert(&self, message: &str) {
        #[cfg(target_arch = "wasm32")]
        {
            if let Some(window) = web_sys::window() {
                let _ = window.alert_with_message(message);
            }
        }
        #[cfg(not(target_arch = "wasm32"))]
        tracing::info!("alert: {message}");
    }

    fn confirm(&self, message: &str) -> bool {
        #[cfg(target_arch = "wasm32")]
        {
            web_sys::window()
                .and_then(|w| w.confirm_with_message(message).ok())
                .unwrap_or(false)
        }
        #[cfg(not(target_arch = "wasm32"))]
        {
            tracing::info!("confirm (declined): {message}");
            false
        }
    }

    fn prompt(&self, message: &str) -> Option<String> {
        #[cfg(target_arch = "wasm32")]
        {
            web_sys::window()?.prompt_with_message(message).ok()?
        }
        #[cfg(not(target_arch = "wasm32"))]
        {
            tracing::info!("prompt (cancelled): {message}");
            None
        }
    }

    fn navigate(&self, path: &str) {
        tracing::info!(path, "navigating");
        #[cfg(target_arch = "wasm32")]
        {
            if let Some(window) = web_sys::window() {
                let _ = window.location().set_href(path);
            }
        }
    }
}

/// Platform-appropriate async sleep.
pub async fn sleep(duration: Duration) {
    #[cfg(target_arch = "wasm32")]
    gloo_timers::future::sleep(duration).await;
    #[cfg(not(target_arch = "wasm32"))]
    tokio::time::sleep(duration).await;
}
