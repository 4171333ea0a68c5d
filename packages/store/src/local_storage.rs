//! # Web Storage session store
//!
//! [`LocalStorageStore`] is the [`SessionStore`] implementation used on the
//! **web platform**. It reads and writes `window.localStorage` through
//! [`web_sys::Storage`], so a session survives reloads and is shared by every
//! tab on the same origin.
//!
//! ## Handle management
//!
//! The store is a zero-size struct that looks up `localStorage` on every
//! operation. `web_sys::Storage` is not `Send`, and the lookup is a property
//! read on `window`.
//!
//! ## Error handling
//!
//! Reads that fail (storage disabled, private mode) return `None`. Writes that
//! fail (quota exceeded) are logged and dropped. Either way the UI degrades to
//! "logged out" instead of crashing.

use web_sys::Storage;

use crate::session::SessionStore;

/// `window.localStorage`-backed SessionStore for web platform.
#[derive(Clone, Copy, Debug, Default)]
pub struct LocalStorageStore;

impl LocalStorageStore {
    pub fn new() -> Self {
        Self
    }

    fn storage(&self) -> Option<Storage> {
        web_sys::window()?.local_storage().ok()?
    }
}

impl SessionStore for LocalStorageStore {
    fn get(&self, key: &str) -> Option<String> {
        self.storage()?.get_item(key).ok()?
    }

    fn set(&self, key: &str, value: &str) {
        let Some(storage) = self.storage() else {
            tracing::warn!(key, "localStorage unavailable, value not saved");
            return;
        };
        if storage.set_item(key, value).is_err() {
            tracing::warn!(key, "failed to write to localStorage");
        }
    }

    fn remove(&self, key: &str) {
        if let Some(storage) = self.storage() {
            let _ = storage.remove_item(key);
        }
    }

    fn clear(&self) {
        if let Some(storage) = self.storage() {
            let _ = storage.clear();
        }
    }
}
