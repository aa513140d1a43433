//! Browser localStorage helpers and the persistent store adapter.
//!
//! SYSTEM CONTEXT
//! ==============
//! Centralizes the hydrate-only read/write glue so the rest of the crate
//! never repeats it. Persistence is best-effort browser behavior: reads are
//! `None` and writes are dropped whenever the browser or its storage
//! facility is unavailable (server builds, storage disabled).

#[cfg(test)]
#[path = "storage_test.rs"]
mod storage_test;

use crate::prefs::store::PreferenceStore;

/// Load a string from localStorage for `key`.
pub fn get_string(key: &str) -> Option<String> {
    #[cfg(feature = "hydrate")]
    {
        let storage = web_sys::window().and_then(|w| w.local_storage().ok().flatten())?;
        storage.get_item(key).ok().flatten()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = key;
        None
    }
}

/// Save a string to localStorage for `key`.
pub fn set_string(key: &str, value: &str) {
    #[cfg(feature = "hydrate")]
    {
        let Some(storage) = web_sys::window().and_then(|w| w.local_storage().ok().flatten())
        else {
            return;
        };
        if storage.set_item(key, value).is_err() {
            log::warn!("localStorage write failed for entry {key}");
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (key, value);
    }
}

/// `PreferenceStore` backed by the browser's localStorage.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserStore;

impl PreferenceStore for BrowserStore {
    fn get(&self, key: &str) -> Option<String> {
        get_string(key)
    }

    fn set(&self, key: &str, value: &str) {
        set_string(key, value);
    }
}
