//! Persistence seam for the two preference entries.
//!
//! DESIGN
//! ======
//! The browser's localStorage and any in-memory substitute meet behind one
//! string-keyed trait so controller logic stays testable without a browser.
//! The typed accessors own the key names and the absent-over-error rule: a
//! value that fails to parse reads as `None`, exactly like a missing entry.

#[cfg(test)]
#[path = "store_test.rs"]
mod store_test;

use std::cell::RefCell;
use std::collections::HashMap;

use crate::prefs::model::{Language, Theme};

/// Storage keys of the persisted entries.
pub mod keys {
    /// Theme entry, one of `"light"` / `"dark"`.
    pub const THEME: &str = "theme";
    /// Language entry, one of `"ka"` / `"en"`.
    pub const LANGUAGE: &str = "language";
}

/// A durable string key-value store scoped to the site.
///
/// Reads yield `None` for absent entries. Writes are best-effort and
/// overwrite silently; entries are never deleted.
pub trait PreferenceStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str);

    /// Persisted theme, if present and well-formed.
    fn theme(&self) -> Option<Theme> {
        self.get(keys::THEME).as_deref().and_then(Theme::parse)
    }

    fn set_theme(&self, theme: Theme) {
        self.set(keys::THEME, theme.as_str());
    }

    /// Persisted language, if present and well-formed.
    fn language(&self) -> Option<Language> {
        self.get(keys::LANGUAGE).as_deref().and_then(Language::parse)
    }

    fn set_language(&self, lang: Language) {
        self.set(keys::LANGUAGE, lang.code());
    }
}

/// In-memory store for tests and hosts without durable storage.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: RefCell<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl PreferenceStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.borrow().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) {
        self.entries.borrow_mut().insert(key.to_owned(), value.to_owned());
    }
}
