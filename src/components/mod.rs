//! Reusable UI components for page chrome.

pub mod language_switcher;
pub mod site_header;
pub mod theme_toggle;
