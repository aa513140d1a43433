//! DOM adapter for the preference surface.
//!
//! DESIGN
//! ======
//! Implements the controller's surface seam over the live document: the
//! `data-theme` attribute on the root element, the toggle glyph at
//! `#theme-icon i`, every `[data-ka]` element as a text slot, and the
//! `active` class on the two language buttons. Server builds compile the
//! methods down to no-ops.

#[cfg(test)]
#[path = "document_test.rs"]
mod document_test;

use crate::prefs::model::{Language, Theme, ThemeGlyph};
use crate::prefs::surface::{Surface, TextSlot};

/// Root attribute conveying the active theme.
pub const THEME_ATTRIBUTE: &str = "data-theme";
/// Selector of the glyph element inside the toggle control.
pub const THEME_ICON_SELECTOR: &str = "#theme-icon i";
/// Selector marking language-variant text slots.
pub const LABEL_SELECTOR: &str = "[data-ka]";
/// Class carried by the selected language button.
pub const ACTIVE_CLASS: &str = "active";

/// Icon classes conveying glyph identity (Bootstrap Icons).
pub fn glyph_class(glyph: ThemeGlyph) -> &'static str {
    match glyph {
        ThemeGlyph::Sun => "bi bi-sun",
        ThemeGlyph::MoonStars => "bi bi-moon-stars",
    }
}

/// Element id of a language's selector button.
pub fn button_id(lang: Language) -> &'static str {
    match lang {
        Language::Georgian => "btn-ka",
        Language::English => "btn-en",
    }
}

/// Attribute holding a slot's text variant for `lang`.
pub fn variant_attribute(lang: Language) -> &'static str {
    match lang {
        Language::Georgian => "data-ka",
        Language::English => "data-en",
    }
}

/// `Surface` over the live document.
#[derive(Clone, Copy, Debug, Default)]
pub struct DomSurface;

#[cfg(feature = "hydrate")]
fn document() -> Option<web_sys::Document> {
    web_sys::window().and_then(|w| w.document())
}

#[cfg(feature = "hydrate")]
struct DomTextSlot(web_sys::Element);

#[cfg(feature = "hydrate")]
impl TextSlot for DomTextSlot {
    fn variant(&self, lang: Language) -> Option<String> {
        self.0.get_attribute(variant_attribute(lang))
    }

    fn set_text(&self, text: &str) {
        self.0.set_text_content(Some(text));
    }
}

impl Surface for DomSurface {
    fn theme(&self) -> Option<Theme> {
        #[cfg(feature = "hydrate")]
        {
            document()?
                .document_element()?
                .get_attribute(THEME_ATTRIBUTE)
                .as_deref()
                .and_then(Theme::parse)
        }
        #[cfg(not(feature = "hydrate"))]
        {
            None
        }
    }

    fn set_theme(&self, theme: Theme) {
        #[cfg(feature = "hydrate")]
        {
            if let Some(root) = document().and_then(|d| d.document_element()) {
                let _ = root.set_attribute(THEME_ATTRIBUTE, theme.as_str());
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = theme;
        }
    }

    fn set_theme_glyph(&self, glyph: ThemeGlyph) {
        #[cfg(feature = "hydrate")]
        {
            let icon = document().and_then(|d| d.query_selector(THEME_ICON_SELECTOR).ok().flatten());
            if let Some(icon) = icon {
                icon.set_class_name(glyph_class(glyph));
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = glyph;
        }
    }

    fn for_each_text_slot(&self, visit: &mut dyn FnMut(&dyn TextSlot)) {
        #[cfg(feature = "hydrate")]
        {
            use wasm_bindgen::JsCast;

            let Some(list) = document().and_then(|d| d.query_selector_all(LABEL_SELECTOR).ok())
            else {
                return;
            };
            for index in 0..list.length() {
                let Some(node) = list.item(index) else {
                    continue;
                };
                if let Ok(element) = node.dyn_into::<web_sys::Element>() {
                    visit(&DomTextSlot(element));
                }
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = visit;
        }
    }

    fn set_active_language(&self, lang: Language) {
        #[cfg(feature = "hydrate")]
        {
            let Some(doc) = document() else {
                return;
            };
            for candidate in [Language::Georgian, Language::English] {
                if let Some(button) = doc.get_element_by_id(button_id(candidate)) {
                    let _ = button
                        .class_list()
                        .toggle_with_force(ACTIVE_CLASS, candidate == lang);
                }
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = lang;
        }
    }
}
