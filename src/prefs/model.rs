//! Preference domain model: theme and language enums.

#[cfg(test)]
#[path = "model_test.rs"]
mod model_test;

/// Binary visual presentation mode, written to the document root as
/// `data-theme`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    /// Persisted string form.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    /// Parse a persisted or attribute value. Anything outside the domain is
    /// `None`, which callers treat exactly like an absent value.
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "light" => Some(Self::Light),
            "dark" => Some(Self::Dark),
            _ => None,
        }
    }

    /// The opposite mode.
    pub fn flip(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    /// Glyph shown on the toggle control: sun while dark, moon-and-stars
    /// while light.
    pub fn glyph(self) -> ThemeGlyph {
        match self {
            Self::Light => ThemeGlyph::MoonStars,
            Self::Dark => ThemeGlyph::Sun,
        }
    }
}

/// Icon identity for the theme toggle control.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ThemeGlyph {
    Sun,
    MoonStars,
}

/// Display language for marked-up labels.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Language {
    #[default]
    Georgian,
    English,
}

impl Language {
    /// ISO 639-1 code, also the persisted string form.
    pub fn code(self) -> &'static str {
        match self {
            Self::Georgian => "ka",
            Self::English => "en",
        }
    }

    /// Parse a persisted language code. Unknown codes are `None`.
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "ka" => Some(Self::Georgian),
            "en" => Some(Self::English),
            _ => None,
        }
    }
}
