//! Localization capability.
//!
//! The engine never emits end-user text directly: every label and sentence
//! passes through a `Localizer`. Translation catalogs live outside this
//! crate; the default implementation is the English identity.

/// Translates an English source string into the user's locale.
pub trait Localizer: Send + Sync {
    fn translate(&self, text: &str) -> String;
}

/// Identity localizer: returns the English source text unchanged.
#[derive(Debug, Clone, Copy, Default)]
pub struct EnglishLocalizer;

impl Localizer for EnglishLocalizer {
    fn translate(&self, text: &str) -> String {
        text.to_string()
    }
}
