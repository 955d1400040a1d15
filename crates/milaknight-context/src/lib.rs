//! Ambient contexts consumed by the Milaknight site.
//!
//! These are passed down explicitly through construction: the site builds one
//! [`AppContext`] and hands clones to whoever needs them.

pub mod document;
pub mod error;
pub mod i18n;
pub mod language;
pub mod prefs;
pub mod theme;

use std::rc::Rc;

pub use document::Document;
pub use error::ContextError;
pub use i18n::{Locale, TextDirection, Translation, get_translation};
pub use language::LanguageContext;
pub use prefs::{FilePreferences, LOCALE_KEY, MemoryPreferences, PreferenceStore, THEME_KEY};
pub use theme::{ThemeContext, ThemeMode};

#[derive(Clone)]
pub struct AppContext {
    pub document: Document,
    pub language: LanguageContext,
    pub theme: ThemeContext,
}

impl AppContext {
    pub fn new(prefs: Rc<dyn PreferenceStore>) -> Self {
        let document = Document::new();
        Self {
            language: LanguageContext::new(prefs.clone(), document.clone()),
            theme: ThemeContext::new(prefs, document.clone()),
            document,
        }
    }

    /// In-memory preferences; nothing survives the process.
    pub fn ephemeral() -> Self {
        Self::new(Rc::new(MemoryPreferences::new()))
    }
}
