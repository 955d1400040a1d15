use std::rc::Rc;

use mirror_core::Signal;

use crate::document::Document;
use crate::i18n::{Locale, Translation, get_translation};
use crate::prefs::{LOCALE_KEY, PreferenceStore};

/// Process-wide language state: one writer (the toggle), many readers.
///
/// Reads are tracked, so a component or layer that reads the language is
/// re-run when it changes. Every change is persisted and mirrored onto the
/// document's `dir`/`lang` attributes.
#[derive(Clone)]
pub struct LanguageContext {
    locale: Signal<Locale>,
    prefs: Rc<dyn PreferenceStore>,
    document: Document,
}

impl LanguageContext {
    /// Read the stored locale once, falling back to the default locale.
    pub fn new(prefs: Rc<dyn PreferenceStore>, document: Document) -> Self {
        let locale = stored_locale(&*prefs);
        let ctx = Self {
            locale: Signal::new(locale),
            prefs,
            document,
        };
        ctx.sync(locale);
        ctx
    }

    pub fn language(&self) -> Locale {
        self.locale.get()
    }

    pub fn is_rtl(&self) -> bool {
        self.language().is_rtl()
    }

    pub fn t(&self) -> &'static Translation {
        get_translation(self.language())
    }

    pub fn toggle_language(&self) {
        self.set_language(self.locale.get_untracked().toggled());
    }

    pub fn set_language(&self, locale: Locale) {
        if self.locale.get_untracked() == locale {
            return;
        }
        log::debug!("language -> {locale}");
        self.sync(locale);
        self.locale.set(locale);
    }

    fn sync(&self, locale: Locale) {
        self.document.set_attribute("dir", locale.direction().as_attr());
        self.document.set_attribute("lang", locale.code());
        if let Err(e) = self.prefs.set(LOCALE_KEY, locale.code()) {
            log::warn!("could not persist locale {locale}: {e}");
        }
    }
}

fn stored_locale(prefs: &dyn PreferenceStore) -> Locale {
    match prefs.get(LOCALE_KEY).map(|s| s.parse::<Locale>()) {
        Some(Ok(locale)) => locale,
        Some(Err(e)) => {
            log::warn!("{e}; using {}", Locale::default());
            Locale::default()
        }
        None => Locale::default(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::prefs::MemoryPreferences;

    #[test]
    fn starts_from_stored_locale_and_sets_direction() {
        let prefs = Rc::new(MemoryPreferences::with(&[(LOCALE_KEY, "ar")]));
        let doc = Document::new();
        let lang = LanguageContext::new(prefs, doc.clone());

        assert_eq!(lang.language(), Locale::Ar);
        assert!(lang.is_rtl());
        assert_eq!(doc.attribute("dir").as_deref(), Some("rtl"));
        assert_eq!(doc.attribute("lang").as_deref(), Some("ar"));
    }

    #[test]
    fn unknown_stored_locale_falls_back_to_english() {
        let prefs = Rc::new(MemoryPreferences::with(&[(LOCALE_KEY, "klingon")]));
        let lang = LanguageContext::new(prefs.clone(), Document::new());
        assert_eq!(lang.language(), Locale::En);
        assert_eq!(prefs.get(LOCALE_KEY).as_deref(), Some("en"));
    }

    #[test]
    fn toggle_persists_and_swaps_bundle() {
        let prefs = Rc::new(MemoryPreferences::new());
        let doc = Document::new();
        let lang = LanguageContext::new(prefs.clone(), doc.clone());
        assert!(std::ptr::eq(lang.t(), get_translation(Locale::En)));

        lang.toggle_language();
        assert_eq!(prefs.get(LOCALE_KEY).as_deref(), Some("ar"));
        assert_eq!(doc.attribute("dir").as_deref(), Some("rtl"));
        assert!(std::ptr::eq(lang.t(), get_translation(Locale::Ar)));

        lang.toggle_language();
        assert_eq!(lang.language(), Locale::En);
        assert_eq!(prefs.get(LOCALE_KEY).as_deref(), Some("en"));
    }
}
