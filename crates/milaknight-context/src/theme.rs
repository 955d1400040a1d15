use std::fmt;
use std::rc::Rc;
use std::str::FromStr;

use mirror_core::Signal;

use crate::document::Document;
use crate::error::ContextError;
use crate::prefs::{PreferenceStore, THEME_KEY};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum ThemeMode {
    Light,
    #[default]
    Dark,
}

impl ThemeMode {
    pub fn as_str(self) -> &'static str {
        match self {
            ThemeMode::Light => "light",
            ThemeMode::Dark => "dark",
        }
    }

    pub fn toggled(self) -> ThemeMode {
        match self {
            ThemeMode::Light => ThemeMode::Dark,
            ThemeMode::Dark => ThemeMode::Light,
        }
    }
}

impl fmt::Display for ThemeMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ThemeMode {
    type Err = ContextError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "light" => Ok(ThemeMode::Light),
            "dark" => Ok(ThemeMode::Dark),
            other => Err(ContextError::UnknownTheme(other.to_string())),
        }
    }
}

/// Color theme state. Reflected on the document as a root class.
#[derive(Clone)]
pub struct ThemeContext {
    mode: Signal<ThemeMode>,
    prefs: Rc<dyn PreferenceStore>,
    document: Document,
}

impl ThemeContext {
    pub fn new(prefs: Rc<dyn PreferenceStore>, document: Document) -> Self {
        let mode = prefs
            .get(THEME_KEY)
            .and_then(|s| {
                s.parse::<ThemeMode>()
                    .map_err(|e| log::warn!("{e}; using {}", ThemeMode::default()))
                    .ok()
            })
            .unwrap_or_default();
        let ctx = Self {
            mode: Signal::new(mode),
            prefs,
            document,
        };
        ctx.sync(mode);
        ctx
    }

    pub fn theme(&self) -> ThemeMode {
        self.mode.get()
    }

    pub fn toggle_theme(&self) {
        let next = self.mode.get_untracked().toggled();
        self.sync(next);
        self.mode.set(next);
    }

    fn sync(&self, mode: ThemeMode) {
        self.document.toggle_class("dark", mode == ThemeMode::Dark);
        self.document.toggle_class("light", mode == ThemeMode::Light);
        if let Err(e) = self.prefs.set(THEME_KEY, mode.as_str()) {
            log::warn!("could not persist theme {mode}: {e}");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::prefs::MemoryPreferences;

    #[test]
    fn toggle_flips_class_and_persists() {
        let prefs = Rc::new(MemoryPreferences::new());
        let doc = Document::new();
        let theme = ThemeContext::new(prefs.clone(), doc.clone());
        assert_eq!(theme.theme(), ThemeMode::Dark);
        assert!(doc.has_class("dark"));

        theme.toggle_theme();
        assert_eq!(theme.theme(), ThemeMode::Light);
        assert_eq!(doc.class_list(), "light");
        assert_eq!(prefs.get(THEME_KEY).as_deref(), Some("light"));
    }

    #[test]
    fn reads_stored_theme() {
        let prefs = Rc::new(MemoryPreferences::with(&[(THEME_KEY, "light")]));
        let theme = ThemeContext::new(prefs, Document::new());
        assert_eq!(theme.theme(), ThemeMode::Light);
    }
}
