//! Controls shared by every page. They act on the ambient contexts directly;
//! the current locale arrives as an argument so callers decide what they
//! depend on.

use milaknight_context::{LanguageContext, Locale, ThemeContext, ThemeMode};

use crate::markup::{Button, El, Text, View};

pub fn LanguageToggle(current: Locale, language: &LanguageContext) -> View {
    let (label, aria) = match current {
        Locale::En => ("AR", "Switch to Arabic"),
        Locale::Ar => ("EN", "Switch to English"),
    };
    let language = language.clone();
    Button("", move || language.toggle_language())
        .with_children(vec![
            El("span").attr("data-icon", "languages").attr("aria-hidden", "true"),
            El("span").class("text-sm font-medium text-foreground").child(Text(label)),
        ])
        .class("flex items-center gap-2 px-3 py-2 rounded-lg bg-secondary")
        .attr("aria-label", aria)
        .attr("data-testid", "language-toggle")
}

/// Reads the theme, so the caller re-renders when it changes.
pub fn ThemeToggle(theme: &ThemeContext) -> View {
    let (icon, aria) = match theme.theme() {
        ThemeMode::Dark => ("sun", "Switch to light theme"),
        ThemeMode::Light => ("moon", "Switch to dark theme"),
    };
    let theme = theme.clone();
    Button("", move || theme.toggle_theme())
        .with_children(vec![El("span").attr("data-icon", icon).attr("aria-hidden", "true")])
        .class("p-2 rounded-lg bg-secondary")
        .attr("aria-label", aria)
        .attr("data-testid", "theme-toggle")
}
