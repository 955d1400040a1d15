use milaknight_context::LanguageContext;
use mirror_core::{Action, Mounted, MirrorRegistry, Signal, mount, signal};

use super::store::LandingStore;

/// Reactive values owned by the landing page. The setters registered for
/// them are created once, so re-registering them is never a change.
#[derive(Clone)]
struct LocalState {
    is_mobile_menu_open: Signal<bool>,
    is_hero_ready: Signal<bool>,
    hero_progress: Signal<u8>,
}

struct Setters {
    set_is_mobile_menu_open: Action<bool>,
    set_is_hero_ready: Action<bool>,
    set_hero_progress: Action<u8>,
}

impl LocalState {
    fn new() -> Self {
        Self {
            is_mobile_menu_open: signal(false),
            is_hero_ready: signal(false),
            hero_progress: signal(0),
        }
    }

    fn setters(&self) -> Setters {
        let menu = self.is_mobile_menu_open.clone();
        let ready = self.is_hero_ready.clone();
        let progress = self.hero_progress.clone();
        Setters {
            set_is_mobile_menu_open: Action::new(move |open| {
                menu.set(open);
            }),
            set_is_hero_ready: Action::new(move |r| {
                ready.set(r);
            }),
            set_hero_progress: Action::new(move |p: u8| {
                progress.set(p.min(100));
            }),
        }
    }
}

/// Registers the page's reactive state and the language-derived values.
///
/// Re-runs whenever the language or one of its own values changes, and
/// registers every key each time; unchanged keys notify nobody.
pub fn State(registry: &MirrorRegistry<LandingStore>, language: &LanguageContext) -> Mounted {
    let local = LocalState::new();
    let setters = local.setters();
    let registry = registry.clone();
    let language = language.clone();

    mount("landing.State", move || {
        registry.register(|s| &s.is_mobile_menu_open, local.is_mobile_menu_open.get());
        registry.register(|s| &s.set_is_mobile_menu_open, setters.set_is_mobile_menu_open.clone());
        registry.register(|s| &s.t, language.t());
        registry.register(|s| &s.is_rtl, language.is_rtl());
        registry.register(|s| &s.is_hero_ready, local.is_hero_ready.get());
        registry.register(|s| &s.set_is_hero_ready, setters.set_is_hero_ready.clone());
        registry.register(|s| &s.hero_progress, local.hero_progress.get());
        registry.register(|s| &s.set_hero_progress, setters.set_hero_progress.clone());
    })
}

#[cfg(test)]
mod tests {
    use std::rc::Rc;

    use milaknight_context::{Document, Locale, MemoryPreferences, get_translation};
    use mirror_core::SlotState;

    use super::*;
    use crate::landing::store::LandingKey;

    fn language() -> LanguageContext {
        LanguageContext::new(Rc::new(MemoryPreferences::new()), Document::new())
    }

    #[test]
    fn registers_every_state_key_on_mount() {
        let reg = MirrorRegistry::new(LandingStore::default());
        let _state = State(&reg, &language());

        for key in LandingKey::ALL {
            let expected = match key {
                LandingKey::ScrollToSection | LandingKey::HandleMobileMenuToggle => SlotState::Unset,
                _ => SlotState::Set,
            };
            assert_eq!(reg.slot_state(*key), expected, "{key}");
        }
    }

    #[test]
    fn setters_feed_back_into_registry() {
        let reg = MirrorRegistry::new(LandingStore::default());
        let state = State(&reg, &language());

        reg.peek(|s| &s.set_hero_progress).call(250);
        assert_eq!(reg.peek(|s| &s.hero_progress), 100);
        reg.peek(|s| &s.set_is_mobile_menu_open).call(true);
        assert!(reg.peek(|s| &s.is_mobile_menu_open));
        assert_eq!(state.renders(), 3);
    }

    #[test]
    fn setter_identity_survives_rerenders() {
        let reg = MirrorRegistry::new(LandingStore::default());
        let lang = language();
        let _state = State(&reg, &lang);
        let before = reg.peek(|s| &s.set_is_hero_ready);

        lang.toggle_language();
        assert!(std::ptr::eq(reg.peek(|s| &s.t), get_translation(Locale::Ar)));
        assert!(mirror_core::Identity::same(&before, &reg.peek(|s| &s.set_is_hero_ready)));
    }
}
