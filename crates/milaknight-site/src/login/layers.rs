//! The login page has no static data and no actions of its own; Init and
//! Utils only keep the layer order. State mirrors the language.

use milaknight_context::LanguageContext;
use mirror_core::{MirrorRegistry, Mounted, mount};

use super::store::LoginStore;

pub fn Init(_registry: &MirrorRegistry<LoginStore>) {
    log::trace!("login: Init layer mounted");
}

pub fn State(registry: &MirrorRegistry<LoginStore>, language: &LanguageContext) -> Mounted {
    let registry = registry.clone();
    let language = language.clone();
    mount("login.State", move || {
        registry.register(|s| &s.t, language.t());
        registry.register(|s| &s.is_rtl, language.is_rtl());
    })
}

pub fn Utils(_registry: &MirrorRegistry<LoginStore>) {
    log::trace!("login: Utils layer mounted");
}
