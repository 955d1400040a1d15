use milaknight_context::Document;
use mirror_core::{Action, Mounted, MirrorRegistry, batch, mount};

use super::store::LandingStore;

/// Registers the derived actions. Both act through the registry they are
/// stored in, so they hold it weakly.
pub fn Utils(registry: &MirrorRegistry<LandingStore>, document: &Document) -> Mounted {
    let scroll_to_section = {
        let weak = registry.downgrade();
        let document = document.clone();
        Action::new(move |href: String| {
            batch(|| {
                if !document.scroll_into_view(&href) {
                    log::debug!("scrollToSection: {href} is not on the page");
                }
                if let Some(registry) = weak.upgrade() {
                    registry.peek(|s| &s.set_is_mobile_menu_open).call(false);
                }
            })
        })
    };

    let handle_mobile_menu_toggle = {
        let weak = registry.downgrade();
        Action::new(move |()| {
            if let Some(registry) = weak.upgrade() {
                let open = registry.peek(|s| &s.is_mobile_menu_open);
                registry.peek(|s| &s.set_is_mobile_menu_open).call(!open);
            }
        })
    };

    let registry = registry.clone();
    mount("landing.Utils", move || {
        registry.register(|s| &s.scroll_to_section, scroll_to_section.clone());
        registry.register(|s| &s.handle_mobile_menu_toggle, handle_mobile_menu_toggle.clone());
    })
}
