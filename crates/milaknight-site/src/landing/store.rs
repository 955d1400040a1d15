//! Keys shared by the landing page's layers and leaves.

use milaknight_context::{Locale, Translation, get_translation};
use mirror_core::{Action, mirror_store};

mirror_store! {
    pub struct LandingStore keyed by LandingKey;

    slice state: StateParams {
        IsMobileMenuOpen("isMobileMenuOpen") => is_mobile_menu_open: bool = shallow,
        SetIsMobileMenuOpen("setIsMobileMenuOpen") => set_is_mobile_menu_open: Action<bool> = identity,
        /// Replaced wholesale on locale change.
        T("t") => t: &'static Translation = identity,
        IsRtl("isRTL") => is_rtl: bool = shallow,
        IsHeroReady("isHeroReady") => is_hero_ready: bool = shallow,
        /// Percent, 0..=100.
        HeroProgress("heroProgress") => hero_progress: u8 = shallow,
        SetIsHeroReady("setIsHeroReady") => set_is_hero_ready: Action<bool> = identity,
        SetHeroProgress("setHeroProgress") => set_hero_progress: Action<u8> = identity,
    }
    slice utils: UtilsParams {
        ScrollToSection("scrollToSection") => scroll_to_section: Action<String> = identity,
        HandleMobileMenuToggle("handleMobileMenuToggle") => handle_mobile_menu_toggle: Action = identity,
    }
}

impl Default for StateParams {
    fn default() -> Self {
        Self {
            is_mobile_menu_open: false,
            set_is_mobile_menu_open: Action::noop(),
            t: get_translation(Locale::En),
            is_rtl: false,
            is_hero_ready: false,
            hero_progress: 0,
            set_is_hero_ready: Action::noop(),
            set_hero_progress: Action::noop(),
        }
    }
}

impl Default for UtilsParams {
    fn default() -> Self {
        Self {
            scroll_to_section: Action::noop(),
            handle_mobile_menu_toggle: Action::noop(),
        }
    }
}
