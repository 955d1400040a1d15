use milaknight_context::{Locale, Translation, get_translation};
use mirror_core::mirror_store;

mirror_store! {
    pub struct LoginStore keyed by LoginKey;

    slice state: LoginState {
        T("t") => t: &'static Translation = identity,
        IsRtl("isRTL") => is_rtl: bool = shallow,
    }
}

impl Default for LoginState {
    fn default() -> Self {
        Self {
            t: get_translation(Locale::En),
            is_rtl: false,
        }
    }
}
