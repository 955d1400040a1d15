use mirror_core::MirrorRegistry;

use super::store::LandingStore;

/// Static data layer. The landing page has none yet; the layer exists so the
/// wrapping order stays Init, State, Utils.
pub fn Init(_registry: &MirrorRegistry<LandingStore>) {
    log::trace!("landing: Init layer mounted");
}
