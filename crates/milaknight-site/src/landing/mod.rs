//! The landing page: store, layered wrappers and the presentational tree.

mod init;
mod state;
pub mod store;
pub mod ui;
mod utils;

use milaknight_context::AppContext;
use mirror_core::{Mirror, MirrorRegistry, Mounted, Scope};
use web_time::Instant;

use crate::component::Component;
use crate::markup::View;

pub use init::Init;
pub use state::State;
pub use store::{LandingKey, LandingStore};
pub use ui::{HeroModel, LandingRenderUi, LandingUi, PreloaderState};
pub use utils::Utils;

/// Composes the landing page in its fixed order: Init wraps State wraps
/// Utils wraps the UI. Everything mounted here is torn down with the page.
pub struct Factory {
    scope: Scope,
    registry: MirrorRegistry<LandingStore>,
    layers: Vec<Mounted>,
    ui: LandingUi,
}

impl Factory {
    pub fn mount(ctx: &AppContext) -> Self {
        let scope = Scope::new();
        let registry = MirrorRegistry::new(LandingStore::default());

        let (layers, ui) = scope.run(|| {
            Init(&registry);
            let layers = vec![
                State(&registry, &ctx.language),
                Utils(&registry, &ctx.document),
            ];
            let ui = LandingRenderUi(registry.mirror(), ctx);
            (layers, ui)
        });
        log::debug!("landing: mounted {} layers", layers.len());

        Self {
            scope,
            registry,
            layers,
            ui,
        }
    }

    /// Read side of the page's store.
    pub fn mirror(&self) -> Mirror<LandingStore> {
        self.registry.mirror()
    }

    pub fn registry(&self) -> &MirrorRegistry<LandingStore> {
        &self.registry
    }

    pub fn layers(&self) -> &[Mounted] {
        &self.layers
    }

    pub fn ui(&self) -> &LandingUi {
        &self.ui
    }

    pub fn component(&self, name: &str) -> Option<&Component> {
        self.ui.component(name)
    }

    pub fn hero(&self) -> &HeroModel {
        self.ui.hero()
    }

    /// Advance time-driven leaves (the preloader's hide delay).
    pub fn tick(&self, now: Instant) {
        self.ui.tick(now);
    }

    pub fn fonts_loaded(&self) {
        self.ui.fonts_loaded();
    }

    pub fn view(&self) -> View {
        self.ui.view()
    }

    pub fn unmount(self) {
        log::debug!("landing: unmount");
        self.scope.dispose();
    }
}
