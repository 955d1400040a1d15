//! Presentational leaves of the landing page. Each one gets a `Mirror` and
//! can only subscribe; each is mounted on its own, so a key change re-renders
//! exactly the leaves that read it.

mod header;
mod hero;
mod preloader;
mod sections;

use milaknight_context::AppContext;
use mirror_core::{Mirror, Mounted};
use web_time::Instant;

use crate::component::{Component, mount_view};
use crate::landing::store::LandingStore;
use crate::markup::{El, View};

pub use header::{Header, NAV_SECTIONS};
pub use hero::{Hero, HeroLoader, HeroModel};
pub use preloader::{GlobalPreloader, HIDE_DELAY, PreloaderState, progress_label};
pub use sections::{FEATURES_ID, Features, Footer, HOW_IT_WORKS_ID, HowItWorks, TESTIMONIAL_ID, Testimonial};

/// The mounted presentational tree.
pub struct LandingUi {
    components: Vec<Component>,
    hero: HeroModel,
    preloader: PreloaderState,
    _preloader_timer: Mounted,
}

impl LandingUi {
    pub fn component(&self, name: &str) -> Option<&Component> {
        self.components.iter().find(|c| c.name() == name)
    }

    pub fn components(&self) -> &[Component] {
        &self.components
    }

    pub fn hero(&self) -> &HeroModel {
        &self.hero
    }

    pub fn preloader(&self) -> &PreloaderState {
        &self.preloader
    }

    pub fn tick(&self, now: Instant) {
        self.preloader.tick(now);
    }

    pub fn fonts_loaded(&self) {
        self.preloader.fonts_loaded();
    }

    /// The latest output of every leaf, assembled into the page.
    pub fn view(&self) -> View {
        let part = |name: &str| {
            self.component(name)
                .map(Component::view)
                .unwrap_or_else(|| El("template"))
        };
        El("div").class("min-h-screen bg-background").with_children(vec![
            part("GlobalPreloader"),
            part("Header"),
            El("main").with_children(vec![
                part("Hero"),
                part("Features"),
                part("HowItWorks"),
                part("Testimonial"),
            ]),
            part("Footer"),
        ])
    }
}

/// Mount every leaf of the landing page under the current scope.
pub fn LandingRenderUi(mirror: Mirror<LandingStore>, ctx: &AppContext) -> LandingUi {
    for id in [FEATURES_ID, HOW_IT_WORKS_ID, TESTIMONIAL_ID] {
        ctx.document.add_section(id);
    }

    let hero = HeroModel::new(mirror.clone());
    let preloader = PreloaderState::new();
    let preloader_timer = preloader.mount_timer(&mirror);

    let components = vec![
        mount_view("GlobalPreloader", {
            let (mirror, preloader) = (mirror.clone(), preloader.clone());
            move || GlobalPreloader(&mirror, &preloader)
        }),
        mount_view("Header", {
            let (mirror, ctx) = (mirror.clone(), ctx.clone());
            move || Header(&mirror, &ctx)
        }),
        mount_view("Hero", {
            let (mirror, hero) = (mirror.clone(), hero.clone());
            move || Hero(&mirror, &hero)
        }),
        mount_view("Features", {
            let mirror = mirror.clone();
            move || Features(&mirror)
        }),
        mount_view("HowItWorks", {
            let mirror = mirror.clone();
            move || HowItWorks(&mirror)
        }),
        mount_view("Testimonial", {
            let mirror = mirror.clone();
            move || Testimonial(&mirror)
        }),
        mount_view("Footer", move || Footer(&mirror)),
    ];
    hero.start();

    LandingUi {
        components,
        hero,
        preloader,
        _preloader_timer: preloader_timer,
    }
}
