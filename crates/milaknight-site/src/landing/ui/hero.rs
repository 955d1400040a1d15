use mirror_core::{Mirror, Signal, batch, signal};

use crate::landing::store::LandingStore;
use crate::markup::{El, Link, Text, View};

/// The hero's 3D model loader. Progress and readiness are reported through
/// the setters found in the store, never registered directly.
#[derive(Clone)]
pub struct HeroModel {
    mirror: Mirror<LandingStore>,
    loaded: Signal<bool>,
}

impl HeroModel {
    pub fn new(mirror: Mirror<LandingStore>) -> Self {
        Self {
            mirror,
            loaded: signal(false),
        }
    }

    /// Loading (re)started.
    pub fn start(&self) {
        self.report_progress(0);
    }

    pub fn report_progress(&self, percent: u8) {
        self.mirror.peek(|s| &s.set_hero_progress).call(percent.min(100));
    }

    /// Model is on screen: progress completes, then the hero is ready.
    pub fn finish(&self) {
        self.report_progress(100);
        batch(|| {
            self.loaded.set(true);
            self.mirror.peek(|s| &s.set_is_hero_ready).call(true);
        });
    }

    pub fn is_loaded(&self) -> bool {
        self.loaded.get()
    }
}

/// Overlay shown over the model area while it loads.
pub fn HeroLoader(progress: u8) -> View {
    let mut inner = El("div")
        .class("flex flex-col items-center gap-4")
        .child(El("span").attr("data-icon", "loader").class("h-8 w-8 text-mk-purple animate-spin"));
    if progress > 0 {
        inner = inner.child(
            El("div").class("w-32 h-1 bg-secondary rounded-full overflow-hidden").child(
                El("div")
                    .class("h-full bg-gradient-to-r from-mk-magenta to-mk-cyan")
                    .attr("style", format!("width: {progress}%")),
            ),
        );
    }
    El("div")
        .class("absolute inset-0 flex items-center justify-center bg-background/40 backdrop-blur-sm rounded-lg z-10")
        .attr("data-testid", "hero-loader")
        .child(inner)
}

/// The headline with every "Milaknight" highlighted.
fn headline(text: &str) -> Vec<View> {
    let parts: Vec<&str> = text.split("Milaknight").collect();
    let last = parts.len() - 1;
    parts
        .into_iter()
        .enumerate()
        .map(|(i, part)| {
            let mut span = El("span").child(Text(part));
            if i < last {
                span = span.child(El("span").class("gradient-text").child(Text("Milaknight")));
            }
            span
        })
        .collect()
}

pub fn Hero(mirror: &Mirror<LandingStore>, model: &HeroModel) -> View {
    let t = mirror.subscribe(|s| &s.t);
    let is_rtl = mirror.subscribe(|s| &s.is_rtl);
    let is_hero_ready = mirror.subscribe(|s| &s.is_hero_ready);
    let model_loaded = model.is_loaded();

    let text = El("div")
        .class("flex flex-col justify-center space-y-4 text-center md:text-start relative z-10 order-2 md:order-1")
        .attr("data-state", if is_hero_ready { "shown" } else { "waiting" })
        .with_children(vec![
            El("div")
                .class("inline-flex items-center gap-2 px-3 py-1.5 rounded-full bg-secondary/80 border border-border w-fit")
                .with_children(vec![
                    El("span").attr("data-icon", "sparkles").attr("aria-hidden", "true"),
                    El("span")
                        .class("text-xs sm:text-sm font-medium text-muted-foreground")
                        .child(Text(t.hero.tagline)),
                ]),
            El("h1")
                .class("text-3xl sm:text-4xl md:text-5xl lg:text-6xl font-bold text-foreground leading-tight")
                .with_children(headline(t.hero.headline)),
            El("p")
                .class("text-base sm:text-lg md:text-xl text-muted-foreground max-w-xl")
                .child(Text(t.hero.subtext)),
            El("div").class("pt-2 sm:pt-4").child(
                Link("/login", t.hero.cta)
                    .class("inline-flex items-center gap-2 btn-gradient glow-effect-strong")
                    .attr("data-testid", "hero-cta")
                    .child(
                        El("span")
                            .attr("data-icon", "arrow-right")
                            .class(if is_rtl { "h-4 w-4 rotate-180" } else { "h-4 w-4" }),
                    ),
            ),
        ]);

    let mut stage = El("div")
        .class("relative w-full h-full flex items-center justify-center")
        .child(El("canvas").attr("data-testid", "hero-model").attr("aria-hidden", "true"));
    if !model_loaded {
        stage = stage.child(HeroLoader(0));
    }

    El("section")
        .class("relative min-h-screen flex items-center justify-center pt-16 md:pt-20 overflow-hidden")
        .child(
            El("div")
                .class("container mx-auto px-4 relative z-10 w-full")
                .child(
                    El("div")
                        .class("grid grid-cols-1 md:grid-cols-2 gap-6 md:gap-8 items-center")
                        .with_children(vec![
                            text,
                            El("div")
                                .class("relative w-full h-full order-1 md:order-2")
                                .child(stage),
                        ]),
                ),
        )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn headline_highlights_brand() {
        let spans = headline("Manage tasks — move faster with Milaknight.");
        assert_eq!(spans.len(), 2);
        assert_eq!(
            spans[0].to_html(),
            "<span>Manage tasks — move faster with <span class=\"gradient-text\">Milaknight</span></span>"
        );
        assert_eq!(spans[1].text_content(), ".");
    }

    #[test]
    fn loader_shows_bar_only_with_progress() {
        assert!(HeroLoader(0).find(&|v: &View| v.get_attr("style").is_some()).is_none());
        let bar = HeroLoader(40);
        let fill = bar.find(&|v: &View| v.get_attr("style").is_some());
        assert_eq!(fill.and_then(|v| v.get_attr("style")), Some("width: 40%"));
    }
}
