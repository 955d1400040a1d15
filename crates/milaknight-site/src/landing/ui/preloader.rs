use std::cell::Cell;
use std::rc::Rc;
use std::time::Duration;

use mirror_core::{Mirror, Mounted, Signal, mount, on_unmount, signal};
use web_time::Instant;

use crate::landing::store::LandingStore;
use crate::markup::{El, Text, View};

/// Time between "hero ready and fonts loaded" and the preloader hiding.
pub const HIDE_DELAY: Duration = Duration::from_millis(300);

/// The preloader's own state: visibility, font readiness and the pending
/// hide deadline.
#[derive(Clone)]
pub struct PreloaderState {
    visible: Signal<bool>,
    fonts_loaded: Signal<bool>,
    hide_at: Rc<Cell<Option<Instant>>>,
}

impl PreloaderState {
    pub fn new() -> Self {
        Self {
            visible: signal(true),
            fonts_loaded: signal(false),
            hide_at: Rc::new(Cell::new(None)),
        }
    }

    pub fn is_visible(&self) -> bool {
        self.visible.get()
    }

    pub fn fonts_loaded(&self) {
        self.fonts_loaded.set(true);
    }

    pub fn hide_at(&self) -> Option<Instant> {
        self.hide_at.get()
    }

    /// Hide once the deadline has passed.
    pub fn tick(&self, now: Instant) {
        if let Some(at) = self.hide_at.get()
            && now >= at
        {
            self.hide_at.set(None);
            log::debug!("preloader: hidden");
            self.visible.set(false);
        }
    }

    /// Arms the hide deadline whenever the hero is ready and fonts are in,
    /// and disarms it otherwise. Disarmed when the page unmounts.
    pub fn mount_timer(&self, mirror: &Mirror<LandingStore>) -> Mounted {
        let this = self.clone();
        let mirror = mirror.clone();
        let timer = mount("GlobalPreloader.timer", move || {
            let ready = mirror.subscribe(|s| &s.is_hero_ready);
            let fonts = this.fonts_loaded.get();
            if ready && fonts {
                if this.hide_at.get().is_none() {
                    this.hide_at.set(Some(Instant::now() + HIDE_DELAY));
                }
            } else {
                this.hide_at.set(None);
            }
        });
        let hide_at = self.hide_at.clone();
        on_unmount(move || hide_at.set(None));
        timer
    }
}

impl Default for PreloaderState {
    fn default() -> Self {
        Self::new()
    }
}

pub fn progress_label(progress: u8) -> String {
    if progress < 100 {
        format!("Loading... {progress}%")
    } else {
        "Almost ready...".to_string()
    }
}

pub fn GlobalPreloader(mirror: &Mirror<LandingStore>, state: &PreloaderState) -> View {
    let root = El("div").attr("data-testid", "global-preloader");
    if !state.is_visible() {
        return root.flag("hidden", true);
    }
    let progress = mirror.subscribe(|s| &s.hero_progress);

    root.class("fixed inset-0 z-[9999] bg-background flex items-center justify-center")
        .attr("role", "progressbar")
        .attr("aria-valuenow", progress.to_string())
        .child(
            El("div")
                .class("flex flex-col items-center gap-6")
                .with_children(vec![
                    El("span")
                        .attr("data-icon", "loader")
                        .class("h-12 w-12 text-mk-purple animate-spin"),
                    El("div").class("w-64 h-1 bg-secondary rounded-full overflow-hidden").child(
                        El("div")
                            .class("h-full bg-gradient-to-r from-mk-magenta via-mk-purple to-mk-cyan")
                            .attr("style", format!("width: {progress}%")),
                    ),
                    El("p")
                        .class("text-sm text-muted-foreground")
                        .attr("data-testid", "preloader-label")
                        .child(Text(progress_label(progress))),
                ]),
        )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn label_switches_at_completion() {
        assert_eq!(progress_label(0), "Loading... 0%");
        assert_eq!(progress_label(99), "Loading... 99%");
        assert_eq!(progress_label(100), "Almost ready...");
    }

    #[test]
    fn tick_before_deadline_keeps_it_visible() {
        let state = PreloaderState::new();
        let now = Instant::now();
        state.hide_at.set(Some(now + HIDE_DELAY));

        state.tick(now);
        assert!(state.is_visible());
        state.tick(now + HIDE_DELAY);
        assert!(!state.is_visible());
        assert_eq!(state.hide_at(), None);
    }
}
