use mirror_core::Mirror;

use crate::landing::store::LandingStore;
use crate::markup::{El, Text, View};

/// Section ids, as targeted by `scrollToSection`.
pub const FEATURES_ID: &str = "features";
pub const HOW_IT_WORKS_ID: &str = "how-it-works";
pub const TESTIMONIAL_ID: &str = "testimonial";

const FEATURE_ICONS: [&str; 3] = ["layout-grid", "calendar-clock", "users"];

fn heading(title: &str, subtitle: &str) -> View {
    El("div").class("text-center mb-12 md:mb-16").with_children(vec![
        El("h2")
            .class("text-3xl md:text-4xl font-bold text-foreground mb-4")
            .child(Text(title)),
        El("p")
            .class("text-lg text-muted-foreground max-w-2xl mx-auto")
            .child(Text(subtitle)),
    ])
}

pub fn Features(mirror: &Mirror<LandingStore>) -> View {
    let t = mirror.subscribe(|s| &s.t);

    let cards = t
        .features
        .items
        .iter()
        .zip(FEATURE_ICONS)
        .map(|(item, icon)| {
            El("div")
                .class("p-6 md:p-8 rounded-2xl bg-card border border-border card-hover")
                .with_children(vec![
                    El("span").attr("data-icon", icon).attr("aria-hidden", "true"),
                    El("h3")
                        .class("text-xl font-semibold text-foreground mb-3")
                        .child(Text(item.title)),
                    El("p").class("text-muted-foreground").child(Text(item.description)),
                ])
        })
        .collect();

    El("section")
        .id(FEATURES_ID)
        .class("py-20 md:py-32 relative")
        .child(
            El("div").class("container mx-auto px-4").with_children(vec![
                heading(t.features.title, t.features.subtitle),
                El("div").class("grid md:grid-cols-3 gap-6 md:gap-8").with_children(cards),
            ]),
        )
}

pub fn HowItWorks(mirror: &Mirror<LandingStore>) -> View {
    let t = mirror.subscribe(|s| &s.t);

    let steps = t
        .how_it_works
        .steps
        .iter()
        .map(|step| {
            El("div").class("relative text-center").with_children(vec![
                El("div")
                    .class("text-5xl font-bold gradient-text mb-4")
                    .child(Text(step.step)),
                El("h3")
                    .class("text-xl font-semibold text-foreground mb-3")
                    .child(Text(step.title)),
                El("p").class("text-muted-foreground").child(Text(step.description)),
            ])
        })
        .collect();

    El("section")
        .id(HOW_IT_WORKS_ID)
        .class("py-20 md:py-32 bg-secondary/30")
        .child(
            El("div").class("container mx-auto px-4").with_children(vec![
                heading(t.how_it_works.title, t.how_it_works.subtitle),
                El("div").class("grid md:grid-cols-3 gap-8 md:gap-12").with_children(steps),
            ]),
        )
}

pub fn Testimonial(mirror: &Mirror<LandingStore>) -> View {
    let t = mirror.subscribe(|s| &s.t);
    let copy = &t.testimonial;

    El("section")
        .id(TESTIMONIAL_ID)
        .class("py-20 md:py-32 relative overflow-hidden")
        .child(
            El("div").class("container mx-auto px-4").with_children(vec![
                El("h2")
                    .class("text-3xl md:text-4xl font-bold text-foreground text-center mb-12")
                    .child(Text(copy.title)),
                El("blockquote")
                    .class("max-w-3xl mx-auto p-8 md:p-12 rounded-2xl bg-card border border-border")
                    .with_children(vec![
                        El("p")
                            .class("text-xl md:text-2xl text-foreground leading-relaxed mb-8")
                            .child(Text(format!("\u{201c}{}\u{201d}", copy.quote))),
                        El("footer").with_children(vec![
                            El("p").class("font-semibold text-foreground").child(Text(copy.author)),
                            El("p").class("text-sm text-muted-foreground").child(Text(copy.role)),
                        ]),
                    ]),
            ]),
        )
}

pub fn Footer(mirror: &Mirror<LandingStore>) -> View {
    let t = mirror.subscribe(|s| &s.t);
    let links = &t.footer.links;

    El("footer")
        .class("py-12 border-t border-border bg-secondary/20")
        .child(
            El("div").class("container mx-auto px-4").with_children(vec![
                El("div")
                    .class("flex flex-col md:flex-row items-center justify-between gap-8")
                    .with_children(vec![
                        El("div").class("flex items-center gap-3").with_children(vec![
                            crate::markup::Logo("h-10 w-10 rounded-lg"),
                            El("div").with_children(vec![
                                El("span")
                                    .class("text-lg font-bold gradient-text")
                                    .child(Text("Milaknight")),
                                El("p")
                                    .class("text-sm text-muted-foreground")
                                    .child(Text(t.footer.tagline)),
                            ]),
                        ]),
                        El("nav").class("flex items-center gap-6").with_children(
                            [links.about, links.contact, links.privacy]
                                .into_iter()
                                .map(|label| {
                                    crate::markup::Link("#", label).class(
                                        "text-muted-foreground hover:text-foreground transition-colors text-sm",
                                    )
                                })
                                .collect(),
                        ),
                    ]),
                El("div")
                    .class("mt-8 pt-8 border-t border-border text-center")
                    .child(
                        El("p")
                            .class("text-sm text-muted-foreground")
                            .attr("data-testid", "copyright")
                            .child(Text(t.footer.copyright)),
                    ),
            ]),
        )
}
