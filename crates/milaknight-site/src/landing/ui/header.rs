use milaknight_context::AppContext;
use mirror_core::Mirror;

use crate::common::{LanguageToggle, ThemeToggle};
use crate::landing::store::LandingStore;
use crate::markup::{Button, El, Link, Logo, Text, View};

/// In-page sections the navigation scrolls to, in display order.
pub const NAV_SECTIONS: [&str; 3] = ["#features", "#how-it-works", "#testimonial"];

pub fn Header(mirror: &Mirror<LandingStore>, ctx: &AppContext) -> View {
    let t = mirror.subscribe(|s| &s.t);
    let is_rtl = mirror.subscribe(|s| &s.is_rtl);
    let is_mobile_menu_open = mirror.subscribe(|s| &s.is_mobile_menu_open);
    let handle_mobile_menu_toggle = mirror.subscribe(|s| &s.handle_mobile_menu_toggle);
    let scroll_to_section = mirror.subscribe(|s| &s.scroll_to_section);

    let labels = [t.nav.features, t.nav.how_it_works, t.nav.testimonial];
    let nav_button = |href: &'static str, label: &str, test_prefix: &str| {
        let scroll = scroll_to_section.clone();
        Button(label, move || scroll.call(href.to_string()))
            .attr("data-testid", format!("{test_prefix}{}", &href[1..]))
    };

    let desktop_nav = El("nav")
        .class("hidden md:flex items-center gap-8")
        .with_children(
            NAV_SECTIONS
                .into_iter()
                .zip(labels)
                .map(|(href, label)| {
                    nav_button(href, label, "nav-").class(
                        "text-muted-foreground hover:text-foreground transition-colors text-sm font-medium",
                    )
                })
                .collect(),
        );

    let actions_class = if is_rtl {
        "hidden md:flex items-center gap-3 flex-row-reverse"
    } else {
        "hidden md:flex items-center gap-3"
    };
    let desktop_actions = El("div").class(actions_class).with_children(vec![
        LanguageToggle(t.locale, &ctx.language),
        ThemeToggle(&ctx.theme),
        Link("/login", t.nav.login).class("btn-gradient text-sm"),
    ]);

    let menu_button = {
        let toggle = handle_mobile_menu_toggle.clone();
        Button("", move || toggle.run())
            .with_children(vec![
                El("span")
                    .attr("data-icon", if is_mobile_menu_open { "x" } else { "menu" })
                    .attr("aria-hidden", "true"),
            ])
            .class("md:hidden p-2 rounded-lg bg-secondary")
            .attr("aria-expanded", is_mobile_menu_open.to_string())
            .attr("data-testid", "menu-toggle")
    };

    let bar = El("div").class("container mx-auto px-4").child(
        El("div")
            .class("flex items-center justify-between h-16 md:h-20")
            .with_children(vec![
                El("a")
                    .attr("href", "/")
                    .class("flex items-center gap-3")
                    .with_children(vec![
                        Logo("h-10 w-10 rounded-lg"),
                        El("span")
                            .class("text-xl font-bold gradient-text")
                            .child(Text("Milaknight")),
                    ]),
                desktop_nav,
                desktop_actions,
                menu_button,
            ]),
    );

    let mut header = El("header")
        .class("fixed top-0 left-0 right-0 z-50 bg-background/80 backdrop-blur-lg border-b border-border")
        .child(bar);

    if is_mobile_menu_open {
        let mut items: Vec<View> = NAV_SECTIONS
            .into_iter()
            .zip(labels)
            .map(|(href, label)| {
                nav_button(href, label, "mobile-nav-")
                    .class("block w-full text-start text-muted-foreground hover:text-foreground transition-colors py-2")
            })
            .collect();
        let close = handle_mobile_menu_toggle.clone();
        items.push(
            El("div")
                .class("flex items-center gap-3 pt-4 border-t border-border")
                .with_children(vec![
                    LanguageToggle(t.locale, &ctx.language),
                    ThemeToggle(&ctx.theme),
                    Link("/login", t.nav.login)
                        .class("btn-gradient text-sm flex-1 text-center")
                        .on_click(move || close.run()),
                ]),
        );
        header = header.child(
            El("div")
                .class("md:hidden bg-background border-b border-border overflow-hidden")
                .attr("data-testid", "mobile-menu")
                .child(
                    El("div")
                        .class("container mx-auto px-4 py-4 space-y-4")
                        .with_children(items),
                ),
        );
    }

    header
}
