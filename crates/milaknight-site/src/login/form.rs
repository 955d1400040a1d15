use milaknight_context::AppContext;
use mirror_core::Mirror;

use crate::common::{LanguageToggle, ThemeToggle};
use crate::login::store::LoginStore;
use crate::markup::{El, Link, Logo, Text, View};

pub const EMAIL_PLACEHOLDER: &str = "you@example.com";
pub const PASSWORD_PLACEHOLDER: &str = "••••••••";

fn field(label: &str, kind: &'static str, icon: &'static str, placeholder: &str, is_rtl: bool) -> View {
    let (icon_side, padding) = if is_rtl {
        ("right-3", "pr-11 pl-4")
    } else {
        ("left-3", "pl-11 pr-4")
    };
    El("div").with_children(vec![
        El("label")
            .class("block text-sm font-medium text-foreground mb-2")
            .child(Text(label)),
        El("div").class("relative").with_children(vec![
            El("span")
                .attr("data-icon", icon)
                .class(format!("absolute top-1/2 -translate-y-1/2 h-5 w-5 text-muted-foreground {icon_side}")),
            El("input")
                .attr("type", kind)
                .attr("name", kind)
                .flag("disabled", true)
                .class(format!(
                    "w-full bg-secondary border border-border rounded-lg py-3 disabled:opacity-60 disabled:cursor-not-allowed {padding}"
                ))
                .attr("placeholder", placeholder),
        ]),
    ])
}

/// The sign-in form. Authentication is not available yet, so every control
/// is disabled and the form never submits.
pub fn LoginForm(mirror: &Mirror<LoginStore>, ctx: &AppContext) -> View {
    let t = mirror.subscribe(|s| &s.t);
    let is_rtl = mirror.subscribe(|s| &s.is_rtl);
    let copy = &t.login;

    let header = El("header")
        .class("p-4 flex items-center justify-between")
        .with_children(vec![
            El("a")
                .attr("href", "/")
                .class("flex items-center gap-2 text-muted-foreground hover:text-foreground transition-colors")
                .attr("data-testid", "back-link")
                .with_children(vec![
                    El("span")
                        .attr("data-icon", "arrow-left")
                        .class(if is_rtl { "h-5 w-5 rotate-180" } else { "h-5 w-5" }),
                    El("span").class("text-sm font-medium").child(Text("Back")),
                ]),
            El("div").class("flex items-center gap-2").with_children(vec![
                LanguageToggle(t.locale, &ctx.language),
                ThemeToggle(&ctx.theme),
            ]),
        ]);

    let card = El("div").class("bg-card rounded-xl p-8").with_children(vec![
        El("div").class("text-center mb-6").child(
            El("span")
                .class("inline-block px-4 py-1.5 rounded-full bg-mk-purple/10 text-mk-purple text-sm font-medium")
                .attr("data-testid", "coming-soon")
                .child(Text(copy.coming_soon)),
        ),
        El("form")
            .class("space-y-5")
            .attr("action", "#")
            .with_children(vec![
                field(copy.email, "email", "mail", EMAIL_PLACEHOLDER, is_rtl),
                field(copy.password, "password", "lock", PASSWORD_PLACEHOLDER, is_rtl),
                El("button")
                    .attr("type", "submit")
                    .flag("disabled", true)
                    .class("w-full btn-gradient py-3.5 disabled:opacity-60 disabled:cursor-not-allowed")
                    .attr("data-testid", "submit")
                    .child(Text(copy.submit)),
            ]),
        El("p")
            .class("text-center text-sm text-muted-foreground mt-6")
            .with_children(vec![
                Text(format!("{} ", copy.no_account)),
                El("span")
                    .class("gradient-text font-medium cursor-pointer")
                    .child(Text(copy.sign_up)),
            ]),
    ]);

    let main = El("main")
        .class("flex-1 flex items-center justify-center p-4")
        .child(
            El("div").class("w-full max-w-md").with_children(vec![
                El("div").class("text-center mb-8").with_children(vec![
                    Link("/", "")
                        .with_children(vec![
                            Logo("h-12 w-12 rounded-xl"),
                            El("span")
                                .class("text-2xl font-bold gradient-text")
                                .child(Text("Milaknight")),
                        ])
                        .class("inline-flex items-center gap-3 mb-4"),
                    El("h1")
                        .class("text-2xl font-bold text-foreground mb-2")
                        .child(Text(copy.title)),
                    El("p").class("text-muted-foreground").child(Text(copy.subtitle)),
                ]),
                El("div").class("gradient-border p-[1px]").child(card),
            ]),
        );

    El("div")
        .class("min-h-screen bg-background flex flex-col")
        .with_children(vec![header, main])
}
