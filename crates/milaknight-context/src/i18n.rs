//! Translation bundles.
//!
//! Every locale carries a fully populated [`Translation`]; there are no
//! partial locales and no fallback chain. Bundles are `'static`, so a locale
//! switch swaps one reference for another.

use std::fmt;
use std::str::FromStr;

use crate::error::ContextError;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum Locale {
    #[default]
    En,
    Ar,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum TextDirection {
    #[default]
    Ltr,
    Rtl,
}

impl TextDirection {
    pub fn as_attr(self) -> &'static str {
        match self {
            TextDirection::Ltr => "ltr",
            TextDirection::Rtl => "rtl",
        }
    }
}

impl Locale {
    pub const ALL: [Locale; 2] = [Locale::En, Locale::Ar];

    pub fn code(self) -> &'static str {
        match self {
            Locale::En => "en",
            Locale::Ar => "ar",
        }
    }

    pub fn is_rtl(self) -> bool {
        self == Locale::Ar
    }

    pub fn direction(self) -> TextDirection {
        if self.is_rtl() {
            TextDirection::Rtl
        } else {
            TextDirection::Ltr
        }
    }

    pub fn toggled(self) -> Locale {
        match self {
            Locale::En => Locale::Ar,
            Locale::Ar => Locale::En,
        }
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Locale {
    type Err = ContextError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "en" => Ok(Locale::En),
            "ar" => Ok(Locale::Ar),
            other => Err(ContextError::UnknownLocale(other.to_string())),
        }
    }
}

#[derive(Debug, PartialEq, Eq)]
pub struct Translation {
    pub locale: Locale,
    pub nav: NavCopy,
    pub hero: HeroCopy,
    pub features: FeaturesCopy,
    pub how_it_works: HowItWorksCopy,
    pub testimonial: TestimonialCopy,
    pub footer: FooterCopy,
    pub login: LoginCopy,
}

#[derive(Debug, PartialEq, Eq)]
pub struct NavCopy {
    pub features: &'static str,
    pub how_it_works: &'static str,
    pub testimonial: &'static str,
    pub login: &'static str,
}

#[derive(Debug, PartialEq, Eq)]
pub struct HeroCopy {
    pub tagline: &'static str,
    pub headline: &'static str,
    pub subtext: &'static str,
    pub cta: &'static str,
}

#[derive(Debug, PartialEq, Eq)]
pub struct FeatureItem {
    pub title: &'static str,
    pub description: &'static str,
}

#[derive(Debug, PartialEq, Eq)]
pub struct FeaturesCopy {
    pub title: &'static str,
    pub subtitle: &'static str,
    pub items: [FeatureItem; 3],
}

#[derive(Debug, PartialEq, Eq)]
pub struct StepItem {
    pub step: &'static str,
    pub title: &'static str,
    pub description: &'static str,
}

#[derive(Debug, PartialEq, Eq)]
pub struct HowItWorksCopy {
    pub title: &'static str,
    pub subtitle: &'static str,
    pub steps: [StepItem; 3],
}

#[derive(Debug, PartialEq, Eq)]
pub struct TestimonialCopy {
    pub title: &'static str,
    pub quote: &'static str,
    pub author: &'static str,
    pub role: &'static str,
}

#[derive(Debug, PartialEq, Eq)]
pub struct FooterLinks {
    pub about: &'static str,
    pub contact: &'static str,
    pub privacy: &'static str,
}

#[derive(Debug, PartialEq, Eq)]
pub struct FooterCopy {
    pub tagline: &'static str,
    pub links: FooterLinks,
    pub copyright: &'static str,
}

#[derive(Debug, PartialEq, Eq)]
pub struct LoginCopy {
    pub title: &'static str,
    pub subtitle: &'static str,
    pub email: &'static str,
    pub password: &'static str,
    pub submit: &'static str,
    pub coming_soon: &'static str,
    pub no_account: &'static str,
    pub sign_up: &'static str,
}

pub fn get_translation(locale: Locale) -> &'static Translation {
    match locale {
        Locale::En => &EN,
        Locale::Ar => &AR,
    }
}

static EN: Translation = Translation {
    locale: Locale::En,
    nav: NavCopy {
        features: "Features",
        how_it_works: "How it Works",
        testimonial: "Testimonial",
        login: "Login",
    },
    hero: HeroCopy {
        tagline: "Live Your Passion",
        headline: "Manage tasks with clarity — move faster with Milaknight.",
        subtext: "A lightweight task manager for individuals and teams. Plan, assign, and track progress in minutes.",
        cta: "Get Started",
    },
    features: FeaturesCopy {
        title: "Features",
        subtitle: "Everything you need to stay organized",
        items: [
            FeatureItem {
                title: "Smart Boards",
                description: "Visualize work with simple boards and statuses",
            },
            FeatureItem {
                title: "Due Dates & Reminders",
                description: "Stay on time with deadlines and notifications",
            },
            FeatureItem {
                title: "Team Collaboration",
                description: "Assign tasks, comment, and keep everyone aligned",
            },
        ],
    },
    how_it_works: HowItWorksCopy {
        title: "How It Works",
        subtitle: "Get started in three simple steps",
        steps: [
            StepItem {
                step: "01",
                title: "Create your workspace",
                description: "Set up your personalized workspace in seconds",
            },
            StepItem {
                step: "02",
                title: "Add tasks and assign owners",
                description: "Break down your projects into manageable tasks",
            },
            StepItem {
                step: "03",
                title: "Track progress and complete work",
                description: "Monitor progress and celebrate achievements",
            },
        ],
    },
    testimonial: TestimonialCopy {
        title: "What Our Users Say",
        quote: "Milaknight made our weekly planning effortless. We ship faster and miss fewer details.",
        author: "Sara A.",
        role: "Operations Manager",
    },
    footer: FooterCopy {
        tagline: "Live Your Passion",
        links: FooterLinks {
            about: "About",
            contact: "Contact",
            privacy: "Privacy Policy",
        },
        copyright: "© 2024 Milaknight. All rights reserved.",
    },
    login: LoginCopy {
        title: "Welcome Back",
        subtitle: "Sign in to your account",
        email: "Email",
        password: "Password",
        submit: "Sign In",
        coming_soon: "Coming Soon",
        no_account: "Don't have an account?",
        sign_up: "Sign up",
    },
};

static AR: Translation = Translation {
    locale: Locale::Ar,
    nav: NavCopy {
        features: "الميزات",
        how_it_works: "كيف يعمل",
        testimonial: "آراء العملاء",
        login: "تسجيل الدخول",
    },
    hero: HeroCopy {
        tagline: "عِش شغفك",
        headline: "إدارة مهامك بوضوح — واشتغل أسرع مع Milaknight.",
        subtext: "مدير مهام خفيف للأفراد والفرق. خطّط، عيّن، وتابع التقدم خلال دقائق.",
        cta: "ابدأ الآن",
    },
    features: FeaturesCopy {
        title: "الميزات",
        subtitle: "كل ما تحتاجه للبقاء منظماً",
        items: [
            FeatureItem {
                title: "لوحات ذكية",
                description: "عرض المهام بشكل بصري وبحالات واضحة",
            },
            FeatureItem {
                title: "مواعيد وتذكيرات",
                description: "التزم بالمواعيد مع تنبيهات بسيطة",
            },
            FeatureItem {
                title: "تعاون الفريق",
                description: "تعيين المهام، تعليقات، وتنظيم العمل",
            },
        ],
    },
    how_it_works: HowItWorksCopy {
        title: "كيف يعمل",
        subtitle: "ابدأ في ثلاث خطوات بسيطة",
        steps: [
            StepItem {
                step: "٠١",
                title: "أنشئ مساحة عملك",
                description: "إعداد مساحة عملك الشخصية في ثوانٍ",
            },
            StepItem {
                step: "٠٢",
                title: "أضف المهام وعيّن المسؤولين",
                description: "قسّم مشاريعك إلى مهام قابلة للإدارة",
            },
            StepItem {
                step: "٠٣",
                title: "تابع التقدم وأنهِ العمل",
                description: "راقب التقدم واحتفل بالإنجازات",
            },
        ],
    },
    testimonial: TestimonialCopy {
        title: "آراء عملائنا",
        quote: "Milaknight خلّى التخطيط الأسبوعي أسهل بكثير. صار إنجازنا أسرع وتفاصيلنا أوضح.",
        author: "سارة",
        role: "مديرة عمليات",
    },
    footer: FooterCopy {
        tagline: "عِش شغفك",
        links: FooterLinks {
            about: "من نحن",
            contact: "تواصل معنا",
            privacy: "سياسة الخصوصية",
        },
        copyright: "© ٢٠٢٤ Milaknight. جميع الحقوق محفوظة.",
    },
    login: LoginCopy {
        title: "مرحباً بعودتك",
        subtitle: "سجّل الدخول إلى حسابك",
        email: "البريد الإلكتروني",
        password: "كلمة المرور",
        submit: "تسجيل الدخول",
        coming_soon: "قريباً",
        no_account: "ليس لديك حساب؟",
        sign_up: "سجّل الآن",
    },
};

#[cfg(test)]
mod tests {
    use super::*;

    fn all_strings(t: &Translation) -> Vec<&'static str> {
        let mut out = vec![
            t.nav.features,
            t.nav.how_it_works,
            t.nav.testimonial,
            t.nav.login,
            t.hero.tagline,
            t.hero.headline,
            t.hero.subtext,
            t.hero.cta,
            t.features.title,
            t.features.subtitle,
            t.how_it_works.title,
            t.how_it_works.subtitle,
            t.testimonial.title,
            t.testimonial.quote,
            t.testimonial.author,
            t.testimonial.role,
            t.footer.tagline,
            t.footer.links.about,
            t.footer.links.contact,
            t.footer.links.privacy,
            t.footer.copyright,
            t.login.title,
            t.login.subtitle,
            t.login.email,
            t.login.password,
            t.login.submit,
            t.login.coming_soon,
            t.login.no_account,
            t.login.sign_up,
        ];
        for item in &t.features.items {
            out.extend([item.title, item.description]);
        }
        for step in &t.how_it_works.steps {
            out.extend([step.step, step.title, step.description]);
        }
        out
    }

    #[test]
    fn every_locale_is_fully_populated() {
        for locale in Locale::ALL {
            let strings = all_strings(get_translation(locale));
            assert!(strings.iter().all(|s| !s.trim().is_empty()), "{locale} has an empty entry");
        }
    }

    #[test]
    fn bundles_are_stable_references() {
        assert!(std::ptr::eq(get_translation(Locale::En), get_translation(Locale::En)));
        assert!(!std::ptr::eq(get_translation(Locale::En), get_translation(Locale::Ar)));
        assert_eq!(get_translation(Locale::Ar).nav.login, "تسجيل الدخول");
        for locale in Locale::ALL {
            assert_eq!(get_translation(locale).locale, locale);
        }
    }

    #[test]
    fn locale_codes_round_trip_through_from_str() {
        for locale in Locale::ALL {
            assert_eq!(locale.code().parse::<Locale>().ok(), Some(locale));
        }
        assert!(matches!("fr".parse::<Locale>(), Err(ContextError::UnknownLocale(s)) if s == "fr"));
        assert!(Locale::Ar.is_rtl());
        assert_eq!(Locale::En.toggled(), Locale::Ar);
        assert_eq!(Locale::Ar.direction().as_attr(), "rtl");
    }
}
