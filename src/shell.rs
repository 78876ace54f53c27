//! The page shell.
//!
//! Static structure around the mount points: document head, navbar, hero,
//! section frames and footer. [`render_document`] walks this structure once
//! and drops each mount point's content into place; mounts nobody wrote keep
//! their static defaults.
//!
//! Behaviour settings (carousel periods, navbar offsets) are handed to
//! `landing.js` as `data-*` attributes so the browser runs the same timings
//! the generator was configured with.

use crate::carousel::Carousel;
use crate::config::SiteConfig;
use crate::nav::{NavController, Visibility};
use crate::page::{APOLOGY_TEXT, APOLOGY_TITLE, MainRegion, MountPoint, Page};
use maud::{DOCTYPE, Markup, PreEscaped, html};

/// In-page navigation: (anchor, label).
pub const NAV_LINKS: [(&str, &str); 4] = [
    ("#about", "About"),
    ("#courses", "Courses"),
    ("#testimonials", "Reviews"),
    ("#contact", "Contact"),
];

const TAILWIND_CDN: &str = "https://cdn.tailwindcss.com";

/// Maps the brand color utilities (`bg-primary`, `text-accent-gold`, ...) onto
/// the CSS custom properties from `style.css`.
const TAILWIND_CONFIG: &str = r#"tailwind.config = {
  theme: {
    extend: {
      colors: {
        primary: 'var(--color-primary)',
        'accent-red': 'var(--color-accent-red)',
        'accent-gold': 'var(--color-accent-gold)',
        'accent-black': 'var(--color-accent-black)'
      }
    }
  }
};"#;

/// Everything the shell needs besides the page itself.
pub struct ShellState<'a> {
    pub config: &'a SiteConfig,
    pub nav: &'a NavController,
    pub carousel: Option<&'a Carousel>,
}

/// Render the complete HTML document.
pub fn render_document(page: &Page, state: &ShellState<'_>) -> Markup {
    let site = &state.config.site;
    let nav = &state.config.nav;
    html! {
        (DOCTYPE)
        html lang=(site.lang) {
            head {
                meta charset="UTF-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                meta name="description" content=(site.description);
                title { (site.title) }
                script src=(TAILWIND_CDN) {}
                script { (PreEscaped(TAILWIND_CONFIG)) }
                link rel="stylesheet" href="style.css";
            }
            body class="bg-gray-50 text-gray-900"
                data-edge-offset=(nav.edge_offset)
                data-hide-after=(nav.hide_after)
                data-debounce-ms=(nav.debounce_ms) {
                (navbar(state))
                main {
                    @match page.main() {
                        MainRegion::Sections => { (sections(page, state)) }
                        MainRegion::Error => { (apology()) }
                    }
                }
                (footer(page))
                script src="landing.js" {}
            }
        }
    }
}

fn navbar(state: &ShellState<'_>) -> Markup {
    let text = state.nav.theme().text_class();
    let mut bar_class = String::from("fixed top-0 inset-x-0 z-50 transition-transform duration-300");
    if state.nav.visibility() == Visibility::Hidden {
        bar_class.push_str(" nav-hidden");
    }
    let mut menu_class = String::from("md:hidden bg-white shadow-lg");
    if !state.nav.menu_open() {
        menu_class.push_str(" hidden");
    }
    html! {
        nav id="navbar" class=(bar_class) {
            div class="max-w-6xl mx-auto px-4 flex items-center justify-between h-16" {
                a href="#hero" class={ "nav-logo font-bold text-xl " (text) } { (state.config.site.title) }
                div class="hidden md:flex space-x-8" {
                    @for (href, label) in NAV_LINKS {
                        a href=(href) class=(nav_link_class(state.nav, href, text)) { (label) }
                    }
                }
                button id="mobile-menu-btn" type="button" class={ "nav-menu-btn md:hidden " (text) } aria-label="Open menu" {
                    "☰"
                }
            }
            div id="mobile-menu" class=(menu_class) {
                @for (href, label) in NAV_LINKS {
                    a href=(href) class="block px-4 py-3 text-gray-900" { (label) }
                }
            }
        }
    }
}

fn nav_link_class(nav: &NavController, href: &str, text: &str) -> String {
    if nav.is_link_active(href) {
        format!("nav-link nav-item {text} active")
    } else {
        format!("nav-link nav-item {text}")
    }
}

fn sections(page: &Page, state: &ShellState<'_>) -> Markup {
    let timing = state.config.carousel.timing();
    let offset = state.carousel.map_or(0, Carousel::track_offset_percent);
    html! {
        header #hero class="hero relative min-h-screen flex items-center text-white" {
            div class="max-w-4xl mx-auto px-4 text-center" {
                h1 #hero-headline class="text-4xl sm:text-6xl font-bold mb-6" { (text(page, MountPoint::HeroHeadline)) }
                p #hero-subheadline class="text-xl mb-8" { (text(page, MountPoint::HeroSubheadline)) }
                a #hero-cta href=(href(page, MountPoint::HeroCta, "#courses"))
                    class="inline-block bg-accent-red text-white font-bold py-3 px-8 rounded-lg" {
                    (text(page, MountPoint::HeroCta))
                }
            }
        }
        section #about class="py-20 bg-white" {
            div class="max-w-6xl mx-auto px-4 grid md:grid-cols-2 gap-12 items-center" {
                div #tutor-photo-carousel class="relative overflow-hidden rounded-xl shadow-xl"
                    data-initial-interval-ms=(timing.initial.as_millis())
                    data-resume-interval-ms=(timing.resume.as_millis()) {
                    div #carousel-track class="flex transition-transform duration-500"
                        style={ "transform: translateX(-" (offset) "%)" } {
                        (children(page, MountPoint::CarouselTrack))
                    }
                    div #carousel-indicators class="absolute bottom-4 inset-x-0 flex justify-center space-x-2" {
                        (children(page, MountPoint::CarouselIndicators))
                    }
                }
                div {
                    h2 class="text-3xl font-bold mb-6" { "About Me" }
                    p #tutor-bio class="text-lg text-gray-700 mb-6 leading-relaxed" { (text(page, MountPoint::TutorBio)) }
                    ul #tutor-certifications class="space-y-3" {
                        (children(page, MountPoint::TutorCertifications))
                    }
                }
            }
        }
        section #courses class="py-20 bg-gray-50" {
            div class="max-w-6xl mx-auto px-4" {
                h2 class="text-3xl font-bold text-center mb-12" { "Courses" }
                div #courses-container class="grid md:grid-cols-2 lg:grid-cols-3 gap-8" {
                    (children(page, MountPoint::CoursesContainer))
                }
            }
        }
        section #testimonials class="py-20 bg-white" {
            div class="max-w-6xl mx-auto px-4" {
                h2 class="text-3xl font-bold text-center mb-12" { "What Students Say" }
                div #testimonials-container class="grid md:grid-cols-2 lg:grid-cols-3 gap-8" {
                    (children(page, MountPoint::TestimonialsContainer))
                }
            }
        }
        section #contact class="py-20 bg-gray-50" {
            div class="max-w-4xl mx-auto px-4 text-center" {
                h2 class="text-3xl font-bold mb-4" { "Get in Touch" }
                p #contact-note class="text-gray-600 mb-10" { (text(page, MountPoint::ContactNote)) }
                div class="grid sm:grid-cols-2 gap-6" {
                    (contact_card(page, MountPoint::ContactEmailCard, "Email"))
                    (contact_card(page, MountPoint::ContactWhatsappCard, "WhatsApp"))
                    (contact_card(page, MountPoint::ContactInstagramCard, "Instagram"))
                    (contact_card(page, MountPoint::ContactYoutubeCard, "YouTube"))
                }
            }
        }
    }
}

fn contact_card(page: &Page, at: MountPoint, channel: &str) -> Markup {
    let label = page.text(at).unwrap_or(channel);
    html! {
        a id=(at.id()) href=(href(page, at, "#contact"))
            class="contact-card block bg-white rounded-lg shadow-md p-6" {
            h3 class="font-semibold text-gray-900" { (channel) }
            p class="text-sm text-gray-600" { (label) }
        }
    }
}

fn apology() -> Markup {
    html! {
        div class="max-w-4xl mx-auto px-4 py-20 text-center" {
            h2 class="text-3xl font-bold text-gray-900 mb-4" { (APOLOGY_TITLE) }
            p class="text-lg text-gray-600" { (APOLOGY_TEXT) }
        }
    }
}

fn footer(page: &Page) -> Markup {
    html! {
        footer class="bg-gray-900 text-gray-400 py-10" {
            div class="max-w-6xl mx-auto px-4 flex flex-col md:flex-row items-center justify-between gap-6" {
                div #social-links class="flex space-x-6" {
                    (children(page, MountPoint::SocialLinks))
                }
                p #footer-copyright class="text-sm" { (text(page, MountPoint::FooterCopyright)) }
                div #footer-links class="flex space-x-6" {
                    (children(page, MountPoint::FooterLinks))
                }
            }
        }
    }
}

fn text(page: &Page, at: MountPoint) -> &str {
    page.text(at).unwrap_or_default()
}

fn href<'a>(page: &'a Page, at: MountPoint, default: &'a str) -> &'a str {
    page.href(at).unwrap_or(default)
}

fn children(page: &Page, at: MountPoint) -> PreEscaped<&str> {
    PreEscaped(page.children_html(at).unwrap_or_default())
}
