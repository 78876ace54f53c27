//! Section renderers.
//!
//! Each renderer maps one part of [`PageContent`](crate::content::PageContent)
//! onto its mount points. Renderers are independent: none reads another's
//! output, and each writes every mount point it owns exactly once.
//!
//! | Section      | Mount points                                                     |
//! |--------------|------------------------------------------------------------------|
//! | Hero         | hero-headline, hero-subheadline, hero-cta                        |
//! | Tutor        | tutor-bio, carousel-track, carousel-indicators, tutor-certifications |
//! | Courses      | courses-container                                                |
//! | Testimonials | testimonials-container                                           |
//! | Contact      | contact-note, contact-*-card                                     |
//! | Social       | social-links                                                     |
//! | Footer       | footer-copyright, footer-links                                   |

use crate::content::{Contact, Course, Footer, Hero, Scalar, Social, Testimonial, Tutor};
use crate::icons;
use crate::page::{MountPoint, Page};
use chrono::Datelike;
use maud::{Markup, Render, html};
use thiserror::Error;

/// Shown in place of a tutor photo that fails to load.
const PHOTO_FALLBACK: &str =
    "this.src='https://via.placeholder.com/400x500?text=Your+Photo'";

#[derive(Error, Debug, PartialEq, Eq)]
pub enum RenderError {
    #[error("tutor.photo is an empty list; the carousel needs at least one photo")]
    EmptyGallery,
}

/// Page sections in render order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    Hero,
    Tutor,
    Courses,
    Testimonials,
    Contact,
    Social,
    Footer,
}

impl Section {
    pub const ORDER: [Section; 7] = [
        Section::Hero,
        Section::Tutor,
        Section::Courses,
        Section::Testimonials,
        Section::Contact,
        Section::Social,
        Section::Footer,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Section::Hero => "Hero",
            Section::Tutor => "Tutor",
            Section::Courses => "Courses",
            Section::Testimonials => "Testimonials",
            Section::Contact => "Contact",
            Section::Social => "Social",
            Section::Footer => "Footer",
        }
    }
}

impl Render for Scalar {
    fn render_to(&self, buffer: &mut String) {
        match self {
            Scalar::Text(s) => s.render_to(buffer),
            Scalar::Number(n) => n.to_string().render_to(buffer),
        }
    }
}

/// Values that come from the moment of rendering rather than the document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderContext {
    /// Year printed in the copyright line.
    pub year: i32,
}

impl RenderContext {
    /// Context for a render happening now, in local time.
    pub fn now() -> Self {
        Self {
            year: chrono::Local::now().year(),
        }
    }
}

pub fn render_hero(hero: &Hero, page: &mut Page) {
    page.set_text(MountPoint::HeroHeadline, &hero.headline);
    page.set_text(MountPoint::HeroSubheadline, &hero.subheadline);
    page.set_link(MountPoint::HeroCta, &hero.cta_text, &hero.cta_link);
}

/// Renders bio, photo carousel and certifications. Returns the slide count.
///
/// Slide 0 is marked active, matching a freshly started carousel.
pub fn render_tutor(tutor: &Tutor, page: &mut Page) -> Result<usize, RenderError> {
    let photos = tutor.photo.urls();
    if photos.is_empty() {
        return Err(RenderError::EmptyGallery);
    }

    page.set_text(MountPoint::TutorBio, &tutor.bio);

    page.set_children(
        MountPoint::CarouselTrack,
        html! {
            @for (i, url) in photos.iter().enumerate() {
                div class="w-full flex-shrink-0" {
                    img src=(url)
                        alt={ (tutor.name) " - German Language Tutor - Photo " (i + 1) }
                        class="w-full h-auto object-cover"
                        onerror=(PHOTO_FALLBACK);
                }
            }
        },
    );

    page.set_children(
        MountPoint::CarouselIndicators,
        html! {
            @for i in 0..photos.len() {
                button class=(indicator_class(i == 0))
                    data-index=(i)
                    aria-label={ "Go to photo " (i + 1) } {}
            }
        },
    );

    page.set_children(
        MountPoint::TutorCertifications,
        html! {
            @for cert in &tutor.certifications {
                li class="flex items-start" {
                    (icons::certification_check())
                    span class="text-gray-700" { (cert) }
                }
            }
        },
    );

    Ok(photos.len())
}

/// Class list of a carousel indicator.
pub fn indicator_class(active: bool) -> &'static str {
    if active {
        "carousel-indicator h-2 rounded-full transition-all duration-300 bg-white w-6"
    } else {
        "carousel-indicator h-2 rounded-full transition-all duration-300 bg-white/50 w-2"
    }
}

pub fn render_courses(courses: &[Course], page: &mut Page) {
    page.set_children(
        MountPoint::CoursesContainer,
        html! {
            @for course in courses {
                (course_card(course))
            }
        },
    );
}

fn course_card(course: &Course) -> Markup {
    html! {
        article class="course-card relative bg-white rounded-xl shadow-lg hover:shadow-2xl transition-all duration-300 overflow-hidden border-2 border-gray-100 hover:border-primary" {
            @if let Some(badge) = course.badge() {
                div class="absolute top-4 right-4 z-10" {
                    span class="course-badge inline-block bg-accent-red text-white text-xs font-bold px-3 py-1 rounded-full shadow-md" {
                        (badge)
                    }
                }
            }
            div class="p-6 sm:p-8" {
                div class="mb-4" {
                    h3 class="text-2xl font-bold text-gray-900 mb-1" { (course.level) }
                    p class="text-sm text-primary font-semibold" { (course.tagline) }
                }
                div class="mb-6" {
                    div class="flex items-baseline" {
                        span class="text-4xl font-bold text-gray-900" { (course.price) }
                        span class="ml-2 text-gray-600" { "/ " (course.duration) }
                    }
                    p class="text-sm text-gray-600 mt-1" {
                        (course.sessions_per_week) "x per week • " (course.session_length)
                    }
                }
                p class="text-gray-700 mb-6 leading-relaxed" { (course.description) }
                div class="mb-6" {
                    h4 class="text-sm font-bold text-gray-900 mb-3 uppercase tracking-wide" { "What's Included:" }
                    ul class="space-y-2" {
                        @for feature in &course.features {
                            li class="flex items-start" {
                                (icons::feature_check())
                                span class="text-sm text-gray-700" { (feature) }
                            }
                        }
                    }
                }
                a href="#contact" class="block w-full text-center bg-primary text-white font-bold py-3 px-6 rounded-lg shadow-md" {
                    "Book Now"
                }
            }
            div class="accent-bar h-2" {}
        }
    }
}

pub fn render_testimonials(testimonials: &[Testimonial], page: &mut Page) {
    page.set_children(
        MountPoint::TestimonialsContainer,
        html! {
            @for testimonial in testimonials {
                (testimonial_card(testimonial))
            }
        },
    );
}

fn testimonial_card(testimonial: &Testimonial) -> Markup {
    html! {
        article class="testimonial bg-white rounded-lg shadow-md p-6" {
            div class="stars flex mb-4" {
                @for _ in 0..testimonial.rating {
                    (icons::star())
                }
            }
            p class="text-gray-700 mb-4 italic leading-relaxed" {
                "\u{201c}" (testimonial.text) "\u{201d}"
            }
            div class="border-t border-gray-200 pt-4" {
                p class="font-semibold text-gray-900" { (testimonial.name) }
                p class="text-sm text-gray-600" { (testimonial.course) }
                p class="text-xs text-gray-500 mt-1" {
                    (testimonial.location) " • " (testimonial.date)
                }
            }
        }
    }
}

/// Contact note, email card, and the messenger cards that have a matching
/// social profile. Cards without one keep their static target.
pub fn render_contact(contact: &Contact, social: &Social, page: &mut Page) {
    page.set_text(MountPoint::ContactNote, &contact.availability_note);
    page.set_link(
        MountPoint::ContactEmailCard,
        &contact.email,
        format!("mailto:{}", contact.email),
    );

    let cards = [
        ("whatsapp", MountPoint::ContactWhatsappCard),
        ("instagram", MountPoint::ContactInstagramCard),
        ("youtube", MountPoint::ContactYoutubeCard),
    ];
    for (platform, card) in cards {
        if let Some(url) = social.get(platform) {
            page.set_href(card, url);
        }
    }
}

/// One link per profile, in document order. Platforms without a glyph still
/// get their link, just with no icon inside.
pub fn render_social(social: &Social, page: &mut Page) {
    page.set_children(
        MountPoint::SocialLinks,
        html! {
            @for (platform, url) in social {
                a href=(url)
                    target="_blank"
                    rel="noopener noreferrer"
                    class="social-link text-gray-400 hover:text-white transition"
                    aria-label=(platform) {
                    @if let Some(icon) = icons::social(platform) {
                        (icon)
                    }
                }
            }
        },
    );
}

pub fn render_footer(footer: &Footer, ctx: &RenderContext, page: &mut Page) {
    page.set_text(
        MountPoint::FooterCopyright,
        format!("© {} {}", ctx.year, footer.copyright_text),
    );
    page.set_children(
        MountPoint::FooterLinks,
        html! {
            @for link in &footer.additional_links {
                a href=(link.url) class="text-gray-400 hover:text-white transition text-sm" { (link.text) }
            }
        },
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::{FooterLink, Photos};
    use crate::test_helpers::*;

    #[test]
    fn hero_fills_headline_and_cta() {
        let content = sample_content();
        let mut page = Page::new();
        render_hero(&content.hero, &mut page);
        assert_eq!(
            page.text(MountPoint::HeroHeadline),
            Some("Learn German with Confidence")
        );
        assert_eq!(page.text(MountPoint::HeroCta), Some("View Courses"));
        assert_eq!(page.href(MountPoint::HeroCta), Some("#courses"));
    }

    #[test]
    fn single_photo_gives_one_slide_and_indicator() {
        let mut tutor = sample_content().tutor;
        tutor.photo = Photos::Single("me.jpg".into());
        let mut page = Page::new();
        assert_eq!(render_tutor(&tutor, &mut page), Ok(1));
        assert_eq!(count(&page, MountPoint::CarouselTrack, "<img"), 1);
        assert_eq!(count(&page, MountPoint::CarouselIndicators, "<button"), 1);
    }

    #[test]
    fn gallery_gives_n_slides_and_indicators() {
        let mut tutor = sample_content().tutor;
        tutor.photo = Photos::Gallery((1..=5).map(|i| format!("p{i}.jpg")).collect());
        let mut page = Page::new();
        assert_eq!(render_tutor(&tutor, &mut page), Ok(5));
        assert_eq!(count(&page, MountPoint::CarouselTrack, "<img"), 5);
        assert_eq!(count(&page, MountPoint::CarouselIndicators, "<button"), 5);
        assert_eq!(count(&page, MountPoint::CarouselIndicators, "bg-white w-6"), 1);
    }

    #[test]
    fn empty_gallery_is_a_render_error() {
        let mut tutor = sample_content().tutor;
        tutor.photo = Photos::Gallery(vec![]);
        let mut page = Page::new();
        assert_eq!(
            render_tutor(&tutor, &mut page),
            Err(RenderError::EmptyGallery)
        );
        assert!(page.writes().is_empty());
    }

    #[test]
    fn slides_carry_name_and_position() {
        let content = sample_content();
        let mut page = Page::new();
        render_tutor(&content.tutor, &mut page).unwrap();
        let track = mount_html(&page, MountPoint::CarouselTrack);
        assert!(track.contains(r#"alt="Anna Weber - German Language Tutor - Photo 2""#));
        assert!(track.contains(r#"src="images/anna-3.jpg""#));
        let indicators = mount_html(&page, MountPoint::CarouselIndicators);
        assert!(indicators.contains(r#"data-index="2""#));
        assert!(indicators.contains(r#"aria-label="Go to photo 3""#));
    }

    #[test]
    fn certifications_keep_order() {
        let content = sample_content();
        let mut page = Page::new();
        render_tutor(&content.tutor, &mut page).unwrap();
        let html = mount_html(&page, MountPoint::TutorCertifications);
        assert_eq!(html.matches("<li").count(), 3);
        let goethe = html.find("Goethe-Institut").unwrap();
        let telc = html.find("telc trainer").unwrap();
        assert!(goethe < telc);
    }

    #[test]
    fn badge_only_when_present() {
        let content = sample_content();
        let mut page = Page::new();
        render_courses(&content.courses, &mut page);
        let html = mount_html(&page, MountPoint::CoursesContainer);
        assert_eq!(html.matches("<article").count(), 2);
        assert_eq!(html.matches("course-badge").count(), 1);
        assert!(html.contains("Most Popular"));
    }

    #[test]
    fn course_details_are_rendered() {
        let content = sample_content();
        let mut page = Page::new();
        render_courses(&content.courses, &mut page);
        let html = mount_html(&page, MountPoint::CoursesContainer);
        assert!(html.contains("€180"));
        assert!(html.contains("/ month"));
        assert!(html.contains("2x per week • 60 min"));
        assert!(html.contains("What&#39;s Included:") || html.contains("What's Included:"));
        assert!(html.contains(r##"href="#contact""##));
    }

    #[test]
    fn course_features_keep_order() {
        let content = sample_content();
        let mut page = Page::new();
        render_courses(&content.courses, &mut page);
        let html = mount_html(&page, MountPoint::CoursesContainer);
        let book = html.find("Course book included").unwrap();
        let cert = html.find("Certificate of completion").unwrap();
        assert!(book < cert);
    }

    #[test]
    fn stars_match_rating_exactly() {
        for rating in [0, 1, 5, 7] {
            let mut testimonial = sample_content().testimonials[0].clone();
            testimonial.rating = rating;
            let mut page = Page::new();
            render_testimonials(&[testimonial], &mut page);
            let html = mount_html(&page, MountPoint::TestimonialsContainer);
            assert_eq!(html.matches("<svg").count(), rating as usize, "rating {rating}");
        }
    }

    #[test]
    fn testimonial_byline() {
        let content = sample_content();
        let mut page = Page::new();
        render_testimonials(&content.testimonials, &mut page);
        let html = mount_html(&page, MountPoint::TestimonialsContainer);
        assert!(html.contains("Vienna • March 2025"));
        assert!(html.contains("Lukas P."));
    }

    #[test]
    fn contact_cards_follow_social() {
        let content = sample_content();
        let mut page = Page::new();
        render_contact(&content.contact, &content.social, &mut page);
        assert_eq!(
            page.href(MountPoint::ContactEmailCard),
            Some("mailto:hallo@annaweber.de")
        );
        assert_eq!(
            page.text(MountPoint::ContactEmailCard),
            Some("hallo@annaweber.de")
        );
        assert_eq!(
            page.href(MountPoint::ContactWhatsappCard),
            Some("https://wa.me/491234567890")
        );
    }

    #[test]
    fn contact_card_without_profile_is_untouched() {
        let mut content = sample_content();
        content.social.shift_remove("youtube");
        let mut page = Page::new();
        render_contact(&content.contact, &content.social, &mut page);
        assert!(page.mount(MountPoint::ContactYoutubeCard).is_none());
        assert!(!page.writes().contains(&MountPoint::ContactYoutubeCard));
    }

    #[test]
    fn social_known_and_unknown_platforms() {
        let mut social = Social::new();
        social.insert("instagram".into(), "u1".into());
        social.insert("made_up".into(), "u2".into());
        let mut page = Page::new();
        render_social(&social, &mut page);
        let html = mount_html(&page, MountPoint::SocialLinks);

        assert_eq!(html.matches("<a ").count(), 2);
        assert_eq!(html.matches("<svg").count(), 1);
        let instagram = html.find(r#"aria-label="instagram""#).unwrap();
        let made_up = html.find(r#"aria-label="made_up""#).unwrap();
        let svg = html.find("<svg").unwrap();
        assert!(instagram < svg && svg < made_up);
        assert!(html.ends_with(r#"aria-label="made_up"></a>"#));
    }

    #[test]
    fn social_links_follow_document_order() {
        let content = sample_content();
        let mut page = Page::new();
        render_social(&content.social, &mut page);
        let html = mount_html(&page, MountPoint::SocialLinks);
        let instagram = html.find("instagram.com").unwrap();
        let youtube = html.find("youtube.com").unwrap();
        let whatsapp = html.find("wa.me").unwrap();
        assert!(instagram < youtube && youtube < whatsapp);
    }

    #[test]
    fn footer_copyright_uses_context_year() {
        let content = sample_content();
        let mut page = Page::new();
        render_footer(&content.footer, &RenderContext { year: 2031 }, &mut page);
        assert_eq!(
            page.text(MountPoint::FooterCopyright),
            Some("© 2031 Anna Weber German Lessons. All rights reserved.")
        );
    }

    #[test]
    fn footer_links_in_order() {
        let footer = Footer {
            copyright_text: "x".into(),
            additional_links: vec![
                FooterLink {
                    url: "b.html".into(),
                    text: "B".into(),
                },
                FooterLink {
                    url: "a.html".into(),
                    text: "A".into(),
                },
            ],
        };
        let mut page = Page::new();
        render_footer(&footer, &RenderContext { year: 2025 }, &mut page);
        assert_eq!(
            mount_html(&page, MountPoint::FooterLinks),
            r#"<a href="b.html" class="text-gray-400 hover:text-white transition text-sm">B</a><a href="a.html" class="text-gray-400 hover:text-white transition text-sm">A</a>"#
        );
    }

    #[test]
    fn content_is_escaped() {
        let mut content = sample_content();
        content.courses[0].description = "<script>alert('x')</script>".into();
        let mut page = Page::new();
        render_courses(&content.courses, &mut page);
        let html = mount_html(&page, MountPoint::CoursesContainer);
        assert!(!html.contains("<script>"));
        assert!(html.contains("&lt;script&gt;"));
    }

    #[test]
    fn section_order_is_fixed() {
        let names: Vec<&str> = Section::ORDER.iter().map(|s| s.name()).collect();
        assert_eq!(
            names,
            vec![
                "Hero",
                "Tutor",
                "Courses",
                "Testimonials",
                "Contact",
                "Social",
                "Footer"
            ]
        );
    }
}
