//! The page under construction.
//!
//! The page shell (navbar, hero, section frames, footer) is fixed markup with
//! named mount points. Renderers never touch the shell; they write into mount
//! points through [`Page`], which records every write in order. The shell is
//! then rendered in a single pass from the finished page (see [`crate::shell`]).

use maud::Markup;
use std::collections::HashMap;

/// Heading of the message that replaces the main region when content fails to load.
pub const APOLOGY_TITLE: &str = "Oops! Something went wrong";
/// Body of the load-failure message.
pub const APOLOGY_TEXT: &str =
    "Unable to load course data. Please refresh the page or contact support.";

/// Fixed element ids that section renderers write into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum MountPoint {
    HeroHeadline,
    HeroSubheadline,
    HeroCta,
    TutorBio,
    CarouselTrack,
    CarouselIndicators,
    TutorCertifications,
    CoursesContainer,
    TestimonialsContainer,
    ContactNote,
    ContactEmailCard,
    ContactWhatsappCard,
    ContactInstagramCard,
    ContactYoutubeCard,
    SocialLinks,
    FooterCopyright,
    FooterLinks,
}

impl MountPoint {
    pub const ALL: [MountPoint; 17] = [
        MountPoint::HeroHeadline,
        MountPoint::HeroSubheadline,
        MountPoint::HeroCta,
        MountPoint::TutorBio,
        MountPoint::CarouselTrack,
        MountPoint::CarouselIndicators,
        MountPoint::TutorCertifications,
        MountPoint::CoursesContainer,
        MountPoint::TestimonialsContainer,
        MountPoint::ContactNote,
        MountPoint::ContactEmailCard,
        MountPoint::ContactWhatsappCard,
        MountPoint::ContactInstagramCard,
        MountPoint::ContactYoutubeCard,
        MountPoint::SocialLinks,
        MountPoint::FooterCopyright,
        MountPoint::FooterLinks,
    ];

    /// The element id in the page shell.
    pub fn id(self) -> &'static str {
        match self {
            MountPoint::HeroHeadline => "hero-headline",
            MountPoint::HeroSubheadline => "hero-subheadline",
            MountPoint::HeroCta => "hero-cta",
            MountPoint::TutorBio => "tutor-bio",
            MountPoint::CarouselTrack => "carousel-track",
            MountPoint::CarouselIndicators => "carousel-indicators",
            MountPoint::TutorCertifications => "tutor-certifications",
            MountPoint::CoursesContainer => "courses-container",
            MountPoint::TestimonialsContainer => "testimonials-container",
            MountPoint::ContactNote => "contact-note",
            MountPoint::ContactEmailCard => "contact-email-card",
            MountPoint::ContactWhatsappCard => "contact-whatsapp-card",
            MountPoint::ContactInstagramCard => "contact-instagram-card",
            MountPoint::ContactYoutubeCard => "contact-youtube-card",
            MountPoint::SocialLinks => "social-links",
            MountPoint::FooterCopyright => "footer-copyright",
            MountPoint::FooterLinks => "footer-links",
        }
    }
}

/// What a renderer put into one mount point.
#[derive(Debug, Clone, Default)]
pub struct Mount {
    pub text: Option<String>,
    pub href: Option<String>,
    pub children: Option<Markup>,
}

/// Content of the `<main>` element.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MainRegion {
    /// The section layout with its mount points.
    Sections,
    /// The static load-failure message, replacing every section.
    Error,
}

#[derive(Debug, Clone)]
pub struct Page {
    mounts: HashMap<MountPoint, Mount>,
    writes: Vec<MountPoint>,
    main: MainRegion,
}

impl Default for Page {
    fn default() -> Self {
        Self::new()
    }
}

impl Page {
    pub fn new() -> Self {
        Self {
            mounts: HashMap::new(),
            writes: Vec::new(),
            main: MainRegion::Sections,
        }
    }

    /// Replace the text content of a mount point.
    pub fn set_text(&mut self, at: MountPoint, text: impl Into<String>) {
        self.write(at).text = Some(text.into());
    }

    /// Point a link mount at `href`, leaving its static label alone.
    pub fn set_href(&mut self, at: MountPoint, href: impl Into<String>) {
        self.write(at).href = Some(href.into());
    }

    /// Set both label and target of a link mount.
    pub fn set_link(&mut self, at: MountPoint, text: impl Into<String>, href: impl Into<String>) {
        let mount = self.write(at);
        mount.text = Some(text.into());
        mount.href = Some(href.into());
    }

    /// Replace the children of a container mount.
    pub fn set_children(&mut self, at: MountPoint, children: Markup) {
        self.write(at).children = Some(children);
    }

    /// Swap the whole main region for the load-failure message.
    pub fn show_error(&mut self) {
        self.main = MainRegion::Error;
    }

    pub fn main(&self) -> MainRegion {
        self.main
    }

    pub fn mount(&self, at: MountPoint) -> Option<&Mount> {
        self.mounts.get(&at)
    }

    pub fn text(&self, at: MountPoint) -> Option<&str> {
        self.mount(at).and_then(|m| m.text.as_deref())
    }

    pub fn href(&self, at: MountPoint) -> Option<&str> {
        self.mount(at).and_then(|m| m.href.as_deref())
    }

    /// Rendered children of a container mount, as HTML.
    pub fn children_html(&self, at: MountPoint) -> Option<&str> {
        self.mount(at)
            .and_then(|m| m.children.as_ref())
            .map(|c| c.0.as_str())
    }

    /// Every write, in the order it happened.
    pub fn writes(&self) -> &[MountPoint] {
        &self.writes
    }

    fn write(&mut self, at: MountPoint) -> &mut Mount {
        self.writes.push(at);
        self.mounts.entry(at).or_default()
    }
}
