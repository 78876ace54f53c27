//! Page bootstrap: one fetch, then every renderer in a fixed order.
//!
//! ```text
//! fetch ──ok──▶ Hero → Tutor → Courses → Testimonials → Contact → Social → Footer
//!   │                              (first renderer error stops the sequence)
//!   └─fail─▶ main region ← apology message, no renderer runs
//! ```
//!
//! The navigation controller is installed whatever the outcome; the carousel
//! only exists once the tutor section has produced its slides.

use crate::carousel::Carousel;
use crate::config::SiteConfig;
use crate::content::PageContent;
use crate::nav::NavController;
use crate::page::Page;
use crate::sections::{self, RenderContext, RenderError, Section};
use crate::source::{self, DataSource, LoadError};
use crate::timers::TimerQueue;

/// How the bootstrap ended.
#[derive(Debug)]
pub enum Outcome {
    /// Every section rendered.
    Rendered,
    /// Nothing rendered; the main region shows the apology.
    LoadFailed(LoadError),
    /// Rendering stopped at `section`; earlier sections stay on the page.
    RenderFailed {
        section: Section,
        error: RenderError,
    },
}

impl Outcome {
    pub fn is_success(&self) -> bool {
        matches!(self, Outcome::Rendered)
    }
}

/// Everything a finished bootstrap leaves behind.
#[derive(Debug)]
pub struct Bootstrapped {
    pub page: Page,
    pub outcome: Outcome,
    /// Sections that completed, in render order.
    pub rendered: Vec<Section>,
    pub content: Option<PageContent>,
    pub nav: NavController,
    pub carousel: Option<Carousel>,
    /// The event loop's timers; the carousel's rotation lives here.
    pub timers: TimerQueue,
}

pub fn bootstrap(
    source: &dyn DataSource,
    ctx: &RenderContext,
    config: &SiteConfig,
) -> Bootstrapped {
    let mut page = Page::new();
    let mut timers = TimerQueue::new();
    let nav = NavController::new(config.nav.settings());
    let mut rendered = Vec::new();

    tracing::info!(source = %source.location(), "fetching page content");
    let content = match source::load(source) {
        Ok(content) => content,
        Err(error) => {
            tracing::error!(source = %source.location(), %error, "error loading page content");
            page.show_error();
            return Bootstrapped {
                page,
                outcome: Outcome::LoadFailed(error),
                rendered,
                content: None,
                nav,
                carousel: None,
                timers,
            };
        }
    };

    let mut slides = None;
    let outcome = match render_all(&content, ctx, &mut page, &mut rendered, &mut slides) {
        Ok(()) => Outcome::Rendered,
        Err((section, error)) => {
            tracing::error!(section = section.name(), %error, "rendering stopped");
            Outcome::RenderFailed { section, error }
        }
    };

    let carousel = slides.map(|n| Carousel::new(n, config.carousel.timing(), &mut timers));

    Bootstrapped {
        page,
        outcome,
        rendered,
        content: Some(content),
        nav,
        carousel,
        timers,
    }
}

/// Run every renderer in [`Section::ORDER`], recording completed sections
/// and the tutor slide count as they happen.
fn render_all(
    content: &PageContent,
    ctx: &RenderContext,
    page: &mut Page,
    rendered: &mut Vec<Section>,
    slides: &mut Option<usize>,
) -> Result<(), (Section, RenderError)> {
    for section in Section::ORDER {
        tracing::debug!(section = section.name(), "rendering section");
        match section {
            Section::Hero => sections::render_hero(&content.hero, page),
            Section::Tutor => {
                let count =
                    sections::render_tutor(&content.tutor, page).map_err(|e| (section, e))?;
                *slides = Some(count);
            }
            Section::Courses => sections::render_courses(&content.courses, page),
            Section::Testimonials => sections::render_testimonials(&content.testimonials, page),
            Section::Contact => sections::render_contact(&content.contact, &content.social, page),
            Section::Social => sections::render_social(&content.social, page),
            Section::Footer => sections::render_footer(&content.footer, ctx, page),
        }
        rendered.push(section);
    }
    Ok(())
}
