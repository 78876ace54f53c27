//! # Tutor Landing
//!
//! A static generator for a language tutor's landing page. One JSON document
//! holds everything the page says (hero, tutor bio and photos, courses,
//! testimonials, contact and social links, footer); the generator renders it
//! into a single HTML page with a stylesheet and a small behaviour script.
//!
//! # Architecture: Fetch, Render, Emit
//!
//! ```text
//! 1. Fetch     data.json  →  PageContent   (one read, decode-or-fail)
//! 2. Render    content    →  Page          (section renderers write mount points)
//! 3. Emit      Page       →  dist/         (shell + style.css + landing.js + assets)
//! ```
//!
//! A load failure skips step 2 entirely: the main region becomes a fixed
//! apology and the page is still emitted. A renderer failure stops the
//! remaining renderers and keeps what was already written.
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`source`] | `DataSource` trait, file and in-memory sources, `load` |
//! | [`content`] | The decoded document (`PageContent`) |
//! | [`page`] | Mount points and the write-logged `Page` |
//! | [`sections`] | One renderer per page section, in fixed order |
//! | [`icons`] | Inline SVG glyphs |
//! | [`timers`] | Virtual-time timer queue standing in for the browser event loop |
//! | [`carousel`] | Photo carousel state machine |
//! | [`nav`] | Scroll-reactive navbar state machine |
//! | [`bootstrap`] | One fetch, then every renderer; installs nav and carousel |
//! | [`shell`] | The full HTML document around the mount points |
//! | [`generate`] | Writes the site to the output directory |
//! | [`config`] | `config.toml` loading, validation, merging, and CSS generation |
//! | [`output`] | CLI summaries for `build` and `check` |
//! | [`logging`] | `tracing` subscriber setup |
//!
//! # Design Decisions
//!
//! ## Behaviour as Owned State Machines
//!
//! The carousel and navbar are plain structs that own their state and take
//! the timer queue as `&mut TimerQueue` on every transition. There is no
//! global state, and the tests drive time forward explicitly. The generated
//! page starts in the state these machines start in (first indicator
//! active, light navbar), and `landing.js` receives the same timings through
//! `data-*` attributes.
//!
//! ## Render Once, Then Emit
//!
//! Renderers never build the page; they write `maud` fragments into named
//! mount points. The shell is rendered in a single pass afterwards, so a
//! mount nobody wrote keeps its static default.

pub mod bootstrap;
pub mod carousel;
pub mod config;
pub mod content;
pub mod generate;
pub mod icons;
pub mod logging;
pub mod nav;
pub mod output;
pub mod page;
pub mod sections;
pub mod shell;
pub mod source;
pub mod timers;

#[cfg(test)]
pub(crate) mod test_helpers;
