//! CLI output formatting for `build` and `check`.
//!
//! Output is **content-centric**: the primary lines list the page sections
//! that rendered, each with a count of what it holds, followed by the files
//! written. Failures say where the page stopped and what the visitor sees.
//!
//! # Output Format
//!
//! ## Build
//!
//! ```text
//! Sections
//! 001 Hero
//! 002 Tutor (3 photos)
//! 003 Courses (2 courses)
//! 004 Testimonials (2 reviews)
//! 005 Contact
//! 006 Social (3 links)
//! 007 Footer (2 links)
//!
//! Files
//!     index.html
//!     style.css
//!     landing.js
//!     robots.txt
//!
//! Built 7 sections, 4 files (1 asset)
//! ```
//!
//! ## Check
//!
//! ```text
//! Sections
//! 001 Hero
//! ...
//!
//! Behaviour
//!     Carousel: 3 slides, rotating
//!     Timers pending: 1
//!
//! Content OK
//! ```
//!
//! # Architecture
//!
//! Each command has a `format_*` function (returns `Vec<String>`) for
//! testability and a `print_*` wrapper that writes to stdout. Format
//! functions are pure: no I/O, no side effects.

use crate::bootstrap::{Bootstrapped, Outcome};
use crate::content::PageContent;
use crate::generate::BuildReport;
use crate::page::APOLOGY_TITLE;
use crate::sections::Section;

// ============================================================================
// Shared helpers
// ============================================================================

/// Format a 1-based positional index as 3-digit zero-padded.
fn format_index(pos: usize) -> String {
    format!("{:0>3}", pos)
}

/// Return indentation string: 4 spaces per depth level.
fn indent(depth: usize) -> String {
    "    ".repeat(depth)
}

fn plural(n: usize, one: &str, many: &str) -> String {
    if n == 1 {
        format!("{n} {one}")
    } else {
        format!("{n} {many}")
    }
}

/// What a rendered section holds, for the header line.
fn section_detail(section: Section, content: &PageContent) -> Option<String> {
    match section {
        Section::Hero | Section::Contact => None,
        Section::Tutor => Some(plural(content.tutor.photo.urls().len(), "photo", "photos")),
        Section::Courses => Some(plural(content.courses.len(), "course", "courses")),
        Section::Testimonials => Some(plural(content.testimonials.len(), "review", "reviews")),
        Section::Social => Some(plural(content.social.len(), "link", "links")),
        Section::Footer => Some(plural(content.footer.additional_links.len(), "link", "links")),
    }
}

/// Section list, one positional header per rendered section.
///
/// ```text
/// 001 Hero
/// 002 Tutor (3 photos)
/// ```
fn section_lines(rendered: &[Section], content: Option<&PageContent>) -> Vec<String> {
    let mut lines = vec!["Sections".to_string()];
    for (i, section) in rendered.iter().enumerate() {
        let detail = content.and_then(|c| section_detail(*section, c));
        lines.push(match detail {
            Some(d) => format!("{} {} ({})", format_index(i + 1), section.name(), d),
            None => format!("{} {}", format_index(i + 1), section.name()),
        });
    }
    lines
}

/// Failure lines for a non-successful outcome; empty on success.
fn outcome_lines(outcome: &Outcome) -> Vec<String> {
    match outcome {
        Outcome::Rendered => Vec::new(),
        Outcome::LoadFailed(error) => vec![
            format!("Content failed to load: {}", error),
            format!("{}Page shows: {}", indent(1), APOLOGY_TITLE),
        ],
        Outcome::RenderFailed { section, error } => vec![
            format!("Rendering stopped at {}: {}", section.name(), error),
            format!("{}Later sections keep their placeholders", indent(1)),
        ],
    }
}

// ============================================================================
// Build
// ============================================================================

pub fn format_build_output(report: &BuildReport) -> Vec<String> {
    let mut lines = Vec::new();

    if report.content.is_some() {
        lines.extend(section_lines(&report.rendered, report.content.as_ref()));
        lines.push(String::new());
    }

    let failure = outcome_lines(&report.outcome);
    if !failure.is_empty() {
        lines.extend(failure);
        lines.push(String::new());
    }

    lines.push("Files".to_string());
    for file in &report.files {
        lines.push(format!("{}{}", indent(1), file.display()));
    }
    lines.push(String::new());

    let asset_note = if report.assets > 0 {
        format!(" ({})", plural(report.assets, "asset", "assets"))
    } else {
        String::new()
    };
    lines.push(format!(
        "Built {}, {}{}",
        plural(report.rendered.len(), "section", "sections"),
        plural(report.files.len(), "file", "files"),
        asset_note,
    ));

    lines
}

/// Print build output to stdout.
pub fn print_build_output(report: &BuildReport) {
    for line in format_build_output(report) {
        println!("{}", line);
    }
}

// ============================================================================
// Check
// ============================================================================

pub fn format_check_output(result: &Bootstrapped) -> Vec<String> {
    let mut lines = Vec::new();

    if result.content.is_some() {
        lines.extend(section_lines(&result.rendered, result.content.as_ref()));
        lines.push(String::new());
    }

    lines.push("Behaviour".to_string());
    match &result.carousel {
        Some(carousel) => lines.push(format!(
            "{}Carousel: {}, {}",
            indent(1),
            plural(carousel.slide_count(), "slide", "slides"),
            if carousel.rotates() { "rotating" } else { "static" },
        )),
        None => lines.push(format!("{}Carousel: none", indent(1))),
    }
    lines.push(format!("{}Timers pending: {}", indent(1), result.timers.pending()));
    lines.push(String::new());

    let failure = outcome_lines(&result.outcome);
    if failure.is_empty() {
        lines.push("Content OK".to_string());
    } else {
        lines.extend(failure);
    }

    lines
}

/// Print check output to stdout.
pub fn print_check_output(result: &Bootstrapped) {
    for line in format_check_output(result) {
        println!("{}", line);
    }
}

// ============================================================================
// Tests
// ============================================================================
