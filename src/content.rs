//! The landing page content document.
//!
//! One JSON file drives the whole page. It is decoded once and strictly: a
//! missing or mistyped field fails the load instead of surfacing later as a
//! half-rendered page. Unknown keys are ignored so authors can keep notes in
//! the file.
//!
//! ```json
//! {
//!   "hero":   { "headline": "...", "subheadline": "...", "ctaText": "...", "ctaLink": "#courses" },
//!   "tutor":  { "bio": "...", "photo": ["a.jpg", "b.jpg"], "name": "Anna", "certifications": ["..."] },
//!   "courses": [ { "level": "A1", "badge": "Popular", "features": ["..."], ... } ],
//!   "testimonials": [ { "rating": 5, "text": "...", ... } ],
//!   "contact": { "availabilityNote": "...", "email": "hello@example.com" },
//!   "social":  { "instagram": "https://...", "youtube": "https://..." },
//!   "footer":  { "copyrightText": "...", "additionalLinks": [ { "url": "...", "text": "..." } ] }
//! }
//! ```

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::fmt;

/// The full page document. Immutable once loaded.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PageContent {
    pub hero: Hero,
    pub tutor: Tutor,
    pub courses: Vec<Course>,
    pub testimonials: Vec<Testimonial>,
    pub contact: Contact,
    pub social: Social,
    pub footer: Footer,
}

impl PageContent {
    /// Decode a document from JSON text.
    pub fn from_json(text: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(text)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Hero {
    pub headline: String,
    pub subheadline: String,
    pub cta_text: String,
    pub cta_link: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tutor {
    pub bio: String,
    pub photo: Photos,
    pub name: String,
    pub certifications: Vec<String>,
}

/// Tutor photo field: authors may give one URL or a list of them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Photos {
    Single(String),
    Gallery(Vec<String>),
}

impl Photos {
    /// Photo URLs in display order. A single photo becomes a one-slide gallery.
    pub fn urls(&self) -> Vec<&str> {
        match self {
            Photos::Single(url) => vec![url.as_str()],
            Photos::Gallery(urls) => urls.iter().map(String::as_str).collect(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Course {
    pub level: String,
    pub tagline: String,
    pub price: Scalar,
    pub duration: Scalar,
    pub sessions_per_week: Scalar,
    pub session_length: Scalar,
    pub description: String,
    pub features: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub badge: Option<String>,
}

impl Course {
    /// The badge text, if the course carries a non-empty one.
    pub fn badge(&self) -> Option<&str> {
        self.badge.as_deref().filter(|b| !b.is_empty())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Testimonial {
    /// Number of stars to draw. Not clamped.
    pub rating: u32,
    pub text: String,
    pub name: String,
    pub course: String,
    pub location: String,
    pub date: Scalar,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Contact {
    pub availability_note: String,
    pub email: String,
}

/// Platform name → profile URL, in document order.
pub type Social = IndexMap<String, String>;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Footer {
    pub copyright_text: String,
    pub additional_links: Vec<FooterLink>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FooterLink {
    pub url: String,
    pub text: String,
}

/// A display field that authors write either as a string or as a number
/// (`"price": "€120"` and `"sessionsPerWeek": 2` are both common).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Scalar {
    Text(String),
    Number(serde_json::Number),
}

impl fmt::Display for Scalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Scalar::Text(s) => f.write_str(s),
            Scalar::Number(n) => write!(f, "{n}"),
        }
    }
}

impl From<&str> for Scalar {
    fn from(s: &str) -> Self {
        Scalar::Text(s.to_string())
    }
}

impl From<u64> for Scalar {
    fn from(n: u64) -> Self {
        Scalar::Number(n.into())
    }
}
