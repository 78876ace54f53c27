//! Shared test utilities for the tutor-landing test suite.
//!
//! Provides the sample content document, an isolated copy of the fixture
//! site, and lookups into a rendered [`Page`].
//!
//! # Usage
//!
//! ```rust
//! use crate::test_helpers::*;
//!
//! let mut page = Page::new();
//! render_courses(&sample_content().courses, &mut page);
//!
//! let html = mount_html(&page, MountPoint::CoursesContainer);
//! assert!(html.contains("Most Popular"));
//! assert_eq!(count(&page, MountPoint::CoursesContainer, "<article"), 2);
//! ```

use std::path::Path;
use tempfile::TempDir;

use crate::content::PageContent;
use crate::page::{MountPoint, Page};

// =========================================================================
// Fixture setup
// =========================================================================

/// The sample content document from `fixtures/data.json`.
pub fn sample_json() -> String {
    include_str!("../fixtures/data.json").to_string()
}

/// The sample content document, decoded.
pub fn sample_content() -> PageContent {
    PageContent::from_json(&sample_json()).unwrap()
}

/// Copy `fixtures/` (content document plus assets) to a temp directory.
///
/// Tests get an isolated copy they can mutate without affecting other tests
/// or the source fixtures.
pub fn setup_fixtures() -> TempDir {
    let tmp = TempDir::new().unwrap();
    let fixtures = Path::new(env!("CARGO_MANIFEST_DIR")).join("fixtures");
    copy_dir_recursive(&fixtures, tmp.path()).unwrap();
    tmp
}

fn copy_dir_recursive(src: &Path, dst: &Path) -> std::io::Result<()> {
    for entry in std::fs::read_dir(src)? {
        let entry = entry?;
        let src_path = entry.path();
        let dst_path = dst.join(entry.file_name());

        if src_path.is_dir() {
            std::fs::create_dir_all(&dst_path)?;
            copy_dir_recursive(&src_path, &dst_path)?;
        } else {
            std::fs::copy(&src_path, &dst_path)?;
        }
    }
    Ok(())
}

// =========================================================================
// Page lookups
// =========================================================================

/// Children HTML of a container mount. Panics if nothing was written there.
pub fn mount_html(page: &Page, at: MountPoint) -> &str {
    page.children_html(at)
        .unwrap_or_else(|| panic!("no children written to #{}", at.id()))
}

/// Occurrences of `needle` in a container mount's HTML.
pub fn count(page: &Page, at: MountPoint, needle: &str) -> usize {
    mount_html(page, at).matches(needle).count()
}
