//! Static site generation.
//!
//! Runs the page bootstrap against the content document, renders the shell
//! and writes the result to the output directory.
//!
//! ## Output Structure
//!
//! ```text
//! dist/
//! ├── index.html      # The landing page (or the apology page on load failure)
//! ├── style.css       # Base styles + brand colors from config.toml
//! ├── landing.js      # Carousel and navbar behaviour
//! └── images/...      # Everything under assets/ next to the content file
//! ```
//!
//! ## CSS and JavaScript
//!
//! Static assets are embedded at compile time:
//! - `static/style.css`: Base styles (colors appended from config)
//! - `static/landing.js`: Carousel rotation, navbar theme/visibility, mobile menu
//!
//! A failed content load is not a generation error: the apology page is
//! written like any other page and the outcome is returned in the report.

use crate::bootstrap::{self, Bootstrapped, Outcome};
use crate::config::{self, ConfigError, SiteConfig};
use crate::content::PageContent;
use crate::sections::{RenderContext, Section};
use crate::shell::{self, ShellState};
use crate::source::{DataSource, FileSource};
use maud::Markup;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;
use walkdir::WalkDir;

const CSS_STATIC: &str = include_str!("../static/style.css");
const JS_STATIC: &str = include_str!("../static/landing.js");

/// Directory next to the content document whose files are copied verbatim.
pub const ASSETS_DIR: &str = "assets";

/// Files the generator writes itself. Assets with these paths are skipped.
pub const GENERATED_FILES: [&str; 3] = ["index.html", "style.css", "landing.js"];

#[derive(Error, Debug)]
pub enum GenerateError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("config error: {0}")]
    Config(#[from] ConfigError),
    #[error("asset copy failed: {0}")]
    Walk(#[from] walkdir::Error),
}

/// What a build did.
#[derive(Debug)]
pub struct BuildReport {
    pub outcome: Outcome,
    /// Sections that rendered, in order.
    pub rendered: Vec<Section>,
    /// The decoded document, when it loaded.
    pub content: Option<PageContent>,
    /// Files written, relative to the output directory.
    pub files: Vec<PathBuf>,
    /// Number of files copied from the assets directory.
    pub assets: usize,
}

/// Resolve the site config: an explicit file if given, otherwise
/// `config.toml` next to the content document, over stock defaults.
pub fn resolve_site_config(
    content_path: &Path,
    config_path: Option<&Path>,
) -> Result<SiteConfig, ConfigError> {
    match config_path {
        Some(path) => config::load_config_file(path),
        None => config::load_config(content_dir(content_path)),
    }
}

/// Bootstrap the page and render the complete HTML document.
pub fn render_site(
    source: &dyn DataSource,
    config: &SiteConfig,
    ctx: &RenderContext,
) -> (Bootstrapped, Markup) {
    let result = bootstrap::bootstrap(source, ctx, config);
    let state = ShellState {
        config,
        nav: &result.nav,
        carousel: result.carousel.as_ref(),
    };
    let document = shell::render_document(&result.page, &state);
    (result, document)
}

/// Build the site for `content_path` into `output_dir`.
pub fn generate(
    content_path: &Path,
    output_dir: &Path,
    config: &SiteConfig,
    ctx: &RenderContext,
) -> Result<BuildReport, GenerateError> {
    let source = FileSource::new(content_path);
    let (result, document) = render_site(&source, config, ctx);

    fs::create_dir_all(output_dir)?;
    let mut files = Vec::new();

    let css = format!("{}\n\n{}\n", CSS_STATIC, config::generate_color_css(&config.colors));
    let [index, style, script] = GENERATED_FILES;
    for (name, body) in [
        (index, document.into_string()),
        (style, css),
        (script, JS_STATIC.to_string()),
    ] {
        fs::write(output_dir.join(name), body)?;
        tracing::info!(file = name, "generated");
        files.push(PathBuf::from(name));
    }

    let assets = content_dir(content_path).join(ASSETS_DIR);
    let copied = if assets.is_dir() {
        copy_assets(&assets, output_dir, &mut files)?
    } else {
        tracing::debug!(dir = %assets.display(), "no assets directory");
        0
    };

    tracing::info!(output = %output_dir.display(), files = files.len(), "site generated");

    Ok(BuildReport {
        outcome: result.outcome,
        rendered: result.rendered,
        content: result.content,
        files,
        assets: copied,
    })
}

fn content_dir(content_path: &Path) -> &Path {
    content_path
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or(Path::new("."))
}

/// Mirror `src` into `dst`, recording each copied file. Assets that would
/// overwrite a generated file are skipped with a warning.
fn copy_assets(src: &Path, dst: &Path, files: &mut Vec<PathBuf>) -> Result<usize, GenerateError> {
    let mut copied = 0;
    for entry in WalkDir::new(src).sort_by_file_name() {
        let entry = entry?;
        let Ok(rel) = entry.path().strip_prefix(src) else {
            continue;
        };
        let target = dst.join(rel);
        if entry.file_type().is_dir() {
            fs::create_dir_all(&target)?;
        } else if GENERATED_FILES.iter().any(|name| rel == Path::new(name)) {
            tracing::warn!(file = %rel.display(), "asset would overwrite a generated file; skipped");
        } else {
            fs::copy(entry.path(), &target)?;
            tracing::debug!(file = %rel.display(), "copied asset");
            files.push(rel.to_path_buf());
            copied += 1;
        }
    }
    Ok(copied)
}
