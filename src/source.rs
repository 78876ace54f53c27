//! Where the content document comes from.
//!
//! The page is built from exactly one fetch of one document. A source answers
//! that fetch with a status and a body, the way an HTTP request would; a
//! source that cannot answer at all returns an I/O error. [`load`] turns the
//! answer into a decoded [`PageContent`] or a single [`LoadError`].

use crate::content::PageContent;
use std::fs;
use std::io;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum LoadError {
    #[error("content request failed with status {0}")]
    Status(u16),
    #[error("could not read content: {0}")]
    Io(#[from] io::Error),
    #[error("content is not a valid page document: {0}")]
    Json(#[from] serde_json::Error),
}

/// Answer to a content fetch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fetched {
    pub status: u16,
    pub body: String,
}

impl Fetched {
    pub fn is_ok(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

pub trait DataSource {
    /// Human-readable location, for logs.
    fn location(&self) -> String;

    fn fetch(&self) -> io::Result<Fetched>;
}

/// A content document on the local filesystem. A missing file answers 404.
#[derive(Debug, Clone)]
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl DataSource for FileSource {
    fn location(&self) -> String {
        self.path.display().to_string()
    }

    fn fetch(&self) -> io::Result<Fetched> {
        match fs::read_to_string(&self.path) {
            Ok(body) => Ok(Fetched { status: 200, body }),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(Fetched {
                status: 404,
                body: String::new(),
            }),
            Err(e) => Err(e),
        }
    }
}

/// A fixed in-memory answer.
#[derive(Debug, Clone)]
pub struct MemorySource {
    pub fetched: Fetched,
}

impl MemorySource {
    pub fn ok(body: impl Into<String>) -> Self {
        Self::status(200, body)
    }

    pub fn status(status: u16, body: impl Into<String>) -> Self {
        Self {
            fetched: Fetched {
                status,
                body: body.into(),
            },
        }
    }
}

impl DataSource for MemorySource {
    fn location(&self) -> String {
        "memory".to_string()
    }

    fn fetch(&self) -> io::Result<Fetched> {
        Ok(self.fetched.clone())
    }
}

/// Fetch once and decode. Any non-2xx status, read error or malformed
/// document is a load failure.
pub fn load(source: &dyn DataSource) -> Result<PageContent, LoadError> {
    let fetched = source.fetch()?;
    if !fetched.is_ok() {
        return Err(LoadError::Status(fetched.status));
    }
    Ok(PageContent::from_json(&fetched.body)?)
}
