use std::io;
use std::path::{Path, PathBuf};

/// Failure of a site generation run. Every variant is fatal.
#[derive(Debug, thiserror::Error)]
pub enum SiteError {
    /// The post file name does not follow `YYYYMMDD_title`.
    #[error("invalid post file name '{name}': {reason}")]
    Format { name: String, reason: String },

    /// A filesystem operation failed.
    #[error("{context} '{}': {source}", .path.display())]
    Io {
        context: &'static str,
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// A template could not be parsed.
    #[error("error parsing {name} template: {reason}")]
    Template { name: &'static str, reason: String },

    /// The RSS document could not be serialized.
    #[error("error rendering RSS feed: {0}")]
    Feed(#[from] quick_xml::Error),
}

impl SiteError {
    pub fn format(name: &str, reason: impl Into<String>) -> SiteError {
        SiteError::Format {
            name: name.to_string(),
            reason: reason.into(),
        }
    }

    /// Adapter for `map_err` on filesystem calls.
    pub fn io(context: &'static str, path: &Path) -> impl FnOnce(io::Error) -> SiteError {
        let path = path.to_path_buf();
        move |source| SiteError::Io {
            context,
            path,
            source,
        }
    }
}

pub type Result<T> = std::result::Result<T, SiteError>;
