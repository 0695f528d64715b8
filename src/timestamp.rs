use std::fs;
use std::path::Path;

use chrono::{DateTime, Utc};
use serde::Deserialize;

use crate::error::{Result, SiteError};
use crate::post_name::{parse_post_name, validate_title, PostMeta};

/// Resolves the title and publication time of a source file.
pub trait TimestampResolver {
    /// `base_name` is the file name without the source extension.
    fn resolve(&self, path: &Path, base_name: &str) -> Result<PostMeta>;
}

/// Date encoded in the file name, `YYYYMMDD_title`.
#[derive(Debug, Default, Clone, Copy)]
pub struct FileNameDate;

impl TimestampResolver for FileNameDate {
    fn resolve(&self, _path: &Path, base_name: &str) -> Result<PostMeta> {
        parse_post_name(base_name)
    }
}

/// Filesystem modification time. The whole base name is the title.
#[derive(Debug, Default, Clone, Copy)]
pub struct ModifiedTime;

impl TimestampResolver for ModifiedTime {
    fn resolve(&self, path: &Path, base_name: &str) -> Result<PostMeta> {
        validate_title(base_name, base_name)?;

        let modified = fs::metadata(path)
            .and_then(|m| m.modified())
            .map_err(SiteError::io("Reading modification time of", path))?;
        let modified: DateTime<Utc> = modified.into();

        Ok(PostMeta {
            title: base_name.to_string(),
            timestamp: modified.naive_utc(),
        })
    }
}

#[derive(Deserialize, Debug, Default, Copy, Clone, PartialEq)]
#[serde(rename_all = "snake_case")]
pub enum TimestampSource {
    #[default]
    FileName,
    ModifiedTime,
}

impl TimestampSource {
    pub fn resolver(self) -> Box<dyn TimestampResolver> {
        match self {
            TimestampSource::FileName => Box::new(FileNameDate),
            TimestampSource::ModifiedTime => Box::new(ModifiedTime),
        }
    }
}
