use std::fmt::{self, Display, Formatter};
use std::fs;
use std::path::Path;

use chrono::NaiveDateTime;

use crate::error::{Result, SiteError};
use crate::post_name::PostMeta;
use crate::timestamp::TimestampResolver;

pub const OUTPUT_EXTENSION: &str = ".html";

#[derive(Debug, Clone, PartialEq)]
pub struct Post {
    pub title: String,
    pub timestamp: NaiveDateTime,
    /// Raw source text, untouched.
    pub content: String,
    pub output_file_name: String,
}

impl Display for Post {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "title={}, date={}, output={}\ncontent:\n{}",
               self.title,
               self.timestamp,
               self.output_file_name,
               self.content
        )
    }
}

impl Post {
    /// Reads `file_name` and attaches the metadata the resolver derives for it.
    pub fn load(file_name: &Path, base_name: &str, resolver: &dyn TimestampResolver) -> Result<Post> {
        let meta = resolver.resolve(file_name, base_name)?;
        let content = fs::read_to_string(file_name).map_err(SiteError::io("Reading", file_name))?;
        Ok(Self::from_meta(meta, content))
    }

    pub fn from_meta(meta: PostMeta, content: String) -> Post {
        let output_file_name = format!("{}{}", meta.title, OUTPUT_EXTENSION);
        Post {
            title: meta.title,
            timestamp: meta.timestamp,
            content,
            output_file_name,
        }
    }
}
