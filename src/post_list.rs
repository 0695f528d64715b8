use std::fs;
use std::path::PathBuf;

use spdlog::debug;

use crate::error::{Result, SiteError};

/// A source file accepted by the directory scan.
#[derive(Debug, Clone, PartialEq)]
pub struct SourceFile {
    pub path: PathBuf,
    /// File name without the source extension.
    pub base_name: String,
}

pub struct PostList {
    pub root_dir: PathBuf,
    /// Recognized extension, without the leading dot.
    pub extension: String,
}

impl PostList {
    /// Regular files in `root_dir` ending in `.<extension>`, ordered by file
    /// name. Everything else is skipped silently.
    pub fn retrieve_files(&self) -> Result<Vec<SourceFile>> {
        let read_error = SiteError::io("Reading input directory", &self.root_dir);
        let entries = fs::read_dir(&self.root_dir).map_err(read_error)?;

        let suffix = format!(".{}", self.extension);
        let mut posts = vec![];
        for entry in entries {
            let entry = entry.map_err(SiteError::io("Reading input directory", &self.root_dir))?;
            let file_type = entry.file_type().map_err(SiteError::io("Inspecting", &entry.path()))?;
            if !file_type.is_file() {
                continue;
            }

            let file_name = entry.file_name();
            let Some(file_name) = file_name.to_str() else {
                debug!("Skipping non UTF-8 file name {:?}", entry.path());
                continue;
            };

            if let Some(base_name) = file_name.strip_suffix(&suffix) {
                posts.push(SourceFile {
                    path: entry.path(),
                    base_name: base_name.to_string(),
                });
            }
        }

        posts.sort_by(|a, b| a.path.file_name().cmp(&b.path.file_name()));
        Ok(posts)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_matching_regular_files() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("20240201_b.txt"), "b").unwrap();
        fs::write(dir.path().join("20240101_a.txt"), "a").unwrap();
        fs::write(dir.path().join("20240101_notes.md"), "md").unwrap();
        fs::write(dir.path().join("README"), "readme").unwrap();
        fs::create_dir(dir.path().join("20240301_dir.txt")).unwrap();

        let post_list = PostList { root_dir: dir.path().to_path_buf(), extension: "txt".to_string() };
        let files = post_list.retrieve_files().unwrap();

        let names: Vec<&str> = files.iter().map(|f| f.base_name.as_str()).collect();
        assert_eq!(names, ["20240101_a", "20240201_b"]);
        assert_eq!(files[0].path, dir.path().join("20240101_a.txt"));
    }

    #[test]
    fn test_empty_dir() {
        let dir = tempfile::tempdir().unwrap();
        let post_list = PostList { root_dir: dir.path().to_path_buf(), extension: "txt".to_string() };
        assert!(post_list.retrieve_files().unwrap().is_empty());
    }

    #[test]
    fn test_missing_dir() {
        let dir = tempfile::tempdir().unwrap();
        let post_list = PostList { root_dir: dir.path().join("nope"), extension: "txt".to_string() };
        assert!(matches!(post_list.retrieve_files(), Err(SiteError::Io { .. })));
    }
}
