use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::{env, fs, io};

use serde::Deserialize;

use crate::timestamp::TimestampSource;

#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct Paths {
    pub input_dir: PathBuf,
    pub output_dir: PathBuf,
    /// Holds `post.html` and `index.html`. Embedded templates when absent.
    pub template_dir: Option<PathBuf>,
}

impl Default for Paths {
    fn default() -> Self {
        Paths {
            input_dir: PathBuf::from("./txt"),
            output_dir: PathBuf::from("./output"),
            template_dir: None,
        }
    }
}

#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct Defaults {
    pub source_extension: String,
    pub timestamp_source: TimestampSource,
}

impl Default for Defaults {
    fn default() -> Self {
        Defaults {
            source_extension: "txt".to_string(),
            timestamp_source: TimestampSource::FileName,
        }
    }
}

#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct RssFeed {
    pub title: String,
    /// Absolute URL prefix for item links.
    pub link: String,
    pub description: String,
    pub language: String,
    /// File name of the feed inside the output directory.
    pub feed_path: String,
}

impl Default for RssFeed {
    fn default() -> Self {
        RssFeed {
            title: "Plain Text Blog".to_string(),
            link: "https://example.com".to_string(),
            description: "Posts from Plain Text Blog".to_string(),
            language: "en-us".to_string(),
            feed_path: "rss.xml".to_string(),
        }
    }
}

#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct Log {
    pub level: LogLevel,
    pub log_to_console: bool,
    pub location: Option<PathBuf>,
}

#[derive(Deserialize, Debug, Copy, Clone, PartialEq)]
pub enum LogLevel {
    Critical = 0,
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

#[derive(Deserialize, Debug, Default, Clone, PartialEq)]
#[serde(default)]
pub struct Config {
    pub paths: Paths,
    pub defaults: Defaults,
    pub rss_feed: RssFeed,
    pub log: Option<Log>,
}

pub const CONFIG_SAMPLE: &str = r#"# For the file locations, If you want it to be relative to the executable directory
# use ${exe_dir}/location
[paths]
input_dir = "txt"
output_dir = "output"
# template_dir = "templates"

[defaults]
source_extension = "txt"
# file_name: posts are named YYYYMMDD_title.txt
# modified_time: posts are named title.txt and dated by their modification time
timestamp_source = "file_name"

[rss_feed]
title = "Plain Text Blog"
link = "https://example.com"
description = "Posts from Plain Text Blog"
language = "en-us"
feed_path = "rss.xml"

# [log]
# level = "Info"
# log_to_console = true
# location = "plainblog.log"
"#;

fn parse_path(path: PathBuf) -> PathBuf {
    if !path.starts_with("${exe_dir}") {
        return path;
    }

    let exe_dir = env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(Path::to_path_buf));
    match (exe_dir, path.strip_prefix("${exe_dir}")) {
        (Some(exe_dir), Ok(rest)) => exe_dir.join(rest),
        _ => path,
    }
}

pub fn parse_config(cfg_content: &str) -> io::Result<Config> {
    let mut cfg: Config = match toml::from_str::<Config>(cfg_content) {
        Ok(cfg) => cfg,
        Err(e) => return Err(io::Error::new(
            ErrorKind::InvalidData, format!("Error parsing configuration file: {}", e))),
    };

    cfg.paths = Paths {
        input_dir: parse_path(cfg.paths.input_dir),
        output_dir: parse_path(cfg.paths.output_dir),
        template_dir: cfg.paths.template_dir.map(parse_path),
    };

    Ok(cfg)
}

pub fn read_config(cfg_path: &Path) -> io::Result<Config> {
    let cfg_content = match fs::read_to_string(cfg_path) {
        Ok(content) => content,
        Err(e) => return Err(io::Error::new(e.kind(), format!("Error opening configuration file {}: {}", cfg_path.display(), e))),
    };

    parse_config(&cfg_content)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_config_uses_defaults() {
        let cfg = parse_config("").unwrap();
        assert_eq!(cfg, Config::default());
        assert_eq!(cfg.paths.input_dir, PathBuf::from("./txt"));
        assert_eq!(cfg.rss_feed.feed_path, "rss.xml");
        assert_eq!(cfg.defaults.timestamp_source, TimestampSource::FileName);
        assert!(cfg.log.is_none());
    }

    #[test]
    fn test_sample_config() {
        let cfg = parse_config(CONFIG_SAMPLE).unwrap();
        assert_eq!(cfg.paths.input_dir, PathBuf::from("txt"));
        assert_eq!(cfg.paths.output_dir, PathBuf::from("output"));
        assert_eq!(cfg.rss_feed, RssFeed::default());
        assert_eq!(cfg.defaults, Defaults::default());
    }

    #[test]
    fn test_partial_sections() {
        let toml_str = r##"
[rss_feed]
title = "Cafe"
link = "https://thiagocafe.com/"

[defaults]
timestamp_source = "modified_time"

[log]
level = "Debug"
log_to_console = false
"##;
        let cfg = parse_config(toml_str).unwrap();
        assert_eq!(cfg.rss_feed.title, "Cafe");
        assert_eq!(cfg.rss_feed.link, "https://thiagocafe.com/");
        assert_eq!(cfg.rss_feed.language, "en-us");
        assert_eq!(cfg.defaults.timestamp_source, TimestampSource::ModifiedTime);
        assert_eq!(cfg.defaults.source_extension, "txt");
        let log = cfg.log.unwrap();
        assert_eq!(log.level, LogLevel::Debug);
        assert!(log.location.is_none());
    }

    #[test]
    fn test_exe_dir_expansion() {
        let cfg = parse_config("[paths]\ninput_dir = \"${exe_dir}/posts\"").unwrap();
        let exe_dir = env::current_exe().unwrap().parent().unwrap().to_path_buf();
        assert_eq!(cfg.paths.input_dir, exe_dir.join("posts"));
    }

    #[test]
    fn test_invalid_config() {
        let err = parse_config("[paths]\ninput_dir = 3").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidData);
    }

    #[test]
    fn test_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = read_config(&dir.path().join("plainblog.toml")).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::NotFound);
    }
}
