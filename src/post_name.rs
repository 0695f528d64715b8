use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use lazy_static::lazy_static;
use regex::Regex;

use crate::error::{Result, SiteError};

/// Metadata recovered from a source file before its content is read.
#[derive(Debug, Clone, PartialEq)]
pub struct PostMeta {
    pub title: String,
    pub timestamp: NaiveDateTime,
}

/// Parses a post base name, extension already stripped, shaped as
/// `YYYYMMDD_title`. Only the first `_` separates the date; the rest of the
/// name is the title, verbatim.
///
/// e.g. `20240216_creating_a_daemon` -> (`creating_a_daemon`, 2024-02-16 00:00:00)
pub fn parse_post_name(base_name: &str) -> Result<PostMeta> {
    lazy_static! {
        static ref DATE_REGEX: Regex = Regex::new(r"^\d{8}$").unwrap();
    }

    let Some((date, title)) = base_name.split_once('_') else {
        return Err(SiteError::format(base_name, "expected <YYYYMMDD>_<title>"));
    };

    if !DATE_REGEX.is_match(date) {
        return Err(SiteError::format(base_name, format!("'{}' is not an 8-digit date", date)));
    }

    let date = NaiveDate::parse_from_str(date, "%Y%m%d")
        .map_err(|e| SiteError::format(base_name, format!("unable to parse date {}: {}", date, e)))?;

    validate_title(base_name, title)?;

    Ok(PostMeta {
        title: title.to_string(),
        timestamp: date.and_time(NaiveTime::MIN),
    })
}

/// Titles double as output file stems, so anything that would escape the
/// output directory or produce an empty stem is refused.
pub fn validate_title(base_name: &str, title: &str) -> Result<()> {
    if title.is_empty() {
        return Err(SiteError::format(base_name, "title is empty"));
    }
    if title == "." || title == ".." || title.contains(['/', '\\']) {
        return Err(SiteError::format(base_name, format!("title '{}' is not usable as a file name", title)));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use chrono::{NaiveDate, NaiveTime};

    use super::*;

    fn midnight(y: i32, m: u32, d: u32) -> NaiveDateTime {
        NaiveDateTime::new(NaiveDate::from_ymd_opt(y, m, d).unwrap(), NaiveTime::from_hms_opt(0, 0, 0).unwrap())
    }

    #[test]
    fn test_parse_post_name() {
        let meta = parse_post_name("20240115_HelloWorld").unwrap();
        assert_eq!(meta, PostMeta { title: "HelloWorld".to_string(), timestamp: midnight(2024, 1, 15) });
    }

    #[test]
    fn test_title_keeps_further_underscores() {
        let meta = parse_post_name("20220402_what_i_learned_ ").unwrap();
        assert_eq!(meta.title, "what_i_learned_ ");
        assert_eq!(meta.timestamp, midnight(2022, 4, 2));
    }

    #[test]
    fn test_missing_separator() {
        let err = parse_post_name("20240115HelloWorld").unwrap_err();
        assert!(matches!(err, SiteError::Format { .. }));
    }

    #[test]
    fn test_invalid_dates() {
        for name in ["2024011_x", "202401150_x", "2024Jan5_x", "20241301_x", "20240230_x", "_x", "abcdefgh_x"] {
            let res = parse_post_name(name);
            assert!(matches!(res, Err(SiteError::Format { .. })), "{} should be rejected", name);
        }
    }

    #[test]
    fn test_unusable_titles() {
        for name in ["20240115_", "20240115_.", "20240115_..", "20240115_a\\b", "20240115_a/b", "20240115_../x"] {
            let res = parse_post_name(name);
            assert!(matches!(res, Err(SiteError::Format { .. })), "{} should be rejected", name);
        }
    }

    #[test]
    fn test_leap_day() {
        let meta = parse_post_name("20240229_leap").unwrap();
        assert_eq!(meta.timestamp, midnight(2024, 2, 29));
    }
}
