use chrono::NaiveDateTime;

/// Longest feed summary, in characters, before the `...` marker.
pub const SUMMARY_MAX_CHARS: usize = 280;

const SUMMARY_MARKER: &str = "...";

pub fn format_date(date_time: &NaiveDateTime) -> String {
    date_time.format("%Y-%m-%d").to_string()
}

/// RFC 1123 with a numeric zone, e.g. `Mon, 15 Jan 2024 00:00:00 +0000`.
/// Timestamps are kept naive and always mean UTC.
pub fn format_rfc1123(date_time: &NaiveDateTime) -> String {
    date_time
        .and_utc()
        .format("%a, %d %b %Y %H:%M:%S %z")
        .to_string()
}

/// Collapses every whitespace run to a single space and cuts the result at
/// [`SUMMARY_MAX_CHARS`] characters. No word boundary is honored.
pub fn summarize(content: &str) -> String {
    let collapsed = content.split_whitespace().collect::<Vec<&str>>().join(" ");

    match collapsed.char_indices().nth(SUMMARY_MAX_CHARS) {
        Some((cut, _)) => format!("{}{}", &collapsed[..cut], SUMMARY_MARKER),
        None => collapsed,
    }
}

/// Joins a base URL and a file name with exactly one `/` between them.
pub fn join_url(base_url: &str, name: &str) -> String {
    format!("{}/{}", base_url.trim_end_matches('/'), name.trim_start_matches('/'))
}
