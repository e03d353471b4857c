//! Helpers for rendering bookmark rows.

use once_cell::sync::Lazy;
use regex::Regex;

static URL_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"https?://.+\..+|https?://localhost.*").expect("URL pattern is valid"));

/// Whether `uri` looks like something the OS can open.
///
/// The match is a substring search, so `see https://a.b` counts as well.
pub fn is_linkable(uri: &str) -> bool {
    URL_PATTERN.is_match(uri)
}

/// Quick-access label shown in front of a linkable row.
///
/// Rows 1 to 9 are numbered; a list of ten or more labels its last row `0`.
pub fn ordinal_label(index: usize, len: usize) -> String {
    if index < 9 {
        (index + 1).to_string()
    } else if index + 1 == len {
        "0".to_string()
    } else {
        String::new()
    }
}
