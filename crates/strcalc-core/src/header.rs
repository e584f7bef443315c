//! Custom delimiter header parsing.
//!
//! An input may open with a header of the form `//<spec>\n`. The spec is
//! either a run of bracket groups (`[***][%]`), each contributing one
//! delimiter, or a bare string used as a single delimiter (`;`, `sep`).
//! Headers that are never terminated by a line feed are not honoured.

use once_cell::sync::Lazy;
use regex::Regex;

/// Marker that opens a delimiter header.
pub const HEADER_MARKER: &str = "//";

static BRACKET_GROUP: Lazy<Regex> = Lazy::new(|| Regex::new(r"\[(.*?)\]").unwrap());

/// Splits an optional delimiter header off `raw`.
///
/// Returns the effective delimiter set (base set plus any declared ones) and
/// the payload left to tokenize. Without a terminated header, `raw` is
/// returned untouched as the payload.
pub fn extract<'a>(raw: &'a str, base: &[String]) -> (Vec<String>, &'a str) {
    let mut delimiters = base.to_vec();

    if !raw.starts_with(HEADER_MARKER) {
        return (delimiters, raw);
    }

    let Some((header, payload)) = raw.split_once('\n') else {
        log::debug!("Unterminated delimiter header, treating input as payload");
        return (delimiters, raw);
    };

    let declared = parse_spec(&header[HEADER_MARKER.len()..]);
    log::debug!("Header declared delimiters {:?}", declared);
    delimiters.extend(declared);

    (delimiters, payload)
}

/// Parses the text between `//` and the terminating line feed.
pub fn parse_spec(spec: &str) -> Vec<String> {
    let mut groups = BRACKET_GROUP.captures_iter(spec).peekable();

    if groups.peek().is_none() {
        return if spec.is_empty() {
            Vec::new()
        } else {
            vec![spec.to_string()]
        };
    }

    groups
        .filter_map(|caps| caps.get(1))
        .map(|m| m.as_str())
        .filter(|inner| !inner.is_empty())
        .map(str::to_string)
        .collect()
}
