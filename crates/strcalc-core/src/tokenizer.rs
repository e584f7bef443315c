/// Splits `payload` on any of `delimiters`, matched as literal text.
///
/// The payload is scanned left to right. Where several delimiters match at the
/// same position the longest one is consumed, so `**` wins over `*` when both
/// are configured. Consecutive delimiters yield empty tokens, which are kept.
/// Empty delimiter strings are ignored.
///
/// ```
/// use strcalc_core::tokenizer::tokenize;
///
/// let delims = vec!["*".to_string(), "**".to_string()];
/// assert_eq!(tokenize("1**2*3", &delims), vec!["1", "2", "3"]);
/// assert_eq!(tokenize("1,,2", &[",".to_string()]), vec!["1", "", "2"]);
/// ```
pub fn tokenize<'a>(payload: &'a str, delimiters: &[String]) -> Vec<&'a str> {
    let ordered = ordered_delimiters(delimiters);

    let mut tokens = Vec::new();
    let mut start = 0;
    let mut pos = 0;

    while pos < payload.len() {
        let rest = &payload[pos..];
        if let Some(delim) = ordered.iter().find(|d| rest.starts_with(**d)) {
            tokens.push(&payload[start..pos]);
            pos += delim.len();
            start = pos;
        } else {
            // Advance by a whole char to stay on a UTF-8 boundary.
            pos += rest.chars().next().map_or(1, char::len_utf8);
        }
    }
    tokens.push(&payload[start..]);

    tokens
}

/// Non-empty, distinct delimiters, longest first so the scan prefers the
/// longest match.
fn ordered_delimiters(delimiters: &[String]) -> Vec<&str> {
    let mut ordered: Vec<&str> = delimiters
        .iter()
        .map(String::as_str)
        .filter(|d| !d.is_empty())
        .collect();
    ordered.sort_by(|a, b| b.len().cmp(&a.len()).then_with(|| a.cmp(b)));
    ordered.dedup();
    ordered
}
