//! Validation of naming affixes

use miette::SourceSpan;

/// Check that a prefix or suffix can be glued into a JavaScript identifier.
/// Returns None if valid, Some(reason) if invalid.
///
/// Empty affixes are valid.
pub fn validate_affix(value: &str, leading: bool) -> Option<&'static str> {
    if let Some(c) = value
        .chars()
        .find(|c| !(c.is_ascii_alphanumeric() || *c == '_' || *c == '$'))
    {
        return Some(if c.is_whitespace() {
            "value cannot contain whitespace"
        } else {
            "value contains a character that is not allowed in an identifier"
        });
    }

    if leading && value.starts_with(|c: char| c.is_ascii_digit()) {
        return Some("a prefix cannot start with a digit");
    }

    None
}

/// Find the span of a key's string value in the TOML source.
///
/// Looks for a `key = "value"` (or single-quoted) assignment and returns the
/// span of the text between the quotes.
pub(crate) fn find_value_span(src: &str, key: &str, value: &str) -> Option<SourceSpan> {
    let mut offset = 0;

    for line in src.split_inclusive('\n') {
        let trimmed = line.trim_start();
        let is_key = trimmed
            .strip_prefix(key)
            .is_some_and(|rest| rest.trim_start().starts_with('='));

        if is_key {
            for quote in ['"', '\''] {
                let literal = format!("{quote}{value}{quote}");
                if let Some(pos) = line.find(&literal) {
                    return Some(SourceSpan::from((offset + pos + 1, value.len())));
                }
            }
        }

        offset += line.len();
    }

    // Fallback: just find the value anywhere (less precise)
    if value.is_empty() {
        return None;
    }
    src.find(value).map(|pos| SourceSpan::from((pos, value.len())))
}
