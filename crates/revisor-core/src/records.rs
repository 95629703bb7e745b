/// Utilities for records output format
/// Escape double quotes in a string for records format.
/// Replaces `"` with `\"` to allow safe embedding in quoted fields.
pub fn escape_quotes(s: &str) -> String {
    s.replace('\"', r#"\""#)
}

/// Quote a free-text field for a records line
pub fn quoted(s: &str) -> String {
    format!("\"{}\"", escape_quotes(s))
}
