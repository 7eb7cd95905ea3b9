//! RFC 5545 TEXT value escaping.

/// Escape a text value for use in SUMMARY/DESCRIPTION properties.
///
/// Backslash, semicolon and comma are backslash-escaped and literal
/// newlines become `\n`. Colons need no escaping in TEXT values.
pub fn escape_text(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            ';' => out.push_str("\\;"),
            ',' => out.push_str("\\,"),
            '\n' => out.push_str("\\n"),
            '\r' => {}
            _ => out.push(c),
        }
    }
    out
}
