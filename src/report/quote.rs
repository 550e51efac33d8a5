//! C-style quoting for keyvalue output.
//!
//! Values in `key=value` lines are quoted the way git quotes paths and
//! config values: a string that contains no byte needing an escape passes
//! through untouched; otherwise the whole value is wrapped in double quotes
//! with the usual backslash escapes, and remaining control or non-ASCII
//! bytes become three-digit octal escapes. This keeps embedded delimiters
//! and control characters unambiguous for downstream parsers.

/// Quote `value` C-style if it needs it, or return it unchanged.
pub fn c_quote(value: &str) -> String {
    if !value.bytes().any(needs_escape) {
        return value.to_string();
    }

    let mut out = String::with_capacity(value.len() + 2);
    out.push('"');
    for byte in value.bytes() {
        match byte {
            0x07 => out.push_str("\\a"),
            0x08 => out.push_str("\\b"),
            b'\t' => out.push_str("\\t"),
            b'\n' => out.push_str("\\n"),
            0x0b => out.push_str("\\v"),
            0x0c => out.push_str("\\f"),
            b'\r' => out.push_str("\\r"),
            b'"' => out.push_str("\\\""),
            b'\\' => out.push_str("\\\\"),
            0x20..=0x7e => out.push(byte as char),
            _ => out.push_str(&format!("\\{byte:03o}")),
        }
    }
    out.push('"');
    out
}

fn needs_escape(byte: u8) -> bool {
    byte < 0x20 || byte >= 0x7f || byte == b'"' || byte == b'\\'
}
