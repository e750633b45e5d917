//! HTML entity escaping for attribute values.

use std::borrow::Cow;

/// Replace the five HTML metacharacters with their entities.
///
/// Returns a borrow of the input when nothing needs replacing.
pub fn escape(input: &str) -> Cow<'_, str> {
    let needs_escaping = input
        .bytes()
        .any(|b| matches!(b, b'&' | b'<' | b'>' | b'"' | b'\''));
    if !needs_escaping {
        return Cow::Borrowed(input);
    }

    let mut out = String::with_capacity(input.len() + 8);
    for c in input.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    Cow::Owned(out)
}
