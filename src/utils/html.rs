//! HTML and XML escaping.

use std::borrow::Cow;

/// Characters that require escaping in text and attribute values.
const ESCAPE_CHARS: [char; 5] = ['<', '>', '&', '"', '\''];

#[inline]
fn escape_char(c: char) -> Option<&'static str> {
    match c {
        '<' => Some("&lt;"),
        '>' => Some("&gt;"),
        '&' => Some("&amp;"),
        '"' => Some("&quot;"),
        '\'' => Some("&#39;"),
        _ => None,
    }
}

/// Escape HTML special characters.
///
/// Borrows when nothing needs escaping. The output is safe in both text
/// content and quoted attribute values.
///
/// # Example
/// ```ignore
/// assert_eq!(escape("<script>"), "&lt;script&gt;");
/// assert_eq!(escape("hello"), "hello"); // No allocation
/// ```
pub fn escape(s: &str) -> Cow<'_, str> {
    if !s.contains(ESCAPE_CHARS) {
        return Cow::Borrowed(s);
    }

    let mut result = String::with_capacity(s.len() + 8);
    for c in s.chars() {
        match escape_char(c) {
            Some(entity) => result.push_str(entity),
            None => result.push(c),
        }
    }
    Cow::Owned(result)
}

/// Escape XML text (sitemap entries).
pub fn escape_xml(s: &str) -> Cow<'_, str> {
    if !s.contains(ESCAPE_CHARS) {
        return Cow::Borrowed(s);
    }
    Cow::Owned(
        s.chars()
            .fold(String::with_capacity(s.len() + 8), |mut out, c| {
                match c {
                    '\'' => out.push_str("&apos;"),
                    c => match escape_char(c) {
                        Some(entity) => out.push_str(entity),
                        None => out.push(c),
                    },
                }
                out
            }),
    )
}
