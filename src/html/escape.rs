//! Pure HTML escaping utilities.

use std::borrow::Cow;

use memchr::{memchr2, memchr3};

/// Escape the five HTML-reserved characters in text.
///
/// Replaces, in order:
/// - `&` with `&amp;`
/// - `<` with `&lt;`
/// - `>` with `&gt;`
/// - `"` with `&quot;`
/// - `'` with `&#039;`
///
/// The ampersand is handled first, so the `&` introduced by the other four
/// entities is never escaped twice. The result is safe to embed as HTML
/// text or attribute content; no surrounding quotes are added.
///
/// Returns the input unchanged (and unallocated) when it contains none of
/// the reserved characters.
///
/// Escaping is not idempotent: feeding escaped output back through
/// re-escapes each entity's leading `&` (`&amp;` becomes `&amp;amp;`).
///
/// # Examples
///
/// ```
/// use repl_blocks::escape_text;
///
/// assert_eq!(escape_text("x < 5 && y > 3"), "x &lt; 5 &amp;&amp; y &gt; 3");
/// assert_eq!(escape_text("it's"), "it&#039;s");
/// assert_eq!(escape_text("plain text"), "plain text");
/// ```
pub fn escape_text(text: &str) -> Cow<'_, str> {
    let Some(first) = find_reserved(text.as_bytes()) else {
        return Cow::Borrowed(text);
    };

    let mut result = String::with_capacity(text.len() + text.len() / 8 + 8);
    result.push_str(&text[..first]);

    for c in text[first..].chars() {
        match c {
            '&' => result.push_str("&amp;"),
            '<' => result.push_str("&lt;"),
            '>' => result.push_str("&gt;"),
            '"' => result.push_str("&quot;"),
            '\'' => result.push_str("&#039;"),
            _ => result.push(c),
        }
    }

    Cow::Owned(result)
}

/// Position of the first reserved byte, if any.
///
/// All five reserved characters are single ASCII bytes, so scanning the
/// UTF-8 byte stream directly is exact.
fn find_reserved(bytes: &[u8]) -> Option<usize> {
    match (
        memchr3(b'&', b'<', b'>', bytes),
        memchr2(b'"', b'\'', bytes),
    ) {
        (Some(a), Some(b)) => Some(a.min(b)),
        (a, b) => a.or(b),
    }
}
