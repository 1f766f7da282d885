#![forbid(unsafe_code)]

//! HTML entity escaping for the six markup-sensitive characters.
//!
//! [`escape_html`] writes exactly one spelling per character. [`unescape_html`]
//! accepts a wider, fixed set of spellings (named, decimal and hexadecimal
//! references, case-insensitive) because text arrives from many sources.
//! Any other entity is left untouched.
//!
//! | Char | Escaped as | Also unescaped from |
//! |------|------------|---------------------|
//! | `&`  | `&amp;`    | `&#38;` `&#x26;` |
//! | `<`  | `&lt;`     | `&#60;` `&#x3c;` |
//! | `>`  | `&gt;`     | `&#62;` `&#x3e;` |
//! | `"`  | `&quot;`   | `&#34;` `&#x22;` |
//! | `'`  | `&#39;`    | `&apos;` `&#x27;` |
//! | `` ` `` | `&#96;` | `&#x60;` |

use std::borrow::Cow;
use std::sync::OnceLock;

use regex_lite::{Captures, Regex};

fn escaped_entity_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(
            r"(?i)&(?:amp|#38|#x26|lt|#60|#x3c|gt|#62|#x3e|quot|#34|#x22|apos|#39|#x27|#96|#x60);",
        )
        .expect("entity regex")
    })
}

#[inline]
fn escape_char(ch: char) -> Option<&'static str> {
    match ch {
        '&' => Some("&amp;"),
        '<' => Some("&lt;"),
        '>' => Some("&gt;"),
        '"' => Some("&quot;"),
        '\'' => Some("&#39;"),
        '`' => Some("&#96;"),
        _ => None,
    }
}

fn unescape_entity(entity: &str) -> Option<&'static str> {
    let lowered = entity.to_ascii_lowercase();
    let decoded = match lowered.as_str() {
        "&amp;" | "&#38;" | "&#x26;" => "&",
        "&lt;" | "&#60;" | "&#x3c;" => "<",
        "&gt;" | "&#62;" | "&#x3e;" => ">",
        "&quot;" | "&#34;" | "&#x22;" => "\"",
        "&apos;" | "&#39;" | "&#x27;" => "'",
        "&#96;" | "&#x60;" => "`",
        _ => return None,
    };
    Some(decoded)
}

/// Replace `&`, `<`, `>`, `"`, `'` and `` ` `` with their entity forms.
///
/// Borrows the input when nothing needs escaping.
#[must_use]
pub fn escape_html(input: &str) -> Cow<'_, str> {
    let Some(first) = input.find(|ch: char| escape_char(ch).is_some()) else {
        return Cow::Borrowed(input);
    };

    let mut out = String::with_capacity(input.len() + 8);
    out.push_str(&input[..first]);
    for ch in input[first..].chars() {
        match escape_char(ch) {
            Some(entity) => out.push_str(entity),
            None => out.push(ch),
        }
    }
    Cow::Owned(out)
}

/// [`escape_html`] for an optional input; `None` becomes the empty string.
#[must_use]
pub fn escape_html_opt(input: Option<&str>) -> Cow<'_, str> {
    input.map_or(Cow::Borrowed(""), escape_html)
}

/// Decode the recognized entity spellings back to their characters.
///
/// Borrows the input when it contains no recognized entity.
#[must_use]
pub fn unescape_html(input: &str) -> Cow<'_, str> {
    if !input.contains('&') {
        return Cow::Borrowed(input);
    }
    escaped_entity_re().replace_all(input, |caps: &Captures<'_>| {
        let entity = &caps[0];
        unescape_entity(entity).unwrap_or(entity).to_string()
    })
}

/// [`unescape_html`] for an optional input; `None` becomes the empty string.
#[must_use]
pub fn unescape_html_opt(input: Option<&str>) -> Cow<'_, str> {
    input.map_or(Cow::Borrowed(""), unescape_html)
}
