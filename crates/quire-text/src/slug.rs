#![forbid(unsafe_code)]

//! Slug normalization for filenames, DOM ids and class names.

/// Characters never allowed in a slug.
///
/// C0 controls, `"`, `#`, `$`, `%`, `&`, `'`, `*`, `+`, `,`, `/`, `:`,
/// `;`, `<`, `=`, `>`, `?`, `\`, `^`, `` ` ``, `|`, DEL and C1 controls.
#[must_use]
pub fn is_illegal_slug_char(ch: char) -> bool {
    matches!(
        ch,
        '\u{00}'..='\u{1F}'
            | '"'
            | '#'
            | '$'
            | '%'
            | '&'
            | '\''
            | '*'
            | '+'
            | ','
            | '/'
            | ':'
            | ';'
            | '<'
            | '='
            | '>'
            | '?'
            | '\\'
            | '^'
            | '`'
            | '|'
            | '\u{7F}'..='\u{9F}'
    )
}

/// Characters that separate words: underscore, whitespace, hyphen,
/// en dash and em dash. Runs of these collapse to one `-`.
#[inline]
fn is_separator(ch: char) -> bool {
    matches!(ch, '_' | '-' | '\u{2013}' | '\u{2014}') || ch.is_whitespace()
}

/// Normalize `input` into a slug.
///
/// Trims, lowercases, drops [illegal characters](is_illegal_slug_char),
/// then collapses each run of separators into a single `-`. Illegal
/// characters inside a run do not break it. The result is a fixed point:
/// `slugify(&slugify(s)) == slugify(s)`.
///
/// ```
/// use quire_text::slug::slugify;
///
/// assert_eq!(slugify("  Hello, World!! "), "hello-world!!");
/// assert_eq!(slugify("The_Dark \u{2014} Tower"), "the-dark-tower");
/// ```
#[must_use]
pub fn slugify(input: &str) -> String {
    let lowered = input.trim().to_lowercase();
    let mut out = String::with_capacity(lowered.len());
    let mut in_run = false;

    for ch in lowered.chars() {
        if is_illegal_slug_char(ch) {
            continue;
        }
        if is_separator(ch) {
            if !in_run {
                out.push('-');
                in_run = true;
            }
            continue;
        }
        out.push(ch);
        in_run = false;
    }

    out
}
