#![forbid(unsafe_code)]

//! Left-to-right scanner for `{NAME}` placeholders.
//!
//! A placeholder is `{`, one or more identifier characters (ASCII letters,
//! digits, underscore), then `}`. Anything else involving braces is plain
//! text: an unterminated `{`, `{}`, `{ name }`, or `{a-b}` never fails the
//! scan, it is simply emitted as a literal.
//!
//! Concatenating the [`Segment::source`] of every segment reproduces the
//! input exactly.

use std::ops::Range;

/// Whether `byte` may appear in a placeholder name.
#[inline]
#[must_use]
pub const fn is_ident_byte(byte: u8) -> bool {
    byte.is_ascii_alphanumeric() || byte == b'_'
}

/// Whether `name` is a syntactically valid placeholder name.
#[must_use]
pub fn is_placeholder_name(name: &str) -> bool {
    !name.is_empty() && name.bytes().all(is_ident_byte)
}

/// A `{NAME}` occurrence inside a template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Placeholder<'a> {
    /// The identifier between the braces.
    pub name: &'a str,
    /// The full token including braces.
    pub source: &'a str,
    /// Byte range of `source` within the template.
    pub span: Range<usize>,
}

/// One piece of a scanned template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment<'a> {
    /// Text emitted unchanged.
    Literal(&'a str),
    /// A substitution point.
    Placeholder(Placeholder<'a>),
}

impl<'a> Segment<'a> {
    /// The exact template text this segment was scanned from.
    #[must_use]
    pub fn source(&self) -> &'a str {
        match self {
            Self::Literal(text) => text,
            Self::Placeholder(p) => p.source,
        }
    }
}

/// Scan `template` into literal and placeholder segments.
///
/// ```
/// use quire_l10n::placeholder::{scan, Segment};
///
/// let parts: Vec<_> = scan("Hi {name}{!").collect();
/// assert_eq!(parts.len(), 3);
/// assert!(matches!(&parts[1], Segment::Placeholder(p) if p.name == "name"));
/// assert_eq!(parts[2], Segment::Literal("{!"));
/// ```
#[must_use]
pub fn scan(template: &str) -> Segments<'_> {
    Segments {
        src: template,
        pos: 0,
    }
}

/// Names of every placeholder in `template`, in order, with repeats.
pub fn placeholder_names(template: &str) -> impl Iterator<Item = &str> {
    scan(template).filter_map(|segment| match segment {
        Segment::Placeholder(p) => Some(p.name),
        Segment::Literal(_) => None,
    })
}

/// Iterator returned by [`scan`].
#[derive(Debug, Clone)]
pub struct Segments<'a> {
    src: &'a str,
    pos: usize,
}

/// Index of the closing `}` when a placeholder opens at `open`.
fn placeholder_close(bytes: &[u8], open: usize) -> Option<usize> {
    let mut i = open + 1;
    while i < bytes.len() && is_ident_byte(bytes[i]) {
        i += 1;
    }
    (i > open + 1 && bytes.get(i) == Some(&b'}')).then_some(i)
}

impl<'a> Iterator for Segments<'a> {
    type Item = Segment<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let bytes = self.src.as_bytes();
        let start = self.pos;
        if start >= bytes.len() {
            return None;
        }

        let mut i = start;
        while i < bytes.len() {
            if bytes[i] == b'{'
                && let Some(close) = placeholder_close(bytes, i)
            {
                if i > start {
                    self.pos = i;
                    return Some(Segment::Literal(&self.src[start..i]));
                }
                self.pos = close + 1;
                return Some(Segment::Placeholder(Placeholder {
                    name: &self.src[i + 1..close],
                    source: &self.src[i..=close],
                    span: i..close + 1,
                }));
            }
            i += 1;
        }

        self.pos = bytes.len();
        Some(Segment::Literal(&self.src[start..]))
    }
}
