#![forbid(unsafe_code)]

//! Surrogate-aware character access over UTF-16 code units.
//!
//! Hosts that expose text as UTF-16 (browsers, JS engines, Windows APIs)
//! index by code unit, so a single user-perceived character outside the
//! BMP occupies two positions. Raw indexing can land on either half of a
//! surrogate pair; [`char_and_position_at`] widens such a position to the
//! whole pair so cursor movement and substring extraction never split it.
//!
//! Input is `&[u16]` rather than `&str` because host text may carry lone
//! surrogates, which a Rust string cannot represent. Lone surrogates are
//! passed through as single-unit spans.
//!
//! # Example
//!
//! ```
//! use quire_text::utf16::{char_and_position_at_str, CodepointSpan};
//!
//! let span = char_and_position_at_str("a\u{1F600}b", 2);
//! assert_eq!((span.start(), span.end()), (1, 2));
//! assert_eq!(span.to_char(), Some('\u{1F600}'));
//!
//! assert!(char_and_position_at_str("abc", 99).is_out_of_bounds());
//! ```

use smallvec::SmallVec;

const HIGH_SURROGATE_MIN: u16 = 0xD800;
const HIGH_SURROGATE_MAX: u16 = 0xDBFF;
const LOW_SURROGATE_MIN: u16 = 0xDC00;
const LOW_SURROGATE_MAX: u16 = 0xDFFF;

#[inline]
fn is_high_surrogate(unit: u16) -> bool {
    (HIGH_SURROGATE_MIN..=HIGH_SURROGATE_MAX).contains(&unit)
}

#[inline]
fn is_low_surrogate(unit: u16) -> bool {
    (LOW_SURROGATE_MIN..=LOW_SURROGATE_MAX).contains(&unit)
}

/// The character found at a code-unit position and the positions it spans.
///
/// `start` and `end` are inclusive code-unit indices: equal for a single
/// unit, one apart for a surrogate pair, and both `-1` for the
/// out-of-bounds sentinel.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CodepointSpan {
    units: SmallVec<[u16; 2]>,
    start: isize,
    end: isize,
}

impl CodepointSpan {
    /// The sentinel returned for positions with no code unit.
    #[must_use]
    pub fn out_of_bounds() -> Self {
        Self {
            units: SmallVec::new(),
            start: -1,
            end: -1,
        }
    }

    fn single(unit: u16, pos: usize) -> Self {
        let pos = pos as isize;
        Self {
            units: SmallVec::from_buf_and_len([unit, 0], 1),
            start: pos,
            end: pos,
        }
    }

    fn pair(high: u16, low: u16, start: usize) -> Self {
        let start = start as isize;
        Self {
            units: SmallVec::from_buf([high, low]),
            start,
            end: start + 1,
        }
    }

    /// Code units making up the character (empty for the sentinel).
    #[must_use]
    pub fn units(&self) -> &[u16] {
        &self.units
    }

    /// First code-unit index of the character, or `-1`.
    #[must_use]
    pub const fn start(&self) -> isize {
        self.start
    }

    /// Last code-unit index of the character (inclusive), or `-1`.
    #[must_use]
    pub const fn end(&self) -> isize {
        self.end
    }

    /// Number of code units covered: 0, 1 or 2.
    #[must_use]
    pub fn len_units(&self) -> usize {
        self.units.len()
    }

    /// Whether this is the out-of-bounds sentinel.
    #[must_use]
    pub fn is_out_of_bounds(&self) -> bool {
        self.units.is_empty()
    }

    /// Decode to a scalar value. `None` for the sentinel and lone surrogates.
    #[must_use]
    pub fn to_char(&self) -> Option<char> {
        char::decode_utf16(self.units.iter().copied())
            .next()
            .and_then(Result::ok)
    }

    /// Decode to a string, replacing a lone surrogate with U+FFFD.
    #[must_use]
    pub fn to_string_lossy(&self) -> String {
        String::from_utf16_lossy(&self.units)
    }
}

/// Convert a floating-point host position to a code-unit index.
///
/// Truncates toward zero. NaN and infinities have no index and return
/// `None`; callers treat that as out of bounds.
#[must_use]
pub fn truncate_position(position: f64) -> Option<isize> {
    if position.is_finite() {
        Some(position.trunc() as isize)
    } else {
        None
    }
}

/// Return the character at code-unit `position` with its start and end.
///
/// A position on either half of a valid surrogate pair yields the whole
/// pair. Lone surrogates come back as single-unit spans. Positions outside
/// `0..units.len()` yield [`CodepointSpan::out_of_bounds`]; this never
/// panics.
#[must_use]
pub fn char_and_position_at(units: &[u16], position: isize) -> CodepointSpan {
    let Ok(pos) = usize::try_from(position) else {
        return CodepointSpan::out_of_bounds();
    };
    let Some(&unit) = units.get(pos) else {
        return CodepointSpan::out_of_bounds();
    };

    if is_high_surrogate(unit) {
        return match units.get(pos + 1) {
            Some(&next) if is_low_surrogate(next) => CodepointSpan::pair(unit, next, pos),
            _ => CodepointSpan::single(unit, pos),
        };
    }

    if is_low_surrogate(unit) && pos > 0 {
        let prev = units[pos - 1];
        if is_high_surrogate(prev) {
            return CodepointSpan::pair(prev, unit, pos - 1);
        }
    }

    CodepointSpan::single(unit, pos)
}

/// [`char_and_position_at`] over the UTF-16 encoding of `text`.
#[must_use]
pub fn char_and_position_at_str(text: &str, position: isize) -> CodepointSpan {
    let units: Vec<u16> = text.encode_utf16().collect();
    char_and_position_at(&units, position)
}

/// Index just past the character containing `pos`, clamped to `units.len()`.
#[must_use]
pub fn next_boundary(units: &[u16], pos: usize) -> usize {
    if pos >= units.len() {
        return units.len();
    }
    let span = char_and_position_at(units, pos as isize);
    (span.end() + 1) as usize
}

/// Start index of the character before `pos`, or 0 at the start.
#[must_use]
pub fn prev_boundary(units: &[u16], pos: usize) -> usize {
    let pos = pos.min(units.len());
    if pos == 0 {
        return 0;
    }
    let span = char_and_position_at(units, (pos - 1) as isize);
    span.start() as usize
}

/// Iterate every character of `units` in order without splitting pairs.
#[must_use]
pub fn codepoint_spans(units: &[u16]) -> CodepointSpans<'_> {
    CodepointSpans { units, pos: 0 }
}

/// Iterator returned by [`codepoint_spans`].
#[derive(Debug, Clone)]
pub struct CodepointSpans<'a> {
    units: &'a [u16],
    pos: usize,
}

impl Iterator for CodepointSpans<'_> {
    type Item = CodepointSpan;

    fn next(&mut self) -> Option<Self::Item> {
        if self.pos >= self.units.len() {
            return None;
        }
        let span = char_and_position_at(self.units, self.pos as isize);
        self.pos += span.len_units();
        Some(span)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.units.len() - self.pos;
        (remaining.div_ceil(2), Some(remaining))
    }
}
