#![forbid(unsafe_code)]

//! Unicode-safe text primitives for Quire.
//!
//! # Role in Quire
//! `quire-text` holds the small, pure string operations that a templating
//! or localization layer leans on: surrogate-aware character indexing over
//! UTF-16 code units, slug normalization, and HTML entity escaping.
//!
//! # How it fits in the system
//! Nothing here allocates global state or performs I/O. Every function is
//! total: out-of-range positions and absent inputs produce sentinel or
//! empty results instead of errors, so callers in rendering or cursor code
//! never need to handle a failure path.

pub mod entity;
pub mod slug;
pub mod utf16;

pub use entity::{escape_html, escape_html_opt, unescape_html, unescape_html_opt};
pub use slug::slugify;
pub use utf16::{
    CodepointSpan, CodepointSpans, char_and_position_at, char_and_position_at_str,
    codepoint_spans, next_boundary, prev_boundary, truncate_position,
};
