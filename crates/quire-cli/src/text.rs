use std::io::Write;

use clap::Args;
use quire_text::{char_and_position_at, escape_html, slugify, truncate_position, unescape_html};
use serde::Serialize;

use crate::error::Result;

#[derive(Debug, Clone, Args)]
pub struct TextArgs {
    /// Input text.
    pub text: String,
}

#[derive(Debug, Clone, Args)]
pub struct CharAtArgs {
    /// Input text, indexed by UTF-16 code unit.
    pub text: String,

    /// Code-unit position; fractions are truncated toward zero.
    #[arg(allow_negative_numbers = true)]
    pub position: f64,

    /// Print a JSON object instead of tab-separated fields.
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, Serialize)]
struct CharAt {
    #[serde(rename = "char")]
    character: String,
    start: isize,
    end: isize,
}

pub fn run_slugify(args: TextArgs, out: &mut impl Write) -> Result<()> {
    writeln!(out, "{}", slugify(&args.text))?;
    Ok(())
}

pub fn run_escape(args: TextArgs, out: &mut impl Write) -> Result<()> {
    writeln!(out, "{}", escape_html(&args.text))?;
    Ok(())
}

pub fn run_unescape(args: TextArgs, out: &mut impl Write) -> Result<()> {
    writeln!(out, "{}", unescape_html(&args.text))?;
    Ok(())
}

pub fn run_char_at(args: CharAtArgs, out: &mut impl Write) -> Result<()> {
    let units: Vec<u16> = args.text.encode_utf16().collect();
    // NaN and infinities have no index; -1 is never in bounds.
    let position = truncate_position(args.position).unwrap_or(-1);
    let span = char_and_position_at(&units, position);
    let found = CharAt {
        character: span.to_string_lossy(),
        start: span.start(),
        end: span.end(),
    };
    if args.json {
        writeln!(out, "{}", serde_json::to_string(&found)?)?;
    } else {
        writeln!(out, "{}\t{}\t{}", found.character, found.start, found.end)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run_text(f: fn(TextArgs, &mut Vec<u8>) -> Result<()>, text: &str) -> String {
        let mut out = Vec::new();
        f(TextArgs { text: text.into() }, &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    fn char_at(text: &str, position: f64, json: bool) -> String {
        let mut out = Vec::new();
        run_char_at(
            CharAtArgs {
                text: text.into(),
                position,
                json,
            },
            &mut out,
        )
        .unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn slugify_escape_unescape() {
        assert_eq!(run_text(run_slugify, "  Hello, World!! "), "hello-world!!\n");
        assert_eq!(
            run_text(run_escape, "<a href=\"x\">&</a>"),
            "&lt;a href=&quot;x&quot;&gt;&amp;&lt;/a&gt;\n"
        );
        assert_eq!(run_text(run_unescape, "&LT;b&#X3E;"), "<b>\n");
    }

    #[test]
    fn char_at_surrogate_pair() {
        assert_eq!(char_at("a\u{1F600}b", 2.0, false), "\u{1F600}\t1\t2\n");
        assert_eq!(char_at("a\u{1F600}b", 1.9, false), "\u{1F600}\t1\t2\n");
    }

    #[test]
    fn char_at_out_of_bounds_and_non_finite() {
        assert_eq!(char_at("abc", 99.0, false), "\t-1\t-1\n");
        assert_eq!(char_at("abc", -1.0, false), "\t-1\t-1\n");
        assert_eq!(char_at("abc", f64::NAN, false), "\t-1\t-1\n");
    }

    #[test]
    fn char_at_negative_fraction_truncates_to_zero() {
        assert_eq!(char_at("abc", -0.5, false), "a\t0\t0\n");
    }

    #[test]
    fn char_at_json() {
        let value: serde_json::Value =
            serde_json::from_str(char_at("xyz", 1.0, true).trim()).unwrap();
        assert_eq!(value, serde_json::json!({"char": "y", "start": 1, "end": 1}));
    }
}
