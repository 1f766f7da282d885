#![no_main]

use libfuzzer_sys::fuzz_target;
use quire_text::{
    char_and_position_at, codepoint_spans, escape_html, next_boundary, slugify, unescape_html,
};

fuzz_target!(|data: &[u8]| {
    if data.len() > 4096 {
        return;
    }

    // Arbitrary code units, lone surrogates included.
    let units: Vec<u16> = data
        .chunks_exact(2)
        .map(|pair| u16::from_le_bytes([pair[0], pair[1]]))
        .collect();
    for pos in -1..=units.len() as isize {
        let span = char_and_position_at(&units, pos);
        if span.is_out_of_bounds() {
            assert!(pos < 0 || pos as usize >= units.len());
            continue;
        }
        assert!(span.start() <= pos && pos <= span.end());
        assert!(span.len_units() == 1 || span.len_units() == 2);
    }
    let covered: usize = codepoint_spans(&units).map(|s| s.len_units()).sum();
    assert_eq!(covered, units.len());
    let mut cursor = 0;
    while cursor < units.len() {
        let next = next_boundary(&units, cursor);
        assert!(next > cursor);
        cursor = next;
    }

    let Ok(text) = std::str::from_utf8(data) else {
        return;
    };
    let slug = slugify(text);
    assert_eq!(slugify(&slug), slug, "slugify must be idempotent");

    let escaped = escape_html(text);
    assert_eq!(unescape_html(&escaped), text);
    let _ = unescape_html(text);
});
