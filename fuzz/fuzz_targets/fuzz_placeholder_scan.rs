#![no_main]

use libfuzzer_sys::fuzz_target;
use quire_l10n::placeholder::{Segment, is_placeholder_name, scan};

fuzz_target!(|data: &[u8]| {
    let Ok(template) = std::str::from_utf8(data) else {
        return;
    };
    if template.len() > 4096 {
        return;
    }

    let mut rebuilt = String::with_capacity(template.len());
    let mut prev_literal = false;
    for segment in scan(template) {
        assert!(!segment.source().is_empty(), "empty segment");
        match &segment {
            Segment::Literal(_) => {
                assert!(!prev_literal, "adjacent literals");
                prev_literal = true;
            }
            Segment::Placeholder(p) => {
                assert!(is_placeholder_name(p.name));
                assert_eq!(&template[p.span.clone()], p.source);
                assert_eq!(p.span.start, rebuilt.len());
                prev_literal = false;
            }
        }
        rebuilt.push_str(segment.source());
    }
    assert_eq!(rebuilt, template, "segments must reassemble the template");
});
