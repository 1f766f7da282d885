#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use quire_l10n::{ResolveError, Resolver, StringTable};

/// Small key space so templates reference each other often.
const KEYS: [&str; 6] = ["a", "b", "c", "_d", "e1", "f_2"];

#[derive(Debug, Arbitrary)]
struct Input {
    templates: Vec<(u8, String)>,
    locals: Vec<(u8, String)>,
    root: u8,
}

fn key(index: u8) -> &'static str {
    KEYS[usize::from(index) % KEYS.len()]
}

fuzz_target!(|input: Input| {
    if input.templates.len() > 16 || input.locals.len() > 4 {
        return;
    }
    if input
        .templates
        .iter()
        .chain(&input.locals)
        .any(|(_, t)| t.len() > 256)
    {
        return;
    }

    let table: StringTable = input
        .templates
        .iter()
        .map(|(k, t)| (key(*k), t.as_str()))
        .collect();
    let locals: Vec<(&str, &str)> = input
        .locals
        .iter()
        .map(|(k, t)| (key(*k), t.as_str()))
        .collect();
    let root = key(input.root);

    match Resolver::new(table).resolve_with(root, locals.as_slice()) {
        Ok(_) => {}
        Err(ResolveError::UnknownKey { key }) => assert_eq!(key, root),
        Err(ResolveError::CyclicTemplate { chain }) => {
            assert!(chain.len() >= 2);
            assert_eq!(chain.first().map(String::as_str), Some(root));
            let last = chain.last().cloned().unwrap_or_default();
            assert_eq!(chain.iter().filter(|k| **k == last).count(), 2);
        }
    }
});
