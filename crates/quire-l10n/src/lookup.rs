#![forbid(unsafe_code)]

//! Key-to-template lookup shared by string tables and local substitutions.

use std::collections::{BTreeMap, HashMap};
use std::hash::BuildHasher;

/// Anything that maps a key to a template string.
///
/// The resolver consults a caller's locals through this trait before the
/// string table, so locals can be a map, a slice of pairs, or another
/// table.
pub trait Lookup {
    /// The template stored under `key`, if any.
    fn lookup(&self, key: &str) -> Option<&str>;
}

impl<T: Lookup + ?Sized> Lookup for &T {
    fn lookup(&self, key: &str) -> Option<&str> {
        (**self).lookup(key)
    }
}

impl<S: BuildHasher> Lookup for HashMap<String, String, S> {
    fn lookup(&self, key: &str) -> Option<&str> {
        self.get(key).map(String::as_str)
    }
}

impl Lookup for BTreeMap<String, String> {
    fn lookup(&self, key: &str) -> Option<&str> {
        self.get(key).map(String::as_str)
    }
}

/// Pairs are searched front to back; the first match wins.
impl Lookup for [(&str, &str)] {
    fn lookup(&self, key: &str) -> Option<&str> {
        self.iter().find(|(name, _)| *name == key).map(|(_, value)| *value)
    }
}

impl<const N: usize> Lookup for [(&str, &str); N] {
    fn lookup(&self, key: &str) -> Option<&str> {
        self.as_slice().lookup(key)
    }
}

impl Lookup for Vec<(&str, &str)> {
    fn lookup(&self, key: &str) -> Option<&str> {
        self.as_slice().lookup(key)
    }
}

impl Lookup for [(String, String)] {
    fn lookup(&self, key: &str) -> Option<&str> {
        self.iter()
            .find(|(name, _)| name == key)
            .map(|(_, value)| value.as_str())
    }
}

impl Lookup for Vec<(String, String)> {
    fn lookup(&self, key: &str) -> Option<&str> {
        self.as_slice().lookup(key)
    }
}

/// No local substitutions.
pub const NO_LOCALS: &[(&str, &str)] = &[];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pair_slice_first_match_wins() {
        let pairs = [("name", "Alice"), ("name", "Bob")];
        assert_eq!(pairs.lookup("name"), Some("Alice"));
        assert_eq!(pairs.lookup("other"), None);
    }

    #[test]
    fn maps_and_owned_pairs() {
        let mut hash = HashMap::new();
        hash.insert("k".to_string(), "v".to_string());
        assert_eq!(hash.lookup("k"), Some("v"));

        let tree: BTreeMap<String, String> = [("k".to_string(), "t".to_string())].into();
        assert_eq!(tree.lookup("k"), Some("t"));

        let owned = vec![("k".to_string(), "o".to_string())];
        assert_eq!(owned.lookup("k"), Some("o"));
    }

    #[test]
    fn no_locals_is_empty() {
        assert_eq!(NO_LOCALS.lookup("anything"), None);
    }
}
