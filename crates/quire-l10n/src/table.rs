#![forbid(unsafe_code)]

//! Immutable key → template string tables.
//!
//! A [`StringTable`] is built once (from code, the bundled defaults, or a
//! TOML/JSON file) and only read afterwards. Layering translator overrides
//! on top of defaults produces a new table via
//! [`StringTable::with_overrides`]; nothing is mutated in place.
//!
//! # Naming convention
//!
//! Keys starting with `_` are *fragments*: pieces meant to be included by
//! other templates rather than displayed directly. The convention is only
//! reported on (see [`public_keys`](StringTable::public_keys) and
//! [`lint`](crate::lint::lint)); resolution treats all keys alike.
//!
//! # File format
//!
//! ```toml
//! identity = "game"
//! _warningIntroLacking = "Your browser either lacks or has disabled"
//! warningDegraded = "{_warningIntroLacking} some of the capabilities required by this {identity}"
//! ```

use std::collections::HashMap;
#[cfg(feature = "serde")]
use std::path::Path;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

#[cfg(feature = "serde")]
use crate::error::TableError;
use crate::lookup::Lookup;

/// Whether `key` follows the private-fragment convention (leading `_`).
#[must_use]
pub fn is_fragment_key(key: &str) -> bool {
    key.starts_with('_')
}

/// An immutable mapping from string key to template.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct StringTable {
    entries: HashMap<String, String>,
}

impl StringTable {
    /// An empty table.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The template stored under `key`.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    /// Whether `key` is present.
    #[must_use]
    pub fn has(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// Number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the table has no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over `(key, template)` pairs in arbitrary order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// All keys, sorted.
    #[must_use]
    pub fn keys(&self) -> Vec<&str> {
        let mut keys: Vec<&str> = self.entries.keys().map(String::as_str).collect();
        keys.sort_unstable();
        keys
    }

    /// Keys that are not fragments, sorted.
    #[must_use]
    pub fn public_keys(&self) -> Vec<&str> {
        let mut keys = self.keys();
        keys.retain(|key| !is_fragment_key(key));
        keys
    }

    /// A new table with every entry of `overrides` replacing or extending
    /// the entries of `self`.
    #[must_use]
    pub fn with_overrides(mut self, overrides: StringTable) -> StringTable {
        self.entries.extend(overrides.entries);
        self
    }

    /// Parse a flat TOML table of strings.
    #[cfg(feature = "serde")]
    pub fn from_toml_str(s: &str) -> Result<Self, TableError> {
        toml::from_str(s).map_err(TableError::Toml)
    }

    /// Load a flat TOML table of strings from disk.
    #[cfg(feature = "serde")]
    pub fn from_toml_file(path: impl AsRef<Path>) -> Result<Self, TableError> {
        let path = path.as_ref();
        let table = Self::from_toml_str(&read_table_file(path)?)?;
        tracing::debug!(path = %path.display(), entries = table.len(), "loaded TOML string table");
        Ok(table)
    }

    /// Parse a flat JSON object of strings.
    #[cfg(feature = "serde")]
    pub fn from_json_str(s: &str) -> Result<Self, TableError> {
        serde_json::from_str(s).map_err(TableError::Json)
    }

    /// Load a flat JSON object of strings from disk.
    #[cfg(feature = "serde")]
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, TableError> {
        let path = path.as_ref();
        let table = Self::from_json_str(&read_table_file(path)?)?;
        tracing::debug!(path = %path.display(), entries = table.len(), "loaded JSON string table");
        Ok(table)
    }

    /// Load a table, picking the format from the file extension.
    #[cfg(feature = "serde")]
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, TableError> {
        let path = path.as_ref();
        let ext = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_ascii_lowercase);
        match ext.as_deref() {
            Some("toml") => Self::from_toml_file(path),
            Some("json") => Self::from_json_file(path),
            _ => Err(TableError::UnsupportedFormat {
                path: path.to_path_buf(),
            }),
        }
    }
}

#[cfg(feature = "serde")]
fn read_table_file(path: &Path) -> Result<String, TableError> {
    std::fs::read_to_string(path).map_err(|source| TableError::Io {
        path: path.to_path_buf(),
        source,
    })
}

impl Lookup for StringTable {
    fn lookup(&self, key: &str) -> Option<&str> {
        self.get(key)
    }
}

impl From<HashMap<String, String>> for StringTable {
    fn from(entries: HashMap<String, String>) -> Self {
        Self { entries }
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for StringTable {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            entries: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> StringTable {
        [
            ("identity", "game"),
            ("_intro", "Your browser lacks"),
            ("ok", "OK"),
        ]
        .into_iter()
        .collect()
    }

    #[test]
    fn basic_lookup() {
        let table = sample();
        assert_eq!(table.get("identity"), Some("game"));
        assert!(table.has("ok"));
        assert!(!table.has("missing"));
        assert_eq!(table.len(), 3);
        assert!(!table.is_empty());
        assert!(StringTable::new().is_empty());
    }

    #[test]
    fn keys_are_sorted_and_filtered() {
        let table = sample();
        assert_eq!(table.keys(), vec!["_intro", "identity", "ok"]);
        assert_eq!(table.public_keys(), vec!["identity", "ok"]);
    }

    #[test]
    fn fragment_convention() {
        assert!(is_fragment_key("_warningIntroLacking"));
        assert!(!is_fragment_key("warningDegraded"));
        assert!(!is_fragment_key(""));
    }

    #[test]
    fn overrides_are_right_biased() {
        let base = sample();
        let overrides: StringTable = [("identity", "story"), ("extra", "new")]
            .into_iter()
            .collect();
        let merged = base.clone().with_overrides(overrides);
        assert_eq!(merged.get("identity"), Some("story"));
        assert_eq!(merged.get("extra"), Some("new"));
        assert_eq!(merged.get("ok"), Some("OK"));
        assert_eq!(base.get("identity"), Some("game"));
    }

    #[cfg(feature = "serde")]
    #[test]
    fn parse_toml_and_json() {
        let toml = "identity = \"game\"\n_frag = \"x {identity}\"\n";
        let table = StringTable::from_toml_str(toml).unwrap();
        assert_eq!(table.get("_frag"), Some("x {identity}"));

        let json = r#"{"identity": "game", "ok": "OK"}"#;
        let table = StringTable::from_json_str(json).unwrap();
        assert_eq!(table.get("ok"), Some("OK"));
    }

    #[cfg(feature = "serde")]
    #[test]
    fn non_string_values_are_rejected() {
        assert!(matches!(
            StringTable::from_toml_str("count = 3"),
            Err(TableError::Toml(_))
        ));
        assert!(matches!(
            StringTable::from_json_str(r#"{"nested": {"a": "b"}}"#),
            Err(TableError::Json(_))
        ));
    }

    #[cfg(feature = "serde")]
    #[test]
    fn from_path_picks_format_by_extension() {
        let dir = tempfile::tempdir().unwrap();

        let toml_path = dir.path().join("strings.toml");
        std::fs::write(&toml_path, "ok = \"Okay\"\n").unwrap();
        assert_eq!(StringTable::from_path(&toml_path).unwrap().get("ok"), Some("Okay"));

        let json_path = dir.path().join("strings.JSON");
        std::fs::write(&json_path, r#"{"ok": "Fine"}"#).unwrap();
        assert_eq!(StringTable::from_path(&json_path).unwrap().get("ok"), Some("Fine"));

        let other = dir.path().join("strings.yaml");
        std::fs::write(&other, "ok: nope").unwrap();
        assert!(matches!(
            StringTable::from_path(&other),
            Err(TableError::UnsupportedFormat { .. })
        ));
    }

    #[cfg(feature = "serde")]
    #[test]
    fn missing_file_reports_path() {
        let error = StringTable::from_toml_file("/nonexistent/quire/strings.toml").unwrap_err();
        assert!(matches!(error, TableError::Io { .. }));
        assert!(error.to_string().contains("/nonexistent/quire/strings.toml"));
    }
}
