#![forbid(unsafe_code)]

use std::path::PathBuf;

use thiserror::Error;

/// Failure of a single [`resolve`](crate::Resolver::resolve) call.
///
/// Only the top-level key is checked for existence. A placeholder naming
/// an unknown key is left verbatim in the output and is not an error.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ResolveError {
    /// The requested key is in neither the locals nor the string table.
    #[error("unknown string key: {key}")]
    UnknownKey { key: String },

    /// A key was reached again while it was still being expanded.
    ///
    /// `chain` runs from the root key to the repeated key, so the repeated
    /// key appears exactly twice.
    #[error("cyclic template: {}", .chain.join(" -> "))]
    CyclicTemplate { chain: Vec<String> },
}

impl ResolveError {
    /// The root key for `UnknownKey`, the first key of the chain otherwise.
    #[must_use]
    pub fn key(&self) -> &str {
        match self {
            Self::UnknownKey { key } => key,
            Self::CyclicTemplate { chain } => chain.first().map_or("", String::as_str),
        }
    }

    /// The expansion chain of a cycle, if this is one.
    #[must_use]
    pub fn chain(&self) -> Option<&[String]> {
        match self {
            Self::CyclicTemplate { chain } => Some(chain.as_slice()),
            Self::UnknownKey { .. } => None,
        }
    }
}

/// Errors from loading a string table.
#[derive(Debug, Error)]
pub enum TableError {
    #[error("I/O error reading {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[cfg(feature = "serde")]
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    #[cfg(feature = "serde")]
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("unsupported string table format: {path} (expected .toml or .json)")]
    UnsupportedFormat { path: PathBuf },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cyclic_display_joins_chain() {
        let error = ResolveError::CyclicTemplate {
            chain: vec!["a".into(), "b".into(), "a".into()],
        };
        assert_eq!(error.to_string(), "cyclic template: a -> b -> a");
        assert_eq!(error.key(), "a");
        assert_eq!(error.chain().map(<[String]>::len), Some(3));
    }

    #[test]
    fn unknown_key_display() {
        let error = ResolveError::UnknownKey {
            key: "missing_key".into(),
        };
        assert_eq!(error.to_string(), "unknown string key: missing_key");
        assert_eq!(error.key(), "missing_key");
        assert!(error.chain().is_none());
    }
}
