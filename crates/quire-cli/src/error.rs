use quire_l10n::{ResolveError, TableError};
use thiserror::Error;

pub type Result<T> = std::result::Result<T, CliError>;

/// Exit code for a key present in neither locals nor tables.
pub const EXIT_UNKNOWN_KEY: i32 = 3;
/// Exit code for a cyclic template.
pub const EXIT_CYCLE: i32 = 4;
/// Exit code for `lint` when the table has cycles.
pub const EXIT_LINT_FAILED: i32 = 2;

#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Resolve(#[from] ResolveError),

    #[error("string table error: {0}")]
    Table(#[from] TableError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid argument: {message}")]
    InvalidArgument { message: String },

    #[error("{message}")]
    Exit { code: i32, message: String },
}

impl CliError {
    #[must_use]
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::Resolve(ResolveError::UnknownKey { .. }) => EXIT_UNKNOWN_KEY,
            Self::Resolve(ResolveError::CyclicTemplate { .. }) => EXIT_CYCLE,
            Self::Exit { code, .. } => *code,
            _ => 1,
        }
    }

    /// Short machine-readable name used in JSON error output.
    #[must_use]
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Resolve(ResolveError::UnknownKey { .. }) => "unknown_key",
            Self::Resolve(ResolveError::CyclicTemplate { .. }) => "cyclic_template",
            Self::Table(_) => "table",
            Self::Io(_) => "io",
            Self::Json(_) => "json",
            Self::InvalidArgument { .. } => "invalid_argument",
            Self::Exit { .. } => "exit",
        }
    }

    #[must_use]
    pub fn exit(code: i32, message: impl Into<String>) -> Self {
        Self::Exit {
            code,
            message: message.into(),
        }
    }

    #[must_use]
    pub fn invalid(message: impl Into<String>) -> Self {
        Self::InvalidArgument {
            message: message.into(),
        }
    }

    /// The error as a JSON object for `--json` callers.
    #[must_use]
    pub fn to_json(&self) -> serde_json::Value {
        let mut value = serde_json::json!({
            "status": "error",
            "kind": self.kind(),
            "error": self.to_string(),
            "exit_code": self.exit_code(),
        });
        if let Self::Resolve(ResolveError::CyclicTemplate { chain }) = self {
            value["chain"] = serde_json::json!(chain);
        }
        value
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolve_errors_map_to_distinct_codes() {
        let unknown = CliError::from(ResolveError::UnknownKey { key: "nope".into() });
        assert_eq!(unknown.exit_code(), EXIT_UNKNOWN_KEY);
        assert_eq!(unknown.to_string(), "unknown string key: nope");

        let cycle = CliError::from(ResolveError::CyclicTemplate {
            chain: vec!["a".into(), "b".into(), "a".into()],
        });
        assert_eq!(cycle.exit_code(), EXIT_CYCLE);
        assert_eq!(cycle.to_string(), "cyclic template: a -> b -> a");
    }

    #[test]
    fn exit_constructor_preserves_code_and_message() {
        let error = CliError::exit(EXIT_LINT_FAILED, "boom");
        assert_eq!(error.exit_code(), 2);
        assert_eq!(error.to_string(), "boom");
    }

    #[test]
    fn invalid_argument_exits_with_one() {
        let error = CliError::invalid("bad");
        assert_eq!(error.exit_code(), 1);
        assert_eq!(error.to_string(), "invalid argument: bad");
    }

    #[test]
    fn json_form_carries_chain_for_cycles() {
        let cycle = CliError::from(ResolveError::CyclicTemplate {
            chain: vec!["x".into(), "x".into()],
        });
        let json = cycle.to_json();
        assert_eq!(json["kind"], "cyclic_template");
        assert_eq!(json["exit_code"], 4);
        assert_eq!(json["chain"], serde_json::json!(["x", "x"]));

        let json = CliError::invalid("bad").to_json();
        assert!(json.get("chain").is_none());
        assert_eq!(json["status"], "error");
    }
}
