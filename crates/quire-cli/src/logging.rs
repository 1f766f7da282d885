//! Diagnostic logging for the `quire` binary.
//!
//! Logs go to stderr so command output on stdout stays clean for pipes.
//! `QUIRE_LOG` takes a tracing filter directive (default `warn`);
//! `QUIRE_LOG_FORMAT=json` switches to one JSON object per line.

use tracing_subscriber::EnvFilter;

pub const LOG_ENV: &str = "QUIRE_LOG";
pub const LOG_FORMAT_ENV: &str = "QUIRE_LOG_FORMAT";
pub const DEFAULT_DIRECTIVE: &str = "warn";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    #[default]
    Text,
    Json,
}

impl LogFormat {
    #[must_use]
    pub fn parse(value: Option<&str>) -> Self {
        match value.map(str::trim) {
            Some(v) if v.eq_ignore_ascii_case("json") => Self::Json,
            _ => Self::Text,
        }
    }
}

/// The filter directive to use for a `QUIRE_LOG` value: the value itself
/// when it parses, the default when it is missing, blank, or malformed.
#[must_use]
pub fn filter_directive(value: Option<&str>) -> &str {
    match value.map(str::trim) {
        Some(d) if !d.is_empty() && EnvFilter::try_new(d).is_ok() => d,
        _ => DEFAULT_DIRECTIVE,
    }
}

/// Install the global subscriber from the environment.
///
/// A second call (or a subscriber installed by a test harness) is ignored.
pub fn init_from_env() {
    let directive = std::env::var(LOG_ENV).ok();
    let format = LogFormat::parse(std::env::var(LOG_FORMAT_ENV).ok().as_deref());
    init(EnvFilter::new(filter_directive(directive.as_deref())), format);
}

pub fn init(filter: EnvFilter, format: LogFormat) {
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false);
    let _ = match format {
        LogFormat::Json => builder.json().try_init(),
        LogFormat::Text => builder.try_init(),
    };
}
