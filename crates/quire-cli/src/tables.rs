use std::path::PathBuf;

use clap::Args;
use quire_l10n::{StringTable, default_table};

use crate::error::Result;

/// Extra table file layered over the defaults before any `--table`.
pub const TABLE_ENV: &str = "QUIRE_TABLE";

#[derive(Debug, Clone, Default, Args)]
pub struct TableArgs {
    /// String table file (.toml or .json) layered over the defaults; repeatable, later wins.
    #[arg(long = "table", short = 't', value_name = "PATH")]
    pub tables: Vec<PathBuf>,

    /// Start from an empty table instead of the bundled English strings.
    #[arg(long)]
    pub no_defaults: bool,
}

impl TableArgs {
    /// Build the effective table, reading `QUIRE_TABLE` from the environment.
    pub fn load(&self) -> Result<StringTable> {
        let env_table = std::env::var_os(TABLE_ENV)
            .filter(|value| !value.is_empty())
            .map(PathBuf::from);
        self.load_with(env_table)
    }

    /// Build the effective table: defaults, then `env_table`, then every
    /// `--table` in order.
    pub fn load_with(&self, env_table: Option<PathBuf>) -> Result<StringTable> {
        let mut table = if self.no_defaults {
            StringTable::new()
        } else {
            default_table()
        };
        for path in env_table.iter().chain(&self.tables) {
            let layer = StringTable::from_path(path)?;
            tracing::debug!(path = %path.display(), entries = layer.len(), "layering string table");
            table = table.with_overrides(layer);
        }
        Ok(table)
    }
}
