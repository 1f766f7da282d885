use std::io::Write;

use clap::{Parser, Subcommand};

use crate::error::Result;
use crate::strings::{KeysArgs, LintArgs, ResolveArgs, run_keys, run_lint, run_resolve};
use crate::text::{CharAtArgs, TextArgs, run_char_at, run_escape, run_slugify, run_unescape};

#[derive(Debug, Parser)]
#[command(
    name = "quire",
    about = "Resolve localized string templates and run Unicode-safe text helpers",
    version
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Expand a string key, following nested `{NAME}` references.
    Resolve(ResolveArgs),

    /// Check a string table for cycles, dangling references, and unused fragments.
    Lint(LintArgs),

    /// List the keys of a string table.
    Keys(KeysArgs),

    /// Normalize text into a slug.
    Slugify(TextArgs),

    /// Escape the six HTML-sensitive characters.
    Escape(TextArgs),

    /// Decode the HTML entities produced by `escape`.
    Unescape(TextArgs),

    /// Show the character at a UTF-16 code-unit position.
    #[command(name = "char-at")]
    CharAt(CharAtArgs),
}

impl Cli {
    /// Whether errors should be reported as JSON.
    #[must_use]
    pub fn wants_json(&self) -> bool {
        match &self.command {
            Commands::Resolve(args) => args.json,
            Commands::Lint(args) => args.json,
            Commands::CharAt(args) => args.json,
            Commands::Keys(_) | Commands::Slugify(_) | Commands::Escape(_) | Commands::Unescape(_) => {
                false
            }
        }
    }
}

pub fn run(cli: Cli) -> Result<()> {
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    run_with_output(cli, &mut out)?;
    out.flush()?;
    Ok(())
}

pub fn run_with_output(cli: Cli, out: &mut impl Write) -> Result<()> {
    match cli.command {
        Commands::Resolve(args) => run_resolve(args, out),
        Commands::Lint(args) => run_lint(args, out),
        Commands::Keys(args) => run_keys(args, out),
        Commands::Slugify(args) => run_slugify(args, out),
        Commands::Escape(args) => run_escape(args, out),
        Commands::Unescape(args) => run_unescape(args, out),
        Commands::CharAt(args) => run_char_at(args, out),
    }
}
