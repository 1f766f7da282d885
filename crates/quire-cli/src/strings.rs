use std::io::Write;

use clap::Args;
use quire_l10n::placeholder::is_placeholder_name;
use quire_l10n::{LintReport, Resolver, lint};
use serde::Serialize;

use crate::error::{CliError, EXIT_LINT_FAILED, Result};
use crate::tables::TableArgs;

#[derive(Debug, Clone, Args)]
pub struct ResolveArgs {
    /// Key to resolve.
    pub key: String,

    #[command(flatten)]
    pub table: TableArgs,

    /// Local substitution consulted before the table; repeatable.
    #[arg(long = "set", value_name = "NAME=VALUE", value_parser = parse_assignment)]
    pub locals: Vec<(String, String)>,

    /// Print a JSON object instead of the bare string.
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, Clone, Args)]
pub struct LintArgs {
    #[command(flatten)]
    pub table: TableArgs,

    /// Print the report as JSON.
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, Clone, Args)]
pub struct KeysArgs {
    #[command(flatten)]
    pub table: TableArgs,

    /// Include `_`-prefixed fragment keys.
    #[arg(long)]
    pub all: bool,
}

/// Parse a `NAME=VALUE` local. The value may itself contain `=`.
pub fn parse_assignment(raw: &str) -> std::result::Result<(String, String), String> {
    let Some((name, value)) = raw.split_once('=') else {
        return Err(format!("expected NAME=VALUE, got `{raw}`"));
    };
    if !is_placeholder_name(name) {
        return Err(format!(
            "`{name}` is not a placeholder name (letters, digits, underscore)"
        ));
    }
    Ok((name.to_string(), value.to_string()))
}

#[derive(Debug, Serialize)]
struct Resolved<'a> {
    key: &'a str,
    value: &'a str,
}

pub fn run_resolve(args: ResolveArgs, out: &mut impl Write) -> Result<()> {
    let resolver = Resolver::new(args.table.load()?);
    let value = resolver.resolve_with(&args.key, args.locals.as_slice())?;
    if args.json {
        let resolved = Resolved {
            key: &args.key,
            value: &value,
        };
        writeln!(out, "{}", serde_json::to_string(&resolved)?)?;
    } else {
        writeln!(out, "{value}")?;
    }
    Ok(())
}

fn write_report(report: &LintReport, out: &mut impl Write) -> Result<()> {
    writeln!(
        out,
        "{} keys, {} fragments, {} cycles, {} dangling references",
        report.total_keys,
        report.fragments.len(),
        report.cycles.len(),
        report.dangling.len()
    )?;
    for cycle in &report.cycles {
        writeln!(out, "cycle: {}", cycle.join(" -> "))?;
    }
    for dangling in &report.dangling {
        writeln!(out, "dangling: {} -> {{{}}}", dangling.key, dangling.placeholder)?;
    }
    for fragment in &report.unused_fragments {
        writeln!(out, "unused fragment: {fragment}")?;
    }
    Ok(())
}

pub fn run_lint(args: LintArgs, out: &mut impl Write) -> Result<()> {
    let report = lint(&args.table.load()?);
    if args.json {
        writeln!(out, "{}", serde_json::to_string_pretty(&report)?)?;
    } else {
        write_report(&report, out)?;
    }
    if report.is_clean() {
        Ok(())
    } else {
        Err(CliError::exit(
            EXIT_LINT_FAILED,
            format!("string table has {} cycle(s)", report.cycles.len()),
        ))
    }
}

pub fn run_keys(args: KeysArgs, out: &mut impl Write) -> Result<()> {
    let table = args.table.load()?;
    let keys = if args.all {
        table.keys()
    } else {
        table.public_keys()
    };
    for key in keys {
        writeln!(out, "{key}")?;
    }
    Ok(())
}
