#![forbid(unsafe_code)]

//! Recursive, cycle-safe `{NAME}` expansion over a [`StringTable`].
//!
//! # Invariants
//!
//! 1. **Depth-first**: a substituted template is fully expanded before the
//!    scan of the enclosing template continues.
//!
//! 2. **Locals first**: every lookup, including the top-level key, consults
//!    the caller's locals before the table.
//!
//! 3. **Termination**: each nested expansion pushes a key that is not
//!    already on the expansion stack, so depth never exceeds the number of
//!    distinct keys. Reaching a key that is on the stack fails with
//!    [`ResolveError::CyclicTemplate`]; no step limit is involved. The
//!    on-stack check is a set lookup, so deep chains stay linear.
//!
//! 4. **Purity**: output depends only on `(key, locals, table)`. Resolvers
//!    share the table immutably and keep per-call state on the call's own
//!    stack, so concurrent calls need no coordination.
//!
//! # Failure Modes
//!
//! | Failure | Cause | Behavior |
//! |---------|-------|----------|
//! | Unknown top-level key | Not in locals or table | `Err(UnknownKey)` |
//! | Unknown placeholder | `{name}` with no entry | Token left verbatim |
//! | Malformed placeholder | `{`, `{}`, `{a b}` | Emitted as literal text |
//! | Cycle | Key reached while being expanded | `Err(CyclicTemplate)` |
//!
//! The asymmetry between the first two rows is deliberate: callers name
//! top-level keys in code and depend on them existing, while templates may
//! legitimately mention names that only some callers supply.

use std::collections::HashSet;
use std::sync::Arc;

use crate::error::ResolveError;
use crate::lookup::{Lookup, NO_LOCALS};
use crate::placeholder::{Segment, Segments, scan};
use crate::table::StringTable;

/// Expands keys of a shared, immutable [`StringTable`].
///
/// # Example
///
/// ```
/// use quire_l10n::{Resolver, StringTable};
///
/// let table: StringTable = [
///     ("identity", "game"),
///     ("greet", "Hello, {name}!"),
///     ("saveMismatch", "save is from the wrong {identity}"),
/// ]
/// .into_iter()
/// .collect();
/// let resolver = Resolver::new(table);
///
/// assert_eq!(resolver.resolve("saveMismatch").unwrap(), "save is from the wrong game");
/// assert_eq!(
///     resolver.resolve_with("greet", &[("name", "World")]).unwrap(),
///     "Hello, World!"
/// );
/// assert_eq!(resolver.resolve("greet").unwrap(), "Hello, {name}!");
/// ```
#[derive(Debug, Clone)]
pub struct Resolver {
    table: Arc<StringTable>,
}

/// One template being expanded: the key it came from and its remaining segments.
struct Frame<'a> {
    key: &'a str,
    segments: Segments<'a>,
}

impl Resolver {
    /// Create a resolver over `table`.
    #[must_use]
    pub fn new(table: impl Into<Arc<StringTable>>) -> Self {
        Self {
            table: table.into(),
        }
    }

    /// The underlying table.
    #[must_use]
    pub fn table(&self) -> &StringTable {
        &self.table
    }

    /// Whether `key` exists in the table.
    #[must_use]
    pub fn has(&self, key: &str) -> bool {
        self.table.has(key)
    }

    /// Resolve `key` with no local substitutions.
    pub fn resolve(&self, key: &str) -> Result<String, ResolveError> {
        self.resolve_with(key, NO_LOCALS)
    }

    /// Resolve `key`, consulting `locals` before the table at every level.
    pub fn resolve_with<L>(&self, key: &str, locals: &L) -> Result<String, ResolveError>
    where
        L: Lookup + ?Sized,
    {
        expand(&self.table, locals, key)
    }
}

fn lookup<'a, L>(table: &'a StringTable, locals: &'a L, key: &str) -> Option<&'a str>
where
    L: Lookup + ?Sized,
{
    locals.lookup(key).or_else(|| table.get(key))
}

fn expand<'a, L>(table: &'a StringTable, locals: &'a L, key: &'a str) -> Result<String, ResolveError>
where
    L: Lookup + ?Sized,
{
    let Some(template) = lookup(table, locals, key) else {
        tracing::debug!(key, "unknown string key");
        return Err(ResolveError::UnknownKey {
            key: key.to_string(),
        });
    };

    let mut out = String::with_capacity(template.len());
    let mut stack = vec![Frame {
        key,
        segments: scan(template),
    }];
    // Keys of `stack`, for constant-time cycle checks.
    let mut in_progress: HashSet<&str> = HashSet::from([key]);

    loop {
        let Some(frame) = stack.last_mut() else {
            break;
        };
        let Some(segment) = frame.segments.next() else {
            in_progress.remove(frame.key);
            stack.pop();
            continue;
        };

        let placeholder = match segment {
            Segment::Literal(text) => {
                out.push_str(text);
                continue;
            }
            Segment::Placeholder(placeholder) => placeholder,
        };

        let Some(value) = lookup(table, locals, placeholder.name) else {
            out.push_str(placeholder.source);
            continue;
        };

        if in_progress.contains(placeholder.name) {
            let chain: Vec<String> = stack
                .iter()
                .map(|frame| frame.key)
                .chain(std::iter::once(placeholder.name))
                .map(str::to_string)
                .collect();
            tracing::warn!(root = key, chain = %chain.join(" -> "), "cyclic template");
            return Err(ResolveError::CyclicTemplate { chain });
        }

        tracing::trace!(
            key,
            placeholder = placeholder.name,
            depth = stack.len(),
            "expanding placeholder"
        );
        in_progress.insert(placeholder.name);
        stack.push(Frame {
            key: placeholder.name,
            segments: scan(value),
        });
    }

    tracing::debug!(key, len = out.len(), "resolved string");
    Ok(out)
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use tracing_test::traced_test;

    use super::*;

    fn resolver(entries: &[(&str, &str)]) -> Resolver {
        Resolver::new(entries.iter().copied().collect::<StringTable>())
    }

    fn chain(error: ResolveError) -> Vec<String> {
        match error {
            ResolveError::CyclicTemplate { chain } => chain,
            other => panic!("expected a cycle, got {other:?}"),
        }
    }

    #[test]
    fn plain_key() {
        let r = resolver(&[("ok", "OK")]);
        assert_eq!(r.resolve("ok").unwrap(), "OK");
    }

    #[test]
    fn missing_top_level_key_is_error() {
        let r = resolver(&[("ok", "OK")]);
        assert_eq!(
            r.resolve("missing_key"),
            Err(ResolveError::UnknownKey {
                key: "missing_key".into()
            })
        );
    }

    #[test]
    fn unknown_placeholder_left_verbatim() {
        let r = resolver(&[("x", "{undefinedKey}")]);
        assert_eq!(r.resolve("x").unwrap(), "{undefinedKey}");
    }

    #[test]
    fn locals_fill_placeholders() {
        let r = resolver(&[("greet", "Hello, {name}!")]);
        assert_eq!(
            r.resolve_with("greet", &[("name", "World")]).unwrap(),
            "Hello, World!"
        );
    }

    #[test]
    fn locals_override_table_entries() {
        let r = resolver(&[("identity", "game"), ("msg", "this {identity}")]);
        assert_eq!(
            r.resolve_with("msg", &[("identity", "story")]).unwrap(),
            "this story"
        );
    }

    #[test]
    fn locals_can_supply_top_level_key() {
        let r = resolver(&[("identity", "game")]);
        let locals: HashMap<String, String> =
            [("adhoc".to_string(), "a {identity}".to_string())].into();
        assert_eq!(r.resolve_with("adhoc", &locals).unwrap(), "a game");
    }

    #[test]
    fn nested_expansion_is_depth_first() {
        let r = resolver(&[
            ("_intro", "Your browser lacks"),
            ("_outro", ", so this {identity} is degraded."),
            ("identity", "game"),
            ("warning", "{_intro} storage{_outro}"),
        ]);
        assert_eq!(
            r.resolve("warning").unwrap(),
            "Your browser lacks storage, so this game is degraded."
        );
    }

    #[test]
    fn local_values_are_expanded_too() {
        let r = resolver(&[("identity", "game"), ("msg", "[{detail}]")]);
        assert_eq!(
            r.resolve_with("msg", &[("detail", "the {identity} ended")]).unwrap(),
            "[the game ended]"
        );
    }

    #[test]
    fn two_key_cycle() {
        let r = resolver(&[("a", "{b}"), ("b", "{a}")]);
        assert_eq!(chain(r.resolve("a").unwrap_err()), vec!["a", "b", "a"]);
        assert_eq!(chain(r.resolve("b").unwrap_err()), vec!["b", "a", "b"]);
    }

    #[test]
    fn self_reference_cycle() {
        let r = resolver(&[("a", "x{a}")]);
        assert_eq!(chain(r.resolve("a").unwrap_err()), vec!["a", "a"]);
    }

    #[test]
    fn cycle_below_root() {
        let r = resolver(&[("root", "<{a}>"), ("a", "{b}"), ("b", "{c}"), ("c", "{a}")]);
        assert_eq!(
            chain(r.resolve("root").unwrap_err()),
            vec!["root", "a", "b", "c", "a"]
        );
    }

    #[test]
    fn cycle_through_locals() {
        let r = resolver(&[("msg", "{detail}")]);
        let error = r.resolve_with("msg", &[("detail", "{msg}")]).unwrap_err();
        assert_eq!(chain(error), vec!["msg", "detail", "msg"]);
    }

    #[test]
    fn repeated_sibling_is_not_a_cycle() {
        let r = resolver(&[("x", "ab"), ("pair", "{x}{x}"), ("quad", "{pair}-{pair}")]);
        assert_eq!(r.resolve("quad").unwrap(), "abab-abab");
    }

    #[test]
    fn malformed_syntax_is_literal() {
        let r = resolver(&[("m", "{ {} {a-b} {unterminated"), ("a", "A")]);
        assert_eq!(r.resolve("m").unwrap(), "{ {} {a-b} {unterminated");
    }

    #[test]
    fn substituted_text_does_not_merge_with_template() {
        let r = resolver(&[("open", "{"), ("msg", "{open}name}")]);
        assert_eq!(r.resolve("msg").unwrap(), "{name}");
    }

    fn deep_chain(len: usize) -> StringTable {
        (0..len)
            .map(|i| (format!("k{i}"), format!("{{k{}}}", i + 1)))
            .chain(std::iter::once((format!("k{len}"), "end".to_string())))
            .collect()
    }

    #[test]
    fn deep_chain_resolves() {
        let r = Resolver::new(deep_chain(100_000));
        assert_eq!(r.resolve("k0").unwrap(), "end");
    }

    #[test]
    fn cycle_closing_a_deep_chain_reports_full_chain() {
        let table = deep_chain(20_000).with_overrides([("k20000", "{k0}")].into_iter().collect());
        let chain = chain(Resolver::new(table).resolve("k0").unwrap_err());
        assert_eq!(chain.len(), 20_002);
        assert_eq!(chain.first().map(String::as_str), Some("k0"));
        assert_eq!(chain.last().map(String::as_str), Some("k0"));
        assert_eq!(chain[20_000], "k20000");
    }

    #[test]
    fn key_is_reusable_after_its_expansion_finishes() {
        let r = resolver(&[("leaf", "L"), ("mid", "{leaf}"), ("top", "{mid}|{leaf}|{mid}")]);
        assert_eq!(r.resolve("top").unwrap(), "L|L|L");
    }

    #[test]
    fn has_checks_table_only() {
        let r = resolver(&[("ok", "OK")]);
        assert!(r.has("ok"));
        assert!(!r.has("name"));
    }

    #[test]
    fn resolver_is_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Resolver>();
    }

    #[test]
    fn concurrent_resolution_is_independent() {
        let r = resolver(&[("identity", "game"), ("msg", "this {identity} by {who}")]);
        std::thread::scope(|scope| {
            for who in ["alice", "bob", "carol"] {
                let r = r.clone();
                scope.spawn(move || {
                    let out = r.resolve_with("msg", &[("who", who)]).unwrap();
                    assert_eq!(out, format!("this game by {who}"));
                });
            }
        });
    }

    #[traced_test]
    #[test]
    fn cycle_is_logged() {
        let r = resolver(&[("a", "{b}"), ("b", "{a}")]);
        let _ = r.resolve("a");
        assert!(logs_contain("cyclic template"));
        assert!(logs_contain("a -> b -> a"));
    }
}
