#![forbid(unsafe_code)]

//! Whole-table checks: cycles, dangling references, unused fragments.
//!
//! Resolution only detects a cycle when a caller happens to expand one of
//! its keys. [`lint`] walks the reference graph of every key up front so
//! a broken table can be rejected at load time.
//!
//! Dangling references are reported, not rejected: a template may name a
//! placeholder that callers always supply as a local.

use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet};

#[cfg(feature = "serde")]
use serde::Serialize;

use crate::placeholder::placeholder_names;
use crate::table::{StringTable, is_fragment_key};

/// A placeholder that names no key in the table.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct DanglingRef {
    /// Key whose template contains the placeholder.
    pub key: String,
    /// The placeholder name.
    pub placeholder: String,
}

/// Result of [`lint`]. All lists are sorted.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct LintReport {
    /// Total number of keys checked.
    pub total_keys: usize,
    /// Placeholders with no table entry.
    pub dangling: Vec<DanglingRef>,
    /// Closed reference loops, each starting and ending at its smallest key.
    pub cycles: Vec<Vec<String>>,
    /// Keys following the leading-underscore fragment convention.
    pub fragments: Vec<String>,
    /// Fragments no template refers to.
    pub unused_fragments: Vec<String>,
}

impl LintReport {
    /// A table is clean when no key can loop back on itself.
    #[must_use]
    pub fn is_clean(&self) -> bool {
        self.cycles.is_empty()
    }
}

/// Rotate a closed loop `[k0, .., kn, k0]` so it starts at its smallest key.
fn canonical_cycle(open_loop: &[&str]) -> Vec<String> {
    let start = open_loop
        .iter()
        .enumerate()
        .min_by_key(|(_, key)| **key)
        .map_or(0, |(i, _)| i);
    let mut cycle: Vec<String> = open_loop[start..]
        .iter()
        .chain(&open_loop[..start])
        .map(|key| (*key).to_string())
        .collect();
    if let Some(first) = cycle.first().cloned() {
        cycle.push(first);
    }
    cycle
}

/// Every closed loop reachable from `roots`, canonicalized and deduplicated.
///
/// Iterative DFS with back-edge detection over an explicit
/// `(key, next_edge)` stack, so chain depth costs heap, not call stack.
fn find_cycles<'a>(
    roots: &[&'a str],
    edges: &BTreeMap<&'a str, Vec<&'a str>>,
) -> BTreeSet<Vec<String>> {
    let mut visited: HashSet<&str> = HashSet::new();
    // Key -> its index in `path` while the key is being walked.
    let mut on_path: HashMap<&str, usize> = HashMap::new();
    let mut cycles = BTreeSet::new();

    for &root in roots {
        if visited.contains(root) {
            continue;
        }

        let mut stack: Vec<(&str, usize)> = vec![(root, 0)];
        let mut path: Vec<&str> = Vec::new();

        while let Some((node, idx)) = stack.last_mut() {
            let node = *node;
            if *idx == 0 {
                visited.insert(node);
                on_path.insert(node, path.len());
                path.push(node);
            }

            let targets = edges.get(node).map_or(&[][..], Vec::as_slice);
            if *idx < targets.len() {
                let next = targets[*idx];
                *idx += 1;
                if let Some(&pos) = on_path.get(next) {
                    cycles.insert(canonical_cycle(&path[pos..]));
                } else if !visited.contains(next) {
                    stack.push((next, 0));
                }
            } else {
                on_path.remove(node);
                path.pop();
                stack.pop();
            }
        }
    }

    cycles
}

/// Check every key of `table`.
///
/// Each back edge of the reference graph is reported as one cycle. The
/// walk enters every key once, so the cost is linear in the number of
/// placeholder references and independent of chain depth.
#[must_use]
pub fn lint(table: &StringTable) -> LintReport {
    let mut dangling = Vec::new();
    let mut referenced: BTreeSet<&str> = BTreeSet::new();
    let mut edges: BTreeMap<&str, Vec<&str>> = BTreeMap::new();

    for key in table.keys() {
        let template = table.get(key).unwrap_or_default();
        let mut targets: Vec<&str> = Vec::new();
        for name in placeholder_names(template) {
            if table.has(name) {
                referenced.insert(name);
                if !targets.contains(&name) {
                    targets.push(name);
                }
            } else {
                dangling.push(DanglingRef {
                    key: key.to_string(),
                    placeholder: name.to_string(),
                });
            }
        }
        targets.sort_unstable();
        edges.insert(key, targets);
    }

    let cycles = find_cycles(&table.keys(), &edges);

    dangling.sort();
    dangling.dedup();

    let fragments: Vec<String> = table
        .keys()
        .into_iter()
        .filter(|key| is_fragment_key(key))
        .map(str::to_string)
        .collect();
    let unused_fragments = fragments
        .iter()
        .filter(|key| !referenced.contains(key.as_str()))
        .cloned()
        .collect();

    let report = LintReport {
        total_keys: table.len(),
        dangling,
        cycles: cycles.into_iter().collect(),
        fragments,
        unused_fragments,
    };
    tracing::debug!(
        keys = report.total_keys,
        cycles = report.cycles.len(),
        dangling = report.dangling.len(),
        "linted string table"
    );
    report
}
