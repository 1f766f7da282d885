#![forbid(unsafe_code)]

//! Localized string tables with recursive `{NAME}` templates.
//!
//! # Role in Quire
//! `quire-l10n` turns a string key into display text. Templates may
//! reference other keys or caller-supplied locals with `{NAME}`; expansion
//! is depth-first and stops with [`ResolveError::CyclicTemplate`] instead
//! of looping when a key reaches itself.
//!
//! # How it fits in the system
//! A [`StringTable`] is built once, from [`default_table`] optionally
//! layered with translator overrides loaded from TOML or JSON, and then
//! shared read-only behind a [`Resolver`]. [`lint`] checks a whole table
//! ahead of time so a bad translation can be rejected at load rather than
//! at first display.
//!
//! # Example
//!
//! ```
//! use quire_l10n::{Resolver, default_table};
//!
//! let resolver = Resolver::new(default_table());
//! assert_eq!(
//!     resolver.resolve("errorSaveIdMismatch").unwrap(),
//!     "save is from the wrong game"
//! );
//! ```

pub mod builtin;
pub mod error;
pub mod lint;
pub mod lookup;
pub mod placeholder;
pub mod resolver;
pub mod table;

pub use builtin::{DEFAULT_STRINGS, default_table};
pub use error::{ResolveError, TableError};
pub use lint::{DanglingRef, LintReport, lint};
pub use lookup::{Lookup, NO_LOCALS};
pub use placeholder::{Placeholder, Segment, Segments, scan};
pub use resolver::Resolver;
pub use table::{StringTable, is_fragment_key};
