#![forbid(unsafe_code)]

pub mod cli;
pub mod error;
pub mod logging;
pub mod strings;
pub mod tables;
pub mod text;

pub use cli::{Cli, run, run_with_output};
pub use error::{CliError, Result};
