//! Framework Status CLI Library
//!
//! Provides the Printer struct and supporting modules for the status CLI.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod cli;
pub mod error;
pub mod printer;

pub use cli::Cli;
pub use error::{CliError, CliResult};
pub use printer::Printer;
