//! Command-line argument definitions
//!
//! The status printer takes no options and no positional arguments;
//! clap still provides `--help` and `--version`, and rejects anything
//! else as a usage error.

use clap::Parser;

/// Print the Synapse framework component status checklist.
#[derive(Parser, Debug)]
#[command(
    name = "snps-status",
    version,
    about = "Prints the framework component status checklist"
)]
pub struct Cli {}
