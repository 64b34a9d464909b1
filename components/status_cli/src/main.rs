//! Framework Status CLI
//!
//! Entry point for the status checklist printer. Parses CLI arguments
//! (there are none beyond --help/--version) and renders the checklist
//! to stdout.

use clap::Parser as ClapParser;
use status_cli::{Cli, Printer};

fn main() {
    let _cli = Cli::parse();

    let printer = Printer::new();
    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    if let Err(e) = printer.run(&mut out) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
