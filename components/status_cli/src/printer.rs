//! Printer orchestration for the status checklist
//!
//! The Printer owns the checklist document and drives rendering. It is
//! the seam the integration tests use: tests render into an in-memory
//! buffer, the binary renders into stdout.

use crate::error::CliResult;
use checklist::Checklist;
use std::io::Write;

/// Runs the checklist print sequence to completion.
///
/// One synchronous pass over fixed data; holds no mutable state, so a
/// single Printer can run any number of times with identical output.
pub struct Printer {
    document: Checklist,
}

impl Printer {
    /// Create a printer for the standard checklist.
    ///
    /// # Example
    /// ```
    /// use status_cli::Printer;
    ///
    /// let printer = Printer::new();
    /// let mut out = Vec::new();
    /// printer.run(&mut out).unwrap();
    /// ```
    pub fn new() -> Self {
        Self {
            document: Checklist::standard(),
        }
    }

    /// Write the full transcript to `w`.
    ///
    /// # Errors
    /// Returns `CliError::IoError` if the writer fails; the run is not
    /// retried and any partial output stands.
    pub fn run(&self, w: &mut impl Write) -> CliResult<()> {
        self.document.render_to(w)?;
        Ok(())
    }

    /// The checklist document this printer renders.
    pub fn document(&self) -> &Checklist {
        &self.document
    }
}

impl Default for Printer {
    fn default() -> Self {
        Self::new()
    }
}
