//! Integration test suite for the Synapse status checklist printer
//!
//! This crate provides integration tests that verify the checklist
//! document and the CLI printer work together correctly across
//! component boundaries.

/// Re-export components for test convenience
pub mod components {
    pub use checklist;
    pub use status_cli;
}
