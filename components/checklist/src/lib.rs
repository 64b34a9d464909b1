//! Synapse framework status checklist.
//!
//! This crate provides the fixed checklist document printed by the
//! `snps-status` binary: a banner, seven labeled sections of feature
//! status lines, and four closing summary lines.
//!
//! # Overview
//!
//! - [`Section`] - One labeled group of status lines
//! - [`Checklist`] - The full document, built by [`Checklist::standard`]
//!
//! # Examples
//!
//! ```
//! use checklist::Checklist;
//!
//! let doc = Checklist::standard();
//! assert_eq!(doc.sections().len(), 7);
//!
//! let transcript = doc.transcript();
//! assert!(transcript.starts_with("⚙️ Testing Core Framework Components..."));
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![deny(unsafe_code)]

mod document;
mod section;

pub use document::Checklist;
pub use section::Section;
