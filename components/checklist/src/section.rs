//! Checklist sections

use serde::{Deserialize, Serialize};

/// One labeled group of status lines in the checklist.
///
/// A section renders as its header line followed by its item lines, in
/// declaration order. Sections are constant data; nothing mutates them
/// at runtime.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Section {
    /// Section header line, e.g. `1. 🏃 Runtime Engine`
    pub header: String,
    /// Ordered status lines, each of the form `✅ <feature claim>`
    pub items: Vec<String>,
}

impl Section {
    /// Create a section from constant data.
    pub fn new(header: &str, items: &[&str]) -> Self {
        Self {
            header: header.to_string(),
            items: items.iter().map(|s| s.to_string()).collect(),
        }
    }

    /// Number of status lines in this section.
    pub fn item_count(&self) -> usize {
        self.items.len()
    }

    /// The section name with the leading number and emoji stripped,
    /// e.g. `Runtime Engine` for the header `1. 🏃 Runtime Engine`.
    pub fn name(&self) -> &str {
        // Header layout is "<n>. <emoji> <Name>": the name starts after
        // the second space.
        let mut spaces = 0;
        for (i, ch) in self.header.char_indices() {
            if ch == ' ' {
                spaces += 1;
                if spaces == 2 {
                    return &self.header[i + 1..];
                }
            }
        }
        &self.header
    }
}
