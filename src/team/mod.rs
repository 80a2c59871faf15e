//! Team name directory
//!
//! Explicit lookup of display names for team identifiers. Unknown teams
//! surface as `Lookup::Unknown` so the presentation layer decides how to
//! render them; raw keys are never silently passed through as names.

use std::collections::HashMap;

/// Result of a directory lookup
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Lookup {
    /// Display name on file
    Found(String),
    /// No mapping for this identifier
    Unknown,
}

/// Identifier to display name directory
#[derive(Debug, Clone, Default)]
pub struct TeamDirectory {
    names: HashMap<String, String>,
}

impl TeamDirectory {
    pub fn new(names: HashMap<String, String>) -> Self {
        Self { names }
    }

    pub fn lookup(&self, id: &str) -> Lookup {
        match self.names.get(id) {
            Some(name) => Lookup::Found(name.clone()),
            None => Lookup::Unknown,
        }
    }

    /// Display name, or a marked-up fallback chosen by the caller's format
    pub fn display(&self, id: &str) -> String {
        match self.lookup(id) {
            Lookup::Found(name) => name,
            Lookup::Unknown => format!("{id} (unmapped)"),
        }
    }
}
