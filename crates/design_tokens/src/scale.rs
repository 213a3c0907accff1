//! Named token ramps shared by the non-color groups.

use serde::{Serialize, Serializer};

/// Ordered set of named token values, such as a spacing ramp.
///
/// Serializes as a JSON object in declaration order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TokenScale {
    entries: &'static [(&'static str, &'static str)],
}

impl TokenScale {
    /// Builds a scale over a static `(name, value)` table.
    pub const fn new(entries: &'static [(&'static str, &'static str)]) -> Self {
        Self { entries }
    }

    /// Returns the value stored under `name`.
    pub fn get(&self, name: &str) -> Option<&'static str> {
        self.entries
            .iter()
            .find(|(entry, _)| *entry == name)
            .map(|(_, value)| *value)
    }

    /// Iterates `(name, value)` pairs in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &'static str)> {
        self.entries.iter().copied()
    }
}

impl Serialize for TokenScale {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_map(self.iter())
    }
}
