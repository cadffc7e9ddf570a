//! Canonical casing for tag names that are not all-lowercase

use std::collections::HashMap;

/// Maps lower-cased tag names back to their canonical casing
/// (`fefunca` → `feFuncA`).
#[derive(Debug, Clone, Default)]
pub struct CaseAdjustTable {
    names: HashMap<String, String>,
}

impl CaseAdjustTable {
    pub fn new<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let names = names
            .into_iter()
            .map(|name| {
                let name = name.as_ref();
                (name.to_lowercase(), name.to_string())
            })
            .collect();
        Self { names }
    }

    /// Canonical form of a lower-cased tag name, if it has one.
    pub fn get(&self, lower: &str) -> Option<&str> {
        self.names.get(lower).map(String::as_str)
    }

    /// Canonical form of `lower`, or `lower` itself.
    pub fn adjust(&self, lower: String) -> String {
        match self.get(&lower) {
            Some(canonical) => canonical.to_string(),
            None => lower,
        }
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}
