//! Alias table: every spelling a document might use for a resource,
//! resolved to the one output filename chosen for it.

mod variants;

pub use variants::generate_variants;

use std::collections::HashMap;

/// Maps alias strings to output filenames.
///
/// Populated in envelope walk order with insert-if-absent semantics: the
/// first part to register an alias owns it, later parts never override.
/// Read-only once the rewrite stage begins.
#[derive(Debug, Default)]
pub struct AliasTable {
    entries: HashMap<String, String>,
}

impl AliasTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `alias` -> `target` unless the alias is empty or already
    /// claimed by an earlier part. Returns whether the entry was inserted.
    pub fn register(&mut self, alias: &str, target: &str) -> bool {
        let alias = alias.trim();
        if alias.is_empty() || self.entries.contains_key(alias) {
            return false;
        }
        self.entries.insert(alias.to_string(), target.to_string());
        true
    }

    /// Registers every variant of `key` (see [`generate_variants`]) for
    /// `target`, first-wins.
    pub fn register_variants(&mut self, key: &str, target: &str) {
        for variant in generate_variants(key) {
            self.register(&variant, target);
        }
    }

    pub fn resolve(&self, alias: &str) -> Option<&str> {
        self.entries.get(alias).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// All (alias, target) pairs, in no particular order. Rewriting
    /// imposes its own length-descending order; see `rewrite`.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}
