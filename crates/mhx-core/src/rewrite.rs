//! Reference rewriting: one combined-pattern pass over markup text.
//!
//! Sequential independent `replace` calls over a shared string are wrong
//! twice over: a later replacement can match text an earlier one produced,
//! and overlapping aliases resolve by table iteration order instead of a
//! defined tie-break. A single alternation compiled longest-first has
//! neither problem: each input byte is consumed by at most one match, and
//! a full path alias always beats the basename it contains.

use std::collections::HashMap;

use anyhow::{Context, Result};
use regex::Regex;

use crate::alias::AliasTable;
use crate::naming::CID_PREFIX;

/// Compiled substitution pass over an [`AliasTable`].
pub struct Rewriter {
    pattern: Option<Regex>,
    targets: HashMap<String, String>,
}

impl Rewriter {
    /// Builds the combined pattern from `aliases`. Keys not already
    /// `cid:`-prefixed also match in `cid:`-prefixed form, resolved to the
    /// same target, so a stray `cid:` qualifier never survives rewriting.
    pub fn compile(aliases: &AliasTable) -> Result<Self> {
        let mut targets: HashMap<String, String> = HashMap::new();
        for (alias, target) in aliases.iter() {
            targets.insert(alias.to_string(), target.to_string());
        }
        // Synthesized cid: forms never shadow an alias the table itself
        // holds for that spelling.
        for (alias, target) in aliases.iter() {
            if !alias
                .get(..CID_PREFIX.len())
                .is_some_and(|head| head.eq_ignore_ascii_case(CID_PREFIX))
            {
                targets
                    .entry(format!("{CID_PREFIX}{alias}"))
                    .or_insert_with(|| target.to_string());
            }
        }

        if targets.is_empty() {
            return Ok(Self {
                pattern: None,
                targets,
            });
        }

        let mut keys: Vec<&str> = targets.keys().map(String::as_str).collect();
        // Longest first, so a full path alias wins over any substring of
        // it; equal lengths tie-break lexically for a stable pattern.
        keys.sort_by(|a, b| b.len().cmp(&a.len()).then_with(|| a.cmp(b)));

        let alternation = keys
            .iter()
            .map(|k| regex::escape(k))
            .collect::<Vec<_>>()
            .join("|");
        let pattern = Regex::new(&alternation).context("compiling alias pattern")?;

        Ok(Self {
            pattern: Some(pattern),
            targets,
        })
    }

    /// One pass over `text`: every alias occurrence becomes its resolved
    /// filename, everything else is left untouched.
    pub fn rewrite(&self, text: &str) -> String {
        let Some(pattern) = &self.pattern else {
            return text.to_string();
        };
        pattern
            .replace_all(text, |caps: &regex::Captures<'_>| {
                let matched = &caps[0];
                self.targets
                    .get(matched)
                    .cloned()
                    .unwrap_or_else(|| matched.to_string())
            })
            .into_owned()
    }
}
