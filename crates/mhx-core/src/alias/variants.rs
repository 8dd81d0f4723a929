//! Alias variant generation.
//!
//! A markup document can reference the same resource under many spellings:
//! raw, bracket-stripped, `cid:`-qualified, `@mhtml.blink`-suffixed, or
//! lightly percent-encoded. Every variant maps to the same output file.

use std::collections::BTreeSet;

use crate::naming::{path_basename, strip_brackets, CID_PREFIX, SYNTHETIC_DOMAIN_SUFFIX};

/// Generates every textually plausible spelling of `key` a document might
/// use to reference its resource.
///
/// An empty key yields no variants. All results are non-empty and
/// whitespace-trimmed.
pub fn generate_variants(key: &str) -> BTreeSet<String> {
    let mut variants = BTreeSet::new();
    let k = key.trim();
    if k.is_empty() {
        return variants;
    }

    let stripped = strip_brackets(k);
    variants.insert(k.to_string());
    variants.insert(stripped.to_string());

    let basename = path_basename(stripped);
    variants.insert(basename.to_string());

    let has_cid = stripped
        .get(..CID_PREFIX.len())
        .is_some_and(|head| head.eq_ignore_ascii_case(CID_PREFIX));
    if has_cid {
        variants.insert(stripped.to_string());
        variants.insert(stripped[CID_PREFIX.len()..].to_string());
    } else {
        variants.insert(format!("{CID_PREFIX}{stripped}"));
        variants.insert(format!("{CID_PREFIX}{basename}"));
    }

    if stripped.contains(SYNTHETIC_DOMAIN_SUFFIX) {
        variants.insert(stripped.to_string());
        variants.insert(stripped.replace(SYNTHETIC_DOMAIN_SUFFIX, ""));
        variants.insert(basename.to_string());
        variants.insert(basename.replace(SYNTHETIC_DOMAIN_SUFFIX, ""));
    } else {
        variants.insert(format!("{stripped}{SYNTHETIC_DOMAIN_SUFFIX}"));
        variants.insert(format!("{basename}{SYNTHETIC_DOMAIN_SUFFIX}"));
    }

    // Only the two escapes markup is seen to use for these identifiers;
    // general percent-decoding would corrupt legitimate path characters.
    variants.insert(stripped.replace("%40", "@").replace("%3A", ":"));

    variants.retain(|v| !v.trim().is_empty());
    variants
        .into_iter()
        .map(|v| v.trim().to_string())
        .collect()
}
