//! Resource materialization: assigns each part a collision-free output
//! filename, classifies it, and builds the alias table the rewrite stage
//! substitutes from.

use std::path::Path;

use crate::alias::AliasTable;
use crate::config::MhxConfig;
use crate::envelope::{is_markup_type, Part};
use crate::naming::{
    apply_extension, guess_extension, path_basename, sanitize_filename, NameClaims,
};

/// Write-ready record derived from one part. The markup/opaque decision is
/// made here, once, and carried on the record; the write stage never
/// re-inspects content types.
#[derive(Debug)]
pub struct ResourceRecord {
    /// Output filename, unique within the destination directory.
    pub filename: String,
    /// Markup records are alias-substituted and pretty-printed; opaque
    /// records are written verbatim.
    pub is_markup: bool,
    /// Transfer-decoded payload bytes.
    pub payload: Vec<u8>,
    /// Charset-decoded text (markup records only).
    pub text: Option<String>,
}

/// Walks parts in envelope order producing one [`ResourceRecord`] each and
/// the fully populated [`AliasTable`].
///
/// Alias registration follows the same order, so the table's first-wins
/// invariant is anchored to the envelope walk: when two parts share a
/// Content-Location or Content-ID, the earlier part owns every shared
/// alias and the later one stays reachable only through its own filename.
pub fn materialize(
    parts: &[Part],
    dest_dir: &Path,
    config: &MhxConfig,
) -> (Vec<ResourceRecord>, AliasTable) {
    let mut records = Vec::with_capacity(parts.len());
    let mut aliases = AliasTable::new();
    let mut claims = NameClaims::new();

    for part in parts {
        let synthetic = format!("resource_{}", part.index);
        let raw_name = part
            .content_location
            .as_deref()
            .or(part.content_id.as_deref())
            .unwrap_or(&synthetic);

        let base_name = sanitize_filename(raw_name);
        let ext = guess_extension(&part.content_type, &base_name, &config.extra_extensions);
        let candidate = apply_extension(&base_name, &ext);
        let filename = claims.claim_unique(dest_dir, &candidate);

        if let Some(loc) = &part.content_location {
            if aliases.resolve(loc.trim()).is_some() {
                tracing::debug!(
                    part = part.index,
                    location = %loc,
                    "content-location already claimed by an earlier part"
                );
            }
            aliases.register_variants(loc, &filename);
        }
        if let Some(cid) = &part.content_id {
            aliases.register_variants(cid, &filename);
        }
        aliases.register(&base_name, &filename);
        aliases.register(path_basename(&base_name), &filename);

        records.push(ResourceRecord {
            filename,
            is_markup: is_markup_type(&part.content_type),
            payload: part.payload.clone(),
            text: part.text.clone(),
        });
    }

    (records, aliases)
}
