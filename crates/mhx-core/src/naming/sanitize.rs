//! Portable filename sanitization for extracted resources.

/// Synthetic domain suffix some archivers append to Content-Location-like
/// identifiers (Chromium's MHTML writer).
pub const SYNTHETIC_DOMAIN_SUFFIX: &str = "@mhtml.blink";

/// Inline-reference scheme prefix used by markup to address parts by Content-ID.
pub const CID_PREFIX: &str = "cid:";

/// Strips a leading `cid:` prefix (case-insensitive), if present.
pub fn strip_cid_prefix(name: &str) -> &str {
    match name.get(..CID_PREFIX.len()) {
        Some(head) if head.eq_ignore_ascii_case(CID_PREFIX) => &name[CID_PREFIX.len()..],
        _ => name,
    }
}

/// Strips surrounding whitespace and enclosing `<` `>` delimiters
/// (Content-ID headers are conventionally written as `<token>`).
pub fn strip_brackets(name: &str) -> &str {
    name.trim().trim_matches(|c| c == '<' || c == '>').trim()
}

/// Sanitizes a raw name into a portable filename base.
///
/// - Strips a leading `cid:` prefix and enclosing angle brackets
/// - Removes the `@mhtml.blink` synthetic domain suffix
/// - Replaces `< > : " / \ | ? *` with `_`
/// - Falls back to `"resource"` when nothing usable remains
pub fn sanitize_filename(name: &str) -> String {
    let stripped = strip_brackets(strip_cid_prefix(name.trim()));
    let stripped = stripped.replace(SYNTHETIC_DOMAIN_SUFFIX, "");

    let mut out = String::with_capacity(stripped.len());
    for c in stripped.chars() {
        if matches!(c, '<' | '>' | ':' | '"' | '/' | '\\' | '|' | '?' | '*') {
            out.push('_');
        } else {
            out.push(c);
        }
    }

    let trimmed = out.trim();
    if trimmed.is_empty() {
        "resource".to_string()
    } else {
        trimmed.to_string()
    }
}

/// Path basename under either slash convention (the substring after the
/// last `/` or `\`).
pub fn path_basename(name: &str) -> &str {
    match name.rfind(['/', '\\']) {
        Some(idx) => &name[idx + 1..],
        None => name,
    }
}
