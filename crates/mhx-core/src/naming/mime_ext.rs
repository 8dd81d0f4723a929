//! MIME type to filename extension resolution.

use std::collections::HashMap;

/// Built-in MIME -> extension table for the types MHTML archives carry in
/// practice. Consulted before any registry lookup so common types get
/// predictable extensions (`image/jpeg` is always `.jpg`, never `.jpe`).
const MIME_EXTENSIONS: &[(&str, &str)] = &[
    ("text/html", ".html"),
    ("text/css", ".css"),
    ("application/javascript", ".js"),
    ("application/x-javascript", ".js"),
    ("text/javascript", ".js"),
    ("image/png", ".png"),
    ("image/jpeg", ".jpg"),
    ("image/gif", ".gif"),
    ("image/svg+xml", ".svg"),
    ("font/woff", ".woff"),
    ("font/woff2", ".woff2"),
    ("application/font-woff", ".woff"),
    ("application/octet-stream", ".bin"),
];

/// Existing extension of `name` (with leading dot), if any.
fn existing_extension(name: &str) -> Option<&str> {
    let basename = super::sanitize::path_basename(name);
    match basename.rfind('.') {
        Some(idx) if idx > 0 && idx + 1 < basename.len() => Some(&basename[idx..]),
        _ => None,
    }
}

/// Resolves the output extension for a part.
///
/// Lookup order: built-in table, then `extra` (user config), then the
/// `mime_guess` registry, then the existing extension on `fallback_name`,
/// then `.bin`.
pub fn guess_extension(
    content_type: &str,
    fallback_name: &str,
    extra: &HashMap<String, String>,
) -> String {
    let ct = content_type.trim().to_ascii_lowercase();
    if ct.is_empty() {
        return existing_extension(fallback_name).unwrap_or(".bin").to_string();
    }

    if let Some((_, ext)) = MIME_EXTENSIONS.iter().find(|(mime, _)| *mime == ct) {
        return (*ext).to_string();
    }

    if let Some(ext) = extra.get(&ct) {
        return if ext.starts_with('.') {
            ext.clone()
        } else {
            format!(".{ext}")
        };
    }

    if let Some(exts) = mime_guess::get_mime_extensions_str(&ct) {
        if let Some(ext) = exts.first() {
            return format!(".{ext}");
        }
    }

    existing_extension(fallback_name).unwrap_or(".bin").to_string()
}

/// Appends `ext` to `base` unless `base` already ends with it
/// (case-insensitive), so `logo.png` + `.png` stays `logo.png`.
pub fn apply_extension(base: &str, ext: &str) -> String {
    if ext.is_empty() || base.to_ascii_lowercase().ends_with(&ext.to_ascii_lowercase()) {
        base.to_string()
    } else {
        format!("{base}{ext}")
    }
}
