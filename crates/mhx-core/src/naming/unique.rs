//! On-disk filename de-duplication.

use std::collections::HashSet;
use std::path::Path;

/// Tracks filenames claimed during the current run so two parts that
/// sanitize to the same name cannot collide before either is written.
/// Disk existence covers prior runs; the claimed set covers this one.
#[derive(Debug, Default)]
pub struct NameClaims {
    claimed: HashSet<String>,
}

impl NameClaims {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `filename` if free, otherwise the first `base_N.ext`
    /// (N = 1, 2, ...) that exists neither on disk nor in this run's
    /// claims. The returned name is recorded as claimed.
    pub fn claim_unique(&mut self, dest_dir: &Path, filename: &str) -> String {
        let (base, ext) = split_extension(filename);
        let mut candidate = filename.to_string();
        let mut n = 1u32;
        while self.claimed.contains(&candidate) || dest_dir.join(&candidate).exists() {
            candidate = format!("{base}_{n}{ext}");
            n += 1;
        }
        self.claimed.insert(candidate.clone());
        candidate
    }
}

/// Splits `name.ext` into (`name`, `.ext`); no-dot names split as
/// (`name`, ``).
fn split_extension(filename: &str) -> (&str, &str) {
    match filename.rfind('.') {
        Some(idx) if idx > 0 => (&filename[..idx], &filename[idx..]),
        _ => (filename, ""),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn same_run_collisions_get_suffixes() {
        let dir = tempfile::tempdir().unwrap();
        let mut claims = NameClaims::new();
        assert_eq!(claims.claim_unique(dir.path(), "logo.png"), "logo.png");
        assert_eq!(claims.claim_unique(dir.path(), "logo.png"), "logo_1.png");
        assert_eq!(claims.claim_unique(dir.path(), "logo.png"), "logo_2.png");
    }

    #[test]
    fn existing_file_on_disk_forces_suffix() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("page.html"), b"old").unwrap();
        let mut claims = NameClaims::new();
        assert_eq!(claims.claim_unique(dir.path(), "page.html"), "page_1.html");
    }

    #[test]
    fn extensionless_names() {
        let dir = tempfile::tempdir().unwrap();
        let mut claims = NameClaims::new();
        assert_eq!(claims.claim_unique(dir.path(), "blob"), "blob");
        assert_eq!(claims.claim_unique(dir.path(), "blob"), "blob_1");
    }

    #[test]
    fn split_keeps_dot_with_extension() {
        assert_eq!(split_extension("a.png"), ("a", ".png"));
        assert_eq!(split_extension("archive.tar.gz"), ("archive.tar", ".gz"));
        assert_eq!(split_extension(".hidden"), (".hidden", ""));
        assert_eq!(split_extension("noext"), ("noext", ""));
    }
}
