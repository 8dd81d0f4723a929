//! Output filename derivation for extracted parts.
//!
//! Sanitizes Content-Location/Content-ID values into portable filenames,
//! resolves extensions from the content type, and de-duplicates against
//! the destination directory.

mod mime_ext;
mod sanitize;
mod unique;

pub use mime_ext::{apply_extension, guess_extension};
pub use sanitize::{
    path_basename, sanitize_filename, strip_brackets, strip_cid_prefix, CID_PREFIX,
    SYNTHETIC_DOMAIN_SUFFIX,
};
pub use unique::NameClaims;
