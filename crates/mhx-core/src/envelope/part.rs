//! Owned view of one envelope part.

/// One unit extracted from the MHTML container: the page markup itself or
/// an embedded resource. Immutable once parsed; source of truth for one
/// output file.
#[derive(Debug, Clone)]
pub struct Part {
    /// Position in the depth-first walk of the multipart tree (container
    /// nodes count, so indices match the envelope's own numbering).
    pub index: usize,
    /// Lowercased MIME essence, e.g. `text/html` or `image/png`.
    pub content_type: String,
    /// Raw `Content-ID` header value, brackets included, if present.
    pub content_id: Option<String>,
    /// Raw `Content-Location` header value, if present.
    pub content_location: Option<String>,
    /// Transfer-decoded payload bytes.
    pub payload: Vec<u8>,
    /// Charset-decoded payload, captured at parse time for markup parts
    /// only (undecodable bytes already replaced).
    pub text: Option<String>,
}

/// Whether a content type is markup and therefore subject to reference
/// rewriting. Everything else is written verbatim.
pub fn is_markup_type(content_type: &str) -> bool {
    content_type.to_ascii_lowercase().contains("html")
}
