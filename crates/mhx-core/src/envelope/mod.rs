//! MHTML envelope parsing.
//!
//! Thin wrapper around `mailparse`: parses the multipart container and
//! flattens its tree into an ordered sequence of owned [`Part`]s. Only the
//! headers the extractor needs (Content-Type, Content-ID, Content-Location)
//! survive the flattening.

mod part;

pub use part::{is_markup_type, Part};

use mailparse::{MailHeaderMap, ParsedMail};

use crate::error::ExtractError;

/// Parses raw container bytes into parts, depth-first walk order.
///
/// Container nodes (multipart/*) and parts with an empty payload are
/// skipped but still advance the walk index, so synthetic names derived
/// from the index stay stable against the envelope's own numbering.
pub fn parse_envelope(raw: &[u8]) -> Result<Vec<Part>, ExtractError> {
    let mail = mailparse::parse_mail(raw)?;
    let mut parts = Vec::new();
    let mut index = 0usize;
    collect_parts(&mail, &mut index, &mut parts);
    Ok(parts)
}

fn collect_parts(node: &ParsedMail<'_>, index: &mut usize, out: &mut Vec<Part>) {
    let own_index = *index;
    *index += 1;

    if node.subparts.is_empty() {
        if let Some(part) = leaf_to_part(node, own_index) {
            out.push(part);
        }
    } else {
        for sub in &node.subparts {
            collect_parts(sub, index, out);
        }
    }
}

fn leaf_to_part(node: &ParsedMail<'_>, index: usize) -> Option<Part> {
    let payload = match node.get_body_raw() {
        Ok(bytes) => bytes,
        Err(err) => {
            tracing::warn!(index, "skipping undecodable part payload: {err}");
            return None;
        }
    };
    if payload.is_empty() {
        return None;
    }

    let content_type = node.ctype.mimetype.to_ascii_lowercase();
    let text = if is_markup_type(&content_type) {
        // mailparse applies the declared charset and substitutes
        // replacement characters for undecodable bytes. If it refuses
        // outright, recover the payload lossily as UTF-8 instead of
        // losing the document.
        Some(match node.get_body() {
            Ok(body) => body,
            Err(err) => {
                tracing::warn!(index, "charset decode failed, recovering lossily: {err}");
                String::from_utf8_lossy(&payload).into_owned()
            }
        })
    } else {
        None
    };

    Some(Part {
        index,
        content_type,
        content_id: non_empty(node.headers.get_first_value("Content-ID")),
        content_location: non_empty(node.headers.get_first_value("Content-Location")),
        payload,
        text,
    })
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}
