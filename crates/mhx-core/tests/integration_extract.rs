//! Integration tests: build small MHTML archives on disk, run the full
//! extraction pipeline, and assert on the emitted files.

use std::fs;
use std::path::PathBuf;

use mhx_core::config::MhxConfig;
use mhx_core::{extract_archive, ExtractError};
use tempfile::tempdir;

const BOUNDARY: &str = "----MultipartBoundary--test";

fn archive_with_parts(parts: &[(&str, &[(&str, &str)], &str)]) -> Vec<u8> {
    let mut out = String::new();
    out.push_str("From: <Saved by MHX>\r\nMIME-Version: 1.0\r\n");
    out.push_str(&format!(
        "Content-Type: multipart/related; boundary=\"{BOUNDARY}\"\r\n\r\n"
    ));
    for (content_type, headers, body) in parts {
        out.push_str(&format!("--{BOUNDARY}\r\n"));
        out.push_str(&format!("Content-Type: {content_type}\r\n"));
        for (name, value) in *headers {
            out.push_str(&format!("{name}: {value}\r\n"));
        }
        out.push_str("\r\n");
        out.push_str(body);
        out.push_str("\r\n");
    }
    out.push_str(&format!("--{BOUNDARY}--\r\n"));
    out.into_bytes()
}

fn write_archive(dir: &std::path::Path, bytes: &[u8]) -> PathBuf {
    let path = dir.join("page.mhtml");
    fs::write(&path, bytes).unwrap();
    path
}

#[test]
fn two_part_archive_extracts_and_rewrites_inline_image() {
    let dir = tempdir().unwrap();
    let archive = write_archive(
        dir.path(),
        &archive_with_parts(&[
            (
                "text/html; charset=\"utf-8\"",
                &[("Content-Location", "https://example.com/index.html")],
                r#"<html><body><img src="cid:1"></body></html>"#,
            ),
            (
                "image/png",
                &[("Content-ID", "<1>"), ("Content-Transfer-Encoding", "base64")],
                "iVBORw0KGgo=",
            ),
        ]),
    );

    let report = extract_archive(&archive, None, &MhxConfig::default()).unwrap();
    assert_eq!(report.dest_dir, dir.path().join("page"));
    assert_eq!(report.files.len(), 2);
    assert_eq!(report.formatting_fallbacks, 0);

    let html_file = report.files.iter().find(|f| f.is_markup).unwrap();
    let png_file = report.files.iter().find(|f| !f.is_markup).unwrap();
    assert!(html_file.filename.ends_with(".html"));
    assert!(png_file.filename.ends_with(".png"));

    let html = fs::read_to_string(report.dest_dir.join(&html_file.filename)).unwrap();
    assert!(
        html.contains(&format!("src=\"{}\"", png_file.filename)),
        "image reference must point at the extracted file: {html}"
    );
    assert!(!html.contains("cid:"));

    let png = fs::read(report.dest_dir.join(&png_file.filename)).unwrap();
    assert_eq!(png, b"\x89PNG\r\n\x1a\n");
}

#[test]
fn markup_output_is_pretty_printed() {
    let dir = tempdir().unwrap();
    let archive = write_archive(
        dir.path(),
        &archive_with_parts(&[(
            "text/html",
            &[("Content-Location", "https://example.com/index.html")],
            "<html><body><p>hello</p></body></html>",
        )]),
    );

    let report = extract_archive(&archive, None, &MhxConfig::default()).unwrap();
    let html_file = report.files.iter().find(|f| f.is_markup).unwrap();
    let html = fs::read_to_string(report.dest_dir.join(&html_file.filename)).unwrap();
    assert!(html.contains("\n  <body>"), "expected indentation: {html}");
}

#[test]
fn pretty_print_can_be_disabled() {
    let dir = tempdir().unwrap();
    let archive = write_archive(
        dir.path(),
        &archive_with_parts(&[(
            "text/html",
            &[("Content-Location", "https://example.com/index.html")],
            "<html><body><p>hello</p></body></html>",
        )]),
    );

    let cfg = MhxConfig {
        pretty_print: false,
        ..MhxConfig::default()
    };
    let report = extract_archive(&archive, None, &cfg).unwrap();
    let html_file = report.files.iter().find(|f| f.is_markup).unwrap();
    let html = fs::read_to_string(report.dest_dir.join(&html_file.filename)).unwrap();
    assert_eq!(html.trim(), "<html><body><p>hello</p></body></html>");
}

#[test]
fn formatting_failure_still_writes_substituted_markup() {
    // Nesting beyond the pretty-printer's depth bound makes it reject the
    // document; the file must still land on disk, references rewritten.
    let mut body = String::from(r#"<img src="cid:deep-img">"#);
    for _ in 0..600 {
        body.insert_str(0, "<div>");
    }
    let dir = tempdir().unwrap();
    let archive = write_archive(
        dir.path(),
        &archive_with_parts(&[
            (
                "text/html",
                &[("Content-Location", "https://example.com/index.html")],
                &body,
            ),
            ("image/gif", &[("Content-ID", "<deep-img>")], "GIF89a"),
        ]),
    );

    let report = extract_archive(&archive, None, &MhxConfig::default()).unwrap();
    assert_eq!(report.formatting_fallbacks, 1);

    let html_file = report.files.iter().find(|f| f.is_markup).unwrap();
    let html = fs::read_to_string(report.dest_dir.join(&html_file.filename)).unwrap();
    let gif_file = report.files.iter().find(|f| !f.is_markup).unwrap();
    assert!(html.contains(&gif_file.filename));
    assert!(!html.contains("cid:deep-img"));
}

#[test]
fn missing_archive_reports_input_error_and_writes_nothing() {
    let dir = tempdir().unwrap();
    let archive = dir.path().join("absent.mhtml");
    let err = extract_archive(&archive, None, &MhxConfig::default()).unwrap_err();
    assert!(matches!(err, ExtractError::InputMissing(_)));
    assert!(!dir.path().join("absent").exists());
}

#[test]
fn explicit_destination_override_is_used() {
    let dir = tempdir().unwrap();
    let archive = write_archive(
        dir.path(),
        &archive_with_parts(&[(
            "text/html",
            &[("Content-Location", "https://example.com/index.html")],
            "<html></html>",
        )]),
    );
    let dest = dir.path().join("custom/out");
    let report = extract_archive(&archive, Some(&dest), &MhxConfig::default()).unwrap();
    assert_eq!(report.dest_dir, dest);
    assert!(dest.join(&report.files[0].filename).exists());
}

#[test]
fn prior_run_files_force_numbered_suffixes() {
    let dir = tempdir().unwrap();
    let bytes = archive_with_parts(&[(
        "text/html",
        &[("Content-Location", "index.html")],
        "<html></html>",
    )]);
    let archive = write_archive(dir.path(), &bytes);

    let first = extract_archive(&archive, None, &MhxConfig::default()).unwrap();
    let second = extract_archive(&archive, None, &MhxConfig::default()).unwrap();
    assert_eq!(first.files[0].filename, "index.html");
    assert_eq!(second.files[0].filename, "index_1.html");
    assert!(first.dest_dir.join("index.html").exists());
    assert!(first.dest_dir.join("index_1.html").exists());
}

#[test]
fn metadata_less_part_gets_synthetic_filename() {
    let dir = tempdir().unwrap();
    let archive = write_archive(
        dir.path(),
        &archive_with_parts(&[("application/octet-stream", &[], "payload")]),
    );
    let report = extract_archive(&archive, None, &MhxConfig::default()).unwrap();
    assert_eq!(report.files.len(), 1);
    assert!(
        report.files[0].filename.starts_with("resource_"),
        "got {}",
        report.files[0].filename
    );
    assert!(report.files[0].filename.ends_with(".bin"));
}
