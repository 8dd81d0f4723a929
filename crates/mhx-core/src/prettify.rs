//! HTML pretty-printing.
//!
//! Parses with `html5ever` (error-recovering, never fails on malformed
//! input) and re-emits the DOM indented, one element per line. `script`,
//! `style`, and `textarea` content is written verbatim; a `pre` subtree —
//! which can hold element children whose whitespace is significant — is
//! serialized inline, untouched. Output is a fixed point: pretty-printing
//! its own output yields itself.
//!
//! The only hard failure is markup nested beyond [`MAX_DEPTH`]; callers
//! treat any failure as "write the text unformatted" (see `extract`).

use std::fmt::Write as _;

use anyhow::{bail, Result};
use html5ever::parse_document;
use html5ever::tendril::TendrilSink;
use markup5ever_rcdom::{Handle, NodeData, RcDom};

/// Nesting bound; deeper trees risk blowing the stack during the walk.
const MAX_DEPTH: usize = 512;

/// Void elements: emitted without a closing tag.
const VOID_ELEMENTS: &[&str] = &[
    "area", "base", "br", "col", "embed", "hr", "img", "input", "link", "meta", "param", "source",
    "track", "wbr",
];

/// Elements whose content is text-only in the parsed tree and written
/// verbatim. `pre` is not among them: it is a normal element that can
/// contain markup, and is serialized inline instead.
const RAW_TEXT_ELEMENTS: &[&str] = &["script", "style", "textarea"];

/// Re-indents `input` as readable HTML.
///
/// `indent_width` spaces per nesting level. Returns an error only for
/// pathologically deep markup; the caller falls back to the unformatted
/// text.
pub fn prettify_html(input: &str, indent_width: usize) -> Result<String> {
    let dom: RcDom = parse_document(RcDom::default(), Default::default()).one(input);
    let mut out = String::with_capacity(input.len() + input.len() / 4);
    for child in dom.document.children.borrow().iter() {
        write_node(&mut out, child, 0, indent_width)?;
    }
    Ok(out)
}

fn write_node(out: &mut String, node: &Handle, depth: usize, indent_width: usize) -> Result<()> {
    if depth > MAX_DEPTH {
        bail!("markup nesting exceeds {MAX_DEPTH} levels");
    }

    match &node.data {
        NodeData::Document => {
            for child in node.children.borrow().iter() {
                write_node(out, child, depth, indent_width)?;
            }
        }
        NodeData::Doctype { name, .. } => {
            let _ = writeln!(out, "<!DOCTYPE {name}>");
        }
        NodeData::Text { contents } => {
            let text = contents.borrow();
            let trimmed = text.trim();
            if !trimmed.is_empty() {
                indent(out, depth, indent_width);
                out.push_str(&escape_text(trimmed));
                out.push('\n');
            }
        }
        NodeData::Comment { contents } => {
            indent(out, depth, indent_width);
            let _ = writeln!(out, "<!--{contents}-->");
        }
        NodeData::Element { name, .. } => {
            let tag = name.local.to_string();
            indent(out, depth, indent_width);
            write_open_tag(out, &tag, node);

            if VOID_ELEMENTS.contains(&tag.as_str()) {
                out.push('\n');
                return Ok(());
            }

            if tag == "pre" {
                write_pre_content(out, node, depth)?;
                let _ = writeln!(out, "</{tag}>");
                return Ok(());
            }

            out.push('\n');
            if RAW_TEXT_ELEMENTS.contains(&tag.as_str()) {
                write_raw_children(out, node);
            } else {
                for child in node.children.borrow().iter() {
                    write_node(out, child, depth + 1, indent_width)?;
                }
            }

            indent(out, depth, indent_width);
            let _ = writeln!(out, "</{tag}>");
        }
        NodeData::ProcessingInstruction { .. } => {}
    }
    Ok(())
}

/// Emits a `pre` subtree inline, immediately after the open tag and with
/// the closing tag landing right after the content, so no indentation
/// whitespace leaks into it.
///
/// The parser drops one newline directly after `<pre>`, so content that
/// genuinely starts with one is re-emitted with a doubled newline to
/// survive the next parse.
fn write_pre_content(out: &mut String, node: &Handle, depth: usize) -> Result<()> {
    if let Some(first) = node.children.borrow().first() {
        if let NodeData::Text { contents } = &first.data {
            if contents.borrow().starts_with('\n') {
                out.push('\n');
            }
        }
    }
    for child in node.children.borrow().iter() {
        write_inline(out, child, depth + 1)?;
    }
    Ok(())
}

/// Verbatim inline serialization: text unaltered (escaped), elements with
/// their tags but no added indentation or line breaks.
fn write_inline(out: &mut String, node: &Handle, depth: usize) -> Result<()> {
    if depth > MAX_DEPTH {
        bail!("markup nesting exceeds {MAX_DEPTH} levels");
    }

    match &node.data {
        NodeData::Text { contents } => {
            out.push_str(&escape_text(&contents.borrow()));
        }
        NodeData::Comment { contents } => {
            let _ = write!(out, "<!--{contents}-->");
        }
        NodeData::Element { name, .. } => {
            let tag = name.local.to_string();
            write_open_tag(out, &tag, node);
            if !VOID_ELEMENTS.contains(&tag.as_str()) {
                for child in node.children.borrow().iter() {
                    write_inline(out, child, depth + 1)?;
                }
                let _ = write!(out, "</{tag}>");
            }
        }
        _ => {}
    }
    Ok(())
}

fn write_open_tag(out: &mut String, tag: &str, node: &Handle) {
    out.push('<');
    out.push_str(tag);
    if let NodeData::Element { attrs, .. } = &node.data {
        for attr in attrs.borrow().iter() {
            let _ = write!(out, " {}=\"{}\"", attr.name.local, escape_attr(&attr.value));
        }
    }
    out.push('>');
}

/// Emits text children of a raw-text element with surrounding whitespace
/// trimmed, so the indentation written before the closing tag is not
/// accreted back into the content on a re-run.
fn write_raw_children(out: &mut String, node: &Handle) {
    let mut text = String::new();
    for child in node.children.borrow().iter() {
        if let NodeData::Text { contents } = &child.data {
            text.push_str(&contents.borrow());
        }
    }
    let trimmed = text.trim();
    if !trimmed.is_empty() {
        out.push_str(trimmed);
        out.push('\n');
    }
}

fn indent(out: &mut String, depth: usize, indent_width: usize) {
    for _ in 0..depth * indent_width {
        out.push(' ');
    }
}

fn escape_text(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            _ => out.push(c),
        }
    }
    out
}

fn escape_attr(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '"' => out.push_str("&quot;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            _ => out.push(c),
        }
    }
    out
}
