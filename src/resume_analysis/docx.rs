// src/resume_analysis/docx.rs
//! DOCX paragraph text extraction.
//!
//! A DOCX file is a ZIP archive whose body lives in `word/document.xml`.
//! Only top-level body paragraphs are read; table cells and text boxes are
//! skipped. Paragraphs are joined with `\n`.

use anyhow::{Context, Result};
use html_escape::decode_html_entities;
use std::fs::File;
use std::io::Read;
use std::path::Path;
use zip::ZipArchive;

const DOCUMENT_XML: &str = "word/document.xml";

const BODY: &str = "w:body";
const PARAGRAPH: &str = "w:p";
const RUN: &str = "w:r";
const TEXT: &str = "w:t";
const TEXT_BOX: &str = "w:txbxContent";

pub fn extract_paragraph_text(docx_path: &Path) -> Result<String> {
    let file = File::open(docx_path)
        .with_context(|| format!("Failed to open DOCX file: {}", docx_path.display()))?;

    let mut archive = ZipArchive::new(file)
        .with_context(|| format!("Failed to read DOCX as ZIP: {}", docx_path.display()))?;

    let mut xml = String::new();
    let mut entry = archive.by_name(DOCUMENT_XML).with_context(|| {
        format!(
            "Invalid DOCX file {}: {} not found",
            docx_path.display(),
            DOCUMENT_XML
        )
    })?;
    entry
        .read_to_string(&mut xml)
        .with_context(|| format!("Failed to read {} from {}", DOCUMENT_XML, docx_path.display()))?;

    Ok(paragraphs_from_xml(&xml).join("\n"))
}

/// Collect the text of every paragraph that is a direct child of `w:body`.
pub fn paragraphs_from_xml(xml: &str) -> Vec<String> {
    let mut paragraphs = Vec::new();
    let mut stack: Vec<&str> = Vec::new();
    // (stack depth of the open paragraph, text collected so far)
    let mut current: Option<(usize, String)> = None;
    let mut rest = xml;

    while let Some(start) = rest.find('<') {
        let between = &rest[..start];
        if !between.is_empty() && stack.last() == Some(&TEXT) {
            if let Some((depth, text)) = current.as_mut() {
                if in_paragraph_run(&stack[..stack.len() - 1], *depth) {
                    text.push_str(&decode_html_entities(between));
                }
            }
        }

        let Some(len) = rest[start..].find('>') else {
            break;
        };
        let tag = &rest[start + 1..start + len];
        rest = &rest[start + len + 1..];

        if tag.starts_with('?') || tag.starts_with('!') {
            continue;
        }

        if let Some(closing) = tag.strip_prefix('/') {
            let name = closing.trim();
            if let Some(pos) = stack.iter().rposition(|open| *open == name) {
                stack.truncate(pos);
            }
            if name == PARAGRAPH && matches!(current, Some((depth, _)) if depth == stack.len()) {
                if let Some((_, text)) = current.take() {
                    paragraphs.push(text);
                }
            }
            continue;
        }

        let self_closing = tag.ends_with('/');
        let name = tag
            .trim_end_matches('/')
            .split_whitespace()
            .next()
            .unwrap_or("");

        if name == PARAGRAPH && current.is_none() && stack.last() == Some(&BODY) {
            if self_closing {
                paragraphs.push(String::new());
                continue;
            }
            current = Some((stack.len(), String::new()));
        } else if self_closing {
            if let Some((depth, text)) = current.as_mut() {
                if in_paragraph_run(&stack, *depth) {
                    match name {
                        "w:tab" => text.push('\t'),
                        "w:br" | "w:cr" => text.push('\n'),
                        _ => {}
                    }
                }
            }
        }

        if !self_closing {
            stack.push(name);
        }
    }

    paragraphs
}

/// True when `stack` ends in a run that belongs to the paragraph opened at
/// `depth` rather than to a nested paragraph or text box.
fn in_paragraph_run(stack: &[&str], depth: usize) -> bool {
    stack.last() == Some(&RUN)
        && stack
            .get(depth + 1..)
            .is_some_and(|inner| inner.iter().all(|n| *n != PARAGRAPH && *n != TEXT_BOX))
}

#[cfg(test)]
pub(crate) mod test_support {
    use std::io::{Cursor, Write};
    use std::path::Path;
    use zip::write::SimpleFileOptions;
    use zip::ZipWriter;

    /// Minimal DOCX archive holding one body paragraph per entry.
    pub(crate) fn build_docx(paragraphs: &[&str]) -> Vec<u8> {
        let body: String = paragraphs
            .iter()
            .map(|p| {
                format!(
                    r#"<w:p><w:r><w:t xml:space="preserve">{}</w:t></w:r></w:p>"#,
                    html_escape::encode_text(p)
                )
            })
            .collect();
        let document = format!(
            r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?><w:document xmlns:w="http://schemas.openxmlformats.org/wordprocessingml/2006/main"><w:body>{}<w:sectPr/></w:body></w:document>"#,
            body
        );

        let mut writer = ZipWriter::new(Cursor::new(Vec::new()));
        writer
            .start_file("word/document.xml", SimpleFileOptions::default())
            .unwrap();
        writer.write_all(document.as_bytes()).unwrap();
        writer.finish().unwrap().into_inner()
    }

    pub(crate) fn write_docx(path: &Path, paragraphs: &[&str]) {
        std::fs::write(path, build_docx(paragraphs)).unwrap();
    }
}
