// src/resume_analysis/document.rs
//! Plain text extraction for uploaded documents

use anyhow::{Context, Result};
use std::path::Path;

use super::docx;
use crate::app_log;
use crate::utils::get_file_extension;

/// Document formats the extractor understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentKind {
    Pdf,
    Docx,
    Unsupported,
}

impl DocumentKind {
    /// Dispatch on the extension as written: `CV.PDF` is not a PDF.
    pub fn from_path(path: &Path) -> Self {
        match get_file_extension(path).as_deref() {
            Some("pdf") => DocumentKind::Pdf,
            Some("docx") => DocumentKind::Docx,
            _ => DocumentKind::Unsupported,
        }
    }
}

/// Extract plain text from a stored document.
///
/// Unsupported extensions yield an empty string without touching the file.
/// Read and parse failures are returned to the caller.
pub async fn extract_text(path: &Path) -> Result<String> {
    match DocumentKind::from_path(path) {
        DocumentKind::Pdf => extract_pdf_text(path).await,
        DocumentKind::Docx => {
            let owned = path.to_path_buf();
            tokio::task::spawn_blocking(move || docx::extract_paragraph_text(&owned))
                .await
                .with_context(|| format!("DOCX extraction aborted: {}", path.display()))?
        }
        DocumentKind::Unsupported => {
            app_log!(
                debug,
                "Unsupported document type, treating as empty: {}",
                path.display()
            );
            Ok(String::new())
        }
    }
}

async fn extract_pdf_text(path: &Path) -> Result<String> {
    let bytes = tokio::fs::read(path)
        .await
        .with_context(|| format!("Failed to read PDF file: {}", path.display()))?;

    let display = path.display().to_string();
    // pdf-extract panics on some malformed inputs; the join error keeps that per-document.
    tokio::task::spawn_blocking(move || {
        pdf_extract::extract_text_from_mem(&bytes)
            .map_err(|e| anyhow::anyhow!("Failed to extract text from PDF {}: {}", display, e))
    })
    .await
    .with_context(|| format!("PDF extraction aborted: {}", path.display()))?
}

#[cfg(test)]
pub(crate) mod test_support {
    /// Single-page PDF drawing each entry on its own line in Helvetica.
    pub(crate) fn build_pdf(lines: &[&str]) -> Vec<u8> {
        let mut content = String::from("BT /F1 12 Tf 72 720 Td");
        for (i, line) in lines.iter().enumerate() {
            if i > 0 {
                content.push_str(" 0 -16 Td");
            }
            let escaped = line
                .replace('\\', "\\\\")
                .replace('(', "\\(")
                .replace(')', "\\)");
            content.push_str(&format!(" ({}) Tj", escaped));
        }
        content.push_str(" ET");

        let objects = [
            "<< /Type /Catalog /Pages 2 0 R >>".to_string(),
            "<< /Type /Pages /Kids [3 0 R] /Count 1 >>".to_string(),
            "<< /Type /Page /Parent 2 0 R /MediaBox [0 0 612 792] \
             /Resources << /Font << /F1 5 0 R >> >> /Contents 4 0 R >>"
                .to_string(),
            format!(
                "<< /Length {} >>\nstream\n{}\nendstream",
                content.len(),
                content
            ),
            "<< /Type /Font /Subtype /Type1 /BaseFont /Helvetica >>".to_string(),
        ];

        let mut pdf = b"%PDF-1.4\n".to_vec();
        let mut offsets = Vec::new();
        for (i, object) in objects.iter().enumerate() {
            offsets.push(pdf.len());
            pdf.extend_from_slice(format!("{} 0 obj\n{}\nendobj\n", i + 1, object).as_bytes());
        }

        let xref_start = pdf.len();
        pdf.extend_from_slice(format!("xref\n0 {}\n", objects.len() + 1).as_bytes());
        pdf.extend_from_slice(b"0000000000 65535 f \n");
        for offset in offsets {
            pdf.extend_from_slice(format!("{:010} 00000 n \n", offset).as_bytes());
        }
        pdf.extend_from_slice(
            format!(
                "trailer\n<< /Size {} /Root 1 0 R >>\nstartxref\n{}\n%%EOF\n",
                objects.len() + 1,
                xref_start
            )
            .as_bytes(),
        );
        pdf
    }
}
