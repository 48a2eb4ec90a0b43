// src/resume_analysis/mod.rs
//! Resume text extraction, field parsing and job description matching

pub mod document;
pub mod docx;
pub mod fields;
pub mod matcher;

pub use document::{extract_text, DocumentKind};
pub use fields::{FieldExtractor, SkillVocabulary, DEFAULT_SKILLS, EMAIL_NOT_FOUND, UNKNOWN_NAME};
pub use matcher::{match_candidates, JobDescription};

use crate::types::ParsedResume;
use anyhow::Result;
use std::path::Path;

/// Extract a stored document's text and parse candidate fields out of it.
pub async fn parse_resume(path: &Path, extractor: &FieldExtractor) -> Result<ParsedResume> {
    let text = extract_text(path).await?;
    Ok(extractor.parse(&text))
}
