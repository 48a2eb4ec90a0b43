// src/ingest.rs
//! Resume ingestion: stored file -> parsed fields -> candidate row

use anyhow::Result;
use std::path::Path;

use crate::app_log;
use crate::core::CandidateRepository;
use crate::resume_analysis::{parse_resume, FieldExtractor};
use crate::types::{NewCandidate, SaveOutcome};

/// Parse the resume stored at `resume_path` and persist it.
///
/// Extraction errors are returned; a duplicate email is reported through
/// the outcome, not as an error.
pub async fn ingest_resume(
    resume_path: &Path,
    extractor: &FieldExtractor,
    repo: &CandidateRepository<'_>,
) -> Result<SaveOutcome> {
    let parsed = parse_resume(resume_path, extractor).await?;
    app_log!(
        debug,
        "Parsed {}: name={:?} email={:?} skills={:?}",
        resume_path.display(),
        parsed.name,
        parsed.email,
        parsed.skills
    );

    let candidate = NewCandidate::from_parsed(parsed, resume_path);
    repo.save(&candidate).await
}

/// Tally of one batch of ingested resumes
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct IngestSummary {
    pub stored: usize,
    pub duplicates: usize,
}

impl IngestSummary {
    pub fn record(&mut self, outcome: &SaveOutcome) {
        match outcome {
            SaveOutcome::Inserted(_) => self.stored += 1,
            SaveOutcome::Duplicate { .. } => self.duplicates += 1,
        }
    }
}
