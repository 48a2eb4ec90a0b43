// src/web/handlers/upload_handlers.rs
//! Resume upload: store each file, parse it and persist the candidate

use rocket::form::Form;
use rocket::response::Redirect;
use rocket::{uri, State};

use crate::app_log;
use crate::core::{CandidateRepository, Database, FsOps};
use crate::ingest::{ingest_resume, IngestSummary};
use crate::resume_analysis::FieldExtractor;
use crate::web::types::{raw_upload_name, ApiError, ResumeUploadForm, ServerConfig, StandardErrorResponse};

pub async fn upload_resumes_handler(
    mut upload: Form<ResumeUploadForm<'_>>,
    config: &State<ServerConfig>,
    db: &State<Database>,
    extractor: &State<FieldExtractor>,
) -> Result<Redirect, ApiError> {
    let repo = CandidateRepository::new(db.pool());
    let mut summary = IngestSummary::default();

    for file in upload.resumes.iter_mut() {
        let Some(raw_name) = raw_upload_name(file) else {
            app_log!(debug, "Skipping upload entry without a file name");
            continue;
        };

        let target = match FsOps::upload_target(&config.upload_dir, &raw_name) {
            Ok(target) => target,
            Err(e) => {
                app_log!(warn, "Skipping upload: {}", e);
                continue;
            }
        };

        if let Err(e) = file.copy_to(&target).await {
            app_log!(error, "Failed to save uploaded file {}: {}", target.display(), e);
            return Err(StandardErrorResponse::internal(
                "Failed to save uploaded file",
                "FILE_SAVE_ERROR",
            ));
        }

        let outcome = ingest_resume(&target, extractor, &repo).await.map_err(|e| {
            app_log!(error, "Failed to process resume {}: {:#}", target.display(), e);
            StandardErrorResponse::internal("Failed to extract resume text", "EXTRACTION_ERROR")
        })?;
        summary.record(&outcome);
    }

    app_log!(
        info,
        "Resume upload processed: {} stored, {} duplicate emails skipped",
        summary.stored,
        summary.duplicates
    );

    Ok(Redirect::to(uri!("/")))
}
