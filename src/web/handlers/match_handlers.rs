// src/web/handlers/match_handlers.rs
//! Job description upload and skill matching

use rocket::form::Form;
use rocket::serde::json::Json;
use rocket::State;

use crate::app_log;
use crate::core::{CandidateRepository, Database, FsOps};
use crate::resume_analysis::{extract_text, FieldExtractor, JobDescription};
use crate::web::types::*;

pub async fn jd_upload_handler(
    mut upload: Form<JobDescriptionForm<'_>>,
    config: &State<ServerConfig>,
    db: &State<Database>,
    extractor: &State<FieldExtractor>,
) -> ApiResult<JobMatchData> {
    let Some(raw_name) = raw_upload_name(&upload.jd) else {
        app_log!(debug, "Job description form submitted without a file");
        return Ok(Json(DataResponse::success(
            "No job description uploaded".to_string(),
            JobMatchData {
                jd_skills: Vec::new(),
                candidates: Vec::new(),
            },
        )));
    };

    let target = FsOps::upload_target(&config.upload_dir, &raw_name).map_err(|e| {
        app_log!(warn, "Rejected job description upload: {}", e);
        StandardErrorResponse::new(
            format!("Unusable file name: {}", raw_name),
            "INVALID_FILE_NAME".to_string(),
            vec!["Rename the file and upload it again".to_string()],
        )
        .with_status(rocket::http::Status::BadRequest)
    })?;

    if let Err(e) = upload.jd.copy_to(&target).await {
        app_log!(error, "Failed to save job description {}: {}", target.display(), e);
        return Err(StandardErrorResponse::internal(
            "Failed to save job description",
            "FILE_SAVE_ERROR",
        ));
    }

    let text = extract_text(&target).await.map_err(|e| {
        app_log!(error, "Failed to extract job description {}: {:#}", target.display(), e);
        StandardErrorResponse::internal("Failed to extract job description text", "EXTRACTION_ERROR")
    })?;
    let job = JobDescription::from_text(text, extractor);

    let candidates = CandidateRepository::new(db.pool())
        .list_all()
        .await
        .map_err(|e| {
            app_log!(error, "Failed to load candidates for matching: {:#}", e);
            StandardErrorResponse::internal("Failed to load candidates", "DATABASE_ERROR")
        })?;

    let matched = job.match_candidates(candidates);
    app_log!(
        info,
        "Job description {} skills [{}] matched {} candidates",
        target.display(),
        job.skills.join(", "),
        matched.len()
    );

    Ok(Json(DataResponse::success(
        format!("{} matching candidates", matched.len()),
        JobMatchData {
            jd_skills: job.skills,
            candidates: matched,
        },
    )))
}
