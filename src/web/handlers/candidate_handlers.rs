// src/web/handlers/candidate_handlers.rs
//! Candidate listing, preview, skill search, clearing and CSV export

use rocket::http::Status;
use rocket::response::{status, Redirect};
use rocket::serde::json::Json;
use rocket::{uri, State};

use crate::app_log;
use crate::core::{CandidateRepository, Database};
use crate::export::{export_to_file, EXPORT_FILE_NAME};
use crate::resume_analysis::extract_text;
use crate::web::types::*;

pub async fn dashboard_handler(
    search: Option<String>,
    db: &State<Database>,
) -> ApiResult<CandidateListData> {
    let repo = CandidateRepository::new(db.pool());
    let search = search.unwrap_or_default().to_lowercase();

    let candidates = if search.is_empty() {
        repo.list_all().await
    } else {
        repo.find_by_fuzzy_text(&search).await
    }
    .map_err(|e| {
        app_log!(error, "Failed to load candidates: {:#}", e);
        StandardErrorResponse::internal("Failed to load candidates", "DATABASE_ERROR")
    })?;

    let total = candidates.len();
    Ok(Json(DataResponse::success(
        format!("{} candidates", total),
        CandidateListData {
            candidates,
            search,
            total,
        },
    )))
}

pub async fn preview_handler(
    candidate_id: i64,
    db: &State<Database>,
) -> Result<String, status::Custom<String>> {
    let repo = CandidateRepository::new(db.pool());

    let candidate = repo.find_by_id(candidate_id).await.map_err(|e| {
        app_log!(error, "Failed to look up candidate {}: {:#}", candidate_id, e);
        status::Custom(
            Status::InternalServerError,
            "Failed to load candidate".to_string(),
        )
    })?;

    let Some(candidate) = candidate else {
        return Err(status::Custom(
            Status::NotFound,
            "Resume not found".to_string(),
        ));
    };

    extract_text(std::path::Path::new(&candidate.resume_path))
        .await
        .map_err(|e| {
            app_log!(
                error,
                "Failed to extract resume for candidate {}: {:#}",
                candidate_id,
                e
            );
            status::Custom(
                Status::InternalServerError,
                "Failed to extract resume text".to_string(),
            )
        })
}

pub async fn clear_db_handler(db: &State<Database>) -> Result<Redirect, ApiError> {
    CandidateRepository::new(db.pool())
        .clear()
        .await
        .map_err(|e| {
            app_log!(error, "Failed to clear candidates: {:#}", e);
            StandardErrorResponse::internal("Failed to clear candidates", "DATABASE_ERROR")
        })?;

    Ok(Redirect::to(uri!("/dashboard")))
}

pub async fn search_by_skill_handler(
    skill: Option<String>,
    db: &State<Database>,
) -> ApiResult<SkillSearchData> {
    let skill = skill.unwrap_or_default();

    let candidates = CandidateRepository::new(db.pool())
        .find_by_skill(&skill)
        .await
        .map_err(|e| {
            app_log!(error, "Skill search failed: {:#}", e);
            StandardErrorResponse::internal("Skill search failed", "DATABASE_ERROR")
        })?;

    Ok(Json(DataResponse::success(
        format!("{} candidates with skill '{}'", candidates.len(), skill),
        SkillSearchData { skill, candidates },
    )))
}

pub async fn export_csv_handler(
    config: &State<ServerConfig>,
    db: &State<Database>,
) -> Result<CsvResponse, ApiError> {
    let candidates = CandidateRepository::new(db.pool())
        .list_all()
        .await
        .map_err(|e| {
            app_log!(error, "Failed to load candidates for export: {:#}", e);
            StandardErrorResponse::internal("Failed to load candidates", "DATABASE_ERROR")
        })?;

    let data = export_to_file(&config.export_path, &candidates)
        .await
        .map_err(|e| {
            app_log!(error, "CSV export failed: {:#}", e);
            StandardErrorResponse::internal("CSV export failed", "EXPORT_ERROR")
        })?;

    app_log!(info, "Exported {} candidates to CSV", candidates.len());
    Ok(CsvResponse {
        data,
        filename: EXPORT_FILE_NAME.to_string(),
    })
}
