// src/web/mod.rs

pub mod handlers;
pub mod pages;
pub mod types;

pub use handlers::*;
pub use types::*;

use anyhow::Result;
use rocket::data::{Limits, ToByteUnit};
use rocket::form::Form;
use rocket::http::Status;
use rocket::response::content::RawHtml;
use rocket::response::{status, Redirect};
use rocket::serde::json::Json;
use rocket::{catchers, get, post, routes, Build, Rocket, State};

use crate::app_log;
use crate::core::{ConfigManager, Database};
use crate::resume_analysis::FieldExtractor;

#[get("/")]
pub async fn index() -> RawHtml<&'static str> {
    handlers::index_page_handler().await
}

#[post("/", data = "<upload>")]
pub async fn upload_resumes(
    upload: Form<ResumeUploadForm<'_>>,
    config: &State<ServerConfig>,
    db: &State<Database>,
    extractor: &State<FieldExtractor>,
) -> Result<Redirect, ApiError> {
    handlers::upload_resumes_handler(upload, config, db, extractor).await
}

#[get("/dashboard?<search>")]
pub async fn dashboard(
    search: Option<String>,
    db: &State<Database>,
) -> ApiResult<CandidateListData> {
    handlers::dashboard_handler(search, db).await
}

#[get("/preview/<candidate_id>")]
pub async fn preview(
    candidate_id: i64,
    db: &State<Database>,
) -> Result<String, status::Custom<String>> {
    handlers::preview_handler(candidate_id, db).await
}

#[post("/clear-db")]
pub async fn clear_db(db: &State<Database>) -> Result<Redirect, ApiError> {
    handlers::clear_db_handler(db).await
}

#[get("/search?<skill>")]
pub async fn search_by_skill(
    skill: Option<String>,
    db: &State<Database>,
) -> ApiResult<SkillSearchData> {
    handlers::search_by_skill_handler(skill, db).await
}

#[get("/jd-upload")]
pub async fn jd_upload_page() -> RawHtml<&'static str> {
    handlers::jd_upload_page_handler().await
}

#[post("/jd-upload", data = "<upload>")]
pub async fn jd_upload(
    upload: Form<JobDescriptionForm<'_>>,
    config: &State<ServerConfig>,
    db: &State<Database>,
    extractor: &State<FieldExtractor>,
) -> ApiResult<JobMatchData> {
    handlers::jd_upload_handler(upload, config, db, extractor).await
}

#[get("/export-csv")]
pub async fn export_csv(
    config: &State<ServerConfig>,
    db: &State<Database>,
) -> Result<CsvResponse, ApiError> {
    handlers::export_csv_handler(config, db).await
}

#[get("/health")]
pub async fn health(db: &State<Database>) -> Result<&'static str, Status> {
    handlers::health_handler(db).await
}

// Error catchers
#[rocket::catch(404)]
pub fn not_found() -> Json<StandardErrorResponse> {
    Json(StandardErrorResponse::new(
        "Resource not found".to_string(),
        "NOT_FOUND".to_string(),
        vec!["Check the request path".to_string()],
    ))
}

#[rocket::catch(422)]
pub fn unprocessable() -> Json<StandardErrorResponse> {
    Json(StandardErrorResponse::new(
        "Invalid form submission".to_string(),
        "INVALID_FORM".to_string(),
        vec![
            "Upload resumes in the 'resumes' field".to_string(),
            "Upload a job description in the 'jd' field".to_string(),
        ],
    ))
}

#[rocket::catch(500)]
pub fn internal_error() -> Json<StandardErrorResponse> {
    Json(StandardErrorResponse::new(
        "Internal server error".to_string(),
        "INTERNAL_ERROR".to_string(),
        vec![
            "Try again in a few moments".to_string(),
            "Contact support if the problem persists".to_string(),
        ],
    ))
}

/// Assemble the Rocket instance with managed state, limits, routes and catchers
pub fn build_rocket(
    config: &ConfigManager,
    db: Database,
    extractor: FieldExtractor,
) -> Rocket<Build> {
    let env = &config.environment;

    let limits = Limits::default()
        .limit("file", env.max_upload_mb.mebibytes())
        .limit("data-form", (env.max_upload_mb * 8).mebibytes());

    let figment = rocket::Config::figment()
        .merge(("address", env.address.clone()))
        .merge(("port", env.port))
        .merge(("limits", limits))
        .merge(("log_level", "critical"));

    let server_config = ServerConfig {
        upload_dir: env.upload_path.clone(),
        export_path: config.export_path(),
    };

    rocket::custom(figment)
        .manage(server_config)
        .manage(db)
        .manage(extractor)
        .register("/", catchers![not_found, unprocessable, internal_error])
        .mount(
            "/",
            routes![
                index,
                upload_resumes,
                dashboard,
                preview,
                clear_db,
                search_by_skill,
                jd_upload_page,
                jd_upload,
                export_csv,
                health,
            ],
        )
}

// Main server start function
pub async fn start_web_server(config: ConfigManager) -> Result<()> {
    let db = Database::new(&config.environment.database_path).await?;
    let extractor = FieldExtractor::new(config.vocabulary.clone())?;
    let shutdown_handle = db.clone();

    app_log!(info, "Starting resume ATS server");
    app_log!(info, "Database: {}", config.environment.database_path.display());
    app_log!(info, "Uploads: {}", config.environment.upload_path.display());
    app_log!(
        info,
        "Server: http://{}:{}",
        config.environment.address,
        config.environment.port
    );

    let launched = build_rocket(&config, db, extractor).launch().await;

    shutdown_handle.close().await;

    match launched {
        Ok(_) => {
            app_log!(info, "Server stopped");
            Ok(())
        }
        Err(e) => Err(anyhow::anyhow!("Server failed: {}", e)),
    }
}
