// src/web/types.rs - forms, response envelopes and managed server state

use rocket::form::FromForm;
use rocket::fs::TempFile;
use rocket::http::{ContentType, Status};
use rocket::response::{self, status, Responder};
use rocket::serde::json::Json;
use rocket::serde::Serialize;
use rocket::{Request, Response};
use std::path::PathBuf;

use crate::types::Candidate;

pub struct ServerConfig {
    pub upload_dir: PathBuf,
    pub export_path: PathBuf,
}

#[derive(FromForm)]
pub struct ResumeUploadForm<'f> {
    pub resumes: Vec<TempFile<'f>>,
}

#[derive(FromForm)]
pub struct JobDescriptionForm<'f> {
    pub jd: TempFile<'f>,
}

/// Client-supplied name of an uploaded file, unsanitized.
pub fn raw_upload_name(file: &TempFile<'_>) -> Option<String> {
    file.raw_name()
        .map(|name| name.dangerous_unsafe_unsanitized_raw().as_str().to_string())
        .filter(|name| !name.trim().is_empty())
}

pub struct CsvResponse {
    pub data: Vec<u8>,
    pub filename: String,
}

impl<'r> Responder<'r, 'static> for CsvResponse {
    fn respond_to(self, _: &'r Request<'_>) -> response::Result<'static> {
        Response::build()
            .header(ContentType::CSV)
            .raw_header(
                "Content-Disposition",
                format!("attachment; filename=\"{}\"", self.filename),
            )
            .sized_body(self.data.len(), std::io::Cursor::new(self.data))
            .ok()
    }
}

#[derive(Serialize)]
#[serde(crate = "rocket::serde", rename_all = "lowercase")]
pub enum ResponseType {
    Data,
    Error,
}

#[derive(Serialize)]
#[serde(crate = "rocket::serde")]
pub struct DataResponse<T> {
    #[serde(rename = "type")]
    pub response_type: ResponseType,
    pub success: bool,
    pub message: String,
    pub data: T,
}

impl<T> DataResponse<T> {
    pub fn success(message: String, data: T) -> Self {
        Self {
            response_type: ResponseType::Data,
            success: true,
            message,
            data,
        }
    }
}

#[derive(Serialize)]
#[serde(crate = "rocket::serde")]
pub struct StandardErrorResponse {
    #[serde(rename = "type")]
    pub response_type: ResponseType,
    pub success: bool,
    pub error: String,
    pub error_code: String,
    pub suggestions: Vec<String>,
}

pub type ApiError = status::Custom<Json<StandardErrorResponse>>;
pub type ApiResult<T> = Result<Json<DataResponse<T>>, ApiError>;

impl StandardErrorResponse {
    pub fn new(error: String, error_code: String, suggestions: Vec<String>) -> Self {
        Self {
            response_type: ResponseType::Error,
            success: false,
            error,
            error_code,
            suggestions,
        }
    }

    pub fn with_status(self, status: Status) -> ApiError {
        status::Custom(status, Json(self))
    }

    pub fn internal(error: &str, error_code: &str) -> ApiError {
        Self::new(
            error.to_string(),
            error_code.to_string(),
            vec![
                "Try again in a few moments".to_string(),
                "Check the server log for details".to_string(),
            ],
        )
        .with_status(Status::InternalServerError)
    }
}

#[derive(Serialize)]
#[serde(crate = "rocket::serde")]
pub struct CandidateListData {
    pub candidates: Vec<Candidate>,
    pub search: String,
    pub total: usize,
}

#[derive(Serialize)]
#[serde(crate = "rocket::serde")]
pub struct SkillSearchData {
    pub skill: String,
    pub candidates: Vec<Candidate>,
}

#[derive(Serialize)]
#[serde(crate = "rocket::serde")]
pub struct JobMatchData {
    pub jd_skills: Vec<String>,
    pub candidates: Vec<Candidate>,
}
