// src/web/handlers/system_handlers.rs
use rocket::http::Status;
use rocket::response::content::RawHtml;
use rocket::State;

use crate::app_log;
use crate::core::Database;
use crate::web::pages::{INDEX_PAGE, JD_UPLOAD_PAGE};

pub async fn index_page_handler() -> RawHtml<&'static str> {
    RawHtml(INDEX_PAGE)
}

pub async fn jd_upload_page_handler() -> RawHtml<&'static str> {
    RawHtml(JD_UPLOAD_PAGE)
}

pub async fn health_handler(db: &State<Database>) -> Result<&'static str, Status> {
    match db.health_check().await {
        Ok(()) => Ok("OK"),
        Err(e) => {
            app_log!(error, "Health check failed: {:#}", e);
            Err(Status::ServiceUnavailable)
        }
    }
}
