//! Minimal applicant tracking: parse uploaded resumes into candidates,
//! search them, export them and match them against job descriptions.

pub mod cli;
pub mod core;
pub mod export;
pub mod ingest;
pub mod resume_analysis;
pub mod types;
pub mod utils;
pub mod web;

pub use web::{build_rocket, start_web_server};

/// Crate-wide logging entry point, forwards to the `tracing` macro of the same level.
#[macro_export]
macro_rules! app_log {
    ($level:ident, $($arg:tt)+) => {
        ::tracing::$level!($($arg)+)
    };
}
