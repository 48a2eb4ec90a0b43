// src/core/mod.rs
//! Storage, configuration and filesystem services shared by the web server and the CLI

pub mod config_manager;
pub mod database;
pub mod fs_ops;

pub use config_manager::ConfigManager;
pub use database::{CandidateRepository, Database};
pub use fs_ops::FsOps;
