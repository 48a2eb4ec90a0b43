// src/core/fs_ops.rs
//! File system operations for the upload directory

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};
use tokio::fs;

use crate::app_log;
use crate::utils::upload_file_name;

pub struct FsOps;

impl FsOps {
    /// Ensure directory exists
    pub async fn ensure_dir_exists(path: &Path) -> Result<()> {
        if !path.exists() {
            fs::create_dir_all(path)
                .await
                .with_context(|| format!("Failed to create directory: {}", path.display()))?;
            app_log!(info, "Created directory: {}", path.display());
        }
        Ok(())
    }

    /// Where an upload named `raw_name` is stored.
    ///
    /// Only the final path component of the client name is kept; a file with
    /// the same name is overwritten.
    pub fn upload_target(upload_dir: &Path, raw_name: &str) -> Result<PathBuf> {
        let name = upload_file_name(raw_name)
            .ok_or_else(|| anyhow::anyhow!("Unusable upload file name: {:?}", raw_name))?;
        Ok(upload_dir.join(name))
    }

    /// Copy file with error handling
    pub async fn copy_file(src: &Path, dest: &Path) -> Result<()> {
        if let Some(parent) = dest.parent() {
            Self::ensure_dir_exists(parent).await?;
        }

        fs::copy(src, dest)
            .await
            .with_context(|| format!("Failed to copy {} to {}", src.display(), dest.display()))?;

        app_log!(info, "Copied {} to {}", src.display(), dest.display());
        Ok(())
    }

    /// Write bytes, creating the parent directory first
    pub async fn write_bytes(path: &Path, content: &[u8]) -> Result<()> {
        if let Some(parent) = path.parent() {
            Self::ensure_dir_exists(parent).await?;
        }

        fs::write(path, content)
            .await
            .with_context(|| format!("Failed to write file: {}", path.display()))?;

        app_log!(info, "Written file: {}", path.display());
        Ok(())
    }

    /// Same file on disk, compared after canonicalization
    pub async fn same_file(a: &Path, b: &Path) -> bool {
        match (fs::canonicalize(a).await, fs::canonicalize(b).await) {
            (Ok(a), Ok(b)) => a == b,
            _ => false,
        }
    }
}
