// src/utils.rs
use std::path::Path;

/// Get file extension exactly as written, without the dot
pub fn get_file_extension(path: &Path) -> Option<String> {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(str::to_string)
}

/// Reduce a client-supplied upload name to its final path component.
///
/// Returns `None` for names that cannot be stored as a plain file
/// (empty, `.` or `..`).
pub fn upload_file_name(raw_name: &str) -> Option<String> {
    let name = raw_name
        .rsplit(|c| c == '/' || c == '\\')
        .next()
        .unwrap_or("")
        .trim();

    match name {
        "" | "." | ".." => None,
        _ => Some(name.to_string()),
    }
}
