// src/export.rs
//! CSV export of stored candidates

use anyhow::{Context, Result};
use std::io::Write;
use std::path::Path;

use crate::core::FsOps;
use crate::types::Candidate;

pub const CSV_HEADERS: [&str; 3] = ["Name", "Email", "Skills"];
pub const EXPORT_FILE_NAME: &str = "candidates.csv";

/// Write a header row then one `Name, Email, Skills` row per candidate
pub fn write_candidates_csv<W: Write>(writer: W, candidates: &[Candidate]) -> Result<()> {
    let mut csv_writer = csv::Writer::from_writer(writer);

    csv_writer
        .write_record(CSV_HEADERS)
        .context("Failed to write CSV header")?;

    for candidate in candidates {
        csv_writer
            .write_record([
                candidate.name.as_str(),
                candidate.email.as_str(),
                candidate.skills.as_str(),
            ])
            .with_context(|| format!("Failed to write CSV row for candidate {}", candidate.id))?;
    }

    csv_writer.flush().context("Failed to flush CSV output")?;
    Ok(())
}

pub fn candidates_csv_bytes(candidates: &[Candidate]) -> Result<Vec<u8>> {
    let mut buffer = Vec::new();
    write_candidates_csv(&mut buffer, candidates)?;
    Ok(buffer)
}

/// Render the CSV and store it at `path`, returning the bytes written
pub async fn export_to_file(path: &Path, candidates: &[Candidate]) -> Result<Vec<u8>> {
    let bytes = candidates_csv_bytes(candidates)?;
    FsOps::write_bytes(path, &bytes).await?;
    Ok(bytes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn candidate(id: i64, name: &str, email: &str, skills: &str) -> Candidate {
        Candidate {
            id,
            name: name.to_string(),
            email: email.to_string(),
            skills: skills.to_string(),
            resume_path: format!("uploads/{}.pdf", id),
        }
    }

    #[test]
    fn test_header_and_rows() {
        let candidates = vec![
            candidate(1, "Jane Smith", "jane@x.com", "python, sql"),
            candidate(2, "Bob", "Not Found", ""),
        ];
        let csv = String::from_utf8(candidates_csv_bytes(&candidates).unwrap()).unwrap();
        let lines: Vec<&str> = csv.lines().collect();

        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0], "Name,Email,Skills");
        assert_eq!(lines[1], "Jane Smith,jane@x.com,\"python, sql\"");
        assert_eq!(lines[2], "Bob,Not Found,");
    }

    #[test]
    fn test_empty_export_is_header_only() {
        let csv = String::from_utf8(candidates_csv_bytes(&[]).unwrap()).unwrap();
        assert_eq!(csv.lines().collect::<Vec<_>>(), vec!["Name,Email,Skills"]);
    }

    #[test]
    fn test_round_trips_through_reader() {
        let candidates = vec![candidate(1, "O'Neil, \"Pat\"", "pat@x.com", "excel")];
        let bytes = candidates_csv_bytes(&candidates).unwrap();

        let mut reader = csv::Reader::from_reader(bytes.as_slice());
        let headers = reader.headers().unwrap().clone();
        assert_eq!(headers.iter().collect::<Vec<_>>(), CSV_HEADERS);

        let rows: Vec<csv::StringRecord> = reader.records().map(|r| r.unwrap()).collect();
        assert_eq!(rows.len(), 1);
        assert_eq!(&rows[0][0], "O'Neil, \"Pat\"");
    }

    #[tokio::test]
    async fn test_export_to_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("uploads").join(EXPORT_FILE_NAME);
        let candidates: Vec<Candidate> = (1..=4)
            .map(|i| candidate(i, "N", &format!("{}@x.com", i), "java"))
            .collect();

        let written = export_to_file(&path, &candidates).await.unwrap();
        let on_disk = std::fs::read(&path).unwrap();
        assert_eq!(written, on_disk);
        assert_eq!(String::from_utf8(on_disk).unwrap().lines().count(), 5);
    }
}
