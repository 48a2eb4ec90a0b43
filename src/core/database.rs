// src/core/database.rs
//! Candidate storage on SQLite

use anyhow::{Context, Result};
use sqlx::SqlitePool;
use std::path::Path;

use crate::app_log;
use crate::core::FsOps;
use crate::types::{Candidate, NewCandidate, SaveOutcome};

// ===== Core Database Connection Management =====

#[derive(Debug, Clone)]
pub struct Database {
    pool: SqlitePool,
}

impl Database {
    /// Open (creating if needed) the database file and run migrations
    pub async fn new(database_path: &Path) -> Result<Self> {
        if let Some(parent) = database_path.parent() {
            if !parent.as_os_str().is_empty() {
                FsOps::ensure_dir_exists(parent).await?;
            }
        }

        let database_url = format!("sqlite:{}?mode=rwc", database_path.display());
        let pool = SqlitePool::connect(&database_url).await.with_context(|| {
            format!("Failed to connect to database: {}", database_path.display())
        })?;

        app_log!(
            info,
            "Database connection established: {}",
            database_path.display()
        );

        let db = Self { pool };
        db.migrate().await?;
        Ok(db)
    }

    /// Get pool reference for custom operations
    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    async fn migrate(&self) -> Result<()> {
        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS candidates (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                name TEXT,
                email TEXT,
                skills TEXT,
                resume_path TEXT
            );
            "#,
        )
        .execute(&self.pool)
        .await
        .context("Failed to create candidates table")?;

        sqlx::query("CREATE INDEX IF NOT EXISTS idx_candidates_email ON candidates(email);")
            .execute(&self.pool)
            .await
            .context("Failed to create candidates email index")?;

        app_log!(info, "Database migrations completed");
        Ok(())
    }

    /// Check database health
    pub async fn health_check(&self) -> Result<()> {
        sqlx::query("SELECT 1")
            .execute(&self.pool)
            .await
            .context("Database health check failed")?;
        Ok(())
    }

    /// Close every pooled connection; further queries fail.
    pub async fn close(&self) {
        self.pool.close().await;
        app_log!(info, "Database connections closed");
    }
}

// ===== Candidate Repository =====

pub struct CandidateRepository<'a> {
    pool: &'a SqlitePool,
}

impl<'a> CandidateRepository<'a> {
    pub fn new(pool: &'a SqlitePool) -> Self {
        Self { pool }
    }

    /// Insert a candidate unless one with the same email already exists.
    ///
    /// The existence check and the insert are one statement, so two uploads
    /// carrying the same email cannot both be stored.
    pub async fn save(&self, candidate: &NewCandidate) -> Result<SaveOutcome> {
        let skills = candidate.serialized_skills();

        let result = sqlx::query(
            r#"
            INSERT INTO candidates (name, email, skills, resume_path)
            SELECT ?, ?, ?, ?
            WHERE NOT EXISTS (SELECT 1 FROM candidates WHERE email = ?)
            "#,
        )
        .bind(&candidate.name)
        .bind(&candidate.email)
        .bind(&skills)
        .bind(&candidate.resume_path)
        .bind(&candidate.email)
        .execute(self.pool)
        .await
        .with_context(|| format!("Failed to save candidate: {}", candidate.email))?;

        if result.rows_affected() == 0 {
            app_log!(
                warn,
                "Skipped candidate with existing email: {}",
                candidate.email
            );
            return Ok(SaveOutcome::Duplicate {
                email: candidate.email.clone(),
            });
        }

        let stored = Candidate {
            id: result.last_insert_rowid(),
            name: candidate.name.clone(),
            email: candidate.email.clone(),
            skills,
            resume_path: candidate.resume_path.clone(),
        };

        app_log!(
            info,
            "Stored candidate {} ({}) with skills [{}]",
            stored.id,
            stored.email,
            stored.skills
        );
        Ok(SaveOutcome::Inserted(stored))
    }

    /// All candidates in insertion order
    pub async fn list_all(&self) -> Result<Vec<Candidate>> {
        let candidates = sqlx::query_as::<_, Candidate>(
            r#"
            SELECT id, name, email, skills, resume_path
            FROM candidates
            ORDER BY id ASC
            "#,
        )
        .fetch_all(self.pool)
        .await
        .context("Failed to list candidates")?;

        Ok(candidates)
    }

    pub async fn find_by_id(&self, id: i64) -> Result<Option<Candidate>> {
        let candidate = sqlx::query_as::<_, Candidate>(
            r#"
            SELECT id, name, email, skills, resume_path
            FROM candidates
            WHERE id = ?
            "#,
        )
        .bind(id)
        .fetch_optional(self.pool)
        .await
        .with_context(|| format!("Failed to look up candidate {}", id))?;

        Ok(candidate)
    }

    /// Case-insensitive substring search over name, email and skills.
    ///
    /// Scans every row; an empty query returns everything.
    pub async fn find_by_fuzzy_text(&self, query: &str) -> Result<Vec<Candidate>> {
        let candidates = self.list_all().await?;
        Ok(candidates
            .into_iter()
            .filter(|candidate| candidate.contains_text(query))
            .collect())
    }

    /// Case-insensitive substring search over the stored skills only.
    pub async fn find_by_skill(&self, skill: &str) -> Result<Vec<Candidate>> {
        let candidates = self.list_all().await?;
        Ok(candidates
            .into_iter()
            .filter(|candidate| candidate.has_skill_text(skill))
            .collect())
    }

    pub async fn count(&self) -> Result<i64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM candidates")
            .fetch_one(self.pool)
            .await
            .context("Failed to count candidates")?;
        Ok(count)
    }

    /// Delete every candidate row. Stored resume files are left alone.
    pub async fn clear(&self) -> Result<u64> {
        let result = sqlx::query("DELETE FROM candidates")
            .execute(self.pool)
            .await
            .context("Failed to clear candidates")?;

        let removed = result.rows_affected();
        app_log!(info, "Cleared {} candidates", removed);
        Ok(removed)
    }
}
