// src/types/candidate.rs
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Separator used when a skill set is stored as a single text column.
pub const SKILL_SEPARATOR: &str = ", ";

/// Fields recovered from one resume's plain text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParsedResume {
    pub name: String,
    pub email: String,
    pub skills: Vec<String>,
}

/// A parsed resume that has not been stored yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewCandidate {
    pub name: String,
    pub email: String,
    pub skills: Vec<String>,
    pub resume_path: String,
}

impl NewCandidate {
    pub fn from_parsed(parsed: ParsedResume, resume_path: &Path) -> Self {
        Self {
            name: parsed.name,
            email: parsed.email,
            skills: parsed.skills,
            resume_path: resume_path.display().to_string(),
        }
    }

    /// Skills in the form they are persisted, e.g. `"python, sql"`.
    pub fn serialized_skills(&self) -> String {
        self.skills.join(SKILL_SEPARATOR)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Candidate {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub skills: String,
    pub resume_path: String,
}

impl Candidate {
    /// Case-insensitive substring test over name, email and skills.
    pub fn contains_text(&self, query: &str) -> bool {
        let query = query.to_lowercase();
        [&self.name, &self.email, &self.skills]
            .iter()
            .any(|field| field.to_lowercase().contains(&query))
    }

    /// Case-insensitive substring test over the stored skills only.
    pub fn has_skill_text(&self, skill: &str) -> bool {
        self.skills.to_lowercase().contains(&skill.to_lowercase())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SaveOutcome {
    Inserted(Candidate),
    /// A candidate with this email already exists; nothing was written.
    Duplicate { email: String },
}

impl SaveOutcome {
    pub fn is_inserted(&self) -> bool {
        matches!(self, SaveOutcome::Inserted(_))
    }
}
