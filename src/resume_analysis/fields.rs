// src/resume_analysis/fields.rs
//! Candidate field extraction from plain resume text

use anyhow::{Context, Result};
use regex::Regex;

use crate::types::ParsedResume;

pub const EMAIL_NOT_FOUND: &str = "Not Found";
pub const UNKNOWN_NAME: &str = "Unknown";

const EMAIL_PATTERN: &str = r"[\w.-]+@[\w.-]+";

pub const DEFAULT_SKILLS: [&str; 8] = [
    "python",
    "java",
    "c++",
    "excel",
    "sql",
    "communication",
    "data analysis",
    "machine learning",
];

/// Closed list of recognised skill keywords, in declaration order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkillVocabulary {
    terms: Vec<String>,
}

impl SkillVocabulary {
    /// Terms are trimmed and lower-cased; blanks and repeats are dropped.
    pub fn new<I, S>(terms: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut normalized: Vec<String> = Vec::new();
        for term in terms {
            let term = term.as_ref().trim().to_lowercase();
            if !term.is_empty() && !normalized.contains(&term) {
                normalized.push(term);
            }
        }
        Self { terms: normalized }
    }

    pub fn terms(&self) -> &[String] {
        &self.terms
    }

    pub fn len(&self) -> usize {
        self.terms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }
}

impl Default for SkillVocabulary {
    fn default() -> Self {
        Self::new(DEFAULT_SKILLS)
    }
}

#[derive(Debug, Clone)]
pub struct FieldExtractor {
    email_pattern: Regex,
    vocabulary: SkillVocabulary,
}

impl FieldExtractor {
    pub fn new(vocabulary: SkillVocabulary) -> Result<Self> {
        let email_pattern = Regex::new(EMAIL_PATTERN).context("Invalid email pattern")?;
        Ok(Self {
            email_pattern,
            vocabulary,
        })
    }

    /// First `local@domain` looking token, or `"Not Found"`.
    pub fn extract_email(&self, text: &str) -> String {
        self.email_pattern
            .find(text)
            .map(|m| m.as_str().to_string())
            .unwrap_or_else(|| EMAIL_NOT_FOUND.to_string())
    }

    /// First non-blank line, trimmed, or `"Unknown"`.
    ///
    /// This is a heuristic: a resume that opens with a header or caption
    /// yields that line as the name.
    pub fn extract_name(&self, text: &str) -> String {
        text.split('\n')
            .map(str::trim)
            .find(|line| !line.is_empty())
            .unwrap_or(UNKNOWN_NAME)
            .to_string()
    }

    /// Every vocabulary term occurring anywhere in the lower-cased text.
    ///
    /// Plain substring containment, no word boundaries: "mysql" yields "sql".
    pub fn extract_skills(&self, text: &str) -> Vec<String> {
        let text = text.to_lowercase();
        self.vocabulary
            .terms()
            .iter()
            .filter(|skill| text.contains(skill.as_str()))
            .cloned()
            .collect()
    }

    pub fn parse(&self, text: &str) -> ParsedResume {
        ParsedResume {
            name: self.extract_name(text),
            email: self.extract_email(text),
            skills: self.extract_skills(text),
        }
    }
}
