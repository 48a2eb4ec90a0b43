// src/resume_analysis/matcher.rs
//! Job description to candidate skill matching

use serde::Serialize;

use super::fields::FieldExtractor;
use crate::types::Candidate;

/// A job description held only for the duration of one matching run.
#[derive(Debug, Clone, Serialize)]
pub struct JobDescription {
    pub text: String,
    pub skills: Vec<String>,
}

impl JobDescription {
    pub fn from_text(text: String, extractor: &FieldExtractor) -> Self {
        let skills = extractor.extract_skills(&text);
        Self { text, skills }
    }

    pub fn match_candidates(&self, candidates: Vec<Candidate>) -> Vec<Candidate> {
        match_candidates(&self.skills, candidates)
    }
}

/// Keep every candidate whose stored skills contain at least one of
/// `jd_skills` as a case-insensitive substring.
///
/// An empty skill set matches nobody.
pub fn match_candidates<S: AsRef<str>>(jd_skills: &[S], candidates: Vec<Candidate>) -> Vec<Candidate> {
    if jd_skills.is_empty() {
        return Vec::new();
    }

    let wanted: Vec<String> = jd_skills
        .iter()
        .map(|skill| skill.as_ref().to_lowercase())
        .collect();

    candidates
        .into_iter()
        .filter(|candidate| {
            let stored = candidate.skills.to_lowercase();
            wanted.iter().any(|skill| stored.contains(skill.as_str()))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resume_analysis::SkillVocabulary;

    fn candidate(id: i64, skills: &str) -> Candidate {
        Candidate {
            id,
            name: format!("Candidate {}", id),
            email: format!("c{}@x.com", id),
            skills: skills.to_string(),
            resume_path: format!("uploads/c{}.pdf", id),
        }
    }

    #[test]
    fn test_any_shared_skill_matches() {
        let matched = match_candidates(&["python", "sql"], vec![candidate(1, "python, excel")]);
        assert_eq!(matched.len(), 1);
        assert_eq!(matched[0].id, 1);
    }

    #[test]
    fn test_empty_skill_set_matches_nobody() {
        let pool = vec![candidate(1, "python"), candidate(2, ""), candidate(3, "sql, java")];
        assert!(match_candidates::<&str>(&[], pool).is_empty());
    }

    #[test]
    fn test_preserves_candidate_order_and_filters() {
        let pool = vec![
            candidate(1, "java"),
            candidate(2, "excel"),
            candidate(3, "python, java"),
            candidate(4, ""),
        ];
        let ids: Vec<i64> = match_candidates(&["java"], pool)
            .iter()
            .map(|c| c.id)
            .collect();
        assert_eq!(ids, vec![1, 3]);
    }

    #[test]
    fn test_matching_is_case_insensitive() {
        let matched = match_candidates(&["SQL".to_string()], vec![candidate(1, "Python, Sql")]);
        assert_eq!(matched.len(), 1);
    }

    #[test]
    fn test_job_description_from_text() {
        let extractor = FieldExtractor::new(SkillVocabulary::default()).unwrap();
        let jd = JobDescription::from_text(
            "We need Machine Learning and SQL experience".to_string(),
            &extractor,
        );
        assert_eq!(jd.skills, vec!["sql", "machine learning"]);

        let matched = jd.match_candidates(vec![
            candidate(1, "python, excel"),
            candidate(2, "sql"),
            candidate(3, "machine learning"),
        ]);
        let ids: Vec<i64> = matched.iter().map(|c| c.id).collect();
        assert_eq!(ids, vec![2, 3]);
    }

    #[test]
    fn test_garbled_job_description_matches_nobody() {
        let extractor = FieldExtractor::new(SkillVocabulary::default()).unwrap();
        let jd = JobDescription::from_text("%%%%".to_string(), &extractor);
        assert!(jd.skills.is_empty());
        assert!(jd.match_candidates(vec![candidate(1, "python")]).is_empty());
    }
}
