pub mod candidate;

pub use candidate::{Candidate, NewCandidate, ParsedResume, SaveOutcome, SKILL_SEPARATOR};
