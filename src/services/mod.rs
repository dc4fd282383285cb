//! Matching engine: filters, scoring, and greedy assignment.

mod distance;
mod filters;
mod matcher;
mod vectorizer;

pub use distance::manager_distance;
pub use filters::{
    build_mentee_pool, build_mentor_pool, eligible_title, office_matches, opted_in_as_mentee,
    opted_in_as_mentor, tenured_enough,
};
pub use matcher::{MatchOutcome, Matcher};
pub use vectorizer::SkillVocabulary;
