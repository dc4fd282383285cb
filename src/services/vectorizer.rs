//! Skill vocabulary and cosine similarity scoring.
//!
//! All skills observed in the active pools form a fixed-order vocabulary;
//! each person's skill set becomes a 0/1 vector over it, and a mentor/mentee
//! pair is scored by the cosine of those vectors. The vocabulary is a value
//! built once per run and threaded explicitly into scoring, never shared
//! mutable state.

use std::collections::BTreeSet;

use crate::models::{Mentee, Mentor};

/// Fixed-order skill vocabulary for one matching run.
///
/// Terms are the union of all mentors' offered and all mentees' desired
/// skills, deduplicated and sorted ascending, so vectorization is stable
/// within a run and scores are repeatable.
#[derive(Debug, Clone, Default)]
pub struct SkillVocabulary {
    terms: Vec<String>,
}

impl SkillVocabulary {
    /// Builds the vocabulary from the filtered pools.
    #[must_use]
    pub fn build(mentors: &[Mentor], mentees: &[Mentee]) -> Self {
        let mut terms = BTreeSet::new();
        for mentor in mentors {
            terms.extend(mentor.mentorable_skills());
        }
        for mentee in mentees {
            terms.extend(mentee.desired_skills());
        }
        // BTreeSet iteration yields the required ascending order.
        Self {
            terms: terms.into_iter().collect(),
        }
    }

    /// Returns the ordered vocabulary terms.
    #[must_use]
    pub fn terms(&self) -> &[String] {
        &self.terms
    }

    /// Returns the number of vocabulary terms.
    #[must_use]
    pub fn len(&self) -> usize {
        self.terms.len()
    }

    /// Returns `true` for an empty vocabulary.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    /// Vectorizes a skill set into a fixed-length 0/1 vector, one entry
    /// per vocabulary term.
    #[must_use]
    pub fn vectorize(&self, skills: &BTreeSet<String>) -> Vec<u8> {
        self.terms
            .iter()
            .map(|term| u8::from(skills.contains(term)))
            .collect()
    }

    /// Cosine similarity between a mentor's offered skills and a mentee's
    /// desired skills, rounded to 2 decimal places.
    ///
    /// Returns 0.0 when either vector is all-zero (cosine is undefined
    /// there; the degenerate case is defined rather than an error).
    #[must_use]
    pub fn similarity(&self, mentor: &Mentor, mentee: &Mentee) -> f64 {
        let a = self.vectorize(&mentor.mentorable_skills());
        let b = self.vectorize(&mentee.desired_skills());
        round2(cosine(&a, &b))
    }
}

fn cosine(a: &[u8], b: &[u8]) -> f64 {
    let dot: u32 = a.iter().zip(b).map(|(&x, &y)| u32::from(x * y)).sum();
    let norm_a = f64::from(a.iter().map(|&x| u32::from(x)).sum::<u32>()).sqrt();
    let norm_b = f64::from(b.iter().map(|&x| u32::from(x)).sum::<u32>()).sqrt();
    if norm_a == 0.0 || norm_b == 0.0 {
        return 0.0;
    }
    f64::from(dot) / (norm_a * norm_b)
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
