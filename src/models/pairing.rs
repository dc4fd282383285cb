//! Match records and sponsorship overrides.

use std::collections::BTreeSet;
use std::fmt;

use super::{Mentee, Mentor};

/// How a match was produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchOrigin {
    /// Forced by a sponsorship override pair.
    Sponsorship,
    /// Found by the greedy scan.
    Greedy,
}

impl fmt::Display for MatchOrigin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Sponsorship => write!(f, "sponsorship"),
            Self::Greedy => write!(f, "greedy"),
        }
    }
}

/// One mentor/mentee pairing, immutable once created.
///
/// Produced only by the [`Matcher`](crate::services::Matcher); sponsorship
/// and greedy matches share this shape.
#[derive(Debug, Clone)]
pub struct Match {
    /// The matched mentor.
    pub mentor: Mentor,
    /// The matched mentee.
    pub mentee: Mentee,
    /// Skills the mentor can teach this mentee.
    pub overlap: BTreeSet<String>,
    /// Organizational distance between the two (0 means too close).
    pub manager_distance: usize,
    /// Cosine similarity of the skill vectors, rounded to 2 decimals.
    pub similarity: f64,
    /// How the match was produced.
    pub origin: MatchOrigin,
}

impl Match {
    /// Returns the overlapping skills joined with `"; "`, in sorted order.
    #[must_use]
    pub fn overlap_joined(&self) -> String {
        self.overlap
            .iter()
            .map(String::as_str)
            .collect::<Vec<_>>()
            .join("; ")
    }
}

impl fmt::Display for Match {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}, {}, {}, {}, {:.2}",
            self.mentor.email(),
            self.mentee.email(),
            self.overlap_joined(),
            self.manager_distance,
            self.similarity
        )
    }
}

/// Externally supplied sponsorship overrides for one run.
///
/// Priority lists move people to the front of the processing order;
/// forced pairs are matched before the greedy scan runs. Emails are
/// compared case-insensitively against pool members.
#[derive(Debug, Clone, Default)]
pub struct Sponsorship {
    /// Mentors to process first in the greedy scan.
    pub priority_mentors: Vec<String>,
    /// Mentees to consider first in the greedy scan.
    pub priority_mentees: Vec<String>,
    /// Pre-committed (`mentor_email`, `mentee_email`) pairs, applied in
    /// order before greedy matching.
    pub forced_pairs: Vec<(String, String)>,
}

impl Sponsorship {
    /// Returns `true` when no overrides are configured.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.priority_mentors.is_empty()
            && self.priority_mentees.is_empty()
            && self.forced_pairs.is_empty()
    }
}
