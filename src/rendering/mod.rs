//! Text rendering of matching results.
//!
//! Formatting is an external concern of the engine: these functions turn
//! matches and leftover pools into the console report.

use chrono::{DateTime, Utc};
use std::fmt::Write as _;

use crate::models::{Match, Person};
use crate::services::MatchOutcome;

/// Renders a person as `email (title, XyYm)`.
///
/// An uncomputable tenure renders as `?`.
#[must_use]
pub fn render_person(person: &Person, now: DateTime<Utc>) -> String {
    let tenure = person
        .tenure(now)
        .map_or_else(|_| "?".to_string(), |t| t.to_string());
    format!("{} ({}, {})", person.email(), person.title(), tenure)
}

/// Renders one match as `mentor, mentee, skills, distance, similarity`.
#[must_use]
pub fn render_match(m: &Match, now: DateTime<Utc>) -> String {
    format!(
        "{}, {}, {}, {}, {:.2}",
        render_person(m.mentor.person(), now),
        render_person(m.mentee.person(), now),
        m.overlap_joined(),
        m.manager_distance,
        m.similarity
    )
}

/// Renders the full run report: matches, then unmatched mentors, then the
/// remaining mentees.
#[must_use]
pub fn render_report(outcome: &MatchOutcome, now: DateTime<Utc>) -> String {
    let mut out = String::new();
    for m in &outcome.matches {
        let _ = writeln!(out, "{}", render_match(m, now));
    }
    if !outcome.unmatched_mentors.is_empty() {
        let _ = writeln!(out, "\nMentors with no mentees:");
        for mentor in &outcome.unmatched_mentors {
            let _ = writeln!(out, "{}", render_person(mentor.person(), now));
        }
    }
    let _ = writeln!(out, "\nRemaining mentees with no mentors:");
    for mentee in &outcome.unmatched_mentees {
        let _ = writeln!(out, "{}", render_person(mentee.person(), now));
    }
    out
}
