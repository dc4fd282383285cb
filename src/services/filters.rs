//! Candidate filters.
//!
//! Each filter is a pure, order-preserving predicate over people. The pool
//! builders compose them in the standard pipeline: opt-in, eligible title,
//! tenured enough, office match.

use chrono::{DateTime, Utc};

use crate::config::MatchConfig;
use crate::models::{Mentee, Mentor, Person};

/// The opt-in fields must equal this literal to count.
const OPT_IN_YES: &str = "Yes";

/// Whether the person opted in as a mentor.
#[must_use]
pub fn opted_in_as_mentor(person: &Person) -> bool {
    person.mentor_opt_in() == OPT_IN_YES
}

/// Whether the person opted in as a mentee.
#[must_use]
pub fn opted_in_as_mentee(person: &Person) -> bool {
    person.mentee_opt_in() == OPT_IN_YES
}

/// Whether the person's title is in the configured allow-list.
#[must_use]
pub fn eligible_title(person: &Person, titles: &[String]) -> bool {
    titles.iter().any(|t| t == person.title())
}

/// Whether the person has been around long enough to participate.
#[must_use]
pub fn tenured_enough(person: &Person, now: DateTime<Utc>, threshold_months: u32) -> bool {
    !person.is_new_employee(now, threshold_months)
}

/// Whether the person's resolved office equals the target exactly.
///
/// An empty (unresolved) office never matches, including an empty target.
#[must_use]
pub fn office_matches(person: &Person, config: &MatchConfig, target: &str) -> bool {
    let office = person.office(&config.offices);
    !office.is_empty() && office == target
}

fn passes_pipeline(person: &Person, config: &MatchConfig, now: DateTime<Utc>) -> bool {
    eligible_title(person, &config.eligible_titles)
        && tenured_enough(person, now, config.new_employee_months)
        && office_matches(person, config, &config.office)
}

/// Builds the filtered mentor pool from all survey respondents.
///
/// Order-preserving: mentors come out in survey order.
#[must_use]
pub fn build_mentor_pool(people: &[Person], config: &MatchConfig, now: DateTime<Utc>) -> Vec<Mentor> {
    people
        .iter()
        .filter(|p| opted_in_as_mentor(p))
        .filter(|p| passes_pipeline(p, config, now))
        .cloned()
        .map(Mentor::new)
        .collect()
}

/// Builds the filtered mentee pool from all survey respondents.
///
/// Order-preserving: mentees come out in survey order.
#[must_use]
pub fn build_mentee_pool(people: &[Person], config: &MatchConfig, now: DateTime<Utc>) -> Vec<Mentee> {
    people
        .iter()
        .filter(|p| opted_in_as_mentee(p))
        .filter(|p| passes_pipeline(p, config, now))
        .cloned()
        .map(Mentee::new)
        .collect()
}
