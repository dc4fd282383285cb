//! Greedy mentor/mentee assignment with sponsorship overrides.
//!
//! The matcher runs in phases: forced sponsorship pairs are applied first,
//! both pools are shuffled (seedable) with sponsored entries moved to the
//! front of the processing order, and a greedy scan then pops mentors one
//! at a time and pairs each with the first mentee who shares a skill and
//! sits far enough away in the org tree. First match wins; the algorithm is
//! order-dependent and does not optimize a global objective.

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use std::collections::HashSet;

use super::{manager_distance, SkillVocabulary};
use crate::config::MatchConfig;
use crate::models::{DirectoryIndex, Match, MatchOrigin, Mentee, Mentor, Sponsorship};

/// Result of one matching run.
#[derive(Debug, Clone, Default)]
pub struct MatchOutcome {
    /// Matches in production order: sponsorship first, then greedy.
    pub matches: Vec<Match>,
    /// Mentors for whom no qualifying mentee was found (informational).
    pub unmatched_mentors: Vec<Mentor>,
    /// Mentees never matched, in post-shuffle, post-removal order.
    pub unmatched_mentees: Vec<Mentee>,
}

/// The greedy pairing engine.
///
/// Pure and synchronous: all inputs are materialized before [`run`] and the
/// pools are exclusively owned by the run. The only process-wide state is
/// the random source, which the configured seed pins for reproducibility.
///
/// [`run`]: Matcher::run
#[derive(Debug, Clone, Copy)]
pub struct Matcher<'a> {
    config: &'a MatchConfig,
    index: &'a DirectoryIndex,
}

impl<'a> Matcher<'a> {
    /// Creates a matcher over one run's configuration and directory index.
    #[must_use]
    pub const fn new(config: &'a MatchConfig, index: &'a DirectoryIndex) -> Self {
        Self { config, index }
    }

    /// Runs the full matching pipeline over the filtered pools.
    #[must_use]
    pub fn run(
        &self,
        mut mentors: Vec<Mentor>,
        mut mentees: Vec<Mentee>,
        sponsorship: &Sponsorship,
    ) -> MatchOutcome {
        let vocabulary = SkillVocabulary::build(&mentors, &mentees);
        tracing::debug!(
            mentors = mentors.len(),
            mentees = mentees.len(),
            skills = vocabulary.len(),
            office = %self.config.office,
            "starting matching run"
        );

        let mut matches = self.apply_forced_pairs(&mut mentors, &mut mentees, sponsorship, &vocabulary);

        let mut rng = self
            .config
            .seed
            .map_or_else(StdRng::from_entropy, StdRng::seed_from_u64);
        mentors.shuffle(&mut rng);
        mentees.shuffle(&mut rng);

        // Sponsored mentors must pop first from the tail-pop queue, so the
        // sponsor-partitioned list is reversed; sponsored mentees lead the
        // scan order directly.
        let mut mentor_queue =
            sponsored_first(mentors, &lowercased(&sponsorship.priority_mentors), Mentor::email);
        mentor_queue.reverse();
        let mut mentee_pool =
            sponsored_first(mentees, &lowercased(&sponsorship.priority_mentees), Mentee::email);

        let mut unmatched_mentors = Vec::new();
        while let Some(mentor) = mentor_queue.pop() {
            let found = mentee_pool.iter().position(|mentee| {
                mentor.has_skills_match_with(mentee)
                    && manager_distance(mentor.person(), mentee.person(), self.index)
                        > self.config.manager_distance_threshold
            });
            if let Some(pos) = found {
                let mentee = mentee_pool.remove(pos);
                // Keep each participant out of the opposite role.
                strip_by_email(&mut mentee_pool, mentor.email(), Mentee::email);
                strip_by_email(&mut mentor_queue, mentee.email(), Mentor::email);
                matches.push(self.record(&vocabulary, mentor, mentee, MatchOrigin::Greedy));
            } else {
                tracing::info!(mentor = %mentor.email(), "no qualifying mentee found");
                unmatched_mentors.push(mentor);
            }
        }

        tracing::debug!(
            matches = matches.len(),
            unmatched_mentors = unmatched_mentors.len(),
            unmatched_mentees = mentee_pool.len(),
            "matching run complete"
        );
        MatchOutcome {
            matches,
            unmatched_mentors,
            unmatched_mentees: mentee_pool,
        }
    }

    /// Applies forced sponsorship pairs ahead of greedy matching.
    ///
    /// A pair whose mentor is not in the pool is skipped silently (assumed
    /// wrong office). The mentee resolves from the mentee pool, or from the
    /// mentor pool via role promotion when the person never marked
    /// themselves as a mentee. Both participants leave both pools.
    fn apply_forced_pairs(
        &self,
        mentors: &mut Vec<Mentor>,
        mentees: &mut Vec<Mentee>,
        sponsorship: &Sponsorship,
        vocabulary: &SkillVocabulary,
    ) -> Vec<Match> {
        let mut matches = Vec::new();
        for (mentor_email, mentee_email) in &sponsorship.forced_pairs {
            let Some(pos) = mentors.iter().position(|m| eq_email(m.email(), mentor_email))
            else {
                tracing::debug!(
                    mentor = %mentor_email,
                    "sponsorship pair skipped: mentor not in pool"
                );
                continue;
            };
            let mentor = mentors.remove(pos);
            let mentee = if let Some(epos) =
                mentees.iter().position(|m| eq_email(m.email(), mentee_email))
            {
                mentees.remove(epos)
            } else if let Some(mpos) =
                mentors.iter().position(|m| eq_email(m.email(), mentee_email))
            {
                // Sponsor pre-committed to someone who only signed up to mentor.
                mentors.remove(mpos).into_mentee()
            } else {
                tracing::debug!(
                    mentee = %mentee_email,
                    "sponsorship pair skipped: mentee not found"
                );
                mentors.insert(pos, mentor);
                continue;
            };
            // Neither participant may appear again in either role.
            strip_by_email(mentors, mentor.email(), Mentor::email);
            strip_by_email(mentors, mentee.email(), Mentor::email);
            strip_by_email(mentees, mentor.email(), Mentee::email);
            strip_by_email(mentees, mentee.email(), Mentee::email);
            matches.push(self.record(vocabulary, mentor, mentee, MatchOrigin::Sponsorship));
        }
        matches
    }

    fn record(
        &self,
        vocabulary: &SkillVocabulary,
        mentor: Mentor,
        mentee: Mentee,
        origin: MatchOrigin,
    ) -> Match {
        let overlap = mentor.skills_to_mentor(&mentee);
        let distance = manager_distance(mentor.person(), mentee.person(), self.index);
        let similarity = vocabulary.similarity(&mentor, &mentee);
        Match {
            mentor,
            mentee,
            overlap,
            manager_distance: distance,
            similarity,
            origin,
        }
    }
}

fn eq_email(a: &str, b: &str) -> bool {
    a.eq_ignore_ascii_case(b)
}

fn lowercased(emails: &[String]) -> HashSet<String> {
    emails.iter().map(|e| e.to_lowercase()).collect()
}

fn strip_by_email<T>(pool: &mut Vec<T>, email: &str, get: impl Fn(&T) -> &str) {
    pool.retain(|item| !eq_email(get(item), email));
}

/// Stable partition moving sponsored entries to the front.
fn sponsored_first<T>(
    pool: Vec<T>,
    sponsored: &HashSet<String>,
    get: impl Fn(&T) -> &str,
) -> Vec<T> {
    let mut front = Vec::new();
    let mut rest = Vec::new();
    for item in pool {
        if sponsored.contains(&get(&item).to_lowercase()) {
            front.push(item);
        } else {
            rest.push(item);
        }
    }
    front.extend(rest);
    front
}
