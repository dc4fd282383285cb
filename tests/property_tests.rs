//! Property-based tests for the matching engine.
//!
//! Uses proptest to verify invariants across random inputs:
//! - Similarity stays within [0, 1] and hits the documented extremes
//! - Manager distance is symmetric outside reporting lines
//! - The vocabulary is sorted and deduplicated
//! - Filters only ever drop candidates, preserving order
//! - Matched plus unmatched mentees always equals the input pool

// Property tests use expect/unwrap for simplicity - panics are acceptable in tests
#![allow(clippy::expect_used, clippy::unwrap_used)]

use chrono::{TimeZone, Utc};
use proptest::collection::vec;
use proptest::prelude::*;
use std::collections::BTreeSet;

use mentormatch::{
    build_mentee_pool, build_mentor_pool, manager_distance, DirectoryIndex, DirectoryRecord,
    MatchConfig, Matcher, Mentee, Mentor, Person, SkillVocabulary, Sponsorship, SurveyRow,
};

fn skill_strategy() -> impl Strategy<Value = Vec<String>> {
    vec("[a-z]{1,8}", 0..6)
}

fn row(email: &str, mentee: &str, wants: &[String], mentor: &str, offers: &[String]) -> SurveyRow {
    let mut fields = vec![String::new(); 11];
    fields[1] = email.to_string();
    fields[2] = "San Francisco".to_string();
    fields[5] = mentee.to_string();
    fields[7] = wants.join(";");
    fields[9] = mentor.to_string();
    fields[10] = offers.join(";");
    SurveyRow::new(fields)
}

fn bare_person(email: &str, wants: &[String], offers: &[String]) -> Person {
    Person::new(
        row(email, "Yes", wants, "Yes", offers),
        None,
        MatchConfig::default().layout,
    )
}

proptest! {
    /// Property: similarity is always within [0, 1].
    #[test]
    fn prop_similarity_bounded(offers in skill_strategy(), wants in skill_strategy()) {
        let mentor = Mentor::new(bare_person("m@x.com", &[], &offers));
        let mentee = Mentee::new(bare_person("e@x.com", &wants, &[]));
        let vocab = SkillVocabulary::build(
            std::slice::from_ref(&mentor),
            std::slice::from_ref(&mentee),
        );
        let score = vocab.similarity(&mentor, &mentee);
        prop_assert!((0.0..=1.0).contains(&score));
    }

    /// Property: identical non-empty skill sets score exactly 1.0, and an
    /// empty side scores exactly 0.0.
    #[test]
    fn prop_similarity_extremes(skills in vec("[a-z]{1,8}", 1..6)) {
        let mentor = Mentor::new(bare_person("m@x.com", &[], &skills));
        let same = Mentee::new(bare_person("e@x.com", &skills, &[]));
        let empty = Mentee::new(bare_person("n@x.com", &[], &[]));
        let vocab = SkillVocabulary::build(
            std::slice::from_ref(&mentor),
            std::slice::from_ref(&same),
        );
        prop_assert!((vocab.similarity(&mentor, &same) - 1.0).abs() < f64::EPSILON);
        prop_assert!(vocab.similarity(&mentor, &empty).abs() < f64::EPSILON);
    }

    /// Property: the vocabulary is sorted ascending with no duplicates and
    /// covers exactly the union of the pools' skills.
    #[test]
    fn prop_vocabulary_sorted_dedup(offers in skill_strategy(), wants in skill_strategy()) {
        let mentor = Mentor::new(bare_person("m@x.com", &[], &offers));
        let mentee = Mentee::new(bare_person("e@x.com", &wants, &[]));
        let vocab = SkillVocabulary::build(
            std::slice::from_ref(&mentor),
            std::slice::from_ref(&mentee),
        );
        let terms = vocab.terms();
        prop_assert!(terms.windows(2).all(|w| w[0] < w[1]));
        let expected: BTreeSet<String> =
            offers.iter().chain(wants.iter()).cloned().collect();
        prop_assert_eq!(terms.len(), expected.len());
    }

    /// Property: manager distance is symmetric when neither person reports
    /// through the other.
    #[test]
    fn prop_distance_symmetric(a_chain in 0usize..4, b_chain in 0usize..4, shared in 0usize..3) {
        // Two disjoint chains that meet at `shared` common ancestors.
        let mut records = Vec::new();
        let mut shared_ids: Vec<String> = Vec::new();
        for i in 0..shared {
            let id = format!("s{i}");
            let next = if i + 1 < shared { Some(format!("s{}", i + 1)) } else { None };
            records.push(DirectoryRecord {
                id: id.clone(),
                email: format!("s{i}@x.com"),
                title: None,
                office_code: None,
                start_date: None,
                manager_id: next,
            });
            shared_ids.push(id);
        }
        let mut build_branch = |tag: &str, len: usize| {
            let mut manager_id = shared_ids.first().cloned();
            for i in (0..len).rev() {
                records.push(DirectoryRecord {
                    id: format!("{tag}{i}"),
                    email: format!("{tag}{i}@x.com"),
                    title: None,
                    office_code: None,
                    start_date: None,
                    manager_id: manager_id.clone(),
                });
                manager_id = Some(format!("{tag}{i}"));
            }
            manager_id
        };
        let a_mgr = build_branch("a", a_chain);
        let b_mgr = build_branch("b", b_chain);
        records.push(DirectoryRecord {
            id: "pa".to_string(),
            email: "pa@x.com".to_string(),
            title: None,
            office_code: None,
            start_date: None,
            manager_id: a_mgr,
        });
        records.push(DirectoryRecord {
            id: "pb".to_string(),
            email: "pb@x.com".to_string(),
            title: None,
            office_code: None,
            start_date: None,
            manager_id: b_mgr,
        });
        let index = DirectoryIndex::build(records);

        let person = |email: &str| {
            Person::new(
                row(email, "Yes", &[], "Yes", &[]),
                index.lookup_by_email(email).cloned(),
                MatchConfig::default().layout,
            )
        };
        let pa = person("pa@x.com");
        let pb = person("pb@x.com");
        prop_assert_eq!(
            manager_distance(&pa, &pb, &index),
            manager_distance(&pb, &pa, &index)
        );
    }

    /// Property: pool builders only drop candidates and preserve order.
    #[test]
    fn prop_filters_subsequence(opt_ins in vec(prop::bool::ANY, 0..12)) {
        let index = DirectoryIndex::build(opt_ins.iter().enumerate().map(|(i, _)| {
            DirectoryRecord {
                id: format!("{i}"),
                email: format!("p{i}@x.com"),
                title: Some("SWE".to_string()),
                office_code: Some("SFO".to_string()),
                start_date: Some("2020-06-01".to_string()),
                manager_id: None,
            }
        }));
        let config = MatchConfig::for_office("San Francisco");
        let people: Vec<Person> = opt_ins
            .iter()
            .enumerate()
            .map(|(i, &opted)| {
                let email = format!("p{i}@x.com");
                let flag = if opted { "Yes" } else { "No" };
                let skills = vec!["rust".to_string()];
                Person::new(
                    row(&email, flag, &skills, flag, &skills),
                    index.lookup_by_email(&email).cloned(),
                    config.layout,
                )
            })
            .collect();
        let now = Utc.with_ymd_and_hms(2026, 8, 24, 12, 0, 0).unwrap();

        let mentors = build_mentor_pool(&people, &config, now);
        let expected: Vec<String> = people
            .iter()
            .filter(|p| p.mentor_opt_in() == "Yes")
            .map(|p| p.email().to_string())
            .collect();
        let actual: Vec<String> = mentors.iter().map(|m| m.email().to_string()).collect();
        prop_assert_eq!(actual, expected);

        let mentees = build_mentee_pool(&people, &config, now);
        prop_assert!(mentees.len() <= people.len());
    }

    /// Property: every mentee from the input pool ends up matched exactly
    /// once or in the unmatched list, never both, never duplicated.
    #[test]
    fn prop_mentee_conservation(
        offer_sets in vec(skill_strategy(), 0..5),
        want_sets in vec(skill_strategy(), 0..5),
        seed in 0u64..1000,
    ) {
        let config = MatchConfig {
            seed: Some(seed),
            // Each person below has one private manager, putting every
            // pair at distance 2; a threshold of 1 lets skill overlap
            // drive the scan.
            manager_distance_threshold: 1,
            ..MatchConfig::default()
        };
        let emails: Vec<String> = (0..offer_sets.len())
            .map(|i| format!("m{i}@x.com"))
            .chain((0..want_sets.len()).map(|i| format!("e{i}@x.com")))
            .collect();
        let index = DirectoryIndex::build(emails.iter().enumerate().flat_map(|(i, email)| {
            [
                DirectoryRecord {
                    id: format!("p{i}"),
                    email: email.clone(),
                    title: None,
                    office_code: None,
                    start_date: None,
                    manager_id: Some(format!("mgr{i}")),
                },
                DirectoryRecord {
                    id: format!("mgr{i}"),
                    email: format!("mgr{i}@x.com"),
                    title: None,
                    office_code: None,
                    start_date: None,
                    manager_id: None,
                },
            ]
        }));
        let linked_person = |email: &str, wants: &[String], offers: &[String]| {
            Person::new(
                row(email, "Yes", wants, "Yes", offers),
                index.lookup_by_email(email).cloned(),
                MatchConfig::default().layout,
            )
        };
        let mentors: Vec<Mentor> = offer_sets
            .iter()
            .enumerate()
            .map(|(i, offers)| Mentor::new(linked_person(&format!("m{i}@x.com"), &[], offers)))
            .collect();
        let mentees: Vec<Mentee> = want_sets
            .iter()
            .enumerate()
            .map(|(i, wants)| Mentee::new(linked_person(&format!("e{i}@x.com"), wants, &[])))
            .collect();
        let pool_size = mentees.len();

        let outcome = Matcher::new(&config, &index).run(mentors, mentees, &Sponsorship::default());

        prop_assert_eq!(outcome.matches.len() + outcome.unmatched_mentees.len(), pool_size);
        let mut seen: Vec<&str> = outcome
            .matches
            .iter()
            .map(|m| m.mentee.email())
            .chain(outcome.unmatched_mentees.iter().map(Mentee::email))
            .collect();
        seen.sort_unstable();
        seen.dedup();
        prop_assert_eq!(seen.len(), pool_size);
    }
}
