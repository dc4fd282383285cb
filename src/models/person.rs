//! People: survey respondents joined with their directory records.

use chrono::{DateTime, Datelike, NaiveDate, NaiveDateTime, Utc};
use std::collections::BTreeSet;
use std::fmt;
use std::sync::Arc;

use super::{DirectoryIndex, DirectoryRecord, SurveyRow};
use crate::config::{OfficeTable, SurveyLayout};
use crate::{Error, Result};

/// Sentinel title for a person without a resolvable directory record.
pub const NOT_IN_DIRECTORY: &str = "Not in directory";

/// Tenure expressed as whole years plus leftover months.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tenure {
    /// Whole years of tenure.
    pub years: u32,
    /// Leftover months beyond the whole years, 0..=11.
    pub months: u32,
}

impl Tenure {
    /// Computes the tenure between a start date and today.
    ///
    /// A start date in the future clamps to zero.
    #[must_use]
    pub fn between(start: NaiveDate, today: NaiveDate) -> Self {
        let mut total = (today.year() - start.year()) * 12 + today.month() as i32
            - start.month() as i32;
        if today.day() < start.day() {
            total -= 1;
        }
        let total = u32::try_from(total.max(0)).unwrap_or(0);
        Self {
            years: total / 12,
            months: total % 12,
        }
    }

    /// Returns the tenure as a total number of months.
    #[must_use]
    pub const fn total_months(&self) -> u32 {
        self.years * 12 + self.months
    }
}

impl fmt::Display for Tenure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}y {}m", self.years, self.months)
    }
}

fn parse_start_date(s: &str) -> Option<NaiveDate> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.date_naive());
    }
    NaiveDate::parse_from_str(s, "%Y-%m-%d").ok().or_else(|| {
        NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S")
            .ok()
            .map(|dt| dt.date())
    })
}

/// One survey respondent, optionally linked to a directory record.
///
/// A cheap, disposable view over one [`SurveyRow`]: every attribute is
/// derived on access and nothing is mutated after construction. Identity is
/// email equality only.
#[derive(Debug, Clone)]
pub struct Person {
    row: SurveyRow,
    directory: Option<Arc<DirectoryRecord>>,
    layout: SurveyLayout,
}

impl Person {
    /// Creates a person from a survey row and an optional directory link.
    #[must_use]
    pub const fn new(
        row: SurveyRow,
        directory: Option<Arc<DirectoryRecord>>,
        layout: SurveyLayout,
    ) -> Self {
        Self {
            row,
            directory,
            layout,
        }
    }

    /// Builds people from survey rows, resolving directory links by email.
    #[must_use]
    pub fn resolve_all(
        rows: Vec<SurveyRow>,
        index: &DirectoryIndex,
        layout: SurveyLayout,
    ) -> Vec<Self> {
        rows.into_iter()
            .map(|row| {
                let directory = index.lookup_by_email(row.field(layout.email)).cloned();
                Self::new(row, directory, layout)
            })
            .collect()
    }

    /// Returns the underlying survey row.
    #[must_use]
    pub const fn row(&self) -> &SurveyRow {
        &self.row
    }

    /// Returns the linked directory record, if the email resolved.
    #[must_use]
    pub const fn directory(&self) -> Option<&Arc<DirectoryRecord>> {
        self.directory.as_ref()
    }

    /// Self-reported email address.
    #[must_use]
    pub fn email(&self) -> &str {
        self.row.field(self.layout.email)
    }

    /// Self-reported city.
    #[must_use]
    pub fn city(&self) -> &str {
        self.row.field(self.layout.city)
    }

    /// Raw mentor opt-in field.
    #[must_use]
    pub fn mentor_opt_in(&self) -> &str {
        self.row.field(self.layout.mentor_opt_in)
    }

    /// Raw mentee opt-in field.
    #[must_use]
    pub fn mentee_opt_in(&self) -> &str {
        self.row.field(self.layout.mentee_opt_in)
    }

    /// Directory title, or [`NOT_IN_DIRECTORY`] when unlinked or untitled.
    #[must_use]
    pub fn title(&self) -> &str {
        self.directory
            .as_ref()
            .and_then(|r| r.title.as_deref())
            .unwrap_or(NOT_IN_DIRECTORY)
    }

    /// Office name resolved through the directory office code.
    ///
    /// An unlinked person or unknown code yields the empty string.
    #[must_use]
    pub fn office<'a>(&self, offices: &'a OfficeTable) -> &'a str {
        let code = self
            .directory
            .as_ref()
            .and_then(|r| r.office_code.as_deref())
            .unwrap_or("");
        offices.resolve(code)
    }

    /// Tenure relative to `now`, from the directory start date.
    ///
    /// # Errors
    ///
    /// Returns `Error::TenureUnavailable` when the person has no directory
    /// record, the record has no start date, or the date is unparsable.
    /// The failure is local to this person; other candidates are unaffected.
    pub fn tenure(&self, now: DateTime<Utc>) -> Result<Tenure> {
        let unavailable = |cause: String| Error::TenureUnavailable {
            email: self.email().to_string(),
            cause,
        };
        let record = self
            .directory
            .as_ref()
            .ok_or_else(|| unavailable("not in directory".to_string()))?;
        let raw = record
            .start_date
            .as_deref()
            .ok_or_else(|| unavailable("missing start date".to_string()))?;
        let start = parse_start_date(raw)
            .ok_or_else(|| unavailable(format!("unparsable start date '{raw}'")))?;
        Ok(Tenure::between(start, now.date_naive()))
    }

    /// Whether this person counts as a new employee.
    ///
    /// True iff tenure is under `threshold_months` and under one year. A
    /// person whose tenure cannot be computed is treated as NOT new, so a
    /// stale directory export does not silently shrink the pools.
    #[must_use]
    pub fn is_new_employee(&self, now: DateTime<Utc>, threshold_months: u32) -> bool {
        self.tenure(now)
            .is_ok_and(|t| t.years == 0 && t.months < threshold_months)
    }

    /// Ordered ancestor records, immediate manager first.
    ///
    /// Empty for a person without a directory record.
    #[must_use]
    pub fn managers(&self, index: &DirectoryIndex) -> Vec<Arc<DirectoryRecord>> {
        self.directory
            .as_ref()
            .map(|record| index.manager_chain(record))
            .unwrap_or_default()
    }

    /// Parses a semicolon-delimited skill field into a set.
    ///
    /// Empty tokens are discarded; the result is derived fresh on every
    /// call and never cached or mutated.
    #[must_use]
    pub fn parse_skills(&self, column: usize) -> BTreeSet<String> {
        self.row
            .field(column)
            .split(';')
            .filter(|token| !token.is_empty())
            .map(String::from)
            .collect()
    }

    /// Returns the survey layout this person was constructed with.
    #[must_use]
    pub const fn layout(&self) -> &SurveyLayout {
        &self.layout
    }
}

impl fmt::Display for Person {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.email(), self.title())
    }
}

/// A person acting in the mentor role for one matching run.
#[derive(Debug, Clone)]
pub struct Mentor {
    person: Person,
}

impl Mentor {
    /// Wraps a person in the mentor role.
    #[must_use]
    pub const fn new(person: Person) -> Self {
        Self { person }
    }

    /// Returns the underlying person.
    #[must_use]
    pub const fn person(&self) -> &Person {
        &self.person
    }

    /// The mentor's email.
    #[must_use]
    pub fn email(&self) -> &str {
        self.person.email()
    }

    /// Skills this mentor offers to teach.
    #[must_use]
    pub fn mentorable_skills(&self) -> BTreeSet<String> {
        self.person.parse_skills(self.person.layout().offered_skills)
    }

    /// Skills this mentor could teach this mentee: the intersection of
    /// offered and desired skills.
    #[must_use]
    pub fn skills_to_mentor(&self, mentee: &Mentee) -> BTreeSet<String> {
        self.mentorable_skills()
            .intersection(&mentee.desired_skills())
            .cloned()
            .collect()
    }

    /// Whether any offered skill overlaps the mentee's desired skills.
    #[must_use]
    pub fn has_skills_match_with(&self, mentee: &Mentee) -> bool {
        !self.skills_to_mentor(mentee).is_empty()
    }

    /// Re-wraps this mentor in the mentee role.
    ///
    /// Used by the sponsorship override when a sponsor pre-committed to
    /// mentor someone who never marked themselves as a mentee.
    #[must_use]
    pub fn into_mentee(self) -> Mentee {
        Mentee::new(self.person)
    }
}

impl fmt::Display for Mentor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.person.fmt(f)
    }
}

/// A person acting in the mentee role for one matching run.
#[derive(Debug, Clone)]
pub struct Mentee {
    person: Person,
}

impl Mentee {
    /// Wraps a person in the mentee role.
    #[must_use]
    pub const fn new(person: Person) -> Self {
        Self { person }
    }

    /// Returns the underlying person.
    #[must_use]
    pub const fn person(&self) -> &Person {
        &self.person
    }

    /// The mentee's email.
    #[must_use]
    pub fn email(&self) -> &str {
        self.person.email()
    }

    /// Skills this mentee wants to learn.
    #[must_use]
    pub fn desired_skills(&self) -> BTreeSet<String> {
        self.person.parse_skills(self.person.layout().desired_skills)
    }
}

impl fmt::Display for Mentee {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.person.fmt(f)
    }
}
