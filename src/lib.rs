//! # Mentormatch
//!
//! Greedy mentor/mentee matching over survey and org-directory data.
//!
//! Mentormatch joins self-reported skill survey responses against an
//! organization directory (manager chains, titles, start dates) and pairs
//! mentors with mentees by skill overlap and organizational distance, with
//! an optional sponsorship override layer that pre-assigns specific pairs.
//!
//! ## Pipeline
//!
//! - Survey rows and directory records are loaded and indexed
//! - Candidate filters produce the mentor and mentee pools for one office
//! - A skill vocabulary is built from the pools and used for cosine scoring
//! - The greedy matcher consumes the pools (plus sponsorship lists) and
//!   produces matches and the leftover mentees
//!
//! ## Example
//!
//! ```rust,ignore
//! use mentormatch::{MatchConfig, Matcher, Sponsorship};
//!
//! let config = MatchConfig::for_office("San Francisco");
//! let outcome = Matcher::new(&config, &index).run(mentors, mentees, &Sponsorship::default());
//! for m in &outcome.matches {
//!     println!("{m}");
//! }
//! ```

#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![warn(missing_docs)]
#![forbid(unsafe_code)]
#![allow(clippy::multiple_crate_versions)]

use thiserror::Error as ThisError;

// Module declarations
pub mod cli;
pub mod config;
pub mod io;
pub mod models;
pub mod observability;
pub mod rendering;
pub mod services;

// Re-exports for convenience
pub use config::{MatchConfig, OfficeTable, SurveyLayout};
pub use models::{
    DirectoryIndex, DirectoryRecord, Match, MatchOrigin, Mentee, Mentor, Person, Sponsorship,
    SurveyRow, Tenure,
};
pub use services::{
    build_mentee_pool, build_mentor_pool, manager_distance, MatchOutcome, Matcher, SkillVocabulary,
};

/// Error type for mentormatch operations.
///
/// Uses `thiserror` for automatic `Display` and `Error` trait implementations.
#[derive(Debug, ThisError)]
pub enum Error {
    /// Invalid input was provided.
    ///
    /// Raised when:
    /// - A directory record line is not valid JSON
    /// - A sponsorship pair line is malformed
    /// - A survey layout references a column the data cannot contain
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// An operation failed.
    ///
    /// Raised when:
    /// - Survey, directory, or sponsorship files cannot be read
    /// - The configuration file cannot be parsed
    #[error("operation '{operation}' failed: {cause}")]
    OperationFailed {
        /// The operation that failed.
        operation: String,
        /// The underlying cause.
        cause: String,
    },

    /// A person's tenure could not be computed.
    ///
    /// Raised only when tenure is actually requested for a person whose
    /// directory record is missing or carries an unparsable start date.
    /// Filtering absorbs this error (see `Person::is_new_employee`); it is
    /// surfaced to callers that ask for tenure directly.
    #[error("tenure unavailable for {email}: {cause}")]
    TenureUnavailable {
        /// The person whose tenure was requested.
        email: String,
        /// Why the computation failed.
        cause: String,
    },
}

/// Result type alias for mentormatch operations.
pub type Result<T> = std::result::Result<T, Error>;
