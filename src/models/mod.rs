//! Core data types.

mod directory;
mod pairing;
mod person;
mod survey;

pub use directory::{DirectoryIndex, DirectoryRecord};
pub use pairing::{Match, MatchOrigin, Sponsorship};
pub use person::{Mentee, Mentor, Person, Tenure, NOT_IN_DIRECTORY};
pub use survey::SurveyRow;
