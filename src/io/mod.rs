//! Input adapters.
//!
//! Thin readers that hand the core already-parsed in-memory records: survey
//! rows from a CSV export, directory records from newline-delimited JSON,
//! and sponsorship lists from small text files. No parsing logic lives in
//! the matching engine itself.

mod directory;
mod sponsorship;
mod survey;

pub use directory::read_records;
pub use sponsorship::{read_emails, read_pairs};
pub use survey::read_rows;
