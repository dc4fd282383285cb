//! Sponsorship list reading.

use std::io::BufRead;

use crate::{Error, Result};

/// Reads a sponsorship priority list: one email per line, trimmed, blank
/// lines dropped.
///
/// # Errors
///
/// Returns `Error::OperationFailed` when the reader fails.
pub fn read_emails<R: BufRead>(reader: R) -> Result<Vec<String>> {
    let mut emails = Vec::new();
    for line in reader.lines() {
        let line = line.map_err(|e| Error::OperationFailed {
            operation: "read sponsorship emails".to_string(),
            cause: e.to_string(),
        })?;
        let email = line.trim();
        if !email.is_empty() {
            emails.push(email.to_string());
        }
    }
    Ok(emails)
}

/// Reads forced sponsorship pairs: CSV lines of
/// `mentor_email,mentee_email`, no header row.
///
/// # Errors
///
/// Returns `Error::OperationFailed` when the reader fails and
/// `Error::InvalidInput` when a line does not carry exactly two fields.
pub fn read_pairs<R: BufRead>(reader: R) -> Result<Vec<(String, String)>> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(reader);

    let mut pairs = Vec::new();
    for (i, record) in csv_reader.records().enumerate() {
        let record = record.map_err(|e| Error::OperationFailed {
            operation: "read sponsorship pairs".to_string(),
            cause: e.to_string(),
        })?;
        if record.len() != 2 {
            return Err(Error::InvalidInput(format!(
                "sponsorship pair line {}: expected mentor_email,mentee_email",
                i + 1
            )));
        }
        pairs.push((record[0].trim().to_string(), record[1].trim().to_string()));
    }
    Ok(pairs)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_emails_trims_and_drops_blanks() {
        let data = " a@example.com \n\nb@example.com\n";
        let emails = read_emails(data.as_bytes()).expect("readable");
        assert_eq!(emails, ["a@example.com", "b@example.com"]);
    }

    #[test]
    fn test_read_pairs() {
        let data = "mentor@example.com,mentee@example.com\nm2@example.com, e2@example.com\n";
        let pairs = read_pairs(data.as_bytes()).expect("valid pairs");
        assert_eq!(pairs.len(), 2);
        assert_eq!(pairs[1], ("m2@example.com".to_string(), "e2@example.com".to_string()));
    }

    #[test]
    fn test_read_pairs_rejects_wrong_field_count() {
        let data = "only-one-field\n";
        let err = read_pairs(data.as_bytes()).expect_err("invalid pair line");
        assert!(matches!(err, Error::InvalidInput(_)));
    }
}
