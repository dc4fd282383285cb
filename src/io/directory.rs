//! Directory record reading (newline-delimited JSON).

use std::io::BufRead;

use crate::models::DirectoryRecord;
use crate::{Error, Result};

/// Reads directory records from newline-delimited JSON.
///
/// Blank lines are skipped.
///
/// # Errors
///
/// Returns `Error::OperationFailed` when the reader fails and
/// `Error::InvalidInput` (naming the line number) when a line is not a
/// valid record.
pub fn read_records<R: BufRead>(reader: R) -> Result<Vec<DirectoryRecord>> {
    let mut records = Vec::new();
    for (i, line) in reader.lines().enumerate() {
        let line = line.map_err(|e| Error::OperationFailed {
            operation: "read directory".to_string(),
            cause: e.to_string(),
        })?;
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        let record: DirectoryRecord = serde_json::from_str(line)
            .map_err(|e| Error::InvalidInput(format!("directory line {}: {e}", i + 1)))?;
        records.push(record);
    }
    Ok(records)
}
