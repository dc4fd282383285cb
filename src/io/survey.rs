//! Survey CSV reading.

use std::io::Read;

use crate::config::SurveyLayout;
use crate::models::SurveyRow;
use crate::{Error, Result};

/// Reads survey rows from a CSV export.
///
/// The first row is treated as headers and skipped. Field counts may vary
/// between rows; a row too short for the configured layout is skipped with
/// a warning rather than failing the run.
///
/// # Errors
///
/// Returns `Error::OperationFailed` when the underlying reader fails or a
/// record is not parsable as CSV.
pub fn read_rows<R: Read>(reader: R, layout: &SurveyLayout) -> Result<Vec<SurveyRow>> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(reader);

    let min_fields = layout.max_index() + 1;
    let mut rows = Vec::new();
    for (line, record) in csv_reader.records().enumerate() {
        let record = record.map_err(|e| Error::OperationFailed {
            operation: "read survey".to_string(),
            cause: e.to_string(),
        })?;
        if record.len() < min_fields {
            tracing::warn!(
                line = line + 2,
                fields = record.len(),
                expected = min_fields,
                "skipping short survey row"
            );
            continue;
        }
        rows.push(SurveyRow::new(record.iter().map(String::from).collect()));
    }
    Ok(rows)
}
