//! Survey row type.

/// One survey submission as an ordered sequence of string fields.
///
/// Field positions carry the semantics; see
/// [`SurveyLayout`](crate::config::SurveyLayout) for the mapping. Rows are
/// loaded once and read-only for the run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SurveyRow(Vec<String>);

impl SurveyRow {
    /// Creates a row from its fields.
    #[must_use]
    pub const fn new(fields: Vec<String>) -> Self {
        Self(fields)
    }

    /// Returns the field at `index`, or the empty string when the row is
    /// shorter than that.
    #[must_use]
    pub fn field(&self, index: usize) -> &str {
        self.0.get(index).map_or("", String::as_str)
    }

    /// Returns the number of fields in the row.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` if the row has no fields.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<Vec<String>> for SurveyRow {
    fn from(fields: Vec<String>) -> Self {
        Self(fields)
    }
}

impl From<Vec<&str>> for SurveyRow {
    fn from(fields: Vec<&str>) -> Self {
        Self(fields.into_iter().map(String::from).collect())
    }
}
