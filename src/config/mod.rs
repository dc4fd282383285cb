//! Configuration management.

use serde::Deserialize;
use std::collections::HashMap;
use std::path::Path;

use crate::{Error, Result};

/// Column positions of the semantic survey fields.
///
/// Survey exports shift columns between versions, so every index is
/// configurable rather than hardcoded. Defaults match the current survey
/// revision.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SurveyLayout {
    /// Respondent email column.
    pub email: usize,
    /// Self-reported city column.
    pub city: usize,
    /// "Do you want to be a mentee?" column.
    pub mentee_opt_in: usize,
    /// "Will you commit to the work of being a mentee?" column.
    ///
    /// Carried for forward use; the current pipeline does not consult it.
    pub mentee_commitment: usize,
    /// Desired-skills column (semicolon-delimited).
    pub desired_skills: usize,
    /// Single most-wanted skill column.
    ///
    /// Carried for forward use; the current pipeline does not consult it.
    pub most_wanted_skill: usize,
    /// "Do you want to be a mentor?" column.
    pub mentor_opt_in: usize,
    /// Offered-skills column (semicolon-delimited).
    pub offered_skills: usize,
}

impl Default for SurveyLayout {
    fn default() -> Self {
        Self {
            email: 1,
            city: 2,
            mentee_opt_in: 5,
            mentee_commitment: 6,
            desired_skills: 7,
            most_wanted_skill: 8,
            mentor_opt_in: 9,
            offered_skills: 10,
        }
    }
}

impl SurveyLayout {
    /// Returns the highest column index the layout references.
    ///
    /// Rows with fewer fields than this cannot be interpreted and are
    /// skipped at load time.
    #[must_use]
    pub fn max_index(&self) -> usize {
        [
            self.email,
            self.city,
            self.mentee_opt_in,
            self.mentee_commitment,
            self.desired_skills,
            self.most_wanted_skill,
            self.mentor_opt_in,
            self.offered_skills,
        ]
        .into_iter()
        .max()
        .unwrap_or(0)
    }
}

/// Fixed office-code to office-name table.
///
/// Directory records carry short office codes; filtering and rendering work
/// with the resolved names. Unknown codes resolve to the empty string.
#[derive(Debug, Clone)]
pub struct OfficeTable {
    codes: HashMap<String, String>,
}

impl Default for OfficeTable {
    fn default() -> Self {
        let codes = [
            ("SFO", "San Francisco"),
            ("SEA", "Seattle"),
            ("NYC", "New York"),
            ("NSH", "Nashville"),
            ("TOR", "Toronto"),
            ("MEX", "Mexico City"),
        ]
        .into_iter()
        .map(|(code, name)| (code.to_string(), name.to_string()))
        .collect();
        Self { codes }
    }
}

impl OfficeTable {
    /// Creates a table from explicit code/name pairs.
    #[must_use]
    pub const fn new(codes: HashMap<String, String>) -> Self {
        Self { codes }
    }

    /// Resolves an office code to its name.
    ///
    /// Returns the empty string for an unknown code, which by design never
    /// matches any configured target office.
    #[must_use]
    pub fn resolve(&self, code: &str) -> &str {
        self.codes.get(code).map_or("", String::as_str)
    }

    /// Adds or replaces a code/name mapping.
    pub fn insert(&mut self, code: impl Into<String>, name: impl Into<String>) {
        self.codes.insert(code.into(), name.into());
    }
}

/// Main configuration for a matching run.
#[derive(Debug, Clone)]
pub struct MatchConfig {
    /// Target office name; pools are restricted to this office.
    pub office: String,
    /// Minimum organizational distance between mentor and mentee; a pair
    /// qualifies only when their distance is strictly greater than this.
    pub manager_distance_threshold: usize,
    /// Tenure below this many months (and below one year) counts as new.
    pub new_employee_months: u32,
    /// Titles eligible to participate in matching.
    pub eligible_titles: Vec<String>,
    /// Random seed for pool shuffling; `None` draws one from the OS.
    pub seed: Option<u64>,
    /// Survey column layout.
    pub layout: SurveyLayout,
    /// Office code table.
    pub offices: OfficeTable,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            office: String::new(),
            manager_distance_threshold: 2,
            new_employee_months: 6,
            eligible_titles: [
                "SWE",
                "Director, Engineering",
                "Data Scientist",
                "Engineering Manager",
            ]
            .into_iter()
            .map(String::from)
            .collect(),
            seed: None,
            layout: SurveyLayout::default(),
            offices: OfficeTable::default(),
        }
    }
}

impl MatchConfig {
    /// Creates a default configuration targeting one office.
    #[must_use]
    pub fn for_office(office: impl Into<String>) -> Self {
        Self {
            office: office.into(),
            ..Self::default()
        }
    }

    /// Applies a parsed configuration file over this configuration.
    pub fn apply_file(&mut self, file: ConfigFile) {
        if let Some(office) = file.office {
            self.office = office;
        }
        if let Some(threshold) = file.manager_distance_threshold {
            self.manager_distance_threshold = threshold;
        }
        if let Some(months) = file.new_employee_months {
            self.new_employee_months = months;
        }
        if let Some(titles) = file.eligible_titles {
            self.eligible_titles = titles;
        }
        if let Some(seed) = file.seed {
            self.seed = Some(seed);
        }
        if let Some(layout) = file.layout {
            layout.apply(&mut self.layout);
        }
        if let Some(offices) = file.offices {
            for (code, name) in offices {
                self.offices.insert(code, name);
            }
        }
    }
}

/// Configuration file structure (for TOML parsing).
#[derive(Debug, Deserialize, Default)]
pub struct ConfigFile {
    /// Target office name.
    pub office: Option<String>,
    /// Manager-distance threshold.
    pub manager_distance_threshold: Option<usize>,
    /// New-employee tenure threshold in months.
    pub new_employee_months: Option<u32>,
    /// Eligible-title allow-list.
    pub eligible_titles: Option<Vec<String>>,
    /// Random seed.
    pub seed: Option<u64>,
    /// Survey layout overrides.
    pub layout: Option<ConfigFileLayout>,
    /// Extra office code mappings, merged over the defaults.
    pub offices: Option<HashMap<String, String>>,
}

impl ConfigFile {
    /// Loads and parses a TOML configuration file.
    ///
    /// # Errors
    ///
    /// Returns `Error::OperationFailed` if the file cannot be read and
    /// `Error::InvalidInput` if it is not valid TOML.
    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path).map_err(|e| Error::OperationFailed {
            operation: format!("read config {}", path.display()),
            cause: e.to_string(),
        })?;
        toml::from_str(&text)
            .map_err(|e| Error::InvalidInput(format!("config {}: {e}", path.display())))
    }
}

/// Layout section in config file.
#[derive(Debug, Deserialize, Default)]
pub struct ConfigFileLayout {
    /// Respondent email column.
    pub email: Option<usize>,
    /// Self-reported city column.
    pub city: Option<usize>,
    /// Mentee opt-in column.
    pub mentee_opt_in: Option<usize>,
    /// Mentee commitment column.
    pub mentee_commitment: Option<usize>,
    /// Desired-skills column.
    pub desired_skills: Option<usize>,
    /// Most-wanted skill column.
    pub most_wanted_skill: Option<usize>,
    /// Mentor opt-in column.
    pub mentor_opt_in: Option<usize>,
    /// Offered-skills column.
    pub offered_skills: Option<usize>,
}

impl ConfigFileLayout {
    fn apply(self, layout: &mut SurveyLayout) {
        if let Some(i) = self.email {
            layout.email = i;
        }
        if let Some(i) = self.city {
            layout.city = i;
        }
        if let Some(i) = self.mentee_opt_in {
            layout.mentee_opt_in = i;
        }
        if let Some(i) = self.mentee_commitment {
            layout.mentee_commitment = i;
        }
        if let Some(i) = self.desired_skills {
            layout.desired_skills = i;
        }
        if let Some(i) = self.most_wanted_skill {
            layout.most_wanted_skill = i;
        }
        if let Some(i) = self.mentor_opt_in {
            layout.mentor_opt_in = i;
        }
        if let Some(i) = self.offered_skills {
            layout.offered_skills = i;
        }
    }
}
