//! Cohort configuration with YAML schema and validation.
//!
//! Running without a configuration file uses [`CohortConfig::default`]: the
//! built-in five-student roster over four weeks with an entropy seed.
//! A YAML file can override the roster, the number of weeks and the seed.
//!
//! Mistake-proofing happens in three layers:
//! - serde rejects unknown fields and malformed values
//! - `validator` enforces per-field constraints
//! - [`CohortConfig::validate_semantic`] checks cross-field rules

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::Path;
use validator::Validate;

use crate::cohort::Nationality;
use crate::error::{CohortError, CohortResult};

/// Number of simulated lecture weeks when nothing else is configured.
pub const DEFAULT_WEEKS: u32 = 4;

/// The only configuration schema this build understands.
pub const SCHEMA_VERSION: &str = "1.0";

/// Top-level cohort configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[serde(deny_unknown_fields)]
pub struct CohortConfig {
    /// Schema version; must equal [`SCHEMA_VERSION`].
    #[validate(length(min = 1))]
    #[serde(default = "default_schema_version")]
    pub schema_version: String,

    /// Reproducibility settings.
    #[serde(default)]
    pub reproducibility: ReproducibilityConfig,

    /// Course length.
    #[validate(nested)]
    #[serde(default)]
    pub course: CourseConfig,

    /// Students enrolled at setup, in roster order.
    #[validate(nested)]
    #[serde(default = "default_roster")]
    pub roster: Vec<StudentSpec>,
}

fn default_schema_version() -> String {
    SCHEMA_VERSION.to_string()
}

impl CohortConfig {
    /// Load configuration from a YAML file.
    ///
    /// # Errors
    ///
    /// Returns error if:
    /// - File cannot be read
    /// - YAML parsing fails
    /// - Validation fails
    pub fn load<P: AsRef<Path>>(path: P) -> CohortResult<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_yaml(&content)
    }

    /// Parse configuration from YAML string.
    ///
    /// # Errors
    ///
    /// Returns error if parsing or validation fails.
    pub fn from_yaml(yaml: &str) -> CohortResult<Self> {
        let config: Self = serde_yaml::from_str(yaml)?;
        config.validate()?;
        config.validate_semantic()?;
        Ok(config)
    }

    /// Create a builder for configuration.
    #[must_use]
    pub fn builder() -> CohortConfigBuilder {
        CohortConfigBuilder::default()
    }

    /// Validate constraints spanning several fields.
    ///
    /// # Errors
    ///
    /// Returns a configuration error on an unsupported schema version or
    /// duplicate student names.
    pub fn validate_semantic(&self) -> CohortResult<()> {
        if self.schema_version != SCHEMA_VERSION {
            return Err(CohortError::config(format!(
                "unsupported schema_version '{}' (expected '{SCHEMA_VERSION}')",
                self.schema_version
            )));
        }

        let mut seen = HashSet::new();
        for student in &self.roster {
            if !seen.insert(student.name.as_str()) {
                return Err(CohortError::config(format!(
                    "duplicate student name '{}' in roster",
                    student.name
                )));
            }
        }
        Ok(())
    }

    /// Number of lecture weeks to simulate.
    #[must_use]
    pub const fn weeks(&self) -> u32 {
        self.course.weeks
    }

    /// Fixed seed, if one was configured.
    #[must_use]
    pub const fn seed(&self) -> Option<u64> {
        self.reproducibility.seed
    }
}

impl Default for CohortConfig {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            reproducibility: ReproducibilityConfig::default(),
            course: CourseConfig::default(),
            roster: default_roster(),
        }
    }
}

/// Configuration builder for programmatic construction.
#[derive(Debug, Default)]
pub struct CohortConfigBuilder {
    seed: Option<u64>,
    weeks: Option<u32>,
    roster: Option<Vec<StudentSpec>>,
}

impl CohortConfigBuilder {
    /// Set the random seed.
    #[must_use]
    pub const fn seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Set the number of lecture weeks.
    #[must_use]
    pub const fn weeks(mut self, weeks: u32) -> Self {
        self.weeks = Some(weeks);
        self
    }

    /// Replace the roster.
    #[must_use]
    pub fn roster(mut self, roster: Vec<StudentSpec>) -> Self {
        self.roster = Some(roster);
        self
    }

    /// Build the configuration without validating it.
    ///
    /// Out-of-range values (zero weeks, duplicate names) pass through
    /// unchanged; the driver tolerates them. Use [`Self::try_build`] to get
    /// the same checks as a loaded file.
    #[must_use]
    pub fn build(self) -> CohortConfig {
        let mut config = CohortConfig::default();

        if let Some(seed) = self.seed {
            config.reproducibility.seed = Some(seed);
        }

        if let Some(weeks) = self.weeks {
            config.course.weeks = weeks;
        }

        if let Some(roster) = self.roster {
            config.roster = roster;
        }

        config
    }

    /// Build and validate the configuration.
    ///
    /// # Errors
    ///
    /// Returns the same errors as [`CohortConfig::from_yaml`] for a file
    /// with these values.
    pub fn try_build(self) -> CohortResult<CohortConfig> {
        let config = self.build();
        config.validate()?;
        config.validate_semantic()?;
        Ok(config)
    }
}

/// Reproducibility settings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReproducibilityConfig {
    /// Master seed; drawn from OS entropy when absent.
    #[serde(default)]
    pub seed: Option<u64>,
}

/// Course length.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct CourseConfig {
    /// Number of lecture weeks.
    #[validate(range(min = 1, max = 52))]
    #[serde(default = "default_weeks")]
    pub weeks: u32,
}

const fn default_weeks() -> u32 {
    DEFAULT_WEEKS
}

impl Default for CourseConfig {
    fn default() -> Self {
        Self {
            weeks: DEFAULT_WEEKS,
        }
    }
}

/// Seed record for one student.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
#[serde(deny_unknown_fields)]
pub struct StudentSpec {
    /// Student name.
    #[validate(length(min = 1))]
    pub name: String,
    /// Lectures missed before the simulation starts.
    #[serde(default)]
    pub lectures_missed: u32,
    /// Whether the student respects the basics.
    pub respects_basics: bool,
    /// Nationality category.
    pub nationality: Nationality,
}

impl StudentSpec {
    /// Create a seed record.
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        lectures_missed: u32,
        respects_basics: bool,
        nationality: Nationality,
    ) -> Self {
        Self {
            name: name.into(),
            lectures_missed,
            respects_basics,
            nationality,
        }
    }
}

/// The built-in five-student roster.
#[must_use]
pub fn default_roster() -> Vec<StudentSpec> {
    vec![
        StudentSpec::new("Anna", 1, true, Nationality::Local),
        StudentSpec::new("Pierre", 3, true, Nationality::UnionMember),
        StudentSpec::new("Carlos", 5, false, Nationality::NonUnionMember),
        StudentSpec::new("Fatima", 6, false, Nationality::NonUnionMember),
        StudentSpec::new("Jonas", 2, false, Nationality::Local),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_config_defaults() {
        let config = CohortConfig::default();

        assert_eq!(config.schema_version, "1.0");
        assert_eq!(config.seed(), None);
        assert_eq!(config.weeks(), 4);
        assert_eq!(config.roster.len(), 5);
        assert!(config.validate().is_ok());
        assert!(config.validate_semantic().is_ok());
    }

    #[test]
    fn test_config_builder() {
        let config = CohortConfig::builder().seed(12345).weeks(6).build();

        assert_eq!(config.seed(), Some(12345));
        assert_eq!(config.weeks(), 6);
        assert_eq!(config.roster, default_roster());
    }

    #[test]
    fn test_config_try_build_valid() {
        let config = CohortConfig::builder().seed(3).weeks(2).try_build();
        assert_eq!(config.ok().map(|c| c.weeks()), Some(2));
    }

    #[test]
    fn test_config_try_build_rejects_duplicates() {
        let roster = vec![
            StudentSpec::new("Ola", 0, true, Nationality::Local),
            StudentSpec::new("Ola", 4, false, Nationality::NonUnionMember),
        ];
        let err = CohortConfig::builder().roster(roster).try_build().unwrap_err();
        assert!(matches!(err, CohortError::Config { .. }));
        assert!(err.to_string().contains("duplicate student name 'Ola'"));
    }

    #[test]
    fn test_config_try_build_rejects_zero_weeks() {
        let err = CohortConfig::builder().weeks(0).try_build().unwrap_err();
        assert!(matches!(err, CohortError::Validation(_)));
    }

    #[test]
    fn test_config_builder_roster() {
        let config = CohortConfig::builder().roster(Vec::new()).build();
        assert!(config.roster.is_empty());
    }

    #[test]
    fn test_config_yaml_parse() {
        let yaml = r"
reproducibility:
  seed: 42
course:
  weeks: 3
roster:
  - name: Mira
    lectures_missed: 7
    respects_basics: false
    nationality: non_union_member
  - name: Lars
    respects_basics: true
    nationality: local
";
        let config = CohortConfig::from_yaml(yaml);
        assert!(config.is_ok(), "{config:?}");

        let config = config.ok();
        assert_eq!(config.as_ref().and_then(CohortConfig::seed), Some(42));
        assert_eq!(config.as_ref().map(CohortConfig::weeks), Some(3));
        let roster = config.map(|c| c.roster).unwrap_or_default();
        assert_eq!(
            roster,
            vec![
                StudentSpec::new("Mira", 7, false, Nationality::NonUnionMember),
                StudentSpec::new("Lars", 0, true, Nationality::Local),
            ]
        );
    }

    #[test]
    fn test_config_yaml_defaults_roster() {
        let config = CohortConfig::from_yaml("schema_version: '1.0'\n");
        assert_eq!(config.map(|c| c.roster).ok(), Some(default_roster()));
    }

    #[test]
    fn test_config_validation_fails_zero_weeks() {
        let yaml = r"
course:
  weeks: 0
";
        let err = CohortConfig::from_yaml(yaml).unwrap_err();
        assert!(matches!(err, CohortError::Validation(_)));
    }

    #[test]
    fn test_config_validation_fails_empty_name() {
        let yaml = r"
roster:
  - name: ''
    respects_basics: true
    nationality: local
";
        let err = CohortConfig::from_yaml(yaml).unwrap_err();
        assert!(matches!(err, CohortError::Validation(_)));
    }

    #[test]
    fn test_config_rejects_unknown_field() {
        let err = CohortConfig::from_yaml("lecturer: Smith\n").unwrap_err();
        assert!(matches!(err, CohortError::YamlParse(_)));
    }

    #[test]
    fn test_config_rejects_unsupported_schema_version() {
        let err = CohortConfig::from_yaml("schema_version: '99.0'\n").unwrap_err();
        assert!(matches!(err, CohortError::Config { .. }));
        assert!(err.to_string().contains("99.0"));
    }

    #[test]
    fn test_config_rejects_unknown_nationality() {
        let yaml = r"
roster:
  - name: Ola
    respects_basics: true
    nationality: martian
";
        assert!(CohortConfig::from_yaml(yaml).is_err());
    }

    #[test]
    fn test_config_rejects_duplicate_names() {
        let yaml = r"
roster:
  - name: Ola
    respects_basics: true
    nationality: local
  - name: Ola
    respects_basics: false
    nationality: local
";
        let err = CohortConfig::from_yaml(yaml).unwrap_err();
        assert!(matches!(err, CohortError::Config { .. }));
        assert!(err.to_string().contains("Ola"));
    }

    #[test]
    fn test_config_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "reproducibility:\n  seed: 7\ncourse:\n  weeks: 2").unwrap();

        let config = CohortConfig::load(file.path()).unwrap();
        assert_eq!(config.seed(), Some(7));
        assert_eq!(config.weeks(), 2);
    }

    #[test]
    fn test_config_load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = CohortConfig::load(dir.path().join("missing.yaml")).unwrap_err();
        assert!(matches!(err, CohortError::Io(_)));
    }

    #[test]
    fn test_config_yaml_roundtrip() {
        let config = CohortConfig::builder().seed(9).build();
        let yaml = serde_yaml::to_string(&config).unwrap();
        let parsed = CohortConfig::from_yaml(&yaml).unwrap();
        assert_eq!(parsed, config);
    }
}
