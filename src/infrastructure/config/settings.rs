//! Application configuration loading and validation.
//!
//! Provides the main [`Config`] struct that aggregates all application settings.
//! Configuration is loaded from a TOML file with an environment variable
//! override for the database location.
//!
//! # Example
//!
//! ```no_run
//! use rollcall::infrastructure::config::settings::Config;
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let mut config = Config::load("config.toml")?;
//!     config.apply_env_overrides();
//!     config.init_logging(0);
//!     Ok(())
//! }
//! ```

use std::collections::HashSet;
use std::path::Path;

use serde::{Deserialize, Serialize};

use super::logging::LoggingConfig;
use super::roster::RosterConfig;
use crate::error::{ConfigError, Result};

/// Environment variable that overrides [`Config::database`].
pub const DATABASE_ENV: &str = "ROLLCALL_DATABASE";

/// Main application configuration.
///
/// Load from a TOML file using [`Config::load`] or parse directly with
/// [`Config::parse_toml`]. Every section is optional.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Config {
    /// Path to SQLite database file.
    ///
    /// Defaults to "database.db" in the current directory.
    #[serde(default = "default_database_path")]
    pub database: String,

    /// Course list and other form settings.
    #[serde(default)]
    pub roster: RosterConfig,

    /// Logging and tracing configuration.
    #[serde(default)]
    pub logging: LoggingConfig,
}

fn default_database_path() -> String {
    "database.db".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            database: default_database_path(),
            roster: RosterConfig::default(),
            logging: LoggingConfig::default(),
        }
    }
}

impl Config {
    /// Parse configuration from TOML content.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The TOML content is malformed
    /// - Validation fails (e.g., an empty course list)
    pub fn parse_toml(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content).map_err(ConfigError::Parse)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The file cannot be read
    /// - The TOML content is malformed
    /// - Validation fails
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(ConfigError::ReadFile)?;
        Self::parse_toml(&content)
    }

    /// Apply [`DATABASE_ENV`] if set.
    pub fn apply_env_overrides(&mut self) {
        self.override_database(std::env::var(DATABASE_ENV).ok());
    }

    /// Replace the database path if `path` is present and non-empty.
    pub fn override_database(&mut self, path: Option<String>) {
        if let Some(path) = path.filter(|p| !p.trim().is_empty()) {
            self.database = path;
        }
    }

    /// Initialize the tracing subscriber.
    pub fn init_logging(&self, verbosity: u8) {
        self.logging.init(verbosity);
    }

    /// Validate configuration values.
    fn validate(&self) -> Result<()> {
        if self.database.trim().is_empty() {
            return Err(ConfigError::MissingField { field: "database" }.into());
        }

        let courses = self.roster.courses.as_slice();
        if courses.is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "roster.courses",
                reason: "at least one course is required".to_string(),
            }
            .into());
        }
        if courses.iter().any(|c| c.trim().is_empty()) {
            return Err(ConfigError::InvalidValue {
                field: "roster.courses",
                reason: "course names cannot be blank".to_string(),
            }
            .into());
        }
        let mut seen = HashSet::new();
        if let Some(dup) = courses.iter().find(|c| !seen.insert(c.as_str())) {
            return Err(ConfigError::InvalidValue {
                field: "roster.courses",
                reason: format!("duplicate course '{dup}'"),
            }
            .into());
        }

        if !matches!(self.logging.format.as_str(), "pretty" | "json") {
            return Err(ConfigError::InvalidValue {
                field: "logging.format",
                reason: format!("expected 'pretty' or 'json', got '{}'", self.logging.format),
            }
            .into());
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    fn invalid_field(result: Result<Config>) -> &'static str {
        match result {
            Err(Error::Config(ConfigError::InvalidValue { field, .. })) => field,
            Err(Error::Config(ConfigError::MissingField { field })) => field,
            other => panic!("expected field error, got {other:?}"),
        }
    }

    #[test]
    fn empty_file_yields_defaults() {
        let config = Config::parse_toml("").unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.database, "database.db");
        assert_eq!(config.roster.courses.len(), 4);
    }

    #[test]
    fn parses_all_sections() {
        let toml = r#"
            database = "/var/lib/rollcall/school.db"

            [roster]
            courses = ["Chemistry", "Math"]

            [logging]
            level = "debug"
            format = "json"
        "#;

        let config = Config::parse_toml(toml).unwrap();

        assert_eq!(config.database, "/var/lib/rollcall/school.db");
        assert_eq!(config.roster.courses.as_slice(), &["Chemistry", "Math"]);
        assert_eq!(config.logging.level, "debug");
        assert_eq!(config.logging.format, "json");
    }

    #[test]
    fn rejects_empty_database() {
        assert_eq!(invalid_field(Config::parse_toml("database = \" \"")), "database");
    }

    #[test]
    fn rejects_empty_course_list() {
        let toml = "[roster]\ncourses = []\n";
        assert_eq!(invalid_field(Config::parse_toml(toml)), "roster.courses");
    }

    #[test]
    fn rejects_blank_course() {
        let toml = "[roster]\ncourses = [\"Math\", \"\"]\n";
        assert_eq!(invalid_field(Config::parse_toml(toml)), "roster.courses");
    }

    #[test]
    fn rejects_duplicate_course() {
        let toml = "[roster]\ncourses = [\"Math\", \"Math\"]\n";
        assert_eq!(invalid_field(Config::parse_toml(toml)), "roster.courses");
    }

    #[test]
    fn rejects_unknown_log_format() {
        let toml = "[logging]\nformat = \"xml\"\n";
        assert_eq!(invalid_field(Config::parse_toml(toml)), "logging.format");
    }

    #[test]
    fn malformed_toml_is_a_parse_error() {
        let result = Config::parse_toml("database = ");
        assert!(matches!(result, Err(Error::Config(ConfigError::Parse(_)))));
    }

    #[test]
    fn override_database_ignores_blank_values() {
        let mut config = Config::default();
        config.override_database(Some("  ".into()));
        assert_eq!(config.database, "database.db");

        config.override_database(None);
        assert_eq!(config.database, "database.db");

        config.override_database(Some("other.db".into()));
        assert_eq!(config.database, "other.db");
    }

    #[test]
    fn load_reports_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let result = Config::load(dir.path().join("nope.toml"));
        assert!(matches!(result, Err(Error::Config(ConfigError::ReadFile(_)))));
    }

    #[test]
    fn example_config_parses() {
        let config = Config::parse_toml(include_str!("../../../config.toml.example")).unwrap();
        assert_eq!(config, Config::default());
    }
}
