//! Configuration loading and validation.

use std::path::{Path, PathBuf};

use kazam_dex::EnrichRules;
use kazam_dex::ranking::{DEFAULT_EXCLUDE_MARKER, DEFAULT_PSEUDO_LEGENDARY_TOTAL, DEFAULT_TOP_N};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    ReadError(#[from] std::io::Error),

    #[error("Failed to parse config: {0}")]
    ParseError(#[from] toml::de::Error),

    #[error("Invalid configuration: {0}")]
    ValidationError(String),
}

/// Report configuration.
///
/// Every field has a default, so an empty file (or no file) reproduces the
/// stock run: `Pokemon.csv` + `effMat.csv` in, `pkmn.xlsx` + plot out.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportConfig {
    /// Creature dataset CSV
    #[serde(default = "default_creatures")]
    pub creatures: PathBuf,

    /// Effectiveness matrix CSV
    #[serde(default = "default_matrix")]
    pub matrix: PathBuf,

    /// Use the built-in chart instead of reading `matrix`
    #[serde(default)]
    pub standard_chart: bool,

    /// Workbook output path
    #[serde(default = "default_workbook")]
    pub workbook: PathBuf,

    /// Scatter plot output path (SVG)
    #[serde(default = "default_plot")]
    pub plot: PathBuf,

    /// Rows per ranked view
    #[serde(default = "default_top_n")]
    pub top_n: usize,

    /// Name marker of excluded formes
    #[serde(default = "default_exclude_marker")]
    pub exclude_marker: String,

    /// Stat total of a pseudo-legendary
    #[serde(default = "default_pseudo_legendary_total")]
    pub pseudo_legendary_total: u32,
}

fn default_creatures() -> PathBuf {
    PathBuf::from("Pokemon.csv")
}

fn default_matrix() -> PathBuf {
    PathBuf::from("effMat.csv")
}

fn default_workbook() -> PathBuf {
    PathBuf::from("pkmn.xlsx")
}

fn default_plot() -> PathBuf {
    PathBuf::from("vulnerability.svg")
}

fn default_top_n() -> usize {
    DEFAULT_TOP_N
}

fn default_exclude_marker() -> String {
    DEFAULT_EXCLUDE_MARKER.to_string()
}

fn default_pseudo_legendary_total() -> u32 {
    DEFAULT_PSEUDO_LEGENDARY_TOTAL
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            creatures: default_creatures(),
            matrix: default_matrix(),
            standard_chart: false,
            workbook: default_workbook(),
            plot: default_plot(),
            top_n: default_top_n(),
            exclude_marker: default_exclude_marker(),
            pseudo_legendary_total: default_pseudo_legendary_total(),
        }
    }
}

impl ReportConfig {
    /// Load configuration from a TOML file.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        let config: ReportConfig = toml::from_str(&contents)?;
        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.top_n == 0 {
            return Err(ConfigError::ValidationError(
                "top_n must be greater than 0".to_string(),
            ));
        }

        if self.exclude_marker.trim().is_empty() {
            return Err(ConfigError::ValidationError(
                "exclude_marker must not be empty".to_string(),
            ));
        }

        if self.workbook == self.plot {
            return Err(ConfigError::ValidationError(
                "workbook and plot must be different files".to_string(),
            ));
        }

        Ok(())
    }

    /// Enrichment rules derived from this configuration
    pub fn rules(&self) -> EnrichRules {
        EnrichRules {
            exclude_marker: self.exclude_marker.clone(),
            pseudo_legendary_total: self.pseudo_legendary_total,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ReportConfig::default();

        assert_eq!(config.creatures, PathBuf::from("Pokemon.csv"));
        assert_eq!(config.matrix, PathBuf::from("effMat.csv"));
        assert_eq!(config.workbook, PathBuf::from("pkmn.xlsx"));
        assert_eq!(config.top_n, 10);
        assert_eq!(config.exclude_marker, "Mega");
        assert_eq!(config.pseudo_legendary_total, 600);
        assert!(!config.standard_chart);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_parse_partial_config() {
        let toml_str = r#"
            creatures = "data/gen1.csv"
            top_n = 5
        "#;

        let config: ReportConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.creatures, PathBuf::from("data/gen1.csv"));
        assert_eq!(config.top_n, 5);
        assert_eq!(config.matrix, PathBuf::from("effMat.csv"));
        assert_eq!(config.exclude_marker, "Mega");
    }

    #[test]
    fn test_empty_config_is_default() {
        let config: ReportConfig = toml::from_str("").unwrap();
        assert_eq!(config, ReportConfig::default());
    }

    #[test]
    fn test_validation_zero_top_n() {
        let config = ReportConfig {
            top_n: 0,
            ..ReportConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validation_empty_marker() {
        let config = ReportConfig {
            exclude_marker: " ".to_string(),
            ..ReportConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validation_same_outputs() {
        let config = ReportConfig {
            plot: PathBuf::from("pkmn.xlsx"),
            ..ReportConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_rules() {
        let config = ReportConfig {
            exclude_marker: "Primal".to_string(),
            pseudo_legendary_total: 540,
            ..ReportConfig::default()
        };
        let rules = config.rules();
        assert_eq!(rules.exclude_marker, "Primal");
        assert_eq!(rules.pseudo_legendary_total, 540);
    }
}
