//! Dashboard configuration.
//!
//! Every field has a default, so the dashboard runs without a config file.
//! A JSON file may override any subset of them:
//!
//! ```json
//! { "data_path": "students.csv", "max_semesters": 6, "chart": { "y_max": 35 } }
//! ```

use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};

use crate::data::loader::ColumnNames;

/// Root configuration structure.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardConfig {
    /// CSV file loaded at startup.
    #[serde(default = "default_data_path")]
    pub data_path: PathBuf,

    /// Records beyond this semester are dropped before aggregation.
    #[serde(default = "default_max_semesters")]
    pub max_semesters: i64,

    /// Source column names.
    #[serde(default)]
    pub columns: ColumnNames,

    /// Chart display settings.
    #[serde(default)]
    pub chart: ChartConfig,

    /// Program selected when the dashboard opens.
    #[serde(default = "default_program")]
    pub default_program: String,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            data_path: default_data_path(),
            max_semesters: default_max_semesters(),
            columns: ColumnNames::default(),
            chart: ChartConfig::default(),
            default_program: default_program(),
        }
    }
}

fn default_data_path() -> PathBuf {
    PathBuf::from("student_dummy_data.csv")
}

fn default_max_semesters() -> i64 {
    8
}

fn default_program() -> String {
    "BA; PPP".to_string()
}

/// Fixed y-axis range of both charts.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChartConfig {
    pub y_min: f64,
    pub y_max: f64,
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            y_min: -1.0,
            y_max: 25.0,
        }
    }
}

impl DashboardConfig {
    /// Load and validate a JSON config file.
    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("reading config file {}", path.display()))?;
        let config: DashboardConfig = serde_json::from_str(&text)
            .with_context(|| format!("parsing config file {}", path.display()))?;
        config.validate()?;
        Ok(config)
    }

    /// Reject settings the dashboard cannot work with.
    pub fn validate(&self) -> Result<()> {
        if self.max_semesters < 1 {
            bail!("max_semesters must be at least 1, got {}", self.max_semesters);
        }
        if !(self.chart.y_min < self.chart.y_max) {
            bail!(
                "chart.y_min ({}) must be below chart.y_max ({})",
                self.chart.y_min,
                self.chart.y_max
            );
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults() {
        let config = DashboardConfig::default();
        assert_eq!(config.max_semesters, 8);
        assert_eq!(config.chart.y_min, -1.0);
        assert_eq!(config.chart.y_max, 25.0);
        assert_eq!(config.columns.semester, "besuchtesSemester");
        assert_eq!(config.default_program, "BA; PPP");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_json() {
        let config: DashboardConfig =
            serde_json::from_str(r#"{ "max_semesters": 6, "chart": { "y_max": 35 } }"#).unwrap();
        assert_eq!(config.max_semesters, 6);
        assert_eq!(config.chart.y_min, -1.0);
        assert_eq!(config.chart.y_max, 35.0);
        assert_eq!(config.columns, ColumnNames::default());
    }

    #[test]
    fn test_validate_rejects_zero_semesters() {
        let config = DashboardConfig {
            max_semesters: 0,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_inverted_range() {
        let config = DashboardConfig {
            chart: ChartConfig {
                y_min: 10.0,
                y_max: 10.0,
            },
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_load_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{ "data_path": "other.csv", "default_program": "MA; BI" }}"#).unwrap();
        let config = DashboardConfig::load(file.path()).unwrap();
        assert_eq!(config.data_path, PathBuf::from("other.csv"));
        assert_eq!(config.default_program, "MA; BI");
    }

    #[test]
    fn test_load_invalid_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{ "max_semesters": -3 }}"#).unwrap();
        assert!(DashboardConfig::load(file.path()).is_err());
    }
}
