use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;

use crate::config::DashboardConfig;

/// Study progress dashboard: ECTS points per attended semester and study program.
#[derive(Parser, Debug)]
#[command(name = "study-progress", version, about)]
pub struct Args {
    /// JSON config file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Student CSV file (overrides the config)
    #[arg(short, long)]
    pub data: Option<PathBuf>,

    /// Highest semester to aggregate (overrides the config)
    #[arg(short = 'm', long)]
    pub max_semesters: Option<i64>,
}

impl Args {
    /// Config file (or defaults) with command-line overrides applied.
    pub fn resolve_config(&self) -> Result<DashboardConfig> {
        let mut config = match &self.config {
            Some(path) => DashboardConfig::load(path)?,
            None => DashboardConfig::default(),
        };
        if let Some(data) = &self.data {
            config.data_path = data.clone();
        }
        if let Some(max) = self.max_semesters {
            config.max_semesters = max;
        }
        config.validate()?;
        Ok(config)
    }
}
