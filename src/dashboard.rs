use std::collections::BTreeSet;

use crate::chart::{comparison_chart, program_chart, status_text, ChartSpec};
use crate::config::{ChartConfig, DashboardConfig};
use crate::data::aggregate::aggregate;
use crate::data::error::{DataError, Result};
use crate::data::model::{AggregateRow, Measure, RawRecord};

// ---------------------------------------------------------------------------
// Selection – the state of the three controls
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq)]
pub struct Selection {
    pub program: String,
    pub measure: Measure,
    pub max_semester: i64,
}

/// Everything rendered for one selection.
#[derive(Debug, Clone, PartialEq)]
pub struct DashboardView {
    pub status: String,
    pub program_chart: ChartSpec,
    pub comparison_chart: ChartSpec,
}

// ---------------------------------------------------------------------------
// Dashboard – aggregate table built once, read by every interaction
// ---------------------------------------------------------------------------

/// Aggregated data plus the derived control options.
///
/// Built once from the raw records and never mutated afterwards.
#[derive(Debug, Clone)]
pub struct Dashboard {
    rows: Vec<AggregateRow>,
    programs: Vec<String>,
    semester_bounds: (i64, i64),
    record_count: usize,
    chart: ChartConfig,
}

impl Dashboard {
    /// Aggregate `records` using the semester cap and chart settings of `config`.
    pub fn from_records(records: &[RawRecord], config: &DashboardConfig) -> Result<Self> {
        let rows = aggregate(records, config.max_semesters)?;

        let programs: Vec<String> = rows
            .iter()
            .map(|r| r.study_program_code.as_str())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .map(str::to_string)
            .collect();

        // `aggregate` sorts by semester first.
        let semester_bounds = match (rows.first(), rows.last()) {
            (Some(first), Some(last)) => (first.semester_attended, last.semester_attended),
            _ => return Err(DataError::EmptyInput),
        };

        Ok(Dashboard {
            rows,
            programs,
            semester_bounds,
            record_count: records.len(),
            chart: config.chart,
        })
    }

    pub fn rows(&self) -> &[AggregateRow] {
        &self.rows
    }

    /// Distinct program codes, sorted.
    pub fn programs(&self) -> &[String] {
        &self.programs
    }

    /// Lowest and highest semester present in the aggregate table.
    pub fn semester_bounds(&self) -> (i64, i64) {
        self.semester_bounds
    }

    /// Number of raw records the table was built from.
    pub fn record_count(&self) -> usize {
        self.record_count
    }

    /// Initial control state: the preferred program when present, otherwise
    /// the first one; mean; all semesters.
    pub fn default_selection(&self, preferred_program: Option<&str>) -> Selection {
        let program = match preferred_program {
            Some(p) if self.programs.iter().any(|q| q == p) => p.to_string(),
            Some(p) => {
                log::warn!("Study program '{p}' not found in data, using first available");
                self.programs.first().cloned().unwrap_or_default()
            }
            None => self.programs.first().cloned().unwrap_or_default(),
        };
        Selection {
            program,
            measure: Measure::Mean,
            max_semester: self.semester_bounds.1,
        }
    }

    /// Build the status line and both charts for a selection.
    pub fn render(&self, selection: &Selection) -> DashboardView {
        log::debug!(
            "Rendering program={} measure={} max_semester={}",
            selection.program,
            selection.measure,
            selection.max_semester
        );
        DashboardView {
            status: status_text(&selection.program),
            program_chart: program_chart(
                &self.rows,
                &selection.program,
                selection.max_semester,
                selection.measure,
                &self.chart,
            ),
            comparison_chart: comparison_chart(
                &self.rows,
                selection.max_semester,
                selection.measure,
                &self.chart,
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn records() -> Vec<RawRecord> {
        let mut out = Vec::new();
        for semester in 1..=10 {
            out.push(RawRecord::new("BA; PPP", semester, 30.0 - semester as f64));
            out.push(RawRecord::new("MA; BI", semester, 20.0));
        }
        out.push(RawRecord::new("BA; BI", 2, 12.0));
        out
    }

    #[test]
    fn test_from_records() {
        let dashboard = Dashboard::from_records(&records(), &DashboardConfig::default()).unwrap();
        assert_eq!(dashboard.programs(), &["BA; BI", "BA; PPP", "MA; BI"]);
        assert_eq!(dashboard.semester_bounds(), (1, 8));
        assert_eq!(dashboard.record_count(), 21);
        assert_eq!(dashboard.rows().len(), 8 * 2 + 1);
    }

    #[test]
    fn test_semester_cap_from_config() {
        let config = DashboardConfig {
            max_semesters: 1,
            ..Default::default()
        };
        let dashboard = Dashboard::from_records(&records(), &config).unwrap();
        assert_eq!(dashboard.semester_bounds(), (1, 1));
        assert_eq!(dashboard.programs(), &["BA; PPP", "MA; BI"]);
    }

    #[test]
    fn test_empty_input() {
        assert!(matches!(
            Dashboard::from_records(&[], &DashboardConfig::default()),
            Err(DataError::EmptyInput)
        ));
    }

    #[test]
    fn test_default_selection() {
        let dashboard = Dashboard::from_records(&records(), &DashboardConfig::default()).unwrap();

        let sel = dashboard.default_selection(Some("MA; BI"));
        assert_eq!(sel.program, "MA; BI");
        assert_eq!(sel.measure, Measure::Mean);
        assert_eq!(sel.max_semester, 8);

        let sel = dashboard.default_selection(Some("PhD; X"));
        assert_eq!(sel.program, "BA; BI");

        let sel = dashboard.default_selection(None);
        assert_eq!(sel.program, "BA; BI");
    }

    #[test]
    fn test_render() {
        let dashboard = Dashboard::from_records(&records(), &DashboardConfig::default()).unwrap();
        let selection = Selection {
            program: "BA; PPP".to_string(),
            measure: Measure::Median,
            max_semester: 4,
        };
        let view = dashboard.render(&selection);
        assert_eq!(view.status, "Showing data for study program BA; PPP");
        assert_eq!(view.program_chart.series.len(), 1);
        assert_eq!(view.program_chart.series[0].points.len(), 4);
        assert_eq!(view.comparison_chart.series.len(), 3);

        let labels: Vec<&str> = view
            .comparison_chart
            .annotations
            .iter()
            .map(|a| a.series_key.as_str())
            .collect();
        assert_eq!(labels, vec!["BA; PPP", "MA; BI"]);
        assert_eq!(view.comparison_chart.annotations[0].y_value, 26.0);
    }

    #[test]
    fn test_render_is_repeatable() {
        let dashboard = Dashboard::from_records(&records(), &DashboardConfig::default()).unwrap();
        let selection = dashboard.default_selection(Some("BA; PPP"));
        assert_eq!(dashboard.render(&selection), dashboard.render(&selection));
    }

    #[test]
    fn test_dashboard_is_shareable() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Dashboard>();
    }
}
