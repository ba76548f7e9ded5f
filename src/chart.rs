use std::collections::BTreeMap;

use crate::config::ChartConfig;
use crate::data::annotate::place_labels;
use crate::data::model::{AggregateRow, LabelAnnotation, Measure};

// ---------------------------------------------------------------------------
// Chart specification – everything the plot widget needs, no egui types
// ---------------------------------------------------------------------------

/// One line series: x = semester, y = selected measure, ordered by semester.
#[derive(Debug, Clone, PartialEq)]
pub struct SeriesSpec {
    /// Program code.
    pub key: String,
    pub points: Vec<[f64; 2]>,
}

/// A line chart with markers, integer-only x ticks and no legend.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartSpec {
    pub title: String,
    pub x_label: String,
    pub y_label: String,
    pub series: Vec<SeriesSpec>,
    /// Semester range on the x axis (inclusive).
    pub x_range: (i64, i64),
    pub y_range: (f64, f64),
    pub integer_x_ticks: bool,
    pub show_legend: bool,
    /// Labels drawn at the right edge, at `x_range.1`.
    pub annotations: Vec<LabelAnnotation>,
}

impl ChartSpec {
    fn new(title: String, x_range: (i64, i64), measure: Measure, config: &ChartConfig) -> Self {
        ChartSpec {
            title,
            x_label: "Attended semester".to_string(),
            y_label: format!("ECTS ({measure})"),
            series: Vec::new(),
            x_range,
            y_range: (config.y_min, config.y_max),
            integer_x_ticks: true,
            show_legend: false,
            annotations: Vec::new(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.series.iter().all(|s| s.points.is_empty())
    }
}

// ---------------------------------------------------------------------------
// Builders
// ---------------------------------------------------------------------------

/// Group rows up to `max_semester` into one series per program, keyed and
/// ordered by program code.
fn series_by_program<'a>(
    rows: impl Iterator<Item = &'a AggregateRow>,
    max_semester: i64,
    measure: Measure,
) -> Vec<SeriesSpec> {
    let mut by_program: BTreeMap<&str, Vec<[f64; 2]>> = BTreeMap::new();
    for row in rows.filter(|r| r.semester_attended <= max_semester) {
        by_program
            .entry(row.study_program_code.as_str())
            .or_default()
            .push([row.semester_attended as f64, row.value(measure)]);
    }

    by_program
        .into_iter()
        .map(|(key, mut points)| {
            points.sort_by(|a, b| a[0].total_cmp(&b[0]));
            SeriesSpec {
                key: key.to_string(),
                points,
            }
        })
        .collect()
}

fn x_range(rows: &[AggregateRow], max_semester: i64) -> (i64, i64) {
    let min = rows
        .iter()
        .map(|r| r.semester_attended)
        .min()
        .unwrap_or(1)
        .min(max_semester);
    (min, max_semester)
}

/// Chart of a single program over semesters `..= max_semester`.
///
/// An unknown program gives a chart without series.
pub fn program_chart(
    rows: &[AggregateRow],
    program: &str,
    max_semester: i64,
    measure: Measure,
    config: &ChartConfig,
) -> ChartSpec {
    let mut chart = ChartSpec::new(
        format!("ECTS points per attended semester: {program}"),
        x_range(rows, max_semester),
        measure,
        config,
    );
    chart.series = series_by_program(
        rows.iter().filter(|r| r.study_program_code == program),
        max_semester,
        measure,
    );
    chart
}

/// Chart comparing all programs, labelled at `max_semester`.
pub fn comparison_chart(
    rows: &[AggregateRow],
    max_semester: i64,
    measure: Measure,
    config: &ChartConfig,
) -> ChartSpec {
    let mut chart = ChartSpec::new(
        "ECTS points per attended semester: comparison".to_string(),
        x_range(rows, max_semester),
        measure,
        config,
    );
    chart.series = series_by_program(rows.iter(), max_semester, measure);
    chart.annotations = place_labels(rows, max_semester, measure);
    chart
}

/// Status line naming the selected program.
pub fn status_text(program: &str) -> String {
    format!("Showing data for study program {program}")
}
