use std::fmt;

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// RawRecord – one row of the source CSV
// ---------------------------------------------------------------------------

/// A single student-semester observation.
#[derive(Debug, Clone, PartialEq)]
pub struct RawRecord {
    /// Degree level plus program abbreviation, e.g. `"BA; PPP"`.
    pub study_program_code: String,
    /// Ordinal semester, starting at 1.
    pub semester_attended: i64,
    /// ECTS credit points earned in that semester.
    pub ects_in_semester: f64,
}

impl RawRecord {
    pub fn new(program: impl Into<String>, semester: i64, ects: f64) -> Self {
        RawRecord {
            study_program_code: program.into(),
            semester_attended: semester,
            ects_in_semester: ects,
        }
    }
}

// ---------------------------------------------------------------------------
// AggregateRow – one (semester, program) summary
// ---------------------------------------------------------------------------

/// Summary statistics of all raw records sharing a (semester, program) key.
#[derive(Debug, Clone, PartialEq)]
pub struct AggregateRow {
    pub semester_attended: i64,
    pub study_program_code: String,
    pub mean_ects: f64,
    pub median_ects: f64,
    /// Number of raw records in the group.
    pub count: usize,
}

impl AggregateRow {
    /// The statistic selected by `measure`.
    pub fn value(&self, measure: Measure) -> f64 {
        match measure {
            Measure::Mean => self.mean_ects,
            Measure::Median => self.median_ects,
        }
    }
}

// ---------------------------------------------------------------------------
// Measure – which statistic the charts show
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Measure {
    #[default]
    Mean,
    Median,
}

impl Measure {
    pub const ALL: [Measure; 2] = [Measure::Mean, Measure::Median];
}

impl fmt::Display for Measure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Measure::Mean => write!(f, "mean"),
            Measure::Median => write!(f, "median"),
        }
    }
}

// ---------------------------------------------------------------------------
// LabelAnnotation – a text label at the right end of a series
// ---------------------------------------------------------------------------

/// Label for the rightmost point of one series.
#[derive(Debug, Clone, PartialEq)]
pub struct LabelAnnotation {
    /// Program code the label names.
    pub series_key: String,
    /// Measure value rounded to the nearest integer.
    pub y_value: f64,
    /// 0-based position in descending value order.
    pub rank: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_value_selects_measure() {
        let row = AggregateRow {
            semester_attended: 2,
            study_program_code: "BA; BI".to_string(),
            mean_ects: 17.5,
            median_ects: 20.0,
            count: 4,
        };
        assert_eq!(row.value(Measure::Mean), 17.5);
        assert_eq!(row.value(Measure::Median), 20.0);
    }

    #[test]
    fn test_measure_display_and_serde() {
        assert_eq!(Measure::Mean.to_string(), "mean");
        assert_eq!(Measure::Median.to_string(), "median");
        let m: Measure = serde_json::from_str("\"median\"").unwrap();
        assert_eq!(m, Measure::Median);
        assert_eq!(Measure::default(), Measure::Mean);
    }
}
