use std::collections::BTreeMap;

use super::error::{DataError, Result};
use super::model::{AggregateRow, RawRecord};

// ---------------------------------------------------------------------------
// Group statistics
// ---------------------------------------------------------------------------

/// Arithmetic mean. `None` for an empty slice.
pub fn mean(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        return None;
    }
    Some(values.iter().sum::<f64>() / values.len() as f64)
}

/// Standard median: the middle value for odd sizes, the average of the two
/// middle values for even sizes. `None` for an empty slice.
pub fn median(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        return None;
    }
    let mut sorted = values.to_vec();
    sorted.sort_by(f64::total_cmp);
    let n = sorted.len();
    if n % 2 == 0 {
        Some((sorted[n / 2 - 1] + sorted[n / 2]) / 2.0)
    } else {
        Some(sorted[n / 2])
    }
}

// ---------------------------------------------------------------------------
// Aggregation
// ---------------------------------------------------------------------------

/// Check that a record can take part in aggregation.
///
/// `row` is the 1-based position of the record, used in error messages.
fn validate(record: &RawRecord, row: usize) -> Result<()> {
    if record.semester_attended <= 0 {
        return Err(DataError::invalid(
            Some(row),
            format!(
                "semester must be positive, got {}",
                record.semester_attended
            ),
        ));
    }
    if !record.ects_in_semester.is_finite() {
        return Err(DataError::invalid(
            Some(row),
            format!("credits are not numeric: {}", record.ects_in_semester),
        ));
    }
    if record.ects_in_semester < 0.0 {
        return Err(DataError::invalid(
            Some(row),
            format!("credits must not be negative, got {}", record.ects_in_semester),
        ));
    }
    Ok(())
}

/// Reduce raw records to one [`AggregateRow`] per (semester, program).
///
/// Every record is validated, then records with a semester above
/// `semester_cap` are dropped. The result is sorted by (semester, program).
pub fn aggregate(records: &[RawRecord], semester_cap: i64) -> Result<Vec<AggregateRow>> {
    if semester_cap < 1 {
        return Err(DataError::invalid(
            None,
            format!("semester cap must be at least 1, got {semester_cap}"),
        ));
    }

    let mut groups: BTreeMap<(i64, &str), Vec<f64>> = BTreeMap::new();
    for (i, record) in records.iter().enumerate() {
        validate(record, i + 1)?;
        if record.semester_attended > semester_cap {
            continue;
        }
        groups
            .entry((record.semester_attended, record.study_program_code.as_str()))
            .or_default()
            .push(record.ects_in_semester);
    }

    if groups.is_empty() {
        return Err(DataError::EmptyInput);
    }

    let rows = groups
        .into_iter()
        .filter_map(|((semester, program), values)| {
            Some(AggregateRow {
                semester_attended: semester,
                study_program_code: program.to_string(),
                mean_ects: mean(&values)?,
                median_ects: median(&values)?,
                count: values.len(),
            })
        })
        .collect();

    Ok(rows)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeSet;

    fn rec(program: &str, semester: i64, ects: f64) -> RawRecord {
        RawRecord::new(program, semester, ects)
    }

    // --- mean / median ---

    #[test]
    fn test_mean_empty() {
        assert_eq!(mean(&[]), None);
    }

    #[test]
    fn test_median_odd() {
        assert_eq!(median(&[30.0, 10.0, 20.0]), Some(20.0));
    }

    #[test]
    fn test_median_even() {
        assert_eq!(median(&[20.0, 10.0]), Some(15.0));
    }

    #[test]
    fn test_median_single() {
        assert_eq!(median(&[7.5]), Some(7.5));
    }

    // --- aggregate ---

    #[test]
    fn test_end_to_end_scenario() {
        let records = vec![rec("P1", 1, 10.0), rec("P1", 1, 14.0), rec("P2", 1, 20.0)];
        let rows = aggregate(&records, 8).unwrap();
        assert_eq!(
            rows,
            vec![
                AggregateRow {
                    semester_attended: 1,
                    study_program_code: "P1".to_string(),
                    mean_ects: 12.0,
                    median_ects: 12.0,
                    count: 2,
                },
                AggregateRow {
                    semester_attended: 1,
                    study_program_code: "P2".to_string(),
                    mean_ects: 20.0,
                    median_ects: 20.0,
                    count: 1,
                },
            ]
        );
    }

    #[test]
    fn test_row_count_matches_distinct_pairs() {
        let records = vec![
            rec("BA; PPP", 1, 30.0),
            rec("BA; PPP", 1, 25.0),
            rec("BA; PPP", 2, 20.0),
            rec("MA; PPP", 1, 28.0),
            rec("MA; PPP", 3, 12.0),
            rec("BA; BI", 2, 0.0),
            rec("BA; BI", 2, 5.5),
            rec("BA; BI", 9, 3.0), // beyond cap
        ];
        let expected: BTreeSet<(i64, &str)> = records
            .iter()
            .filter(|r| r.semester_attended <= 8)
            .map(|r| (r.semester_attended, r.study_program_code.as_str()))
            .collect();

        let rows = aggregate(&records, 8).unwrap();
        assert_eq!(rows.len(), expected.len());

        let keys: BTreeSet<(i64, &str)> = rows
            .iter()
            .map(|r| (r.semester_attended, r.study_program_code.as_str()))
            .collect();
        assert_eq!(keys, expected);
    }

    #[test]
    fn test_mean_reconstruction() {
        let values = [3.0, 7.5, 12.0, 30.0];
        let records: Vec<RawRecord> = values.iter().map(|&v| rec("MA; BI", 2, v)).collect();
        let rows = aggregate(&records, 8).unwrap();
        assert_eq!(rows.len(), 1);
        let expected = values.iter().sum::<f64>() / values.len() as f64;
        assert!((rows[0].mean_ects - expected).abs() < 1e-10);
        assert_eq!(rows[0].median_ects, (7.5 + 12.0) / 2.0);
        assert_eq!(rows[0].count, 4);
    }

    #[test]
    fn test_median_groups_odd_and_even() {
        let records = vec![
            rec("A", 1, 10.0),
            rec("A", 1, 30.0),
            rec("A", 1, 20.0),
            rec("B", 1, 10.0),
            rec("B", 1, 20.0),
        ];
        let rows = aggregate(&records, 8).unwrap();
        assert_eq!(rows[0].median_ects, 20.0);
        assert_eq!(rows[1].median_ects, 15.0);
    }

    #[test]
    fn test_idempotent() {
        let records = vec![rec("P1", 2, 10.0), rec("P2", 1, 4.0), rec("P1", 1, 14.0)];
        let first = aggregate(&records, 8).unwrap();
        let second = aggregate(&records, 8).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_sorted_by_semester_then_program() {
        let records = vec![
            rec("MA; PPP", 2, 10.0),
            rec("BA; PPP", 2, 10.0),
            rec("MA; PPP", 1, 10.0),
        ];
        let rows = aggregate(&records, 8).unwrap();
        let keys: Vec<(i64, &str)> = rows
            .iter()
            .map(|r| (r.semester_attended, r.study_program_code.as_str()))
            .collect();
        assert_eq!(keys, vec![(1, "MA; PPP"), (2, "BA; PPP"), (2, "MA; PPP")]);
    }

    #[test]
    fn test_cap_one_keeps_first_semester_only() {
        let records: Vec<RawRecord> = (1..=10)
            .flat_map(|s| vec![rec("BA; PPP", s, 20.0), rec("MA; BI", s, 15.0)])
            .collect();
        let rows = aggregate(&records, 1).unwrap();
        assert_eq!(rows.len(), 2);
        assert!(rows.iter().all(|r| r.semester_attended == 1));
    }

    #[test]
    fn test_invalid_cap() {
        let records = vec![rec("P1", 1, 10.0)];
        assert!(matches!(
            aggregate(&records, 0),
            Err(DataError::InvalidInput { row: None, .. })
        ));
    }

    #[test]
    fn test_non_positive_semester() {
        let records = vec![rec("P1", 1, 10.0), rec("P1", 0, 10.0)];
        assert!(matches!(
            aggregate(&records, 8),
            Err(DataError::InvalidInput { row: Some(2), .. })
        ));
    }

    #[test]
    fn test_negative_credits() {
        let records = vec![rec("P1", 1, -1.0)];
        assert!(matches!(
            aggregate(&records, 8),
            Err(DataError::InvalidInput { row: Some(1), .. })
        ));
    }

    #[test]
    fn test_nan_credits() {
        let records = vec![rec("P1", 1, f64::NAN)];
        assert!(matches!(
            aggregate(&records, 8),
            Err(DataError::InvalidInput { .. })
        ));
    }

    #[test]
    fn test_empty_after_filter() {
        let records = vec![rec("P1", 9, 10.0), rec("P2", 12, 3.0)];
        assert!(matches!(aggregate(&records, 8), Err(DataError::EmptyInput)));
        assert!(matches!(aggregate(&[], 8), Err(DataError::EmptyInput)));
    }
}
