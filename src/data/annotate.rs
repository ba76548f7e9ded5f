use super::model::{AggregateRow, LabelAnnotation, Measure};

/// Compute the right-edge labels of a line chart.
///
/// One label per row at `reference_semester`, placed at the height of that
/// row's `measure` value rounded to an integer. Labels are ordered by value,
/// highest first; equal values keep their order in `rows`.
///
/// Placement is purely value based: labels with close values are not moved
/// apart and may overlap when drawn.
pub fn place_labels(
    rows: &[AggregateRow],
    reference_semester: i64,
    measure: Measure,
) -> Vec<LabelAnnotation> {
    let mut at_reference: Vec<&AggregateRow> = rows
        .iter()
        .filter(|r| r.semester_attended == reference_semester)
        .collect();

    // `sort_by` is stable, so ties stay in input order.
    at_reference.sort_by(|a, b| b.value(measure).total_cmp(&a.value(measure)));

    at_reference
        .into_iter()
        .enumerate()
        .map(|(rank, row)| LabelAnnotation {
            series_key: row.study_program_code.clone(),
            y_value: row.value(measure).round_ties_even(),
            rank,
        })
        .collect()
}
