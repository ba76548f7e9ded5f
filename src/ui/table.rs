use eframe::egui::{RichText, Ui};
use egui_extras::{Column, TableBuilder};

use crate::state::AppState;

const ROW_HEIGHT: f32 = 18.0;

/// Aggregate rows up to the selected semester, for the selected program
/// first and then the others, as a striped table.
pub fn summary_table(ui: &mut Ui, state: &AppState) {
    let (Some(dashboard), Some(selection)) = (&state.dashboard, &state.selection) else {
        return;
    };

    let mut rows: Vec<_> = dashboard
        .rows()
        .iter()
        .filter(|r| r.semester_attended <= selection.max_semester)
        .collect();
    rows.sort_by_key(|r| r.study_program_code != selection.program);

    TableBuilder::new(ui)
        .striped(true)
        .column(Column::auto().at_least(120.0))
        .column(Column::auto())
        .column(Column::auto())
        .column(Column::auto())
        .column(Column::remainder())
        .header(ROW_HEIGHT + 2.0, |mut header| {
            for title in ["Study program", "Semester", "Mean ECTS", "Median ECTS", "Records"] {
                header.col(|ui| {
                    ui.strong(title);
                });
            }
        })
        .body(|body| {
            body.rows(ROW_HEIGHT, rows.len(), |mut row| {
                let r = rows[row.index()];
                let selected = r.study_program_code == selection.program;
                row.col(|ui| {
                    let text = RichText::new(&r.study_program_code);
                    ui.label(if selected { text.strong() } else { text });
                });
                row.col(|ui| {
                    ui.label(r.semester_attended.to_string());
                });
                row.col(|ui| {
                    ui.label(format!("{:.2}", r.mean_ects));
                });
                row.col(|ui| {
                    ui.label(format!("{:.2}", r.median_ects));
                });
                row.col(|ui| {
                    ui.label(r.count.to_string());
                });
            });
        });
}
