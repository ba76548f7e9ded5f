use eframe::egui::{self, Color32, RichText, Ui};

use crate::data::model::Measure;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Left side panel – selection controls
// ---------------------------------------------------------------------------

/// Render the left control panel.
pub fn side_panel(ui: &mut Ui, state: &mut AppState) {
    ui.heading("Study progress");
    ui.separator();

    let (Some(dashboard), Some(selection)) = (state.dashboard.clone(), state.selection.clone())
    else {
        ui.label("No dataset loaded.");
        return;
    };

    // ---- Study program ----
    ui.strong("Study program");
    egui::ComboBox::from_id_salt("select_program")
        .selected_text(selection.program.as_str())
        .width(ui.available_width())
        .show_ui(ui, |ui: &mut Ui| {
            for program in dashboard.programs() {
                let mut text = RichText::new(program);
                if let Some(cm) = &state.color_map {
                    text = text.color(cm.color_for(program));
                }
                if ui
                    .selectable_label(selection.program == *program, text)
                    .clicked()
                {
                    state.select_program(program.clone());
                }
            }
        });

    ui.add_space(4.0);
    if let Some(view) = &state.view {
        ui.label(view.status.as_str());
    }
    ui.separator();

    // ---- Measure ----
    ui.strong("Average shown");
    let mut measure = selection.measure;
    ui.horizontal(|ui: &mut Ui| {
        for m in Measure::ALL {
            ui.radio_value(&mut measure, m, m.to_string());
        }
    });
    if measure != selection.measure {
        state.select_measure(measure);
    }
    ui.separator();

    // ---- Semester range ----
    ui.strong("Semesters shown");
    let (min_sem, max_sem) = dashboard.semester_bounds();
    let mut max_semester = selection.max_semester;
    let slider = egui::Slider::new(&mut max_semester, min_sem..=max_sem)
        .step_by(1.0)
        .text("up to semester");
    if ui.add(slider).changed() {
        state.select_max_semester(max_semester);
    }
}

// ---------------------------------------------------------------------------
// Top bar
// ---------------------------------------------------------------------------

/// Render the top menu / toolbar.
pub fn top_bar(ui: &mut Ui, state: &mut AppState) {
    egui::menu::bar(ui, |ui: &mut Ui| {
        ui.menu_button("File", |ui: &mut Ui| {
            if ui.button("Open…").clicked() {
                open_file_dialog(state);
                ui.close_menu();
            }
        });

        ui.separator();

        if let Some(ds) = &state.dashboard {
            ui.label(format!(
                "{} records, {} programs, {} aggregate rows",
                ds.record_count(),
                ds.programs().len(),
                ds.rows().len()
            ));
        }

        if let Some(msg) = &state.status_message {
            ui.separator();
            ui.label(RichText::new(msg).color(Color32::RED));
        }
    });
}

// ---------------------------------------------------------------------------
// File dialog
// ---------------------------------------------------------------------------

pub fn open_file_dialog(state: &mut AppState) {
    let file = rfd::FileDialog::new()
        .set_title("Open student data")
        .add_filter("CSV", &["csv", "txt"])
        .pick_file();

    if let Some(path) = file {
        if let Err(e) = state.load(&path) {
            log::error!("Failed to load {}: {e}", path.display());
            state.status_message = Some(format!("Error: {e}"));
        }
    }
}
