use eframe::egui;

use crate::state::AppState;
use crate::ui::{panels, plot, table};

// ---------------------------------------------------------------------------
// eframe App implementation
// ---------------------------------------------------------------------------

pub struct StudyProgressApp {
    pub state: AppState,
}

impl StudyProgressApp {
    pub fn new(state: AppState) -> Self {
        Self { state }
    }
}

impl eframe::App for StudyProgressApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // ---- Top panel: menu bar ----
        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            panels::top_bar(ui, &mut self.state);
        });

        // ---- Left side panel: controls ----
        egui::SidePanel::left("control_panel")
            .default_width(240.0)
            .resizable(true)
            .show(ctx, |ui| {
                panels::side_panel(ui, &mut self.state);
            });

        // ---- Bottom panel: aggregate table ----
        if self.state.dashboard.is_some() {
            egui::TopBottomPanel::bottom("summary_panel")
                .resizable(true)
                .default_height(180.0)
                .show(ctx, |ui| {
                    egui::CollapsingHeader::new("Aggregated values")
                        .default_open(false)
                        .show(ui, |ui| {
                            table::summary_table(ui, &self.state);
                        });
                });
        }

        // ---- Central panel: charts ----
        egui::CentralPanel::default().show(ctx, |ui| {
            plot::dashboard_charts(ui, &self.state);
        });
    }
}
