use std::path::Path;
use std::sync::Arc;

use crate::color::ColorMap;
use crate::config::DashboardConfig;
use crate::dashboard::{Dashboard, DashboardView, Selection};
use crate::data::error::Result;
use crate::data::loader::load_csv;
use crate::data::model::Measure;

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// The full UI state, independent of rendering.
pub struct AppState {
    /// Settings used for every (re)load.
    pub config: DashboardConfig,

    /// Aggregated data (None until a file has been loaded).
    pub dashboard: Option<Arc<Dashboard>>,

    /// Current control values.
    pub selection: Option<Selection>,

    /// Charts for the current selection, rebuilt on every change.
    pub view: Option<DashboardView>,

    /// Program → colour, shared by both charts.
    pub color_map: Option<ColorMap>,

    /// Status / error message shown in the UI.
    pub status_message: Option<String>,
}

impl AppState {
    pub fn new(config: DashboardConfig) -> Self {
        Self {
            config,
            dashboard: None,
            selection: None,
            view: None,
            color_map: None,
            status_message: None,
        }
    }

    /// Load and aggregate a CSV file with the current config.
    pub fn load(&mut self, path: &Path) -> Result<()> {
        let records = load_csv(path, &self.config.columns)?;
        let dashboard = Dashboard::from_records(&records, &self.config)?;
        log::info!(
            "Loaded {} records from {} into {} aggregate rows ({} programs)",
            dashboard.record_count(),
            path.display(),
            dashboard.rows().len(),
            dashboard.programs().len()
        );
        self.set_dashboard(Arc::new(dashboard));
        Ok(())
    }

    /// Install a freshly built dashboard and reset the controls.
    pub fn set_dashboard(&mut self, dashboard: Arc<Dashboard>) {
        self.color_map = Some(ColorMap::new(dashboard.programs()));
        let preferred = self.config.default_program.as_str();
        self.selection = Some(dashboard.default_selection(Some(preferred)));
        self.dashboard = Some(dashboard);
        self.status_message = None;
        self.rerender();
    }

    /// Recompute the view for the current selection.
    pub fn rerender(&mut self) {
        self.view = match (&self.dashboard, &self.selection) {
            (Some(ds), Some(sel)) => Some(ds.render(sel)),
            _ => None,
        };
    }

    pub fn select_program(&mut self, program: String) {
        if let Some(sel) = &mut self.selection {
            sel.program = program;
            self.rerender();
        }
    }

    pub fn select_measure(&mut self, measure: Measure) {
        if let Some(sel) = &mut self.selection {
            sel.measure = measure;
            self.rerender();
        }
    }

    pub fn select_max_semester(&mut self, max_semester: i64) {
        if let Some(sel) = &mut self.selection {
            sel.max_semester = max_semester;
            self.rerender();
        }
    }
}
