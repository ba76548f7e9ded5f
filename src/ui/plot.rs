use eframe::egui::{Align2, Color32, RichText, Ui};
use egui_plot::{
    uniform_grid_spacer, Line, Plot, PlotBounds, PlotPoint, PlotPoints, Points, Text,
};

use crate::chart::ChartSpec;
use crate::color::ColorMap;
use crate::state::AppState;

// Room left and right of the data for markers and right-edge labels.
const X_PAD_LEFT: f64 = 0.3;
const X_PAD_RIGHT: f64 = 1.2;
const LABEL_OFFSET: f64 = 0.15;

// ---------------------------------------------------------------------------
// Both charts side by side (central panel)
// ---------------------------------------------------------------------------

pub fn dashboard_charts(ui: &mut Ui, state: &AppState) {
    let Some(view) = &state.view else {
        ui.centered_and_justified(|ui: &mut Ui| {
            ui.heading("Open a file to view study progress  (File → Open…)");
        });
        return;
    };

    let color_map = state.color_map.as_ref();
    ui.columns(2, |cols: &mut [Ui]| {
        line_chart(&mut cols[0], "program_chart", &view.program_chart, color_map);
        line_chart(&mut cols[1], "comparison_chart", &view.comparison_chart, color_map);
    });
}

// ---------------------------------------------------------------------------
// Single line chart
// ---------------------------------------------------------------------------

/// Draw a [`ChartSpec`]: one line with markers per series, fixed bounds,
/// and the annotations as text just right of the last semester.
pub fn line_chart(ui: &mut Ui, id: &str, chart: &ChartSpec, color_map: Option<&ColorMap>) {
    ui.label(RichText::new(&chart.title).strong());
    if chart.is_empty() {
        ui.label(RichText::new("No data for this selection").weak());
    }

    let color_of = |key: &str| {
        color_map
            .map(|cm| cm.color_for(key))
            .unwrap_or(Color32::LIGHT_BLUE)
    };

    let (x_min, x_max) = (chart.x_range.0 as f64, chart.x_range.1 as f64);
    let (y_min, y_max) = chart.y_range;

    let mut plot = Plot::new(id)
        .x_axis_label(chart.x_label.as_str())
        .y_axis_label(chart.y_label.as_str())
        .allow_boxed_zoom(false)
        .allow_drag(false)
        .allow_scroll(false)
        .allow_zoom(false);

    if chart.integer_x_ticks {
        plot = plot
            .x_grid_spacer(uniform_grid_spacer(|_| [1.0, 5.0, 10.0]))
            .x_axis_formatter(|mark, _range| {
                if mark.value.fract() == 0.0 {
                    format!("{}", mark.value as i64)
                } else {
                    String::new()
                }
            });
    }
    if chart.show_legend {
        plot = plot.legend(egui_plot::Legend::default());
    }

    plot.show(ui, |plot_ui| {
        plot_ui.set_plot_bounds(PlotBounds::from_min_max(
            [x_min - X_PAD_LEFT, y_min],
            [x_max + X_PAD_RIGHT, y_max],
        ));

        for series in &chart.series {
            let color = color_of(&series.key);
            plot_ui.line(
                Line::new(PlotPoints::new(series.points.clone()))
                    .name(&series.key)
                    .color(color)
                    .width(2.0),
            );
            plot_ui.points(
                Points::new(PlotPoints::new(series.points.clone()))
                    .name(&series.key)
                    .color(color)
                    .radius(3.5),
            );
        }

        for label in &chart.annotations {
            let text = RichText::new(&label.series_key)
                .size(12.0)
                .color(color_of(&label.series_key));
            plot_ui.text(
                Text::new(PlotPoint::new(x_max + LABEL_OFFSET, label.y_value), text)
                    .anchor(Align2::LEFT_CENTER),
            );
        }
    });
}
