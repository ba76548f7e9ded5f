/// egui widgets: control panel, top bar, charts and the summary table.
pub mod panels;
pub mod plot;
pub mod table;
