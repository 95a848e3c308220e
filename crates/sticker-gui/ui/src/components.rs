mod chart_actions;
mod chart_form;
mod chart_grid;
mod chart_preview;
mod task_editor;
mod task_entry_row;

pub use chart_actions::ChartActions;
pub use chart_form::ChartForm;
pub use chart_grid::ChartGrid;
pub use chart_preview::ChartPreview;
pub use task_editor::TaskEditor;
pub use task_entry_row::TaskEntryRow;
