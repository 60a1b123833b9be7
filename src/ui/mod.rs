pub mod dialogs;
pub mod gantt_chart;
pub mod project_list;
pub mod theme;
pub mod toolbar;
