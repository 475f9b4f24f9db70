pub mod calendar;
pub mod dialogs;
pub mod month_view;
pub mod sidebar;
pub mod theme;
pub mod time_grid;
pub mod toolbar;
