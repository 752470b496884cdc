pub mod confirm;
pub mod day_view;
pub mod event_form;
pub mod form;
pub mod header;
pub mod help;
pub mod item;
pub mod month_view;
pub mod project_form;
pub mod sidebar;
pub mod status_bar;
pub mod todo_form;
pub mod week_view;

pub use day_view::DayView;
pub use event_form::EventForm;
pub use header::Header;
pub use month_view::MonthView;
pub use project_form::ProjectForm;
pub use sidebar::Sidebar;
pub use status_bar::StatusBar;
pub use todo_form::TodoForm;
pub use week_view::WeekView;
